//! The core curve abstraction.
//!
//! A curve is any mapping from a time tenor (in years, relative to the
//! curve's origin) to a value. What that value means - zero rate, discount
//! factor, survival probability - is decided by the wrapper that owns the
//! curve, not by the curve itself.

use std::fmt;
use std::sync::Arc;

use crate::error::CurveResult;

/// A mapping from year fractions to values.
///
/// The single required method keeps the trait object-safe and cheap to
/// compose; querying is fallible so extrapolation and domain violations
/// surface instead of being clamped.
pub trait Curve: Send + Sync {
    /// Returns the curve value at tenor `t` (in years).
    fn value_at(&self, t: f64) -> CurveResult<f64>;
}

/// A shared, reference-counted curve.
pub type CurveRef = Arc<dyn Curve>;

impl<T: Curve + ?Sized> Curve for Arc<T> {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        (**self).value_at(t)
    }
}

impl<T: Curve + ?Sized> Curve for Box<T> {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        (**self).value_at(t)
    }
}

impl<T: Curve + ?Sized> Curve for &T {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        (**self).value_at(t)
    }
}

/// A curve that returns the same value everywhere.
///
/// # Example
///
/// ```rust
/// use termstruct_curves::curve::{ConstantCurve, Curve};
///
/// let flat = ConstantCurve::new(0.03);
/// assert_eq!(flat.value_at(5.0).unwrap(), 0.03);
/// assert_eq!(flat.value_at(-1.0).unwrap(), 0.03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCurve {
    value: f64,
}

impl ConstantCurve {
    /// Creates a constant curve.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Creates a shared constant curve.
    #[must_use]
    pub fn shared(value: f64) -> CurveRef {
        Arc::new(Self::new(value))
    }

    /// Returns the constant value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Curve for ConstantCurve {
    fn value_at(&self, _t: f64) -> CurveResult<f64> {
        Ok(self.value)
    }
}

/// A curve backed by a closure.
///
/// Used for closed-form curves (parametric models, analytic test shapes)
/// where building a pillar grid would lose precision.
pub struct FunctionCurve {
    f: Box<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl FunctionCurve {
    /// Wraps a closure as a curve.
    pub fn new<F: Fn(f64) -> f64 + Send + Sync + 'static>(f: F) -> Self {
        Self { f: Box::new(f) }
    }

    /// Wraps a closure as a shared curve.
    pub fn shared<F: Fn(f64) -> f64 + Send + Sync + 'static>(f: F) -> CurveRef {
        Arc::new(Self::new(f))
    }
}

impl Curve for FunctionCurve {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        Ok((self.f)(t))
    }
}

impl fmt::Debug for FunctionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionCurve").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_curve() {
        let flat = ConstantCurve::new(0.02);
        assert_eq!(flat.value_at(0.0).unwrap(), 0.02);
        assert_eq!(flat.value_at(100.0).unwrap(), 0.02);
        assert_eq!(flat.value(), 0.02);
    }

    #[test]
    fn test_function_curve() {
        let linear = FunctionCurve::new(|t| 0.02 + 0.001 * t);
        assert_eq!(linear.value_at(10.0).unwrap(), 0.03);
    }

    #[test]
    fn test_blanket_impls() {
        fn query<C: Curve>(c: C) -> f64 {
            c.value_at(1.0).unwrap_or(f64::NAN)
        }

        let flat = ConstantCurve::new(0.05);
        assert_eq!(query(&flat), 0.05);
        assert_eq!(query(Box::new(flat)), 0.05);

        let shared: CurveRef = ConstantCurve::shared(0.05);
        assert_eq!(query(Arc::clone(&shared)), 0.05);
    }
}

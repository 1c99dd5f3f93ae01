//! Curve arithmetic.
//!
//! Curves compose pointwise: the sum of two zero curves is the curve
//! whose value at every tenor is the sum of the operands' values there.
//! Composition is lazy; the operand curves are shared, never copied, and
//! operands may have different pillar grids or no grid at all.

use std::sync::Arc;

use crate::curve::{Curve, CurveRef};
use crate::error::{CurveError, CurveResult};

/// A pointwise binary operation on two curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Sub,
    /// `lhs * rhs`
    Mul,
    /// `lhs / rhs`; fails where `rhs` is zero.
    Div,
}

/// Two curves combined pointwise.
#[derive(Clone)]
pub struct ComposedCurve {
    op: BinaryOp,
    lhs: CurveRef,
    rhs: CurveRef,
}

impl ComposedCurve {
    /// Combines two curves under `op`.
    #[must_use]
    pub fn new(op: BinaryOp, lhs: CurveRef, rhs: CurveRef) -> Self {
        Self { op, lhs, rhs }
    }

    /// `lhs + rhs` as a shared curve.
    #[must_use]
    pub fn add(lhs: CurveRef, rhs: CurveRef) -> CurveRef {
        Arc::new(Self::new(BinaryOp::Add, lhs, rhs))
    }

    /// `lhs - rhs` as a shared curve.
    #[must_use]
    pub fn sub(lhs: CurveRef, rhs: CurveRef) -> CurveRef {
        Arc::new(Self::new(BinaryOp::Sub, lhs, rhs))
    }

    /// `lhs * rhs` as a shared curve.
    #[must_use]
    pub fn mul(lhs: CurveRef, rhs: CurveRef) -> CurveRef {
        Arc::new(Self::new(BinaryOp::Mul, lhs, rhs))
    }

    /// `lhs / rhs` as a shared curve.
    #[must_use]
    pub fn div(lhs: CurveRef, rhs: CurveRef) -> CurveRef {
        Arc::new(Self::new(BinaryOp::Div, lhs, rhs))
    }
}

impl Curve for ComposedCurve {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        let a = self.lhs.value_at(t)?;
        let b = self.rhs.value_at(t)?;
        match self.op {
            BinaryOp::Add => Ok(a + b),
            BinaryOp::Sub => Ok(a - b),
            BinaryOp::Mul => Ok(a * b),
            BinaryOp::Div => {
                if b == 0.0 {
                    return Err(CurveError::division_by_zero(t));
                }
                Ok(a / b)
            }
        }
    }
}

impl std::fmt::Debug for ComposedCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedCurve")
            .field("op", &self.op)
            .finish_non_exhaustive()
    }
}

/// A pointwise transform of a single curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveTransform {
    /// `-c(t)`
    Neg,
    /// `c(t) + s`, a parallel shift.
    Shift(f64),
    /// `c(t) * k`
    Scale(f64),
    /// `c(t + dt)`, reading the curve at a displaced tenor.
    TimeShift(f64),
    /// `min(c(t), cap)`
    Cap(f64),
    /// `max(c(t), floor)`
    Floor(f64),
}

/// A curve derived from another by a [`CurveTransform`].
#[derive(Clone)]
pub struct DerivedCurve {
    transform: CurveTransform,
    inner: CurveRef,
}

impl DerivedCurve {
    /// Applies `transform` to `inner`.
    #[must_use]
    pub fn new(transform: CurveTransform, inner: CurveRef) -> Self {
        Self { transform, inner }
    }

    /// `transform(inner)` as a shared curve.
    #[must_use]
    pub fn shared(transform: CurveTransform, inner: CurveRef) -> CurveRef {
        Arc::new(Self::new(transform, inner))
    }
}

impl Curve for DerivedCurve {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        match self.transform {
            CurveTransform::TimeShift(dt) => self.inner.value_at(t + dt),
            CurveTransform::Neg => Ok(-self.inner.value_at(t)?),
            CurveTransform::Shift(s) => Ok(self.inner.value_at(t)? + s),
            CurveTransform::Scale(k) => Ok(self.inner.value_at(t)? * k),
            CurveTransform::Cap(cap) => Ok(self.inner.value_at(t)?.min(cap)),
            CurveTransform::Floor(floor) => Ok(self.inner.value_at(t)?.max(floor)),
        }
    }
}

impl std::fmt::Debug for DerivedCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedCurve")
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

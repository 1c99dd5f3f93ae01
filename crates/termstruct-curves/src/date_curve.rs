//! Calendar-date access to tenor curves.
//!
//! A [`DateCurve`] binds a tenor curve to an origin date and a day count
//! convention, so callers can query by calendar date and let the wrapper
//! handle the date-to-year-fraction mapping. Dates before the origin map
//! to negative tenors and follow the underlying curve's extrapolation
//! policy.

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use termstruct_core::daycounts::DayCountConvention;
use termstruct_core::types::Date;

use crate::curve::{Curve, CurveRef};
use crate::error::CurveResult;

/// A curve queried by calendar date.
///
/// # Example
///
/// ```rust
/// use termstruct_core::types::Date;
/// use termstruct_curves::curve::ConstantCurve;
/// use termstruct_curves::date_curve::DateCurve;
///
/// let origin = Date::from_ymd(2024, 1, 1).unwrap();
/// let curve = DateCurve::new(ConstantCurve::shared(0.03), origin);
/// let at = Date::from_ymd(2025, 1, 1).unwrap();
/// assert_eq!(curve.value_at_date(at).unwrap(), 0.03);
/// ```
#[derive(Clone)]
pub struct DateCurve {
    curve: CurveRef,
    origin: Date,
    day_count: DayCountConvention,
}

impl DateCurve {
    /// Binds `curve` to `origin` with the default day count convention.
    #[must_use]
    pub fn new(curve: CurveRef, origin: Date) -> Self {
        Self {
            curve,
            origin,
            day_count: DayCountConvention::default(),
        }
    }

    /// Sets the day count convention used for the date-to-tenor mapping.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// The origin date, mapping to tenor zero.
    #[must_use]
    pub fn origin(&self) -> Date {
        self.origin
    }

    /// The day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// The underlying tenor curve.
    #[must_use]
    pub fn curve(&self) -> &CurveRef {
        &self.curve
    }

    /// The year fraction from the origin to `date`. Negative before the
    /// origin.
    #[must_use]
    pub fn tenor(&self, date: Date) -> f64 {
        self.day_count
            .year_fraction(self.origin, date)
            .to_f64()
            .unwrap_or(0.0)
    }

    /// The curve value at a calendar date.
    pub fn value_at_date(&self, date: Date) -> CurveResult<f64> {
        self.curve.value_at(self.tenor(date))
    }

    /// The curve values at both ends of a date interval.
    pub fn value_between(&self, start: Date, end: Date) -> CurveResult<(f64, f64)> {
        Ok((self.value_at_date(start)?, self.value_at_date(end)?))
    }

    /// Rebinds the same underlying curve to a new origin.
    #[must_use]
    pub fn with_origin(&self, origin: Date) -> Self {
        Self {
            curve: Arc::clone(&self.curve),
            origin,
            day_count: self.day_count,
        }
    }
}

impl Curve for DateCurve {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        self.curve.value_at(t)
    }
}

impl std::fmt::Debug for DateCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateCurve")
            .field("origin", &self.origin)
            .field("day_count", &self.day_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::FunctionCurve;
    use crate::discrete::DiscreteCurve;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_origin_maps_to_zero() {
        let curve = DateCurve::new(FunctionCurve::shared(|t| t), d(2024, 1, 1));
        assert_eq!(curve.tenor(d(2024, 1, 1)), 0.0);
        assert_eq!(curve.value_at_date(d(2024, 1, 1)).unwrap(), 0.0);
    }

    #[test]
    fn test_tenor_sign() {
        let curve = DateCurve::new(FunctionCurve::shared(|t| t), d(2024, 6, 1));
        assert!(curve.tenor(d(2025, 6, 1)) > 0.0);
        assert!(curve.tenor(d(2023, 6, 1)) < 0.0);
        assert_relative_eq!(
            curve.tenor(d(2025, 6, 1)),
            -curve.tenor(d(2023, 6, 1)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_default_day_count_year() {
        // 2024-01-01 to 2025-01-01 is 366 days; the default convention
        // divides by 365.25.
        let curve = DateCurve::new(FunctionCurve::shared(|t| t), d(2024, 1, 1));
        assert_relative_eq!(
            curve.tenor(d(2025, 1, 1)),
            366.0 / 365.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_act360_override() {
        let curve = DateCurve::new(FunctionCurve::shared(|t| t), d(2024, 1, 1))
            .with_day_count(DayCountConvention::Act360);
        assert_relative_eq!(curve.tenor(d(2024, 7, 1)), 182.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn test_value_between() {
        let grid =
            DiscreteCurve::new(vec![0.0, 1.0, 2.0], vec![0.02, 0.03, 0.05]).unwrap();
        let curve = DateCurve::new(Arc::new(grid), d(2024, 1, 1));
        let (a, b) = curve.value_between(d(2024, 1, 1), d(2026, 1, 1)).unwrap();
        assert_relative_eq!(a, 0.02);
        assert!(b > a);
    }

    #[test]
    fn test_rebind_origin() {
        let curve = DateCurve::new(FunctionCurve::shared(|t| t), d(2024, 1, 1));
        let rebased = curve.with_origin(d(2025, 1, 1));
        assert_eq!(rebased.tenor(d(2025, 1, 1)), 0.0);
        assert_eq!(rebased.day_count(), curve.day_count());
    }
}

//! FX forward curves.
//!
//! Covered interest parity prices an FX forward off the spot rate and the
//! two currencies' discount curves. With the spot quoted as units of
//! domestic currency per unit of foreign currency:
//!
//! `F(t) = S * P_domestic(t) / P_foreign(t)`
//!
//! A higher foreign rate (smaller foreign discount factor) pushes the
//! forward above spot.

use crate::curve::Curve;
use crate::error::{CurveError, CurveResult};
use crate::rate::RateCurve;

/// An FX forward curve implied from two discount curves.
///
/// # Example
///
/// ```rust
/// use termstruct_core::types::Compounding;
/// use termstruct_curves::curve::ConstantCurve;
/// use termstruct_curves::fx::FxForwardCurve;
/// use termstruct_curves::rate::RateCurve;
///
/// let domestic = RateCurve::zero_rates(ConstantCurve::shared(0.05), Compounding::Continuous);
/// let foreign = RateCurve::zero_rates(ConstantCurve::shared(0.02), Compounding::Continuous);
/// let fx = FxForwardCurve::new(1.10, domestic, foreign).unwrap();
/// assert_eq!(fx.forward(0.0).unwrap(), 1.10);
/// ```
#[derive(Debug, Clone)]
pub struct FxForwardCurve {
    spot: f64,
    domestic: RateCurve,
    foreign: RateCurve,
}

impl FxForwardCurve {
    /// Builds an FX forward curve from a spot rate and two discount curves.
    ///
    /// `spot` is quoted as domestic units per foreign unit and must be
    /// positive.
    pub fn new(spot: f64, domestic: RateCurve, foreign: RateCurve) -> CurveResult<Self> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(CurveError::invalid_curve(format!(
                "FX spot must be positive and finite, got {spot}"
            )));
        }
        Ok(Self {
            spot,
            domestic,
            foreign,
        })
    }

    /// The spot rate.
    #[must_use]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// The domestic discount curve.
    #[must_use]
    pub fn domestic(&self) -> &RateCurve {
        &self.domestic
    }

    /// The foreign discount curve.
    #[must_use]
    pub fn foreign(&self) -> &RateCurve {
        &self.foreign
    }

    /// The forward rate at tenor `t`. Equals the spot at or before tenor
    /// zero.
    pub fn forward(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(self.spot);
        }
        let df_domestic = self.domestic.discount_factor(t)?;
        let df_foreign = self.foreign.discount_factor(t)?;
        if df_foreign <= 0.0 {
            return Err(CurveError::division_by_zero(t));
        }
        Ok(self.spot * df_domestic / df_foreign)
    }

    /// Forward points: the difference between the forward and the spot.
    pub fn forward_points(&self, t: f64) -> CurveResult<f64> {
        Ok(self.forward(t)? - self.spot)
    }

    /// Binds the forward curve to an origin date for calendar-date queries.
    #[must_use]
    pub fn into_date_curve(self, origin: termstruct_core::types::Date) -> crate::date_curve::DateCurve {
        crate::date_curve::DateCurve::new(std::sync::Arc::new(self), origin)
    }
}

impl Curve for FxForwardCurve {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        self.forward(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::ConstantCurve;
    use approx::assert_relative_eq;
    use termstruct_core::types::Compounding;

    fn flat(rate: f64) -> RateCurve {
        RateCurve::zero_rates(ConstantCurve::shared(rate), Compounding::Continuous)
    }

    #[test]
    fn test_forward_at_spot() {
        let fx = FxForwardCurve::new(1.25, flat(0.03), flat(0.01)).unwrap();
        assert_eq!(fx.forward(0.0).unwrap(), 1.25);
        assert_eq!(fx.forward(-1.0).unwrap(), 1.25);
        assert_eq!(fx.forward_points(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_interest_rate_parity() {
        // Spot 1.10, domestic 2%, foreign 5%: the foreign leg discounts
        // harder, so the forward sits above spot.
        let fx = FxForwardCurve::new(1.10, flat(0.02), flat(0.05)).unwrap();
        let expected = 1.10 * (-0.02f64).exp() / (-0.05f64).exp();
        assert_relative_eq!(fx.forward(1.0).unwrap(), expected, epsilon = 1e-12);
        assert!(fx.forward(1.0).unwrap() > 1.10);
    }

    #[test]
    fn test_equal_rates_pin_forward_to_spot() {
        let fx = FxForwardCurve::new(0.85, flat(0.03), flat(0.03)).unwrap();
        assert_relative_eq!(fx.forward(7.0).unwrap(), 0.85, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_spot_rejected() {
        assert!(FxForwardCurve::new(0.0, flat(0.02), flat(0.03)).is_err());
        assert!(FxForwardCurve::new(-1.1, flat(0.02), flat(0.03)).is_err());
        assert!(FxForwardCurve::new(f64::NAN, flat(0.02), flat(0.03)).is_err());
    }

    #[test]
    fn test_curve_trait_exposes_forward() {
        let fx = FxForwardCurve::new(1.10, flat(0.02), flat(0.05)).unwrap();
        assert_relative_eq!(
            fx.value_at(1.0).unwrap(),
            fx.forward(1.0).unwrap(),
            epsilon = 1e-15
        );
    }
}

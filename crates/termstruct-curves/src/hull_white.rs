//! Deterministic Hull-White short-rate analytics.
//!
//! The one-factor Hull-White model
//!
//! `dr = (θ(t) - a r) dt + σ dW`
//!
//! fits θ(t) to an initial zero curve. This module evaluates the model's
//! deterministic expectations only: the expected short rate, the short-rate
//! variance and the convexity adjustment that enters zero-bond pricing.
//! Path simulation is out of scope.

use crate::curve::CurveRef;
use crate::error::{CurveError, CurveResult};
use crate::rate::RateCurve;
use termstruct_core::types::Compounding;

/// Mean reversions below this floor are treated as zero to keep
/// `(1 - exp(-a t)) / a` well conditioned.
const MEAN_REVERSION_FLOOR: f64 = 1e-7;

/// A deterministic Hull-White model over an initial zero curve.
///
/// # Example
///
/// ```rust
/// use termstruct_curves::curve::ConstantCurve;
/// use termstruct_curves::hull_white::HullWhite;
///
/// let model = HullWhite::new(ConstantCurve::shared(0.03), 0.1, 0.01).unwrap();
/// let var = model.short_rate_variance(1.0);
/// assert!(var > 0.0);
/// ```
#[derive(Clone)]
pub struct HullWhite {
    initial: RateCurve,
    mean_reversion: f64,
    volatility: f64,
}

impl HullWhite {
    /// Builds a model over an initial curve of continuous zero rates.
    ///
    /// The mean reversion must be positive and the volatility non-negative.
    pub fn new(initial: CurveRef, mean_reversion: f64, volatility: f64) -> CurveResult<Self> {
        if mean_reversion <= 0.0 || !mean_reversion.is_finite() {
            return Err(CurveError::invalid_curve(format!(
                "mean reversion must be positive, got {mean_reversion}"
            )));
        }
        if volatility < 0.0 || !volatility.is_finite() {
            return Err(CurveError::invalid_curve(format!(
                "volatility must be non-negative, got {volatility}"
            )));
        }
        Ok(Self {
            initial: RateCurve::zero_rates(initial, Compounding::Continuous),
            mean_reversion,
            volatility,
        })
    }

    /// The mean reversion speed.
    #[must_use]
    pub fn mean_reversion(&self) -> f64 {
        self.mean_reversion
    }

    /// The short-rate volatility.
    #[must_use]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// The initial curve wrapped as a rate curve.
    #[must_use]
    pub fn initial(&self) -> &RateCurve {
        &self.initial
    }

    /// The bond-exposure function `B(t1,t2) = (1 - exp(-a (t2-t1))) / a`,
    /// degrading to `t2 - t1` for vanishing mean reversion.
    #[must_use]
    pub fn b(&self, t1: f64, t2: f64) -> f64 {
        let dt = t2 - t1;
        if self.mean_reversion < MEAN_REVERSION_FLOOR {
            return dt;
        }
        (1.0 - (-self.mean_reversion * dt).exp()) / self.mean_reversion
    }

    /// The variance of the short rate at `t`:
    /// `σ² (1 - exp(-2 a t)) / (2 a)`.
    #[must_use]
    pub fn short_rate_variance(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let a = self.mean_reversion;
        let s2 = self.volatility * self.volatility;
        if a < MEAN_REVERSION_FLOOR {
            return s2 * t;
        }
        s2 * (1.0 - (-2.0 * a * t).exp()) / (2.0 * a)
    }

    /// The model expectation of the short rate at `t`:
    /// `f(0,t) + σ²/(2 a²) (1 - exp(-a t))²`
    /// where `f(0,t)` is the instantaneous forward implied by the initial
    /// curve.
    pub fn expected_short_rate(&self, t: f64) -> CurveResult<f64> {
        let forward = self.initial.short_rate(t)?;
        let a = self.mean_reversion.max(MEAN_REVERSION_FLOOR);
        let e = 1.0 - (-a * t.max(0.0)).exp();
        Ok(forward + self.volatility * self.volatility / (2.0 * a * a) * e * e)
    }

    /// The convexity adjustment entering the zero-bond price between `t1`
    /// and `t2`: `exp(-0.5 B(t1,t2)² Var(t1))`.
    #[must_use]
    pub fn convexity_adjustment(&self, t1: f64, t2: f64) -> f64 {
        let b = self.b(t1, t2);
        (-0.5 * b * b * self.short_rate_variance(t1)).exp()
    }

    /// The state-zero discount factor, read off the initial curve.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        self.initial.discount_factor(t)
    }

    /// The state-zero continuous zero rate, read off the initial curve.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        self.initial.zero_rate(t)
    }

    /// The zero-bond price between `t1` and `t2` given a short-rate state
    /// displacement `x` from the expectation at `t1`:
    ///
    /// `P(t1,t2;x) = P(0,t2)/P(0,t1) * exp(-B x) * exp(-0.5 B² Var(t1))`
    pub fn bond_price(&self, t1: f64, t2: f64, x: f64) -> CurveResult<f64> {
        let df1 = self.initial.discount_factor(t1)?;
        let df2 = self.initial.discount_factor(t2)?;
        if df1 <= 0.0 {
            return Err(CurveError::division_by_zero(t1));
        }
        let b = self.b(t1, t2);
        Ok(df2 / df1 * (-b * x).exp() * self.convexity_adjustment(t1, t2))
    }
}

impl std::fmt::Debug for HullWhite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HullWhite")
            .field("mean_reversion", &self.mean_reversion)
            .field("volatility", &self.volatility)
            .finish_non_exhaustive()
    }
}

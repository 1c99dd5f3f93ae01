//! Credit term structures.
//!
//! A [`CreditCurve`] is the credit analogue of [`RateCurve`](crate::rate::RateCurve):
//! it wraps any [`Curve`] together with a [`CreditKind`] declaring whether
//! the values are survival probabilities, hazard rates, average intensities
//! or marginal annual survivals/defaults, and answers every credit query
//! through the survival probability so representations stay consistent.

use std::sync::Arc;

use termstruct_math::integration::integrate;

use crate::conversion::ValueConverter;
use crate::curve::{Curve, CurveRef};
use crate::error::{CurveError, CurveResult};
use crate::rate::DEFAULT_DERIVATIVE_STEP;

/// What the values of the underlying curve represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditKind {
    /// Survival probabilities; values are normalized by the value at tenor
    /// zero.
    SurvivalProbability,
    /// Instantaneous hazard rates, integrated to survival probabilities.
    HazardRate,
    /// Average intensities: `Q(t) = exp(-λ(t) * t)`.
    FlatIntensity,
    /// One-year conditional survival probabilities on an annual grid.
    MarginalSurvival,
    /// One-year conditional default probabilities on an annual grid.
    MarginalDefault,
}

/// A credit curve with a declared value representation.
///
/// # Example
///
/// ```rust
/// use termstruct_curves::credit::CreditCurve;
///
/// let curve = CreditCurve::flat_intensity(0.02).unwrap();
/// let q = curve.survival_probability(5.0).unwrap();
/// assert!((q - (-0.1f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct CreditCurve {
    curve: CurveRef,
    kind: CreditKind,
    derivative_step: f64,
}

impl CreditCurve {
    /// Wraps a curve with an explicit representation.
    #[must_use]
    pub fn new(curve: CurveRef, kind: CreditKind) -> Self {
        Self {
            curve,
            kind,
            derivative_step: DEFAULT_DERIVATIVE_STEP,
        }
    }

    /// A curve with constant default intensity `lambda`.
    pub fn flat_intensity(lambda: f64) -> CurveResult<Self> {
        if lambda < 0.0 || !lambda.is_finite() {
            return Err(CurveError::invalid_curve(format!(
                "default intensity must be non-negative, got {lambda}"
            )));
        }
        Ok(Self::new(
            crate::curve::ConstantCurve::shared(lambda),
            CreditKind::FlatIntensity,
        ))
    }

    /// Wraps a curve of survival probabilities.
    #[must_use]
    pub fn survival_probabilities(curve: CurveRef) -> Self {
        Self::new(curve, CreditKind::SurvivalProbability)
    }

    /// Wraps a curve of instantaneous hazard rates.
    #[must_use]
    pub fn hazard_rates(curve: CurveRef) -> Self {
        Self::new(curve, CreditKind::HazardRate)
    }

    /// Wraps a curve of average default intensities.
    #[must_use]
    pub fn intensities(curve: CurveRef) -> Self {
        Self::new(curve, CreditKind::FlatIntensity)
    }

    /// Wraps a curve of one-year conditional survival probabilities.
    #[must_use]
    pub fn marginal_survivals(curve: CurveRef) -> Self {
        Self::new(curve, CreditKind::MarginalSurvival)
    }

    /// Wraps a curve of one-year conditional default probabilities.
    #[must_use]
    pub fn marginal_defaults(curve: CurveRef) -> Self {
        Self::new(curve, CreditKind::MarginalDefault)
    }

    /// Overrides the bump used for numerical differentiation.
    pub fn with_derivative_step(mut self, step: f64) -> CurveResult<Self> {
        if step <= 0.0 || !step.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "derivative step must be positive and finite, got {step}"
            )));
        }
        self.derivative_step = step;
        Ok(self)
    }

    /// The declared representation of the underlying curve.
    #[must_use]
    pub fn kind(&self) -> CreditKind {
        self.kind
    }

    /// The underlying curve.
    #[must_use]
    pub fn curve(&self) -> &CurveRef {
        &self.curve
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The probability of surviving to tenor `t`. Always 1.0 at or before
    /// tenor zero.
    pub fn survival_probability(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        match self.kind {
            CreditKind::SurvivalProbability => {
                let raw = self.curve.value_at(t)?;
                let base = self.curve.value_at(0.0)?;
                if raw <= 0.0 || base <= 0.0 {
                    return Err(CurveError::invalid_value(format!(
                        "survival probability must be positive, got {raw} at tenor {t}"
                    )));
                }
                let q = raw / base;
                if q > 1.0 {
                    return Err(CurveError::invalid_value(format!(
                        "survival probability must not exceed 1, got {q} at tenor {t}"
                    )));
                }
                Ok(q)
            }
            CreditKind::HazardRate => self.integrate_hazard(t),
            CreditKind::FlatIntensity => {
                let lambda = self.curve.value_at(t)?;
                if lambda < 0.0 {
                    return Err(CurveError::invalid_value(format!(
                        "default intensity must be non-negative, got {lambda} at tenor {t}"
                    )));
                }
                Ok(ValueConverter::hazard_to_survival(lambda, t))
            }
            CreditKind::MarginalSurvival | CreditKind::MarginalDefault => {
                self.compound_marginals(t)
            }
        }
    }

    /// The conditional survival probability between `t1` and `t2`:
    /// `Q(t2) / Q(t1)`.
    pub fn survival_between(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        let q1 = self.survival_probability(t1)?;
        let q2 = self.survival_probability(t2)?;
        if q1 <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "survival probability must be positive at tenor {t1}"
            )));
        }
        Ok(q2 / q1)
    }

    /// The probability of defaulting by tenor `t`.
    pub fn default_probability(&self, t: f64) -> CurveResult<f64> {
        Ok(1.0 - self.survival_probability(t)?)
    }

    /// The average default intensity over `[0, t]`: `-ln Q(t) / t`.
    /// Zero at or before tenor zero.
    pub fn intensity(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(0.0);
        }
        if let CreditKind::FlatIntensity = self.kind {
            return self.curve.value_at(t);
        }
        let q = self.survival_probability(t)?;
        Ok(ValueConverter::implied_hazard_rate(q, t))
    }

    /// The instantaneous hazard rate at tenor `t`.
    ///
    /// For a hazard-rate curve this reads the curve directly; otherwise it
    /// is a central difference of `-ln Q(t)`.
    pub fn hazard_rate(&self, t: f64) -> CurveResult<f64> {
        if let CreditKind::HazardRate = self.kind {
            return self.curve.value_at(t.max(0.0));
        }
        let h = self.derivative_step;
        let lo = (t - h).max(0.0);
        let hi = t.max(0.0) + h;
        let q_lo = self.survival_probability(lo)?;
        let q_hi = self.survival_probability(hi)?;
        if q_lo <= 0.0 || q_hi <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "survival probability must be positive near tenor {t}"
            )));
        }
        Ok((q_lo.ln() - q_hi.ln()) / (hi - lo))
    }

    /// The conditional probability of surviving one more year from `t`:
    /// `Q(t+1) / Q(t)`.
    pub fn marginal_survival_probability(&self, t: f64) -> CurveResult<f64> {
        self.survival_between(t, t + 1.0)
    }

    /// The conditional probability of defaulting within one year from `t`.
    pub fn marginal_default_probability(&self, t: f64) -> CurveResult<f64> {
        Ok(1.0 - self.marginal_survival_probability(t)?)
    }

    // ========================================================================
    // Native representation helpers
    // ========================================================================

    /// `Q(t) = exp(-∫₀ᵗ h(u) du)`.
    fn integrate_hazard(&self, t: f64) -> CurveResult<f64> {
        let curve = Arc::clone(&self.curve);
        // Negative hazards are mapped to NaN and caught below.
        let integral = integrate(
            |u| match curve.value_at(u) {
                Ok(h) if h >= 0.0 => h,
                _ => f64::NAN,
            },
            0.0,
            t,
        );
        if !integral.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "hazard-rate curve is undefined or negative somewhere on [0, {t}]"
            )));
        }
        Ok((-integral).exp())
    }

    /// One-year conditional survival read at `t`, complemented for
    /// marginal-default curves.
    fn marginal_at(&self, t: f64) -> CurveResult<f64> {
        let raw = self.curve.value_at(t)?;
        let m = match self.kind {
            CreditKind::MarginalDefault => 1.0 - raw,
            _ => raw,
        };
        if m <= 0.0 || m > 1.0 {
            return Err(CurveError::invalid_value(format!(
                "marginal survival must lie in (0, 1], got {m} at tenor {t}"
            )));
        }
        Ok(m)
    }

    /// Compounds one-year conditional survivals over whole years, with a
    /// fractional power for the stub.
    fn compound_marginals(&self, t: f64) -> CurveResult<f64> {
        let whole = t.floor();
        let mut q = 1.0;
        let mut year = 0.0;
        while year < whole - 1e-12 {
            q *= self.marginal_at(year)?;
            year += 1.0;
        }
        let frac = t - whole;
        if frac > 1e-12 {
            q *= self.marginal_at(whole)?.powf(frac);
        }
        Ok(q)
    }
}

impl std::fmt::Debug for CreditCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCurve")
            .field("kind", &self.kind)
            .field("derivative_step", &self.derivative_step)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::ConstantCurve;
    use crate::discrete::DiscreteCurve;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_intensity() {
        let curve = CreditCurve::flat_intensity(0.02).unwrap();
        assert_relative_eq!(
            curve.survival_probability(5.0).unwrap(),
            (-0.1f64).exp(),
            epsilon = 1e-14
        );
        assert_relative_eq!(curve.intensity(3.0).unwrap(), 0.02, epsilon = 1e-14);
        assert_relative_eq!(curve.hazard_rate(3.0).unwrap(), 0.02, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_intensity_rejected() {
        assert!(CreditCurve::flat_intensity(-0.01).is_err());
        assert!(CreditCurve::flat_intensity(f64::NAN).is_err());
    }

    #[test]
    fn test_zero_tenor_conventions() {
        let curve = CreditCurve::flat_intensity(0.02).unwrap();
        assert_eq!(curve.survival_probability(0.0).unwrap(), 1.0);
        assert_eq!(curve.survival_probability(-2.0).unwrap(), 1.0);
        assert_eq!(curve.default_probability(0.0).unwrap(), 0.0);
        assert_eq!(curve.intensity(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_default_probability_complements_survival() {
        let curve = CreditCurve::flat_intensity(0.03).unwrap();
        let q = curve.survival_probability(4.0).unwrap();
        let p = curve.default_probability(4.0).unwrap();
        assert_relative_eq!(q + p, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_survival_native_normalized() {
        let raw = DiscreteCurve::new(vec![0.0, 1.0, 2.0], vec![1.0, 0.98, 0.95]).unwrap();
        let curve = CreditCurve::survival_probabilities(Arc::new(raw));
        assert_relative_eq!(
            curve.survival_probability(2.0).unwrap(),
            0.95,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.survival_between(1.0, 2.0).unwrap(),
            0.95 / 0.98,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.marginal_survival_probability(1.0).unwrap(),
            0.95 / 0.98,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_hazard_native_flat() {
        let curve = CreditCurve::hazard_rates(ConstantCurve::shared(0.04));
        assert_relative_eq!(
            curve.survival_probability(2.0).unwrap(),
            (-0.08f64).exp(),
            epsilon = 1e-10
        );
        assert_eq!(curve.hazard_rate(1.0).unwrap(), 0.04);
    }

    #[test]
    fn test_marginal_native() {
        // Constant one-year survival m compounds to m^t.
        let m = 0.97;
        let curve = CreditCurve::marginal_survivals(ConstantCurve::shared(m));
        assert_relative_eq!(
            curve.survival_probability(3.0).unwrap(),
            m.powi(3),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.survival_probability(2.5).unwrap(),
            m.powf(2.5),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.marginal_survival_probability(1.0).unwrap(),
            m,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.marginal_default_probability(1.0).unwrap(),
            1.0 - m,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_marginal_default_native() {
        // A 3% annual default probability is a 97% annual survival.
        let survivals = CreditCurve::marginal_survivals(ConstantCurve::shared(0.97));
        let defaults = CreditCurve::marginal_defaults(ConstantCurve::shared(0.03));
        for t in [0.5, 1.0, 2.0, 4.5] {
            assert_relative_eq!(
                defaults.survival_probability(t).unwrap(),
                survivals.survival_probability(t).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_non_positive_survival_rejected() {
        let raw = DiscreteCurve::new(vec![0.0, 1.0], vec![1.0, -0.2]).unwrap();
        let curve = CreditCurve::survival_probabilities(Arc::new(raw));
        assert!(matches!(
            curve.survival_probability(1.0).unwrap_err(),
            CurveError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_survival_above_one_rejected() {
        let raw = DiscreteCurve::new(vec![0.0, 1.0], vec![1.0, 1.2]).unwrap();
        let curve = CreditCurve::survival_probabilities(Arc::new(raw));
        assert!(matches!(
            curve.survival_probability(1.0).unwrap_err(),
            CurveError::InvalidValue { .. }
        ));
        assert!(curve.default_probability(1.0).is_err());
    }

    #[test]
    fn test_negative_intensity_curve_rejected_at_query() {
        let curve = CreditCurve::intensities(ConstantCurve::shared(-0.05));
        assert!(matches!(
            curve.survival_probability(2.0).unwrap_err(),
            CurveError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_negative_hazard_curve_rejected_at_query() {
        let curve = CreditCurve::hazard_rates(ConstantCurve::shared(-0.01));
        assert!(matches!(
            curve.survival_probability(1.0).unwrap_err(),
            CurveError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_marginal_above_one_rejected() {
        let curve = CreditCurve::marginal_survivals(ConstantCurve::shared(1.05));
        assert!(curve.survival_probability(2.0).is_err());
    }
}

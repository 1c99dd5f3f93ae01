//! Interest rate term structures.
//!
//! A [`RateCurve`] wraps any [`Curve`] and declares what its values mean
//! via a [`RateKind`]. Every query (discount factor, zero rate, cash rate,
//! forward rate, short rate) is then answered from the same underlying
//! curve, converting through discount factors so all representations stay
//! mutually consistent.

use std::sync::Arc;

use termstruct_core::types::{Compounding, Frequency};
use termstruct_math::integration::integrate;

use crate::conversion::ValueConverter;
use crate::curve::{Curve, CurveRef};
use crate::error::{CurveError, CurveResult};

/// Default bump for numerical forward-rate differentiation, one calendar
/// day in years.
pub const DEFAULT_DERIVATIVE_STEP: f64 = 1.0 / 365.0;

/// Default fixing frequency for cash rate queries on curves without a
/// native cash grid.
pub const DEFAULT_CASH_FREQUENCY: Frequency = Frequency::Quarterly;

/// What the values of the underlying curve represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateKind {
    /// Zero-coupon spot rates under the given compounding convention.
    ZeroRate(Compounding),
    /// Discount factors; values are normalized by the value at tenor zero.
    DiscountFactor,
    /// Simple forward cash rates fixing on a grid of the given frequency.
    CashRate(Frequency),
    /// Instantaneous short rates, integrated to discount factors.
    ShortRate,
}

/// An interest rate curve with a declared value representation.
///
/// # Example
///
/// ```rust
/// use termstruct_core::types::Compounding;
/// use termstruct_curves::curve::ConstantCurve;
/// use termstruct_curves::rate::RateCurve;
///
/// let curve = RateCurve::zero_rates(ConstantCurve::shared(0.04), Compounding::Continuous);
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - (-0.04f64).exp()).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct RateCurve {
    curve: CurveRef,
    kind: RateKind,
    derivative_step: f64,
}

impl RateCurve {
    /// Wraps a curve with an explicit representation.
    #[must_use]
    pub fn new(curve: CurveRef, kind: RateKind) -> Self {
        Self {
            curve,
            kind,
            derivative_step: DEFAULT_DERIVATIVE_STEP,
        }
    }

    /// Wraps a curve of zero-coupon spot rates.
    #[must_use]
    pub fn zero_rates(curve: CurveRef, compounding: Compounding) -> Self {
        Self::new(curve, RateKind::ZeroRate(compounding))
    }

    /// Wraps a curve of discount factors.
    #[must_use]
    pub fn discount_factors(curve: CurveRef) -> Self {
        Self::new(curve, RateKind::DiscountFactor)
    }

    /// Wraps a curve of simple cash rates fixing at the given frequency.
    #[must_use]
    pub fn cash_rates(curve: CurveRef, frequency: Frequency) -> Self {
        Self::new(curve, RateKind::CashRate(frequency))
    }

    /// Wraps a curve of instantaneous short rates.
    #[must_use]
    pub fn short_rates(curve: CurveRef) -> Self {
        Self::new(curve, RateKind::ShortRate)
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
    pub fn kind(&self) -> RateKind {
        self.kind
    }

    /// The underlying curve.
    #[must_use]
    pub fn curve(&self) -> &CurveRef {
        &self.curve
    }

    /// The bump used for numerical differentiation.
    #[must_use]
    pub fn derivative_step(&self) -> f64 {
        self.derivative_step
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The discount factor at tenor `t`. Always 1.0 at or before tenor zero.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        match self.kind {
            RateKind::ZeroRate(compounding) => {
                let rate = self.curve.value_at(t)?;
                Ok(ValueConverter::zero_to_df(rate, t, compounding))
            }
            RateKind::DiscountFactor => {
                let raw = self.curve.value_at(t)?;
                let base = self.curve.value_at(0.0)?;
                if raw <= 0.0 || base <= 0.0 {
                    return Err(CurveError::invalid_value(format!(
                        "discount factor must be positive, got {raw} at tenor {t}"
                    )));
                }
                Ok(raw / base)
            }
            RateKind::CashRate(frequency) => self.compound_cash(t, frequency),
            RateKind::ShortRate => self.integrate_short_rate(t),
        }
    }

    /// The continuously compounded zero rate at tenor `t`. Zero at or
    /// before tenor zero.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        self.zero_rate_with(t, Compounding::Continuous)
    }

    /// The zero rate at tenor `t` under an explicit compounding convention.
    pub fn zero_rate_with(&self, t: f64, compounding: Compounding) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(0.0);
        }
        // Shortcut when the native representation already matches.
        if let RateKind::ZeroRate(native) = self.kind {
            if native == compounding {
                return self.curve.value_at(t);
            }
        }
        let df = self.discount_factor(t)?;
        Ok(ValueConverter::df_to_zero(df, t, compounding))
    }

    /// The discount factor between `t1` and `t2`: `df(t2) / df(t1)`.
    pub fn discount_factor_between(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        if df1 <= 0.0 {
            return Err(CurveError::division_by_zero(t1));
        }
        Ok(df2 / df1)
    }

    /// The simple forward cash rate fixing at `t`, using the native cash
    /// grid frequency where there is one and the default otherwise.
    pub fn cash_rate(&self, t: f64) -> CurveResult<f64> {
        let frequency = match self.kind {
            RateKind::CashRate(frequency) => frequency,
            _ => DEFAULT_CASH_FREQUENCY,
        };
        self.cash_rate_with(t, frequency)
    }

    /// The simple forward cash rate fixing at `t` for one period of the
    /// given frequency.
    pub fn cash_rate_with(&self, t: f64, frequency: Frequency) -> CurveResult<f64> {
        let tau = frequency.period_length();
        let df_start = self.discount_factor(t)?;
        let df_end = self.discount_factor(t + tau)?;
        if df_end <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "discount factor must be positive at tenor {}",
                t + tau
            )));
        }
        Ok((df_start / df_end - 1.0) / tau)
    }

    /// The continuously compounded forward rate between `t1` and `t2`.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if (t2 - t1).abs() < 1e-10 {
            return self.short_rate(t1);
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(ValueConverter::forward_rate_from_dfs(
            df1,
            df2,
            t1,
            t2,
            Compounding::Continuous,
        ))
    }

    /// The instantaneous forward (short) rate at tenor `t`.
    ///
    /// For a short-rate curve this reads the curve directly; otherwise it
    /// is a central difference of `-ln P(t)` with the configured bump,
    /// falling back to a one-sided difference near tenor zero.
    pub fn short_rate(&self, t: f64) -> CurveResult<f64> {
        if let RateKind::ShortRate = self.kind {
            return self.curve.value_at(t.max(0.0));
        }
        let h = self.derivative_step;
        let lo = (t - h).max(0.0);
        let hi = t.max(0.0) + h;
        let df_lo = self.discount_factor(lo)?;
        let df_hi = self.discount_factor(hi)?;
        if df_lo <= 0.0 || df_hi <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "discount factor must be positive near tenor {t}"
            )));
        }
        Ok((df_lo.ln() - df_hi.ln()) / (hi - lo))
    }

    // ========================================================================
    // Native representation helpers
    // ========================================================================

    /// Discounts by compounding simple cash-rate periods from tenor zero.
    fn compound_cash(&self, t: f64, frequency: Frequency) -> CurveResult<f64> {
        let tau = frequency.period_length();
        let mut growth = 1.0;
        let mut start = 0.0;
        while start < t - 1e-12 {
            let end = (start + tau).min(t);
            let rate = self.curve.value_at(start)?;
            growth *= 1.0 + rate * (end - start);
            start = end;
        }
        if growth <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "cash-rate compounding produced non-positive growth at tenor {t}"
            )));
        }
        Ok(1.0 / growth)
    }

    /// Discounts by integrating the short rate: `P(t) = exp(-∫₀ᵗ r(u) du)`.
    fn integrate_short_rate(&self, t: f64) -> CurveResult<f64> {
        let curve = Arc::clone(&self.curve);
        let integral = integrate(|u| curve.value_at(u).unwrap_or(f64::NAN), 0.0, t);
        if !integral.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "short-rate curve is undefined somewhere on [0, {t}]"
            )));
        }
        Ok((-integral).exp())
    }
}

impl std::fmt::Debug for RateCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateCurve")
            .field("kind", &self.kind)
            .field("derivative_step", &self.derivative_step)
            .finish_non_exhaustive()
    }
}

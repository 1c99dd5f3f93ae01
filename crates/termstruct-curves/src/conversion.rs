//! Conversions between curve value representations.
//!
//! The same term structure can be quoted as discount factors, zero rates
//! under any compounding convention, forward rates, or (for credit) survival
//! probabilities and hazard rates. This module holds the pure conversion
//! math shared by the rate and credit wrappers.
//!
//! # Mathematical Background
//!
//! For continuous compounding:
//! - `P(t) = exp(-r(t) * t)`
//! - `r(t) = -ln(P(t)) / t`
//!
//! For periodic compounding (n times per year):
//! - `P(t) = (1 + r(t)/n)^(-n*t)`
//! - `r(t) = n * (P(t)^(-1/(n*t)) - 1)`
//!
//! The forward rate from t1 to t2 (continuous zeros):
//! - `F(t1,t2) = (t2*r(t2) - t1*r(t1)) / (t2 - t1)`
//!
//! For survival probability and hazard rate:
//! - `Q(t) = exp(-∫₀ᵗ h(s) ds)`
//! - `h(t) = -d/dt ln(Q(t))`

use termstruct_core::types::Compounding;

/// Value conversion utilities for term structures.
pub struct ValueConverter;

impl ValueConverter {
    // ========================================================================
    // Discount Factor ↔ Zero Rate conversions
    // ========================================================================

    /// Converts a discount factor to a zero rate.
    ///
    /// Returns 0.0 for non-positive times or discount factors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use termstruct_curves::ValueConverter;
    /// use termstruct_core::types::Compounding;
    ///
    /// let df = 0.9512;
    /// let rate = ValueConverter::df_to_zero(df, 1.0, Compounding::Continuous);
    /// assert!((rate - 0.05).abs() < 0.001);
    /// ```
    #[must_use]
    pub fn df_to_zero(df: f64, t: f64, compounding: Compounding) -> f64 {
        if t <= 0.0 || df <= 0.0 {
            return 0.0;
        }

        match compounding.periods_per_year_opt() {
            None if compounding.is_continuous() => -df.ln() / t,
            None => (1.0 / df - 1.0) / t,
            Some(m) => {
                let n = f64::from(m);
                n * (df.powf(-1.0 / (n * t)) - 1.0)
            }
        }
    }

    /// Converts a zero rate to a discount factor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use termstruct_curves::ValueConverter;
    /// use termstruct_core::types::Compounding;
    ///
    /// let df = ValueConverter::zero_to_df(0.05, 1.0, Compounding::Continuous);
    /// assert!((df - 0.9512).abs() < 0.001);
    /// ```
    #[must_use]
    pub fn zero_to_df(rate: f64, t: f64, compounding: Compounding) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }

        match compounding.periods_per_year_opt() {
            None if compounding.is_continuous() => (-rate * t).exp(),
            None => 1.0 / (1.0 + rate * t),
            Some(m) => {
                let n = f64::from(m);
                (1.0 + rate / n).powf(-n * t)
            }
        }
    }

    // ========================================================================
    // Compounding Convention conversions
    // ========================================================================

    /// Converts a rate from one compounding convention to another.
    ///
    /// # Example
    ///
    /// ```rust
    /// use termstruct_curves::ValueConverter;
    /// use termstruct_core::types::Compounding;
    ///
    /// let annual = ValueConverter::convert_compounding(
    ///     0.05,
    ///     Compounding::Continuous,
    ///     Compounding::Annual,
    /// );
    /// assert!((annual - 0.05127).abs() < 0.0001);
    /// ```
    #[must_use]
    pub fn convert_compounding(rate: f64, from: Compounding, to: Compounding) -> f64 {
        if from == to {
            return rate;
        }

        // Pivot through the continuous rate.
        let continuous = Self::to_continuous(rate, from);
        Self::from_continuous(continuous, to)
    }

    /// Converts a rate to continuous compounding.
    ///
    /// Simple rates are mapped through the one-year growth factor.
    #[must_use]
    fn to_continuous(rate: f64, compounding: Compounding) -> f64 {
        match compounding.periods_per_year_opt() {
            None if compounding.is_continuous() => rate,
            None => (1.0 + rate).ln(),
            Some(m) => {
                let n = f64::from(m);
                n * (1.0 + rate / n).ln()
            }
        }
    }

    /// Converts from continuous compounding to another convention.
    #[must_use]
    fn from_continuous(continuous_rate: f64, to: Compounding) -> f64 {
        match to.periods_per_year_opt() {
            None if to.is_continuous() => continuous_rate,
            None => continuous_rate.exp() - 1.0,
            Some(m) => {
                let n = f64::from(m);
                n * ((continuous_rate / n).exp() - 1.0)
            }
        }
    }

    // ========================================================================
    // Forward Rate calculations
    // ========================================================================

    /// Computes the instantaneous forward rate from a zero rate and its slope.
    ///
    /// `f(t) = r(t) + t * dr/dt`
    #[must_use]
    pub fn instantaneous_forward(zero_rate: f64, d_zero_dt: f64, t: f64) -> f64 {
        zero_rate + t * d_zero_dt
    }

    /// Computes the forward rate between two times from continuous zeros.
    ///
    /// `F(t1,t2) = (t2*r(t2) - t1*r(t1)) / (t2 - t1)`
    #[must_use]
    pub fn forward_rate_from_zeros(zero1: f64, zero2: f64, t1: f64, t2: f64) -> f64 {
        if (t2 - t1).abs() < 1e-10 {
            return zero2;
        }
        (t2 * zero2 - t1 * zero1) / (t2 - t1)
    }

    /// Computes the forward rate between two times from discount factors.
    ///
    /// `F(t1,t2) = ln(P(t1)/P(t2)) / (t2 - t1)` under continuous
    /// compounding; simple and periodic conventions follow from the same
    /// growth factor.
    #[must_use]
    pub fn forward_rate_from_dfs(
        df1: f64,
        df2: f64,
        t1: f64,
        t2: f64,
        compounding: Compounding,
    ) -> f64 {
        let dt = t2 - t1;
        if dt.abs() < 1e-10 || df2 <= 0.0 {
            return 0.0;
        }

        let ratio = df1 / df2;

        if compounding.is_continuous() {
            ratio.ln() / dt
        } else if compounding.is_simple() {
            (ratio - 1.0) / dt
        } else {
            let cont_fwd = ratio.ln() / dt;
            Self::from_continuous(cont_fwd, compounding)
        }
    }

    // ========================================================================
    // Credit Curve conversions
    // ========================================================================

    /// Computes the hazard rate from a survival probability and its slope.
    ///
    /// `h(t) = -d/dt ln(Q(t)) = -Q'(t) / Q(t)`
    #[must_use]
    pub fn survival_to_hazard(survival_prob: f64, d_survival_dt: f64) -> f64 {
        if survival_prob <= 0.0 {
            return 0.0;
        }
        -d_survival_dt / survival_prob
    }

    /// Computes the survival probability for a constant hazard rate.
    ///
    /// `Q(t) = exp(-h * t)`
    #[must_use]
    pub fn hazard_to_survival(hazard_rate: f64, t: f64) -> f64 {
        (-hazard_rate * t).exp()
    }

    /// Computes the implied constant hazard rate from a survival probability.
    ///
    /// `h = -ln(Q(t)) / t`
    #[must_use]
    pub fn implied_hazard_rate(survival_prob: f64, t: f64) -> f64 {
        if t <= 0.0 || survival_prob <= 0.0 {
            return 0.0;
        }
        -survival_prob.ln() / t
    }
}

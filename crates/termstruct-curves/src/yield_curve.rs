//! Market-style yield curve queries.
//!
//! [`YieldCurve`] is the facade over the lower-level wrappers: it binds a
//! curve of continuous zero rates to the quote styles a rates desk asks
//! for - compounding price factors, discount factors between two tenors,
//! periodically compounded zeros, simple cash rates, swap annuities and
//! par swap rates. Alternative input quotes (discount factors, cash rates,
//! short rates) enter through the `from_*` constructors.

use rust_decimal::prelude::ToPrimitive;
use termstruct_core::daycounts::DayCountConvention;
use termstruct_core::types::{Compounding, Date, Frequency};

use crate::conversion::ValueConverter;
use crate::curve::CurveRef;
use crate::error::{CurveError, CurveResult};
use crate::rate::RateCurve;

pub use crate::rate::DEFAULT_CASH_FREQUENCY;

/// Default coupon frequency for swap schedules.
pub const DEFAULT_SWAP_FREQUENCY: Frequency = Frequency::Annual;

/// A yield curve facade over a rate curve.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use termstruct_curves::discrete::DiscreteCurve;
/// use termstruct_curves::yield_curve::YieldCurve;
///
/// let grid = DiscreteCurve::new(vec![0.0, 2.0], vec![0.03, 0.05]).unwrap();
/// let yc = YieldCurve::from_zero_rates(Arc::new(grid));
/// let df = yc.df(0.0, 1.0).unwrap();
/// assert!((df - (-0.04f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct YieldCurve {
    rates: RateCurve,
    spot_price: f64,
    compounding: Compounding,
    cash_frequency: Frequency,
    swap_frequency: Frequency,
    origin: Option<(Date, DayCountConvention)>,
}

impl YieldCurve {
    /// Wraps an existing rate curve.
    #[must_use]
    pub fn new(rates: RateCurve) -> Self {
        Self {
            rates,
            spot_price: 1.0,
            compounding: Compounding::Continuous,
            cash_frequency: DEFAULT_CASH_FREQUENCY,
            swap_frequency: DEFAULT_SWAP_FREQUENCY,
            origin: None,
        }
    }

    /// Builds a facade over continuous zero rates.
    #[must_use]
    pub fn from_zero_rates(curve: CurveRef) -> Self {
        Self::new(RateCurve::zero_rates(curve, Compounding::Continuous))
    }

    /// Builds a facade over discount factors.
    #[must_use]
    pub fn from_discount_factors(curve: CurveRef) -> Self {
        Self::new(RateCurve::discount_factors(curve))
    }

    /// Builds a facade over simple cash rates fixing at the given frequency.
    #[must_use]
    pub fn from_cash_rates(curve: CurveRef, frequency: Frequency) -> Self {
        Self::new(RateCurve::cash_rates(curve, frequency))
    }

    /// Builds a facade over instantaneous short rates.
    #[must_use]
    pub fn from_short_rates(curve: CurveRef) -> Self {
        Self::new(RateCurve::short_rates(curve))
    }

    /// Sets the spot price scaling [`price`](Self::price) queries.
    pub fn with_spot_price(mut self, spot_price: f64) -> CurveResult<Self> {
        if spot_price <= 0.0 || !spot_price.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "spot price must be positive, got {spot_price}"
            )));
        }
        self.spot_price = spot_price;
        Ok(self)
    }

    /// Sets the compounding convention for [`zero`](Self::zero) queries.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    /// Sets the cash fixing frequency.
    #[must_use]
    pub fn with_cash_frequency(mut self, frequency: Frequency) -> Self {
        self.cash_frequency = frequency;
        self
    }

    /// Sets the swap coupon frequency.
    #[must_use]
    pub fn with_swap_frequency(mut self, frequency: Frequency) -> Self {
        self.swap_frequency = frequency;
        self
    }

    /// Binds an origin date and day count for calendar-date queries.
    #[must_use]
    pub fn with_origin(mut self, origin: Date, day_count: DayCountConvention) -> Self {
        self.origin = Some((origin, day_count));
        self
    }

    /// The underlying rate curve.
    #[must_use]
    pub fn rates(&self) -> &RateCurve {
        &self.rates
    }

    // ========================================================================
    // Tenor queries
    // ========================================================================

    /// The compounding price at tenor `t`: `spot_price / P(t)`.
    pub fn price(&self, t: f64) -> CurveResult<f64> {
        let df = self.rates.discount_factor(t)?;
        if df <= 0.0 {
            return Err(CurveError::division_by_zero(t));
        }
        Ok(self.spot_price / df)
    }

    /// The continuously compounded spot rate between `t1` and `t2`.
    pub fn spot(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if (t2 - t1).abs() < 1e-10 {
            return self.rates.short_rate(t1);
        }
        let df = self.df(t1, t2)?;
        Ok(ValueConverter::df_to_zero(df, t2 - t1, Compounding::Continuous))
    }

    /// The instantaneous forward rate at tenor `t`.
    pub fn short(&self, t: f64) -> CurveResult<f64> {
        self.rates.short_rate(t)
    }

    /// The discount factor between `t1` and `t2`: `price(t1) / price(t2)`.
    pub fn df(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        let df1 = self.rates.discount_factor(t1)?;
        let df2 = self.rates.discount_factor(t2)?;
        if df1 <= 0.0 {
            return Err(CurveError::division_by_zero(t1));
        }
        Ok(df2 / df1)
    }

    /// The zero coupon rate between `t1` and `t2`, compounded per the
    /// configured convention.
    pub fn zero(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        let df = self.df(t1, t2)?;
        Ok(ValueConverter::df_to_zero(df, t2 - t1, self.compounding))
    }

    /// The simple cash rate fixing at `t` for one cash period.
    pub fn cash(&self, t: f64) -> CurveResult<f64> {
        self.rates.cash_rate_with(t, self.cash_frequency)
    }

    /// The swap annuity between `t1` and `t2` on a schedule of the
    /// configured coupon frequency: `Σ df(t1, tᵢ) τᵢ`.
    pub fn annuity(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if (t2 - t1).abs() < 1e-12 {
            return Ok(1.0);
        }
        self.annuity_with_schedule(&self.swap_schedule(t1, t2))
    }

    /// The swap annuity over an explicit payment schedule.
    pub fn annuity_with_schedule(&self, schedule: &[f64]) -> CurveResult<f64> {
        if schedule.len() < 2 {
            return Err(CurveError::invalid_value(
                "annuity schedule needs at least two dates",
            ));
        }
        let start = schedule[0];
        let mut total = 0.0;
        for pair in schedule.windows(2) {
            total += self.df(start, pair[1])? * (pair[1] - pair[0]);
        }
        Ok(total)
    }

    /// The par swap rate between `t1` and `t2`:
    /// `(1 - df(t1, t2)) / annuity(t1, t2)`.
    pub fn swap(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        let annuity = self.annuity(t1, t2)?;
        if annuity == 0.0 {
            return Err(CurveError::division_by_zero(t2));
        }
        Ok((1.0 - self.df(t1, t2)?) / annuity)
    }

    /// The par swap rate over an explicit payment schedule.
    pub fn swap_with_schedule(&self, schedule: &[f64]) -> CurveResult<f64> {
        let annuity = self.annuity_with_schedule(schedule)?;
        let last = schedule[schedule.len() - 1];
        if annuity == 0.0 {
            return Err(CurveError::division_by_zero(last));
        }
        Ok((1.0 - self.df(schedule[0], last)?) / annuity)
    }

    /// Regular coupon dates from `t1` to `t2`, with a short last stub.
    fn swap_schedule(&self, t1: f64, t2: f64) -> Vec<f64> {
        let step = self.swap_frequency.period_length();
        let mut schedule = vec![t1];
        let mut next = t1 + step;
        while next < t2 - 1e-12 {
            schedule.push(next);
            next += step;
        }
        schedule.push(t2);
        schedule
    }

    // ========================================================================
    // Date queries
    // ========================================================================

    /// The year fraction from the configured origin to `date`.
    pub fn tenor(&self, date: Date) -> CurveResult<f64> {
        let (origin, day_count) = self.origin.ok_or_else(|| {
            CurveError::invalid_curve("no origin date configured for date queries")
        })?;
        Ok(day_count
            .year_fraction(origin, date)
            .to_f64()
            .unwrap_or(0.0))
    }

    /// The compounding price at a calendar date.
    pub fn price_at_date(&self, date: Date) -> CurveResult<f64> {
        self.price(self.tenor(date)?)
    }

    /// The discount factor between two calendar dates.
    pub fn df_between_dates(&self, start: Date, end: Date) -> CurveResult<f64> {
        self.df(self.tenor(start)?, self.tenor(end)?)
    }

    /// The zero coupon rate between two calendar dates.
    pub fn zero_between_dates(&self, start: Date, end: Date) -> CurveResult<f64> {
        self.zero(self.tenor(start)?, self.tenor(end)?)
    }
}

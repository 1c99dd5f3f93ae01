//! Actual/365 day count conventions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days, even in leap years.
///
/// # Usage
///
/// - UK Gilts
/// - AUD and NZD markets
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365 Fixed"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365.25 day count convention.
///
/// Uses the astronomical average year of 365.25 days as the basis. It has
/// no official market blessing but maps calendar dates to an evenly spaced
/// time axis, which makes it the default convention for translating dates
/// into curve tenors.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365.25}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub struct Act365_25;

impl DayCount for Act365_25 {
    fn name(&self) -> &'static str {
        "ACT/365.25"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / dec!(365.25)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

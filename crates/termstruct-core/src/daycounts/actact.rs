//! Actual/Actual day count conventions.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The year fraction is calculated by splitting the period into
/// portions that fall in leap years vs non-leap years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap year}}{365} + \frac{\text{Days in leap year}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl ActActIsda {
    fn forward_fraction(start: Date, end: Date) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut current = start;

        // Process year by year
        while current.year() < end.year() {
            let days_in_year = current.days_in_year();
            let next_jan1 = match Date::from_ymd(current.year() + 1, 1, 1) {
                Ok(d) => d,
                Err(_) => return total,
            };
            let days = current.days_between(&next_jan1);

            total += Decimal::from(days) / Decimal::from(days_in_year);
            current = next_jan1;
        }

        // Remaining portion in the final year
        if current < end {
            let days = current.days_between(&end);
            total += Decimal::from(days) / Decimal::from(current.days_in_year());
        }

        total
    }
}

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start == end {
            return Decimal::ZERO;
        }
        if start > end {
            return -Self::forward_fraction(end, start);
        }
        Self::forward_fraction(start, end)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_actact_non_leap_year() {
        let dc = ActActIsda;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(dc.year_fraction(start, end), Decimal::ONE);
    }

    #[test]
    fn test_actact_leap_year() {
        let dc = ActActIsda;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        // All 366 days fall in the leap year
        assert_eq!(dc.year_fraction(start, end), Decimal::ONE);
    }

    #[test]
    fn test_actact_spanning_leap() {
        let dc = ActActIsda;
        let start = Date::from_ymd(2023, 7, 1).unwrap();
        let end = Date::from_ymd(2024, 7, 1).unwrap();

        // 184 days in 2023 (non-leap), 182 days in 2024 (leap)
        let expected = dec!(184) / dec!(365) + dec!(182) / dec!(366);
        assert_eq!(dc.year_fraction(start, end), expected);
    }

    #[test]
    fn test_actact_antisymmetric() {
        let dc = ActActIsda;
        let a = Date::from_ymd(2023, 7, 1).unwrap();
        let b = Date::from_ymd(2024, 7, 1).unwrap();

        assert_eq!(dc.year_fraction(a, b), -dc.year_fraction(b, a));
        assert_eq!(dc.year_fraction(a, a), Decimal::ZERO);
    }
}

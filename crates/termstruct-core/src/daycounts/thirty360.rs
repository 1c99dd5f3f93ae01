//! 30/360 day count conventions.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Checks if a date is the last day of February.
///
/// Required by the 30/360 US month-end rules.
#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// 30/360 US day count convention (Bond Basis).
///
/// # Usage
///
/// - US corporate, agency and municipal bonds
///
/// # Rules
///
/// 1. If D1 is the last day of February, change D1 to 30
/// 2. If D1 is 31, change D1 to 30
/// 3. If D2 is the last day of February AND D1 was last day of February, change D2 to 30
/// 4. If D2 is 31 AND D1 is now >= 30, change D2 to 30
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        // The adjustment rules assume start <= end; evaluate forward and
        // flip the sign so the convention stays antisymmetric.
        if start > end {
            return -self.day_count(end, start);
        }

        let y1 = i64::from(start.year());
        let y2 = i64::from(end.year());
        let m1 = i64::from(start.month());
        let m2 = i64::from(end.month());
        let mut d1 = i64::from(start.day());
        let mut d2 = i64::from(end.day());

        let d1_was_feb_eom = is_last_day_of_february(start);

        // Rule 1: If D1 is the last day of February, change D1 to 30
        if d1_was_feb_eom {
            d1 = 30;
        }
        // Rule 2: If D1 is 31, change D1 to 30
        else if d1 == 31 {
            d1 = 30;
        }

        // Rule 3: If D2 is the last day of February AND D1 was last day of Feb
        if is_last_day_of_february(end) && d1_was_feb_eom {
            d2 = 30;
        }
        // Rule 4: If D2 is 31 AND D1 is now >= 30
        else if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thirty360_six_months() {
        let dc = Thirty360US;
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2025, 7, 15).unwrap();

        assert_eq!(dc.day_count(start, end), 180);
        assert_eq!(dc.year_fraction(start, end), dec!(0.5));
    }

    #[test]
    fn test_thirty360_month_end_rule() {
        let dc = Thirty360US;
        // Jan 31 -> Mar 31: both ends adjusted to 30
        let start = Date::from_ymd(2025, 1, 31).unwrap();
        let end = Date::from_ymd(2025, 3, 31).unwrap();

        assert_eq!(dc.day_count(start, end), 60);
    }

    #[test]
    fn test_thirty360_february_rule() {
        let dc = Thirty360US;
        // Feb 28 (EOM, non-leap) -> Aug 31
        let start = Date::from_ymd(2025, 2, 28).unwrap();
        let end = Date::from_ymd(2025, 8, 31).unwrap();

        // D1 -> 30 (rule 1), D2 stays 31 shifted by rule 4 -> 30
        assert_eq!(dc.day_count(start, end), 180);
    }

    #[test]
    fn test_thirty360_feb_to_feb() {
        let dc = Thirty360US;
        let start = Date::from_ymd(2024, 2, 29).unwrap();
        let end = Date::from_ymd(2025, 2, 28).unwrap();

        // Both ends last-of-Feb: D1 -> 30, D2 -> 30
        assert_eq!(dc.day_count(start, end), 360);
        assert_eq!(dc.year_fraction(start, end), Decimal::ONE);
    }

    #[test]
    fn test_thirty360_antisymmetric() {
        let dc = Thirty360US;
        let a = Date::from_ymd(2025, 1, 31).unwrap();
        let b = Date::from_ymd(2025, 3, 31).unwrap();

        assert_eq!(dc.day_count(a, b), -dc.day_count(b, a));
        assert_eq!(dc.year_fraction(a, b), -dc.year_fraction(b, a));
    }
}

//! Day count conventions for term structure calculations.
//!
//! Day count conventions map a pair of calendar dates to a year fraction,
//! the time axis every curve in this library works on.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - Money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed - UK Gilts, AUD/NZD
//! - [`Act365_25`]: Actual/365.25 - average-year convention, library default
//!   for date to tenor mapping
//! - [`ActActIsda`]: Actual/Actual ISDA - year-based split
//! - [`Thirty360US`]: 30/360 US - US corporate bonds (with Feb EOM rules)
//!
//! All conventions are antisymmetric: `year_fraction(a, b) ==
//! -year_fraction(b, a)`, and zero when the dates coincide. This is what
//! allows curves to be queried for dates before their origin.
//!
//! # Usage
//!
//! ```rust
//! use termstruct_core::daycounts::{DayCount, Act360};
//! use termstruct_core::types::Date;
//!
//! let dc = Act360;
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! let days = dc.day_count(start, end);
//! let year_fraction = dc.year_fraction(start, end);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::{Act365Fixed, Act365_25};
pub use actact::ActActIsda;
pub use thirty360::Thirty360US;

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two dates
/// according to specific market conventions.
///
/// # Implementation Notes
///
/// - `year_fraction` must be antisymmetric and return zero for equal dates
/// - `day_count` returns the signed number of days according to the convention
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; for 30/360
    /// conventions it uses the 30-day month assumption. Signed.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// Provides runtime selection and string-based configuration.
///
/// # Example
///
/// ```rust
/// use termstruct_core::daycounts::{DayCountConvention, DayCount};
/// use termstruct_core::types::Date;
///
/// let convention = DayCountConvention::Act360;
/// let dc = convention.to_day_count();
///
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 7, 1).unwrap();
/// let yf = dc.year_fraction(start, end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/360 - money market instruments, FRNs
    Act360,

    /// Actual/365 Fixed
    Act365Fixed,

    /// Actual/365.25 - average-year mapping, the library default
    #[default]
    Act365_25,

    /// Actual/Actual ISDA
    ActActIsda,

    /// 30/360 US bond basis
    Thirty360US,
}

impl DayCountConvention {
    /// Converts the convention to a boxed trait object.
    #[must_use]
    pub fn to_day_count(self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::Act365_25 => Box::new(Act365_25),
            DayCountConvention::ActActIsda => Box::new(ActActIsda),
            DayCountConvention::Thirty360US => Box::new(Thirty360US),
        }
    }

    /// Returns the convention's display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365 Fixed",
            DayCountConvention::Act365_25 => "ACT/365.25",
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
            DayCountConvention::Thirty360US => "30/360 US",
        }
    }

    /// Calculates the year fraction without boxing.
    #[must_use]
    pub fn year_fraction(self, start: Date, end: Date) -> Decimal {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
            DayCountConvention::Act365_25 => Act365_25.year_fraction(start, end),
            DayCountConvention::ActActIsda => ActActIsda.year_fraction(start, end),
            DayCountConvention::Thirty360US => Thirty360US.year_fraction(start, end),
        }
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act365_25,
            DayCountConvention::ActActIsda,
            DayCountConvention::Thirty360US,
        ]
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s
            .to_lowercase()
            .replace([' ', '-', '_'], "")
            .replace("actual", "act")
            .as_str()
        {
            "act/360" | "act360" => Ok(DayCountConvention::Act360),
            "act/365" | "act365" | "act/365fixed" | "act365fixed" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            "act/365.25" | "act365.25" => Ok(DayCountConvention::Act365_25),
            "act/act" | "actact" | "act/actisda" | "actactisda" => {
                Ok(DayCountConvention::ActActIsda)
            }
            "30/360" | "30360" | "30/360us" | "30360us" => Ok(DayCountConvention::Thirty360US),
            _ => Err(CoreError::unknown_convention(s)),
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

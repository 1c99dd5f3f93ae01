//! Frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Payment frequency for periodic schedules (cash fixings, swap legs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Quarterly payments (4 per year) - standard money market fixing
    #[default]
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the length of one period in years.
    #[must_use]
    pub fn period_length(&self) -> f64 {
        1.0 / f64::from(self.periods_per_year())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

/// Interest compounding convention.
///
/// Continuous compounding is the canonical convention for curve internals;
/// the periodic conventions cover quoted market rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest (no compounding)
    Simple,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Continuous compounding
    #[default]
    Continuous,
}

impl Compounding {
    /// Returns the number of compounding periods per year, or None for
    /// the non-periodic conventions (Simple, Continuous).
    #[must_use]
    pub fn periods_per_year_opt(&self) -> Option<u32> {
        match self {
            Compounding::Simple | Compounding::Continuous => None,
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
        }
    }

    /// Returns true if this is continuous compounding.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Compounding::Continuous)
    }

    /// Returns true if this is simple interest (no compounding).
    #[must_use]
    pub fn is_simple(&self) -> bool {
        matches!(self, Compounding::Simple)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Simple => "Simple",
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Compounding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "simple" => Ok(Compounding::Simple),
            "annual" | "yearly" => Ok(Compounding::Annual),
            "semiannual" => Ok(Compounding::SemiAnnual),
            "quarterly" => Ok(Compounding::Quarterly),
            "monthly" => Ok(Compounding::Monthly),
            "continuous" => Ok(Compounding::Continuous),
            _ => Err(CoreError::unknown_convention(s)),
        }
    }
}

impl From<Frequency> for Compounding {
    fn from(freq: Frequency) -> Self {
        match freq {
            Frequency::Annual => Compounding::Annual,
            Frequency::SemiAnnual => Compounding::SemiAnnual,
            Frequency::Quarterly => Compounding::Quarterly,
            Frequency::Monthly => Compounding::Monthly,
        }
    }
}

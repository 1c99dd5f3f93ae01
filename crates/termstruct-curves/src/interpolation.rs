//! Named interpolation and extrapolation schemes.
//!
//! These enums are the serializable front door to the interpolators in
//! `termstruct-math`: configuration files and builders refer to schemes by
//! name, and [`DiscreteCurve`](crate::discrete::DiscreteCurve) instantiates
//! the matching interpolator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Interpolation scheme between curve pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// Straight lines between pillars.
    #[default]
    Linear,
    /// Linear in the logarithm of the values. Requires positive values;
    /// the natural choice for discount factors and survival probabilities.
    LogLinear,
    /// Step function taking the value of the pillar at or before the query.
    PiecewiseConstantLeft,
    /// Step function taking the value of the pillar at or after the query.
    PiecewiseConstantRight,
    /// Natural cubic spline. Requires at least three pillars.
    CubicSpline,
}

impl InterpolationMethod {
    /// All supported schemes.
    #[must_use]
    pub fn all() -> &'static [InterpolationMethod] {
        &[
            InterpolationMethod::Linear,
            InterpolationMethod::LogLinear,
            InterpolationMethod::PiecewiseConstantLeft,
            InterpolationMethod::PiecewiseConstantRight,
            InterpolationMethod::CubicSpline,
        ]
    }

    /// The canonical name of the scheme.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMethod::Linear => "linear",
            InterpolationMethod::LogLinear => "log_linear",
            InterpolationMethod::PiecewiseConstantLeft => "piecewise_constant_left",
            InterpolationMethod::PiecewiseConstantRight => "piecewise_constant_right",
            InterpolationMethod::CubicSpline => "cubic_spline",
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InterpolationMethod {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "linear" => Ok(InterpolationMethod::Linear),
            "log_linear" | "loglinear" => Ok(InterpolationMethod::LogLinear),
            "piecewise_constant_left" | "constant_left" | "step_left" => {
                Ok(InterpolationMethod::PiecewiseConstantLeft)
            }
            "piecewise_constant_right" | "constant_right" | "step_right" => {
                Ok(InterpolationMethod::PiecewiseConstantRight)
            }
            "cubic_spline" | "cubic" | "spline" => Ok(InterpolationMethod::CubicSpline),
            _ => Err(CurveError::invalid_option("interpolation", s)),
        }
    }
}

/// Behavior outside the pillar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolationMethod {
    /// Queries outside the pillar range are rejected.
    #[default]
    None,
    /// Boundary values are held flat.
    Flat,
    /// The interpolation scheme is extended past the boundary.
    Linear,
}

impl ExtrapolationMethod {
    /// The canonical name of the scheme.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ExtrapolationMethod::None => "none",
            ExtrapolationMethod::Flat => "flat",
            ExtrapolationMethod::Linear => "linear",
        }
    }
}

impl fmt::Display for ExtrapolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExtrapolationMethod {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "none" | "off" => Ok(ExtrapolationMethod::None),
            "flat" | "constant" => Ok(ExtrapolationMethod::Flat),
            "linear" | "extend" => Ok(ExtrapolationMethod::Linear),
            _ => Err(CurveError::invalid_option("extrapolation", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_round_trip() {
        for method in InterpolationMethod::all() {
            let parsed: InterpolationMethod = method.name().parse().unwrap();
            assert_eq!(parsed, *method);
        }
    }

    #[test]
    fn test_interpolation_aliases() {
        assert_eq!(
            "LogLinear".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::LogLinear
        );
        assert_eq!(
            "step-left".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::PiecewiseConstantLeft
        );
        assert_eq!(
            "spline".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::CubicSpline
        );
        assert!("hermite".parse::<InterpolationMethod>().is_err());
    }

    #[test]
    fn test_extrapolation_parsing() {
        assert_eq!(
            "flat".parse::<ExtrapolationMethod>().unwrap(),
            ExtrapolationMethod::Flat
        );
        assert_eq!(
            "off".parse::<ExtrapolationMethod>().unwrap(),
            ExtrapolationMethod::None
        );
        assert!("quadratic".parse::<ExtrapolationMethod>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(InterpolationMethod::default(), InterpolationMethod::Linear);
        assert_eq!(ExtrapolationMethod::default(), ExtrapolationMethod::None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&InterpolationMethod::LogLinear).unwrap();
        assert_eq!(json, "\"log_linear\"");
        let back: InterpolationMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, InterpolationMethod::LogLinear);
    }
}

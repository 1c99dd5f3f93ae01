//! Curve construction configuration.
//!
//! [`CurveConfig`] gathers the conventions a curve is built with. It
//! deserializes from JSON (unknown fields are rejected) and also accepts
//! string key/value overrides via [`set`](CurveConfig::set), so both config
//! files and command-style option maps land in the same place. Defaults are
//! the crate-wide conventions; there is no global mutable state.

use serde::{Deserialize, Serialize};
use termstruct_core::daycounts::DayCountConvention;
use termstruct_core::types::{Compounding, Date};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};

/// Conventions for building a curve.
///
/// # Example
///
/// ```rust
/// use termstruct_curves::config::CurveConfig;
///
/// let mut config = CurveConfig::default();
/// config.set("interpolation", "log_linear").unwrap();
/// config.set("day_count", "act365").unwrap();
/// assert!(config.set("colour", "blue").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CurveConfig {
    /// Interpolation scheme between pillars.
    pub interpolation: InterpolationMethod,
    /// Behavior outside the pillar range.
    pub extrapolation: ExtrapolationMethod,
    /// Compounding convention for zero rate quotes.
    pub compounding: Compounding,
    /// Day count convention for date-to-tenor mapping.
    pub day_count: DayCountConvention,
    /// Origin date for calendar-date queries, if any.
    pub origin: Option<Date>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::default(),
            extrapolation: ExtrapolationMethod::default(),
            compounding: Compounding::default(),
            day_count: DayCountConvention::default(),
            origin: None,
        }
    }
}

impl CurveConfig {
    /// Applies a single string override.
    ///
    /// Unknown keys are rejected with [`CurveError::UnknownOption`];
    /// unparseable values with [`CurveError::InvalidOption`].
    pub fn set(&mut self, key: &str, value: &str) -> CurveResult<()> {
        match key {
            "interpolation" => {
                self.interpolation = value.parse()?;
            }
            "extrapolation" => {
                self.extrapolation = value.parse()?;
            }
            "compounding" => {
                self.compounding = value
                    .parse()
                    .map_err(|_| CurveError::invalid_option(key, value))?;
            }
            "day_count" => {
                self.day_count = value
                    .parse()
                    .map_err(|_| CurveError::invalid_option(key, value))?;
            }
            "origin" => {
                self.origin = Some(
                    Date::parse(value).map_err(|_| CurveError::invalid_option(key, value))?,
                );
            }
            _ => return Err(CurveError::unknown_option(key)),
        }
        Ok(())
    }

    /// Parses a config from JSON, rejecting unknown fields.
    pub fn from_json(json: &str) -> CurveResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CurveError::invalid_curve(format!("bad curve config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CurveConfig::default();
        assert_eq!(config.interpolation, InterpolationMethod::Linear);
        assert_eq!(config.extrapolation, ExtrapolationMethod::None);
        assert_eq!(config.compounding, Compounding::Continuous);
        assert_eq!(config.day_count, DayCountConvention::Act365_25);
        assert!(config.origin.is_none());
    }

    #[test]
    fn test_set_overrides() {
        let mut config = CurveConfig::default();
        config.set("interpolation", "cubic_spline").unwrap();
        config.set("extrapolation", "flat").unwrap();
        config.set("compounding", "quarterly").unwrap();
        config.set("day_count", "act360").unwrap();
        config.set("origin", "2024-06-30").unwrap();
        assert_eq!(config.interpolation, InterpolationMethod::CubicSpline);
        assert_eq!(config.extrapolation, ExtrapolationMethod::Flat);
        assert_eq!(config.compounding, Compounding::Quarterly);
        assert_eq!(config.day_count, DayCountConvention::Act360);
        assert_eq!(config.origin, Date::from_ymd(2024, 6, 30).ok());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = CurveConfig::default();
        assert!(matches!(
            config.set("colour", "blue").unwrap_err(),
            CurveError::UnknownOption { .. }
        ));
    }

    #[test]
    fn test_bad_values_rejected() {
        let mut config = CurveConfig::default();
        assert!(matches!(
            config.set("compounding", "hourly").unwrap_err(),
            CurveError::InvalidOption { .. }
        ));
        assert!(matches!(
            config.set("origin", "not-a-date").unwrap_err(),
            CurveError::InvalidOption { .. }
        ));
        assert!(matches!(
            config.set("interpolation", "bezier").unwrap_err(),
            CurveError::InvalidOption { .. }
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = CurveConfig::default();
        config.set("interpolation", "log_linear").unwrap();
        config.set("origin", "2024-01-01").unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back = CurveConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_unknown_json_field_rejected() {
        let json = r#"{"interpolation": "linear", "colour": "blue"}"#;
        assert!(CurveConfig::from_json(json).is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CurveConfig::from_json(r#"{"interpolation": "cubic_spline"}"#).unwrap();
        assert_eq!(config.interpolation, InterpolationMethod::CubicSpline);
        assert_eq!(config.day_count, DayCountConvention::Act365_25);
    }
}

//! Error types for curve operations.
//!
//! This module provides error handling for curve construction, lazy
//! algebra, value conversion and configuration.

use termstruct_core::CoreError;
use termstruct_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Requested tenor is outside the curve's valid range.
    #[error("Tenor {requested:.4} out of range [{min:.4}, {max:.4}]")]
    TenorOutOfRange {
        /// The requested tenor in years.
        requested: f64,
        /// Minimum valid tenor.
        min: f64,
        /// Maximum valid tenor.
        max: f64,
    },

    /// Pillar grid is unusable: empty, mismatched lengths, or unordered
    /// or duplicate tenors.
    #[error("Degenerate grid: {reason}")]
    DegenerateGrid {
        /// Description of the defect.
        reason: String,
    },

    /// Division by zero while evaluating a curve quotient.
    #[error("Division by zero at tenor {tenor:.4}")]
    DivisionByZero {
        /// Tenor at which the denominator vanished.
        tenor: f64,
    },

    /// A queried or derived value is outside its mathematical domain
    /// (non-positive discount factor, survival probability, ...).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why the value is invalid.
        reason: String,
    },

    /// Curve construction rejected the inputs.
    #[error("Invalid curve: {reason}")]
    InvalidCurve {
        /// Description of the defect.
        reason: String,
    },

    /// Unrecognized configuration option key.
    #[error("Unknown option: {key}")]
    UnknownOption {
        /// The unrecognized key.
        key: String,
    },

    /// Configuration option value failed to parse.
    #[error("Invalid option {key}: {value}")]
    InvalidOption {
        /// The option key.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// Error bubbled up from the math layer.
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error bubbled up from the core layer.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates a tenor out of range error.
    #[must_use]
    pub fn tenor_out_of_range(requested: f64, min: f64, max: f64) -> Self {
        Self::TenorOutOfRange {
            requested,
            min,
            max,
        }
    }

    /// Creates a degenerate grid error.
    #[must_use]
    pub fn degenerate_grid(reason: impl Into<String>) -> Self {
        Self::DegenerateGrid {
            reason: reason.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(tenor: f64) -> Self {
        Self::DivisionByZero { tenor }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates an invalid curve error.
    #[must_use]
    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }

    /// Creates an unknown option error.
    #[must_use]
    pub fn unknown_option(key: impl Into<String>) -> Self {
        Self::UnknownOption { key: key.into() }
    }

    /// Creates an invalid option error.
    #[must_use]
    pub fn invalid_option(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::tenor_out_of_range(15.0, 0.0, 10.0);
        let msg = format!("{}", err);
        assert!(msg.contains("15.0"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn test_division_by_zero_carries_tenor() {
        let err = CurveError::division_by_zero(2.5);
        assert!(err.to_string().contains("2.5"));
    }

    #[test]
    fn test_math_error_conversion() {
        let math = MathError::insufficient_data(2, 1);
        let err: CurveError = math.into();
        assert!(matches!(err, CurveError::Math(_)));
    }

    #[test]
    fn test_unknown_option() {
        let err = CurveError::unknown_option("interploation");
        assert_eq!(err.to_string(), "Unknown option: interploation");
    }
}

//! Error types for the Termstruct core crate.
//!
//! Structured error handling with context, shared by the higher-level
//! curve crates.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Day count calculation error.
    #[error("Day count error: {reason}")]
    DayCountError {
        /// Description of the error.
        reason: String,
    },

    /// Unrecognized convention name in configuration input.
    #[error("Unknown convention: {name}")]
    UnknownConvention {
        /// The unrecognized name.
        name: String,
    },
}

impl CoreError {
    /// Creates an `InvalidDate` error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        CoreError::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a `DayCountError`.
    #[must_use]
    pub fn day_count(reason: impl Into<String>) -> Self {
        CoreError::DayCountError {
            reason: reason.into(),
        }
    }

    /// Creates an `UnknownConvention` error.
    #[must_use]
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        CoreError::UnknownConvention { name: name.into() }
    }
}

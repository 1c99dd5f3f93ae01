//! # Termstruct Core
//!
//! Core types and day count conventions for the Termstruct term structure
//! library.
//!
//! This crate provides the foundational building blocks used throughout
//! Termstruct:
//!
//! - **Types**: `Date`, `Frequency`, `Compounding`
//! - **Day Count Conventions**: industry-standard year fraction calculations
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: conventions are threaded through
//!   constructors, never read from global defaults
//!
//! ## Example
//!
//! ```rust
//! use termstruct_core::prelude::*;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 7, 1).unwrap();
//! let yf = DayCountConvention::Act360.year_fraction(start, end);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};

/// Commonly used types, re-exported for convenience.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Compounding, Date, Frequency};
}

//! # Termstruct Curves
//!
//! Yield, credit and FX forward term structures for the Termstruct
//! analytics workspace.
//!
//! This crate provides:
//!
//! - **Curve Trait**: Core [`curve::Curve`] abstraction mapping tenors to
//!   values
//! - **Discrete Curves**: Pillar grids with pluggable interpolation and
//!   extrapolation
//! - **Curve Algebra**: Lazy pointwise arithmetic and transforms over
//!   shared curves
//! - **Rate Curves**: Zero rates, discount factors, cash rates and short
//!   rates answering a common query set
//! - **Credit Curves**: Survival probabilities, hazard rates and
//!   intensities
//! - **FX Forwards**: Covered-interest-parity forward curves
//! - **Hull-White**: Deterministic short-rate model expectations
//! - **YieldCurve Facade**: Market-style price, zero, cash, annuity and
//!   swap queries
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use termstruct_curves::prelude::*;
//!
//! // Continuous zero rates on a pillar grid.
//! let grid = DiscreteCurve::builder()
//!     .pillars(vec![0.0, 1.0, 2.0], vec![0.03, 0.04, 0.05])
//!     .method(InterpolationMethod::Linear)
//!     .build()
//!     .unwrap();
//!
//! let curve = RateCurve::zero_rates(Arc::new(grid), Compounding::Continuous);
//!
//! // The same curve answers every representation.
//! let df = curve.discount_factor(1.5).unwrap();
//! let fwd = curve.forward_rate(1.0, 2.0).unwrap();
//! assert!(df < 1.0 && fwd > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algebra;
pub mod config;
pub mod conversion;
pub mod credit;
pub mod curve;
pub mod date_curve;
pub mod discrete;
pub mod error;
pub mod fx;
pub mod hull_white;
pub mod interpolation;
pub mod rate;
pub mod yield_curve;

pub use conversion::ValueConverter;
pub use error::{CurveError, CurveResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algebra::{BinaryOp, ComposedCurve, CurveTransform, DerivedCurve};
    pub use crate::config::CurveConfig;
    pub use crate::conversion::ValueConverter;
    pub use crate::credit::{CreditCurve, CreditKind};
    pub use crate::curve::{ConstantCurve, Curve, CurveRef, FunctionCurve};
    pub use crate::date_curve::DateCurve;
    pub use crate::discrete::{DiscreteCurve, DiscreteCurveBuilder};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::fx::FxForwardCurve;
    pub use crate::hull_white::HullWhite;
    pub use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};
    pub use crate::rate::{RateCurve, RateKind};
    pub use crate::yield_curve::YieldCurve;
    pub use termstruct_core::daycounts::DayCountConvention;
    pub use termstruct_core::types::{Compounding, Date, Frequency};
}

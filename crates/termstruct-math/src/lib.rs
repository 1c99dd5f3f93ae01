//! # Termstruct Math
//!
//! Mathematical utilities for the Termstruct term structure library.
//!
//! This crate provides:
//!
//! - **Interpolation**: linear, log-linear, piecewise-constant and natural
//!   cubic spline methods behind a common [`interpolation::Interpolator`]
//!   trait
//! - **Parametric Models**: the Nelson-Siegel-Svensson curve generator
//! - **Integration**: composite Simpson quadrature for instantaneous-rate
//!   curves
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: careful handling of edge cases
//! - **Fail Loudly**: degenerate grids and out-of-range queries are errors,
//!   never clamped

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod integration;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::integration::integrate;
    pub use crate::interpolation::{
        CubicSpline, Interpolator, LinearInterpolator, LogLinearInterpolator,
        NelsonSiegelSvensson, PiecewiseConstant, Side,
    };
}

pub use error::{MathError, MathResult};

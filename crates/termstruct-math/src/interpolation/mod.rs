//! Interpolation methods for curve construction.
//!
//! # Available Methods
//!
//! **Grid-based:**
//! - [`LinearInterpolator`]: Simple linear interpolation
//! - [`LogLinearInterpolator`]: Log-linear interpolation (interpolates log of values)
//! - [`PiecewiseConstant`]: Step function, left- or right-continuous
//! - [`CubicSpline`]: Natural cubic spline interpolation
//!
//! **Parametric Models:**
//! - [`NelsonSiegelSvensson`]: Six-parameter Svensson curve
//!
//! # Choosing an Interpolation Method
//!
//! | Method | Speed | Smoothness | Use Case |
//! |--------|-------|------------|----------|
//! | Linear | Fast | C0 | Zero and cash rate curves |
//! | Log-Linear | Fast | C0 | Discount factor / survival curves |
//! | Piecewise Constant | Fast | none | Hazard and short rate curves |
//! | Cubic Spline | Medium | C2 | Smooth curves |
//! | Nelson-Siegel-Svensson | Fast | C-inf | Parametric fitting |

mod cubic_spline;
mod linear;
mod log_linear;
mod parametric;
mod piecewise;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;
pub use parametric::NelsonSiegelSvensson;
pub use piecewise::{PiecewiseConstant, Side};

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Validates a grid shared by the grid-based interpolators.
///
/// Requires at least 2 points, equal lengths and strictly increasing
/// abscissas (duplicates are a degenerate grid, not a tie-break choice).
pub(crate) fn validate_grid(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::degenerate_grid(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::degenerate_grid(format!(
                "x values must be strictly increasing: x[{}] = {} follows x[{}] = {}",
                i,
                xs[i],
                i - 1,
                xs[i - 1]
            )));
        }
    }
    Ok(())
}

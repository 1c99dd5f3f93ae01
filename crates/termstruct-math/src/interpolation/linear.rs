//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{validate_grid, Interpolator};

/// Linear interpolation between data points.
///
/// The workhorse method for zero rate and cash rate curves. Extrapolation
/// beyond the grid, when enabled, extends the boundary segments with their
/// own slope.
///
/// # Example
///
/// ```rust
/// use termstruct_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let times = vec![0.0, 1.0, 2.0];
/// let rates = vec![0.02, 0.03, 0.04];
///
/// let interp = LinearInterpolator::new(times, rates).unwrap();
/// assert!((interp.interpolate(0.5).unwrap() - 0.025).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, the lengths
    /// differ, or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_grid(&xs, &ys)?;
        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables linear extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    ///
    /// Queries outside the grid resolve to the boundary segment.
    fn find_segment(&self, x: f64) -> usize {
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }

    fn check_bounds(&self, x: f64) -> MathResult<()> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.xs[0],
                max: self.xs[self.xs.len() - 1],
            });
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;

        let i = self.find_segment(x);
        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;

        let i = self.find_segment(x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

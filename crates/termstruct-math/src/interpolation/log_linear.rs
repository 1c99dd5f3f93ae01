//! Log-linear interpolation.
//!
//! Interpolates the logarithm of values, which is useful for discount
//! factors and survival probabilities as it guarantees positive values.

use crate::error::{MathError, MathResult};
use crate::interpolation::{validate_grid, Interpolator};

/// Log-linear interpolation between data points.
///
/// Interpolates the natural logarithm of y values, then exponentiates the
/// result. Commonly used for discount factor interpolation as it:
/// - Guarantees positive interpolated values
/// - Produces piecewise constant forward rates
/// - Is exact for exponential decay between pillars
///
/// # Example
///
/// ```rust
/// use termstruct_math::interpolation::{LogLinearInterpolator, Interpolator};
///
/// let times = vec![0.0, 1.0, 2.0, 3.0];
/// let discount_factors = vec![1.0, 0.97, 0.94, 0.91];
///
/// let interp = LogLinearInterpolator::new(times, discount_factors).unwrap();
/// assert!(interp.interpolate(1.5).unwrap() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    /// Precomputed log(y) values
    log_ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is degenerate (see
    /// [`LinearInterpolator::new`](super::LinearInterpolator::new)) or any
    /// y value is non-positive.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_grid(&xs, &ys)?;

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if y <= 0.0 {
                return Err(MathError::invalid_input(format!(
                    "y[{i}] = {y} is not positive; log-linear requires positive values"
                )));
            }
            log_ys.push(y.ln());
        }

        Ok(Self {
            xs,
            log_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
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

    fn log_value(&self, x: f64) -> f64 {
        let i = self.find_segment(x);
        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let t = (x - x0) / (x1 - x0);
        self.log_ys[i] + t * (self.log_ys[i + 1] - self.log_ys[i])
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;
        Ok(self.log_value(x).exp())
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;

        let i = self.find_segment(x);
        // y(x) = exp(l(x)) with linear l, so dy/dx = y(x) * l'
        let d_log = (self.log_ys[i + 1] - self.log_ys[i]) / (self.xs[i + 1] - self.xs[i]);
        Ok(self.log_value(x).exp() * d_log)
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_linear_exact_for_exponential_decay() {
        let r: f64 = 0.05;
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|&t: &f64| (-r * t).exp()).collect();

        let interp = LogLinearInterpolator::new(xs, ys).unwrap();

        let t = 1.5;
        assert_relative_eq!(
            interp.interpolate(t).unwrap(),
            (-r * t).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_log_linear_derivative() {
        let r: f64 = 0.05;
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|&t: &f64| (-r * t).exp()).collect();

        let interp = LogLinearInterpolator::new(xs, ys).unwrap();

        let t = 1.5;
        assert_relative_eq!(
            interp.derivative(t).unwrap(),
            -r * (-r * t).exp(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_log_linear_rejects_non_positive() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![1.0, 0.0, -1.0];

        assert!(LogLinearInterpolator::new(xs, ys).is_err());
    }

    #[test]
    fn test_log_linear_extrapolation() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![1.0, 0.9, 0.81];

        let interp = LogLinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        assert!(interp.interpolate(2.5).is_err());

        let interp = LogLinearInterpolator::new(xs, ys)
            .unwrap()
            .with_extrapolation();
        let y = interp.interpolate(2.5).unwrap();
        assert!(y > 0.0 && y < 0.81);
    }

    #[test]
    fn test_log_linear_monotone_on_decreasing_data() {
        let times = vec![0.25, 0.5, 1.0, 2.0, 3.0, 5.0];
        let dfs = vec![0.9975, 0.9950, 0.9901, 0.9802, 0.9706, 0.9512];

        let interp = LogLinearInterpolator::new(times, dfs).unwrap();

        let mut prev = interp.interpolate(0.25).unwrap();
        for t in [0.3, 0.75, 1.5, 2.5, 4.0] {
            let current = interp.interpolate(t).unwrap();
            assert!(current < prev, "DF should decrease at t = {t}");
            prev = current;
        }
    }
}

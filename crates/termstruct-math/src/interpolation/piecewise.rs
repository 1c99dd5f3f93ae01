//! Piecewise-constant (step) interpolation.
//!
//! Step functions are the natural representation for hazard rates and
//! instantaneous short rates, where the quantity is constant between
//! pillar dates.

use crate::error::{MathError, MathResult};
use crate::interpolation::{validate_grid, Interpolator};

/// Which pillar a point strictly between two pillars takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left-continuous step: value of the pillar at or before x.
    Left,
    /// Right-continuous step: value of the pillar at or after x.
    Right,
}

/// Piecewise-constant interpolation between data points.
///
/// With [`Side::Left`] the value at `x` is the value of the last pillar
/// not after `x`; with [`Side::Right`] it is the value of the first pillar
/// not before `x`. Pillar points themselves always return their own value.
///
/// Extrapolation, when enabled, holds the boundary values flat.
///
/// # Example
///
/// ```rust
/// use termstruct_math::interpolation::{PiecewiseConstant, Side, Interpolator};
///
/// let times = vec![0.0, 1.0, 2.0];
/// let hazards = vec![0.01, 0.02, 0.04];
///
/// let steps = PiecewiseConstant::new(times, hazards, Side::Left).unwrap();
/// assert_eq!(steps.interpolate(1.5).unwrap(), 0.02);
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseConstant {
    xs: Vec<f64>,
    ys: Vec<f64>,
    side: Side,
    allow_extrapolation: bool,
}

impl PiecewiseConstant {
    /// Creates a new piecewise-constant interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error on a degenerate grid (fewer than 2 points, length
    /// mismatch, non-increasing or duplicate x values).
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, side: Side) -> MathResult<Self> {
        validate_grid(&xs, &ys)?;
        Ok(Self {
            xs,
            ys,
            side,
            allow_extrapolation: false,
        })
    }

    /// Enables flat extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
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

    /// Pillar index responsible for x under the configured side.
    fn find_pillar(&self, x: f64) -> usize {
        let n = self.xs.len();
        let search = self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal));
        match search {
            Ok(i) => i,
            Err(i) => match self.side {
                // i is the insertion point: xs[i-1] < x < xs[i]
                Side::Left => i.saturating_sub(1).min(n - 1),
                Side::Right => i.min(n - 1),
            },
        }
    }
}

impl Interpolator for PiecewiseConstant {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;
        Ok(self.ys[self.find_pillar(x)])
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;
        // Zero almost everywhere; pillar jumps are not differentiable,
        // report zero there as well.
        Ok(0.0)
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

    fn sample() -> (Vec<f64>, Vec<f64>) {
        (vec![0.0, 1.0, 2.0, 3.0], vec![0.01, 0.02, 0.04, 0.03])
    }

    #[test]
    fn test_left_continuous() {
        let (xs, ys) = sample();
        let steps = PiecewiseConstant::new(xs, ys, Side::Left).unwrap();

        assert_eq!(steps.interpolate(0.5).unwrap(), 0.01);
        assert_eq!(steps.interpolate(1.0).unwrap(), 0.02);
        assert_eq!(steps.interpolate(1.999).unwrap(), 0.02);
        assert_eq!(steps.interpolate(2.0).unwrap(), 0.04);
    }

    #[test]
    fn test_right_continuous() {
        let (xs, ys) = sample();
        let steps = PiecewiseConstant::new(xs, ys, Side::Right).unwrap();

        assert_eq!(steps.interpolate(0.5).unwrap(), 0.02);
        assert_eq!(steps.interpolate(1.0).unwrap(), 0.02);
        assert_eq!(steps.interpolate(1.001).unwrap(), 0.04);
    }

    #[test]
    fn test_pillars_exact_both_sides() {
        let (xs, ys) = sample();
        for side in [Side::Left, Side::Right] {
            let steps = PiecewiseConstant::new(xs.clone(), ys.clone(), side).unwrap();
            for (x, y) in xs.iter().zip(ys.iter()) {
                assert_eq!(steps.interpolate(*x).unwrap(), *y);
            }
        }
    }

    #[test]
    fn test_derivative_is_zero() {
        let (xs, ys) = sample();
        let steps = PiecewiseConstant::new(xs, ys, Side::Left).unwrap();
        assert_eq!(steps.derivative(1.5).unwrap(), 0.0);
    }

    #[test]
    fn test_flat_extrapolation() {
        let (xs, ys) = sample();
        let steps = PiecewiseConstant::new(xs.clone(), ys.clone(), Side::Left).unwrap();
        assert!(steps.interpolate(-1.0).is_err());

        let steps = PiecewiseConstant::new(xs, ys, Side::Left)
            .unwrap()
            .with_extrapolation();
        assert_eq!(steps.interpolate(-1.0).unwrap(), 0.01);
        assert_eq!(steps.interpolate(10.0).unwrap(), 0.03);
    }
}

//! Parametric yield curve models.
//!
//! Closed-form curve generators used instead of point-by-point
//! interpolation when a handful of parameters should describe the whole
//! term structure.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Floor applied to the query time so the loading factors stay finite.
const MIN_TIME: f64 = 1e-8;

/// Nelson-Siegel-Svensson yield curve model.
///
/// The six-parameter model parameterizes the zero rate curve as:
/// ```text
/// a(x) = (1 - e^(-x/tau1)) / (x/tau1)
/// b(x) = a(x) - e^(-x/tau1)
/// c(x) = (1 - e^(-x/tau2)) / (x/tau2) - e^(-x/tau2)
/// z(x) = beta0 + beta1*a(x) + beta2*b(x) + beta3*c(x)
/// ```
///
/// Where:
/// - `beta0`: long-term level (asymptotic zero rate)
/// - `beta1`: short-term component; `z(0) = beta0 + beta1`
/// - `beta2`: medium-term component (hump around `tau1`)
/// - `beta3`: second hump component (around `tau2`)
/// - `tau1`, `tau2`: decay factors, both positive
///
/// # Example
///
/// ```rust
/// use termstruct_math::interpolation::{NelsonSiegelSvensson, Interpolator};
///
/// let nss = NelsonSiegelSvensson::new(0.045, -0.02, 0.01, -0.005, 2.0, 8.0).unwrap();
/// let short = nss.interpolate(0.25).unwrap();
/// let long = nss.interpolate(30.0).unwrap();
/// assert!(short < long);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelsonSiegelSvensson {
    /// Long-term level
    beta0: f64,
    /// Short-term component
    beta1: f64,
    /// First hump component
    beta2: f64,
    /// Second hump component
    beta3: f64,
    /// First decay factor
    tau1: f64,
    /// Second decay factor
    tau2: f64,
}

impl NelsonSiegelSvensson {
    /// Creates a new Nelson-Siegel-Svensson curve.
    ///
    /// # Errors
    ///
    /// Returns an error if either decay factor is not positive.
    pub fn new(
        beta0: f64,
        beta1: f64,
        beta2: f64,
        beta3: f64,
        tau1: f64,
        tau2: f64,
    ) -> MathResult<Self> {
        if tau1 <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tau1 must be positive, got {tau1}"
            )));
        }
        if tau2 <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tau2 must be positive, got {tau2}"
            )));
        }

        Ok(Self {
            beta0,
            beta1,
            beta2,
            beta3,
            tau1,
            tau2,
        })
    }

    /// Returns the model parameters as (beta0, beta1, beta2, beta3, tau1, tau2).
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.beta0, self.beta1, self.beta2, self.beta3, self.tau1, self.tau2,
        )
    }

    /// Returns the instantaneous forward (short) rate at time x.
    ///
    /// ```text
    /// f(x) = beta0 + beta1*e^(-x/tau1) + beta2*(x/tau1)*e^(-x/tau1)
    ///              + beta3*(x/tau2)*e^(-x/tau2)
    /// ```
    pub fn forward_rate(&self, x: f64) -> f64 {
        let x = x.max(MIN_TIME);
        let x1 = x / self.tau1;
        let x2 = x / self.tau2;
        let exp_x1 = (-x1).exp();
        let exp_x2 = (-x2).exp();

        self.beta0 + self.beta1 * exp_x1 + self.beta2 * x1 * exp_x1 + self.beta3 * x2 * exp_x2
    }

    /// Helper function: (1 - e^(-x)) / x
    fn loading_factor_1(x: f64) -> f64 {
        if x.abs() < 1e-10 {
            1.0 - x / 2.0 + x * x / 6.0 // Taylor expansion for numerical stability
        } else {
            (1.0 - (-x).exp()) / x
        }
    }

    /// Helper function: (1 - e^(-x)) / x - e^(-x)
    fn loading_factor_2(x: f64) -> f64 {
        if x.abs() < 1e-10 {
            x / 2.0 - x * x / 3.0
        } else {
            Self::loading_factor_1(x) - (-x).exp()
        }
    }
}

impl Interpolator for NelsonSiegelSvensson {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let x = x.max(MIN_TIME);
        let x1 = x / self.tau1;
        let x2 = x / self.tau2;

        let z = self.beta0
            + self.beta1 * Self::loading_factor_1(x1)
            + self.beta2 * Self::loading_factor_2(x1)
            + self.beta3 * Self::loading_factor_2(x2);

        Ok(z)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if x <= MIN_TIME {
            return Ok(0.0);
        }

        let x1 = x / self.tau1;
        let x2 = x / self.tau2;
        let exp_x1 = (-x1).exp();
        let exp_x2 = (-x2).exp();

        // d(L1)/dx = (e^(-x) - L1) / x, d(L2)/dx = d(L1)/dx + e^(-x)
        let l1_1 = Self::loading_factor_1(x1);
        let dl1_1 = (exp_x1 - l1_1) / x1;
        let dl2_1 = dl1_1 + exp_x1;

        let l1_2 = Self::loading_factor_1(x2);
        let dl1_2 = (exp_x2 - l1_2) / x2;
        let dl2_2 = dl1_2 + exp_x2;

        Ok(self.beta1 * dl1_1 / self.tau1
            + self.beta2 * dl2_1 / self.tau1
            + self.beta3 * dl2_2 / self.tau2)
    }

    fn allows_extrapolation(&self) -> bool {
        true // Parametric model works for any t
    }

    fn min_x(&self) -> f64 {
        0.0
    }

    fn max_x(&self) -> f64 {
        f64::INFINITY
    }
}

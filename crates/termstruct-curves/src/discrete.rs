//! Pillar-based curves.
//!
//! A [`DiscreteCurve`] stores a strictly increasing tenor grid with one
//! value per pillar and answers queries through a named interpolation
//! scheme. It is the workhorse backing for the rate, credit and FX
//! wrappers; most market curves start life here.

use std::fmt;
use std::sync::Arc;

use termstruct_math::error::MathError;
use termstruct_math::interpolation::{
    CubicSpline, Interpolator, LinearInterpolator, LogLinearInterpolator, PiecewiseConstant, Side,
};

use crate::curve::Curve;
use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};

/// A curve defined by values at discrete tenor pillars.
///
/// # Example
///
/// ```rust
/// use termstruct_curves::discrete::DiscreteCurve;
/// use termstruct_curves::curve::Curve;
/// use termstruct_curves::interpolation::InterpolationMethod;
///
/// let curve = DiscreteCurve::builder()
///     .pillars(vec![0.0, 2.0], vec![0.03, 0.05])
///     .method(InterpolationMethod::Linear)
///     .build()
///     .unwrap();
/// assert_eq!(curve.value_at(1.0).unwrap(), 0.04);
/// ```
#[derive(Clone)]
pub struct DiscreteCurve {
    xs: Vec<f64>,
    ys: Vec<f64>,
    method: InterpolationMethod,
    extrapolation: ExtrapolationMethod,
    interpolator: Option<Arc<dyn Interpolator>>,
}

impl DiscreteCurve {
    /// Creates a curve with linear interpolation and no extrapolation.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> CurveResult<Self> {
        Self::with_method(
            xs,
            ys,
            InterpolationMethod::default(),
            ExtrapolationMethod::default(),
        )
    }

    /// Creates a curve with explicit interpolation and extrapolation schemes.
    pub fn with_method(
        xs: Vec<f64>,
        ys: Vec<f64>,
        method: InterpolationMethod,
        extrapolation: ExtrapolationMethod,
    ) -> CurveResult<Self> {
        if xs.len() != ys.len() {
            return Err(CurveError::degenerate_grid(format!(
                "pillar count mismatch: {} tenors vs {} values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(CurveError::degenerate_grid("curve has no pillars"));
        }
        // A single pillar degenerates to a constant curve and skips the
        // interpolator entirely.
        let interpolator = if xs.len() == 1 {
            None
        } else {
            Some(build_interpolator(&xs, &ys, method, extrapolation)?)
        };
        log::debug!(
            "built discrete curve: {} pillars on [{}, {}], {method}/{extrapolation}",
            xs.len(),
            xs[0],
            xs[xs.len() - 1],
        );
        Ok(Self {
            xs,
            ys,
            method,
            extrapolation,
            interpolator,
        })
    }

    /// Starts a builder.
    #[must_use]
    pub fn builder() -> DiscreteCurveBuilder {
        DiscreteCurveBuilder::default()
    }

    /// The tenor pillars.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.xs
    }

    /// The pillar values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.ys
    }

    /// The interpolation scheme.
    #[must_use]
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// The extrapolation scheme.
    #[must_use]
    pub fn extrapolation(&self) -> ExtrapolationMethod {
        self.extrapolation
    }

    /// The first pillar tenor.
    #[must_use]
    pub fn min_tenor(&self) -> f64 {
        self.xs[0]
    }

    /// The last pillar tenor.
    #[must_use]
    pub fn max_tenor(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// The slope of the curve at `t`, per the interpolation scheme.
    pub fn derivative_at(&self, t: f64) -> CurveResult<f64> {
        match &self.interpolator {
            None => Ok(0.0),
            Some(interp) => {
                if self.extrapolation == ExtrapolationMethod::Flat && !interp.in_range(t) {
                    return Ok(0.0);
                }
                let clamped = self.clamp_for_policy(t);
                interp.derivative(clamped).map_err(|e| self.map_range(e, t))
            }
        }
    }

    fn clamp_for_policy(&self, t: f64) -> f64 {
        match self.extrapolation {
            ExtrapolationMethod::Flat => t.clamp(self.min_tenor(), self.max_tenor()),
            _ => t,
        }
    }

    fn map_range(&self, err: MathError, t: f64) -> CurveError {
        match err {
            MathError::ExtrapolationNotAllowed { min, max, .. } => {
                CurveError::tenor_out_of_range(t, min, max)
            }
            other => other.into(),
        }
    }
}

impl Curve for DiscreteCurve {
    fn value_at(&self, t: f64) -> CurveResult<f64> {
        match &self.interpolator {
            None => Ok(self.ys[0]),
            Some(interp) => {
                let clamped = self.clamp_for_policy(t);
                interp
                    .interpolate(clamped)
                    .map_err(|e| self.map_range(e, t))
            }
        }
    }
}

impl fmt::Debug for DiscreteCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscreteCurve")
            .field("pillars", &self.xs.len())
            .field("method", &self.method)
            .field("extrapolation", &self.extrapolation)
            .finish()
    }
}

fn build_interpolator(
    xs: &[f64],
    ys: &[f64],
    method: InterpolationMethod,
    extrapolation: ExtrapolationMethod,
) -> CurveResult<Arc<dyn Interpolator>> {
    let xs = xs.to_vec();
    let ys = ys.to_vec();
    let extend = extrapolation != ExtrapolationMethod::None;
    let interp: Arc<dyn Interpolator> = match method {
        InterpolationMethod::Linear => {
            let mut i = LinearInterpolator::new(xs, ys)?;
            if extend {
                i = i.with_extrapolation();
            }
            Arc::new(i)
        }
        InterpolationMethod::LogLinear => {
            let mut i = LogLinearInterpolator::new(xs, ys)?;
            if extend {
                i = i.with_extrapolation();
            }
            Arc::new(i)
        }
        InterpolationMethod::PiecewiseConstantLeft => {
            let mut i = PiecewiseConstant::new(xs, ys, Side::Left)?;
            if extend {
                i = i.with_extrapolation();
            }
            Arc::new(i)
        }
        InterpolationMethod::PiecewiseConstantRight => {
            let mut i = PiecewiseConstant::new(xs, ys, Side::Right)?;
            if extend {
                i = i.with_extrapolation();
            }
            Arc::new(i)
        }
        InterpolationMethod::CubicSpline => {
            let mut i = CubicSpline::new(xs, ys)?;
            if extend {
                i = i.with_extrapolation();
            }
            Arc::new(i)
        }
    };
    Ok(interp)
}

/// Builder for [`DiscreteCurve`].
#[derive(Debug, Default, Clone)]
pub struct DiscreteCurveBuilder {
    xs: Vec<f64>,
    ys: Vec<f64>,
    method: InterpolationMethod,
    extrapolation: ExtrapolationMethod,
}

impl DiscreteCurveBuilder {
    /// Sets the tenor grid and pillar values.
    #[must_use]
    pub fn pillars(mut self, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        self.xs = xs;
        self.ys = ys;
        self
    }

    /// Sets the interpolation scheme.
    #[must_use]
    pub fn method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the extrapolation scheme.
    #[must_use]
    pub fn extrapolation(mut self, extrapolation: ExtrapolationMethod) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Validates the grid and builds the curve.
    pub fn build(self) -> CurveResult<DiscreteCurve> {
        DiscreteCurve::with_method(self.xs, self.ys, self.method, self.extrapolation)
    }
}

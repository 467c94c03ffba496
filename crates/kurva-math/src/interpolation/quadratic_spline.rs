//! Local quadratic spline interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{find_segment, validate_points, Interpolator};

/// Local quadratic spline interpolation.
///
/// Fits one quadratic per segment with a forward recurrence on the
/// segment start slopes: the first segment starts at its chord slope,
/// and each subsequent segment starts where the previous one ended.
/// This gives a C1 curve without solving a global system.
///
/// On segment i with h = x(i+1) - x(i) and chord slope s(i):
///
/// ```text
/// q(x) = y(i) + b(i) (x - x(i)) + c(i) (x - x(i))^2
/// b(0) = s(0)
/// b(i+1) = 2 s(i) - b(i)
/// c(i) = (s(i) - b(i)) / h(i)
/// ```
#[derive(Debug, Clone)]
pub struct QuadraticSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Start slope of each segment
    bs: Vec<f64>,
    /// Quadratic coefficient of each segment
    cs: Vec<f64>,
    allow_extrapolation: bool,
}

impl QuadraticSpline {
    /// Creates a quadratic spline interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points, lengths
    /// differ, or xs are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_points(&xs, &ys, 3)?;

        let n = xs.len() - 1;
        let mut bs = Vec::with_capacity(n);
        let mut cs = Vec::with_capacity(n);

        for i in 0..n {
            let h = xs[i + 1] - xs[i];
            let s = (ys[i + 1] - ys[i]) / h;
            let b = if i == 0 { s } else { 2.0 * slope(&xs, &ys, i - 1) - bs[i - 1] };
            bs.push(b);
            cs.push((s - b) / h);
        }

        Ok(Self {
            xs,
            ys,
            bs,
            cs,
            allow_extrapolation: false,
        })
    }

    /// Enables boundary-tangent extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.in_range(x) && !self.allow_extrapolation {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }

    fn value_in_range(&self, x: f64) -> f64 {
        let i = find_segment(&self.xs, x);
        let dx = x - self.xs[i];
        self.ys[i] + self.bs[i] * dx + self.cs[i] * dx * dx
    }

    fn slope_in_range(&self, x: f64) -> f64 {
        let i = find_segment(&self.xs, x);
        let dx = x - self.xs[i];
        self.bs[i] + 2.0 * self.cs[i] * dx
    }
}

fn slope(xs: &[f64], ys: &[f64], i: usize) -> f64 {
    (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
}

impl Interpolator for QuadraticSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        if x < self.min_x() {
            let tangent = self.slope_in_range(self.min_x());
            return Ok(self.ys[0] + tangent * (x - self.min_x()));
        }
        if x > self.max_x() {
            let tangent = self.slope_in_range(self.max_x());
            return Ok(self.ys[self.ys.len() - 1] + tangent * (x - self.max_x()));
        }

        Ok(self.value_in_range(x))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let clamped = x.clamp(self.min_x(), self.max_x());
        Ok(self.slope_in_range(clamped))
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

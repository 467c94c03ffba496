//! Natural cubic spline interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{find_segment, validate_points, Interpolator};

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives.
///
/// "Natural" means the second derivative is zero at the endpoints.
/// When extrapolation is enabled, queries beyond the pillar range
/// extend linearly along the boundary tangent rather than continuing
/// the end polynomial.
///
/// # Example
///
/// ```rust
/// use kurva_math::interpolation::{CubicSpline, Interpolator};
///
/// let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
/// let y = spline.interpolate(1.5).unwrap();
/// assert!(y > 1.0 && y < 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points, lengths
    /// differ, or xs are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_points(&xs, &ys, 3)?;
        let y2s = second_derivatives(&xs, &ys);
        Ok(Self {
            xs,
            ys,
            y2s,
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

        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;

        a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h) / 6.0
    }

    fn slope_in_range(&self, x: f64) -> f64 {
        let i = find_segment(&self.xs, x);

        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;

        (self.ys[i + 1] - self.ys[i]) / h
            + ((3.0 * b * b - 1.0) * self.y2s[i + 1] - (3.0 * a * a - 1.0) * self.y2s[i]) * h / 6.0
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        if x < self.min_x() {
            let slope = self.slope_in_range(self.min_x());
            return Ok(self.ys[0] + slope * (x - self.min_x()));
        }
        if x > self.max_x() {
            let slope = self.slope_in_range(self.max_x());
            return Ok(self.ys[self.ys.len() - 1] + slope * (x - self.max_x()));
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

/// Computes the knot second derivatives for a natural cubic spline.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    // Natural boundary: y2[0] = y2[n-1] = 0
    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]) - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }
    y2s[n - 1] = 0.0;

    y2s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_natural_boundary() {
        // Second derivative vanishes at the ends, so the spline is
        // close to linear near the boundary
        let spline = CubicSpline::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, 1.0, 0.0, 1.0, 0.0],
        )
        .unwrap();

        let h = 1e-4;
        let d2 = (spline.interpolate(0.0).unwrap() - 2.0 * spline.interpolate(h).unwrap()
            + spline.interpolate(2.0 * h).unwrap())
            / (h * h);
        assert!(d2.abs() < 1e-2);
    }

    #[test]
    fn test_extrapolation_error() {
        let spline =
            CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
        assert!(spline.interpolate(-0.5).is_err());
        assert!(spline.interpolate(3.5).is_err());
    }

    #[test]
    fn test_linear_tail_when_extrapolating() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0])
            .unwrap()
            .with_extrapolation();

        let slope = spline.derivative(3.0).unwrap();
        assert_relative_eq!(
            spline.interpolate(4.0).unwrap(),
            9.0 + slope,
            epsilon = 1e-10
        );
        // Tail stays linear, not cubic
        assert_relative_eq!(
            spline.interpolate(5.0).unwrap(),
            9.0 + 2.0 * slope,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_insufficient_points() {
        assert!(CubicSpline::new(vec![0.0, 1.0], vec![0.0, 1.0]).is_err());
    }
}

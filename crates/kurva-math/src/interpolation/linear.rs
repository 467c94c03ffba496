//! Piecewise linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{find_segment, validate_points, Interpolator};

/// Piecewise linear interpolation.
///
/// The workhorse scheme for zero and forward curves: node-exact, never
/// overshoots, and each segment depends only on its two endpoints.
///
/// # Example
///
/// ```rust
/// use kurva_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, lengths
    /// differ, or xs are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_points(&xs, &ys, 2)?;
        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables boundary-tangent extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    fn segment_slope(&self, i: usize) -> f64 {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if !self.in_range(x) && !self.allow_extrapolation {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }

        // Outside the range the end segment extends linearly, which is
        // exactly the boundary tangent for a piecewise linear curve.
        let i = find_segment(&self.xs, x);
        Ok(self.ys[i] + self.segment_slope(i) * (x - self.xs[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if !self.in_range(x) && !self.allow_extrapolation {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }

        Ok(self.segment_slope(find_segment(&self.xs, x)))
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
    fn test_interpolate_midpoints() {
        let interp =
            LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 3.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 0.5);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 2.0);
    }

    #[test]
    fn test_extrapolation() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0], vec![0.0, 2.0]).unwrap();
        assert!(interp.interpolate(1.5).is_err());

        let interp = interp.with_extrapolation();
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 3.0);
        assert_relative_eq!(interp.interpolate(-0.5).unwrap(), -1.0);
    }

    #[test]
    fn test_too_few_points() {
        assert!(LinearInterpolator::new(vec![1.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_unsorted_points() {
        assert!(LinearInterpolator::new(vec![1.0, 0.5, 2.0], vec![0.0, 1.0, 2.0]).is_err());
    }
}

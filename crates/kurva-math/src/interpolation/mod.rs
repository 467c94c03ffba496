//! Interpolation schemes for yield curve construction.
//!
//! This module provides the interpolation algorithms used when reading
//! a curve between its pillars:
//!
//! - [`LinearInterpolator`]: piecewise linear, C0
//! - [`CubicSpline`]: natural cubic spline, C2
//! - [`QuadraticSpline`]: local quadratic segments, C1
//!
//! All schemes reproduce their input points exactly. Queries outside
//! the pillar range fail with [`MathError::ExtrapolationNotAllowed`]
//! unless extrapolation is enabled, in which case the curve is extended
//! linearly along the boundary tangent.
//!
//! # Choosing a Scheme
//!
//! | Scheme | Smoothness | Locality | Use Case |
//! |--------|------------|----------|----------|
//! | Linear | C0 | Local | Robust default, no overshoot |
//! | Cubic Spline | C2 | Global | Smooth zero curves |
//! | Quadratic Spline | C1 | Forward recurrence | Cheap smoothness |

mod cubic_spline;
mod linear;
mod quadratic_spline;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use quadratic_spline::QuadraticSpline;

use crate::error::{MathError, MathResult};

/// Trait for interpolation schemes.
///
/// All schemes implement this trait, providing a unified interface for
/// curve construction.
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

/// Enumeration of the supported interpolation schemes.
///
/// Selecting a scheme at runtime goes through [`InterpolationMethod::build`],
/// which produces the working trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// Piecewise linear interpolation.
    Linear,
    /// Natural cubic spline.
    NaturalCubicSpline,
    /// Local quadratic spline.
    QuadraticSpline,
}

impl InterpolationMethod {
    /// Builds an interpolator over the given points.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are too few, mismatched in
    /// length, or not strictly increasing in x.
    pub fn build(
        &self,
        xs: Vec<f64>,
        ys: Vec<f64>,
        allow_extrapolation: bool,
    ) -> MathResult<Box<dyn Interpolator>> {
        Ok(match self {
            InterpolationMethod::Linear => {
                let mut interp = LinearInterpolator::new(xs, ys)?;
                if allow_extrapolation {
                    interp = interp.with_extrapolation();
                }
                Box::new(interp)
            }
            InterpolationMethod::NaturalCubicSpline => {
                let mut interp = CubicSpline::new(xs, ys)?;
                if allow_extrapolation {
                    interp = interp.with_extrapolation();
                }
                Box::new(interp)
            }
            InterpolationMethod::QuadraticSpline => {
                let mut interp = QuadraticSpline::new(xs, ys)?;
                if allow_extrapolation {
                    interp = interp.with_extrapolation();
                }
                Box::new(interp)
            }
        })
    }

    /// Returns the name of the scheme.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMethod::Linear => "Linear",
            InterpolationMethod::NaturalCubicSpline => "Natural Cubic Spline",
            InterpolationMethod::QuadraticSpline => "Quadratic Spline",
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Validates interpolation input points.
///
/// Shared by the concrete schemes: lengths must match, at least
/// `min_points` points, and xs strictly increasing.
pub(crate) fn validate_points(xs: &[f64], ys: &[f64], min_points: usize) -> MathResult<()> {
    if xs.len() < min_points {
        return Err(MathError::insufficient_data(min_points, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }
    }
    Ok(())
}

/// Finds the segment index i such that xs[i] <= x < xs[i+1].
///
/// Queries past the last pillar clamp to the final segment.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => i.saturating_sub(1).min(xs.len() - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const METHODS: [InterpolationMethod; 3] = [
        InterpolationMethod::Linear,
        InterpolationMethod::NaturalCubicSpline,
        InterpolationMethod::QuadraticSpline,
    ];

    #[test]
    fn test_all_schemes_through_points() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let rates = vec![0.02, 0.025, 0.03, 0.035, 0.04];

        for method in METHODS {
            let interp = method.build(times.clone(), rates.clone(), false).unwrap();
            for (t, r) in times.iter().zip(rates.iter()) {
                assert_relative_eq!(interp.interpolate(*t).unwrap(), *r, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_extrapolation_rejected_by_default() {
        let times = vec![1.0, 2.0, 3.0, 4.0];
        let rates = vec![0.01, 0.012, 0.015, 0.016];

        for method in METHODS {
            let interp = method.build(times.clone(), rates.clone(), false).unwrap();
            assert!(matches!(
                interp.interpolate(0.5),
                Err(MathError::ExtrapolationNotAllowed { .. })
            ));
            assert!(matches!(
                interp.interpolate(4.5),
                Err(MathError::ExtrapolationNotAllowed { .. })
            ));
        }
    }

    #[test]
    fn test_boundary_tangent_extrapolation() {
        let times = vec![1.0, 2.0, 3.0, 4.0];
        let rates = vec![0.01, 0.012, 0.015, 0.016];

        for method in METHODS {
            let interp = method.build(times.clone(), rates.clone(), true).unwrap();

            // Extension must be linear along the boundary tangent
            let slope = interp.derivative(4.0).unwrap();
            let y5 = interp.interpolate(5.0).unwrap();
            assert_relative_eq!(y5, 0.016 + slope, epsilon = 1e-10);

            let slope0 = interp.derivative(1.0).unwrap();
            let y0 = interp.interpolate(0.0).unwrap();
            assert_relative_eq!(y0, 0.01 - slope0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let rates = vec![0.02, 0.025, 0.03, 0.028, 0.04];

        for method in METHODS {
            let interp = method.build(times.clone(), rates.clone(), false).unwrap();
            let h = 1e-6;
            for t in [0.75, 1.5, 2.5, 4.0] {
                let numerical = (interp.interpolate(t + h).unwrap()
                    - interp.interpolate(t - h).unwrap())
                    / (2.0 * h);
                let analytical = interp.derivative(t).unwrap();
                assert!(
                    (analytical - numerical).abs() < 1e-4,
                    "{method} derivative at t={t}: {analytical} vs {numerical}"
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_node_exactness(
            deltas in proptest::collection::vec(0.1f64..2.0, 3..10),
            rates in proptest::collection::vec(-0.05f64..0.15, 10),
        ) {
            // Build a strictly increasing time grid from positive steps
            let mut times = Vec::with_capacity(deltas.len());
            let mut t = 0.25;
            for d in &deltas {
                times.push(t);
                t += d;
            }
            let rates: Vec<f64> = rates.into_iter().take(times.len()).collect();
            prop_assume!(rates.len() == times.len());

            for method in METHODS {
                let interp = method.build(times.clone(), rates.clone(), false).unwrap();
                for (x, y) in times.iter().zip(rates.iter()) {
                    let v = interp.interpolate(*x).unwrap();
                    prop_assert!((v - y).abs() < 1e-9, "{method} at {x}: {v} vs {y}");
                }
            }
        }
    }
}

//! Root-finding algorithms.
//!
//! This module provides the numerical solvers used when inverting a
//! par condition for a curve pillar:
//!
//! - [`brent`]: robust method combining bisection, secant, and inverse
//!   quadratic interpolation (the default)
//! - [`bisection`]: simple and reliable bracketing method
//! - [`bracket_root`]: scans an interval for a sign change to seed the
//!   bracketing methods
//!
//! # Example
//!
//! ```rust
//! use kurva_math::solvers::{bracket_root, brent, SolverConfig};
//!
//! let f = |x: f64| x * x * x - x - 2.0;
//! let (a, b) = bracket_root(&f, -1.0, 3.0, 16).unwrap();
//! let result = brent(f, a, b, &SolverConfig::default()).unwrap();
//! assert!((result.root - 1.521_379_706_804_568).abs() < 1e-9);
//! ```

mod bisection;
mod brent;

pub use bisection::bisection;
pub use brent::brent;

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Scans `[lo, hi]` in `steps` equal subintervals for a sign change.
///
/// Returns the first subinterval bracketing a root. Endpoints that are
/// themselves roots produce a degenerate but valid bracket for the
/// bracketing solvers.
///
/// # Errors
///
/// Returns [`MathError::InvalidBracket`] when no sign change is found,
/// reporting the scanned endpoints.
pub fn bracket_root<F>(f: &F, lo: f64, hi: f64, steps: u32) -> MathResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let steps = steps.max(1);
    let width = (hi - lo) / f64::from(steps);

    let mut a = lo;
    let mut fa = f(a);

    for i in 1..=steps {
        let b = lo + f64::from(i) * width;
        let fb = f(b);

        if fa * fb <= 0.0 {
            return Ok((a, b));
        }

        a = b;
        fa = fb;
    }

    Err(MathError::InvalidBracket {
        a: lo,
        b: hi,
        fa: f(lo),
        fb: f(hi),
    })
}

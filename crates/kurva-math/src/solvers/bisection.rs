//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Halves the bracketing interval until the root is pinned down.
/// Linear convergence, but it cannot fail once a sign change is
/// bracketed. Used as the fallback when Brent's method is not wanted.
///
/// Requires: `f(a) * f(b) <= 0`
///
/// # Example
///
/// ```rust
/// use kurva_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let fa = f(a);
    let fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut fa = fa;

    for iteration in 0..config.max_iterations {
        let mid = (a + b) / 2.0;
        let fmid = f(mid);

        if fmid.abs() < config.tolerance || (b - a).abs() / 2.0 < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration,
                residual: fmid,
            });
        }

        if fa * fmid < 0.0 {
            b = mid;
        } else {
            a = mid;
            fa = fmid;
        }
    }

    let mid = (a + b) / 2.0;
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(mid).abs(),
    ))
}

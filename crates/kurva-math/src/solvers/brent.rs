//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines the reliability of bisection with the speed of the secant
/// method and inverse quadratic interpolation. The default choice when
/// no derivative is available.
///
/// Requires: `f(a) * f(b) <= 0` (a sign change across the bracket)
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the bracket
/// * `b` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if the bracket is
/// invalid or the iteration budget is exhausted.
///
/// # Example
///
/// ```rust
/// use kurva_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // Keep |f(a)| >= |f(b)| so b is the best estimate
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if fb.abs() < config.tolerance || (b - a).abs() < config.tolerance {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        let mut use_bisection = true;
        let mut s = 0.0;

        if (fa - fc).abs() > 1e-15 && (fb - fc).abs() > 1e-15 {
            // Inverse quadratic interpolation
            let r = fb / fc;
            let p = fa / fc;
            let q = fa / fb;

            s = b
                - (q * (q - r) * (b - a) + (1.0 - r) * (b - c) * p)
                    / ((q - 1.0) * (r - 1.0) * (p - 1.0));

            let m = (a + b) / 2.0;
            if s > m.min(b) && s < m.max(b) && (s - b).abs() < e.abs() / 2.0 {
                use_bisection = false;
            }
        } else if (fb - fa).abs() > 1e-15 {
            // Secant step
            s = b - fb * (b - a) / (fb - fa);

            let m = (a + b) / 2.0;
            if s > m.min(b) && s < m.max(b) && (s - b).abs() < e.abs() / 2.0 {
                use_bisection = false;
            }
        }

        if use_bisection {
            s = (a + b) / 2.0;
            e = b - a;
            d = e;
        } else {
            e = d;
            d = s - b;
        }

        c = b;
        fc = fb;

        let fs = f(s);

        if fa * fs < 0.0 {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cubic() {
        let f = |x: f64| x * x * x - x - 2.0;
        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
        assert!(f(result.root).abs() < 1e-10);
        assert_relative_eq!(result.root, 1.521_379_706_804_568, epsilon = 1e-10);
    }

    #[test]
    fn test_discount_factor_solve() {
        // Invert df = exp(-z t) for z at t = 2, df = 0.96
        let f = |z: f64| (-z * 2.0).exp() - 0.96;
        let result = brent(f, -0.10, 0.50, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, -(0.96_f64.ln()) / 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x - 2.0;
        assert!(brent(f, 2.0, 3.0, &SolverConfig::default()).is_err());
    }

    #[test]
    fn test_converges_quickly() {
        let f = |x: f64| x * x - 2.0;
        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
        assert!(result.iterations < 20);
    }
}

//! # Kurva Math
//!
//! Numerical building blocks for the Kurva multi-curve library.
//!
//! This crate provides:
//!
//! - **Interpolation**: linear, natural cubic spline, and quadratic
//!   spline schemes behind a common [`interpolation::Interpolator`] trait
//! - **Root-Finding**: Brent and bisection solvers plus bracket scanning,
//!   used to invert par conditions during curve bootstrapping
//!
//! ## Example
//!
//! ```rust
//! use kurva_math::interpolation::{InterpolationMethod, Interpolator};
//! use kurva_math::solvers::{brent, SolverConfig};
//!
//! let curve = InterpolationMethod::NaturalCubicSpline
//!     .build(vec![1.0, 2.0, 3.0], vec![0.010, 0.012, 0.015], false)
//!     .unwrap();
//! let z = curve.interpolate(2.5).unwrap();
//! assert!(z > 0.012 && z < 0.015);
//!
//! let f = |x: f64| x * x - 2.0;
//! let root = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap().root;
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod solvers;

pub use error::{MathError, MathResult};

//! Error types for curve construction and validation.

use kurva_core::CoreError;
use kurva_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction, pricing, and validation.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Pillar root solve did not converge within the iteration budget.
    #[error("Root solve failed for {pillar}: {source}")]
    RootSolveFailed {
        /// Description of the pillar instrument being solved.
        pillar: String,
        /// The underlying solver error.
        source: MathError,
    },

    /// Curve construction produced an unusable pillar set.
    #[error("Singular curve: {reason}")]
    SingularCurve {
        /// Description of the degenerate pillar set.
        reason: String,
    },

    /// Bootstrap failed for an instrument.
    #[error("Bootstrap failed for {instrument}: {reason}")]
    BootstrapFailed {
        /// Description of the offending instrument.
        instrument: String,
        /// Description of the failure.
        reason: String,
    },

    /// Pillar times are not strictly increasing.
    #[error("Non-monotonic pillars at index {index}: {prev:.6} >= {current:.6}")]
    NonMonotonicPillars {
        /// Index where monotonicity breaks.
        index: usize,
        /// Previous pillar time.
        prev: f64,
        /// Current pillar time.
        current: f64,
    },

    /// Pillar index is outside the curve.
    #[error("Pillar index {index} out of range (curve has {len} pillars)")]
    PillarOutOfRange {
        /// The requested pillar index.
        index: usize,
        /// Number of pillars in the curve.
        len: usize,
    },

    /// A market quote that cannot be used.
    #[error("Invalid quote: {reason}")]
    InvalidQuote {
        /// Description of the invalid quote.
        reason: String,
    },

    /// An instrument needs a forecast curve that was not supplied.
    #[error("Missing forecast curve for {instrument}")]
    MissingForecastCurve {
        /// Description of the instrument.
        instrument: String,
    },

    /// Interpolation failure, including domain violations.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] MathError),

    /// Date, tenor, or convention failure from the core layer.
    #[error("Convention error: {0}")]
    Convention(#[from] CoreError),
}

impl CurveError {
    /// Creates a root solve failure error.
    #[must_use]
    pub fn root_solve_failed(pillar: impl Into<String>, source: MathError) -> Self {
        Self::RootSolveFailed {
            pillar: pillar.into(),
            source,
        }
    }

    /// Creates a singular curve error.
    #[must_use]
    pub fn singular_curve(reason: impl Into<String>) -> Self {
        Self::SingularCurve {
            reason: reason.into(),
        }
    }

    /// Creates a bootstrap failure error.
    #[must_use]
    pub fn bootstrap_failed(instrument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BootstrapFailed {
            instrument: instrument.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid quote error.
    #[must_use]
    pub fn invalid_quote(reason: impl Into<String>) -> Self {
        Self::InvalidQuote {
            reason: reason.into(),
        }
    }

    /// Creates a non-monotonic pillars error.
    #[must_use]
    pub fn non_monotonic_pillars(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicPillars {
            index,
            prev,
            current,
        }
    }
}

//! Error types for core date and convention operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by date, tenor, and convention handling.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A calendar date that does not exist.
    #[error("Invalid date: {value}")]
    InvalidDate {
        /// The offending date expression.
        value: String,
    },

    /// A tenor string that cannot be parsed.
    #[error("Invalid tenor: {value}")]
    InvalidTenor {
        /// The offending tenor expression.
        value: String,
    },

    /// A schedule or period that degenerates under the active conventions.
    #[error("Convention mismatch: {reason}")]
    ConventionMismatch {
        /// Description of the degenerate period.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(value: impl Into<String>) -> Self {
        Self::InvalidTenor {
            value: value.into(),
        }
    }

    /// Creates a convention mismatch error.
    #[must_use]
    pub fn convention_mismatch(reason: impl Into<String>) -> Self {
        Self::ConventionMismatch {
            reason: reason.into(),
        }
    }
}

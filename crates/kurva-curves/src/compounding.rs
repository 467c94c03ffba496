//! Rate compounding conventions.

use serde::{Deserialize, Serialize};

/// Compounding convention relating a zero rate to a discount factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest: df = 1 / (1 + r t)
    Simple,
    /// Annual compounding: df = (1 + r)^-t
    #[default]
    Annual,
    /// Continuous compounding: df = exp(-r t)
    Continuous,
}

impl Compounding {
    /// Converts a zero rate at time t into a discount factor.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        match self {
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            Compounding::Annual => (1.0 + rate).powf(-t),
            Compounding::Continuous => (-rate * t).exp(),
        }
    }

    /// Recovers the zero rate implied by a discount factor at time t.
    #[must_use]
    pub fn rate_from_df(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        match self {
            Compounding::Simple => (1.0 / df - 1.0) / t,
            Compounding::Annual => df.powf(-1.0 / t) - 1.0,
            Compounding::Continuous => -df.ln() / t,
        }
    }

    /// Returns the name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Compounding::Simple => "Simple",
            Compounding::Annual => "Annual",
            Compounding::Continuous => "Continuous",
        }
    }
}

impl std::fmt::Display for Compounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

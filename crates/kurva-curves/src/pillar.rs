//! Solved pillar records.

use serde::{Deserialize, Serialize};

use kurva_core::types::{Date, Tenor};

/// One solved curve pillar, as reported after a bootstrap.
///
/// Carries both curve readings at the pillar so downstream consumers
/// never need to re-derive them: the zero rate in the bootstrap's
/// compounding and the discrete forward over the preceding segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pillar {
    /// The instrument tenor that produced this pillar.
    pub tenor: Tenor,
    /// The adjusted maturity date.
    pub date: Date,
    /// Time on the curve axis.
    pub time: f64,
    /// Solved zero rate.
    pub zero_rate: f64,
    /// Discrete forward over the segment ending at this pillar.
    pub forward_rate: f64,
    /// Discount factor at the pillar.
    pub discount_factor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let p = Pillar {
            tenor: Tenor::years(2),
            date: Date::from_ymd(2020, 6, 19).unwrap(),
            time: 2.01,
            zero_rate: 0.012,
            forward_rate: 0.014,
            discount_factor: 0.976,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("zero_rate"));
        assert!(json.contains("2020-06-19"));
    }
}

//! Market quotes and per-date snapshots.

use serde::{Deserialize, Serialize};

use kurva_core::types::{Date, Tenor};

use crate::error::{CurveError, CurveResult};

/// A two-sided market quote for one tenor.
///
/// Rates are stored as decimals (0.0125 for 1.25%). Vendor feeds quote
/// in percent; use [`Quote::from_percent`] when loading those.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The quoted tenor.
    pub tenor: Tenor,
    /// Bid rate as a decimal.
    pub bid: f64,
    /// Ask rate as a decimal.
    pub ask: f64,
}

impl Quote {
    /// Creates a quote from decimal bid and ask rates.
    #[must_use]
    pub fn new(tenor: Tenor, bid: f64, ask: f64) -> Self {
        Self { tenor, bid, ask }
    }

    /// Creates a two-sided quote collapsed to a single mid rate.
    #[must_use]
    pub fn from_mid(tenor: Tenor, mid: f64) -> Self {
        Self {
            tenor,
            bid: mid,
            ask: mid,
        }
    }

    /// Creates a quote from percent bid and ask, as vendor feeds
    /// deliver them.
    #[must_use]
    pub fn from_percent(tenor: Tenor, bid_pct: f64, ask_pct: f64) -> Self {
        Self {
            tenor,
            bid: bid_pct / 100.0,
            ask: ask_pct / 100.0,
        }
    }

    /// Returns the mid rate.
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Validates the quote for use in a bootstrap.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.bid.is_finite() || !self.ask.is_finite() {
            return Err(CurveError::invalid_quote(format!(
                "{}: non-finite bid/ask",
                self.tenor
            )));
        }
        if self.bid > self.ask {
            return Err(CurveError::invalid_quote(format!(
                "{}: bid {} above ask {}",
                self.tenor, self.bid, self.ask
            )));
        }
        Ok(())
    }
}

/// All quotes for one valuation date.
///
/// The discount curve bootstraps from the OIS strip; the forecast
/// curve bootstraps from the index deposit plus the fixed/float swap
/// strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// The valuation date the quotes were observed on.
    pub valuation_date: Date,
    /// OIS par rates by tenor.
    pub ois: Vec<Quote>,
    /// The index deposit fixing (e.g. STIBOR 3M or EURIBOR 6M).
    pub deposit: Option<Quote>,
    /// Fixed/float swap par rates by tenor.
    pub swaps: Vec<Quote>,
}

impl MarketSnapshot {
    /// Creates an empty snapshot for a valuation date.
    #[must_use]
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            ois: Vec::new(),
            deposit: None,
            swaps: Vec::new(),
        }
    }

    /// Validates every quote in the snapshot.
    pub fn validate(&self) -> CurveResult<()> {
        for q in self.ois.iter().chain(self.deposit.iter()).chain(self.swaps.iter()) {
            q.validate()?;
        }
        Ok(())
    }
}

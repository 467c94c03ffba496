//! Bootstrap instruments.
//!
//! Each calibration instrument implements the [`RateHelper`] trait:
//! it knows its pillar on the curve time axis, its market quote, and
//! how to compute the fair par rate off a set of curves. The
//! bootstrapper drives the pillar value until fair and quoted rates
//! meet.
//!
//! # Available Instruments
//!
//! - [`OisSwap`]: overnight index swaps, the discount curve strip
//! - [`Deposit`]: the index fixing deposit seeding the forecast curve
//! - [`VanillaSwap`]: fixed/float swaps filling out the forecast curve
//!
//! Discounting and projection are split: deposits and swaps read
//! forwards off the forecast curve while their cash flows discount on
//! the separately bootstrapped OIS curve.

mod deposit;
mod ois;
mod swap;

pub use deposit::Deposit;
pub use ois::OisSwap;
pub use swap::VanillaSwap;

use serde::{Deserialize, Serialize};

use kurva_core::types::{Date, Tenor};

use crate::curve::Curve;
use crate::error::{CurveError, CurveResult};

/// Instrument type for categorization and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstrumentKind {
    /// Overnight index swap.
    Ois,
    /// Money market deposit on the float index.
    Deposit,
    /// Fixed/float interest rate swap.
    Swap,
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ois => write!(f, "OIS"),
            Self::Deposit => write!(f, "Deposit"),
            Self::Swap => write!(f, "Swap"),
        }
    }
}

/// The curve handles an instrument prices off.
///
/// The discount curve is always present. The forecast curve is only
/// needed by index-linked instruments; OIS pricing ignores it.
#[derive(Clone, Copy)]
pub struct MarketCurves<'a> {
    /// Curve discounting all cash flows.
    pub discount: &'a Curve,
    /// Curve projecting the float index, when one exists yet.
    pub forecast: Option<&'a Curve>,
}

impl<'a> MarketCurves<'a> {
    /// Curves for pricing against a discount curve alone.
    #[must_use]
    pub fn discount_only(discount: &'a Curve) -> Self {
        Self {
            discount,
            forecast: None,
        }
    }

    /// Curves for dual-curve pricing.
    #[must_use]
    pub fn dual(discount: &'a Curve, forecast: &'a Curve) -> Self {
        Self {
            discount,
            forecast: Some(forecast),
        }
    }

    /// Returns the forecast curve or fails with the instrument name.
    pub(crate) fn forecast_for(&self, instrument: &str) -> CurveResult<&'a Curve> {
        self.forecast.ok_or_else(|| CurveError::MissingForecastCurve {
            instrument: instrument.to_string(),
        })
    }
}

/// Trait for instruments that calibrate a curve pillar.
pub trait RateHelper: Send + Sync {
    /// Returns the quoted tenor.
    fn tenor(&self) -> Tenor;

    /// Returns the adjusted maturity date.
    fn maturity(&self) -> Date;

    /// Returns the pillar position on the curve time axis.
    fn pillar_time(&self) -> f64;

    /// Returns the market quote as a decimal rate.
    fn quote(&self) -> f64;

    /// Returns the instrument kind.
    fn kind(&self) -> InstrumentKind;

    /// Computes the fair par rate off the given curves.
    fn fair_rate(&self, curves: &MarketCurves) -> CurveResult<f64>;

    /// Fair rate minus quote; zero at the calibrated pillar.
    fn par_residual(&self, curves: &MarketCurves) -> CurveResult<f64> {
        Ok(self.fair_rate(curves)? - self.quote())
    }

    /// Returns a description string for reports and errors.
    fn description(&self) -> String {
        format!(
            "{} {} {:.4}%",
            self.kind(),
            self.tenor(),
            self.quote() * 100.0
        )
    }
}

/// Sorts helpers by pillar time, the order a sequential bootstrap
/// consumes them in.
pub fn sort_by_pillar(helpers: &mut [Box<dyn RateHelper>]) {
    helpers.sort_by(|a, b| a.pillar_time().total_cmp(&b.pillar_time()));
}

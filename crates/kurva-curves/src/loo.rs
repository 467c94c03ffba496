//! Leave-one-out curve validation.
//!
//! For each interior pillar the validator removes that pillar from the
//! bootstrapped curve, re-reads the curve at the removed time, and
//! measures how far the interpolated reconstruction lands from the
//! solved value. Small discrepancies mean the neighbouring pillars
//! already carry most of the information at that tenor; large ones
//! flag quotes the rest of the curve cannot explain.
//!
//! The first and last tenors have no two-sided neighbourhood and are
//! never removed; their series entries are zero padding. A tenor whose
//! reconstruction fails reports NaN instead of aborting the whole
//! series.

use log::warn;
use serde::{Deserialize, Serialize};

use kurva_core::types::Tenor;

use crate::bootstrap::BootstrappedCurve;
use crate::curve::Curve;
use crate::error::CurveResult;
use crate::instruments::{MarketCurves, RateHelper};

/// Per-tenor leave-one-out discrepancy series.
///
/// All series are indexed like the instrument strip, with zeros at the
/// first and last positions and NaN where a reconstruction failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveOneOutReport {
    /// Instrument tenors in pillar order.
    pub tenors: Vec<Tenor>,
    /// Reconstructed minus solved zero rate at each removed pillar.
    pub zero_discrepancy: Vec<f64>,
    /// Reconstructed minus solved discrete forward at each removed
    /// pillar.
    pub forward_discrepancy: Vec<f64>,
    /// Repricing gap of each instrument on the curve carrying its
    /// reconstructed pillar, in basis points.
    pub repricing_discrepancy_bp: Vec<f64>,
}

impl LeaveOneOutReport {
    /// Largest absolute repricing discrepancy over the interior
    /// tenors, ignoring failed entries.
    #[must_use]
    pub fn max_abs_repricing_bp(&self) -> f64 {
        self.repricing_discrepancy_bp
            .iter()
            .filter(|v| v.is_finite())
            .fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Number of tenors whose reconstruction failed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.zero_discrepancy.iter().filter(|v| v.is_nan()).count()
    }
}

/// Validates a bootstrapped curve by removing one pillar at a time.
pub struct LeaveOneOutValidator<'a> {
    curve: &'a BootstrappedCurve,
    instruments: &'a [Box<dyn RateHelper>],
    discount: Option<&'a Curve>,
}

impl<'a> LeaveOneOutValidator<'a> {
    /// Validator for a forecast curve discounting on a separate curve.
    #[must_use]
    pub fn new(
        curve: &'a BootstrappedCurve,
        instruments: &'a [Box<dyn RateHelper>],
        discount: &'a Curve,
    ) -> Self {
        Self {
            curve,
            instruments,
            discount: Some(discount),
        }
    }

    /// Validator for a curve that discounts its own instruments, as
    /// the OIS curve does.
    #[must_use]
    pub fn self_discounting(
        curve: &'a BootstrappedCurve,
        instruments: &'a [Box<dyn RateHelper>],
    ) -> Self {
        Self {
            curve,
            instruments,
            discount: None,
        }
    }

    /// Runs the validation over every interior tenor.
    ///
    /// Instruments must be in pillar order, as the bootstrap leaves
    /// them.
    #[must_use]
    pub fn validate(&self) -> LeaveOneOutReport {
        let n = self.instruments.len();
        let mut report = LeaveOneOutReport {
            tenors: self.instruments.iter().map(|h| h.tenor()).collect(),
            zero_discrepancy: vec![0.0; n],
            forward_discrepancy: vec![0.0; n],
            repricing_discrepancy_bp: vec![0.0; n],
        };

        for i in 1..n.saturating_sub(1) {
            match self.reconstruct(i) {
                Ok((zero, forward, repricing_bp)) => {
                    report.zero_discrepancy[i] = zero;
                    report.forward_discrepancy[i] = forward;
                    report.repricing_discrepancy_bp[i] = repricing_bp;
                }
                Err(err) => {
                    warn!(
                        "leave-one-out failed at {}: {err}",
                        self.instruments[i].description()
                    );
                    report.zero_discrepancy[i] = f64::NAN;
                    report.forward_discrepancy[i] = f64::NAN;
                    report.repricing_discrepancy_bp[i] = f64::NAN;
                }
            }
        }
        report
    }

    /// Removes the pillar behind instrument `i` and measures the
    /// reconstruction gap.
    ///
    /// The curve pillar sits one past the instrument index because of
    /// the anchor at time zero.
    fn reconstruct(&self, i: usize) -> CurveResult<(f64, f64, f64)> {
        let pillar = i + 1;
        let zero = &self.curve.zero;
        let forward = &self.curve.forward;
        let time = zero.times()[pillar];

        let reconstructed_zero = zero.without_pillar(pillar)?.value(time)?;
        let zero_gap = reconstructed_zero - zero.values()[pillar];

        let reconstructed_forward = forward.without_pillar(pillar)?.value(time)?;
        let forward_gap = reconstructed_forward - forward.values()[pillar];

        let modified = zero.with_value_at(pillar, reconstructed_zero)?;
        let curves = match self.discount {
            Some(d) => MarketCurves::dual(d, &modified),
            None => MarketCurves::discount_only(&modified),
        };
        let fair = self.instruments[i].fair_rate(&curves)?;
        let repricing_bp = (fair - self.instruments[i].quote()) * 10_000.0;

        Ok((zero_gap, forward_gap, repricing_bp))
    }
}

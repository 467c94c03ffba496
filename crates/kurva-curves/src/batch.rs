//! Parallel per-date curve building.
//!
//! A batch run takes one market snapshot per valuation date and, for
//! each date independently, bootstraps the discount curve from the OIS
//! strip, bootstraps the forecast curve from the deposit and swap
//! strip against it, and runs leave-one-out validation on the forecast
//! curve. Dates are processed in parallel and results come back in
//! input order.

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use kurva_core::types::Date;

use crate::bootstrap::{BootstrapConfig, BootstrappedCurve, CurveBootstrapper};
use crate::conventions::{MarketProfile, ValuationContext};
use crate::error::CurveError;
use crate::instruments::{Deposit, OisSwap, RateHelper, VanillaSwap};
use crate::loo::{LeaveOneOutReport, LeaveOneOutValidator};
use crate::pillar::Pillar;
use crate::quotes::MarketSnapshot;
use crate::repricing::RepricingReport;

/// Pipeline stage a date failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// OIS discount curve bootstrap, including quote validation.
    Discount,
    /// Forecast curve bootstrap.
    Forecast,
    /// Leave-one-out validation.
    Validation,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discount => write!(f, "discount"),
            Self::Forecast => write!(f, "forecast"),
            Self::Validation => write!(f, "validation"),
        }
    }
}

/// A date the batch could not complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateFailure {
    /// The valuation date.
    pub date: Date,
    /// Stage the failure occurred in.
    pub stage: Stage,
    /// Error description.
    pub message: String,
}

impl DateFailure {
    fn new(date: Date, stage: Stage, err: &CurveError) -> Self {
        Self {
            date,
            stage,
            message: err.to_string(),
        }
    }
}

/// Everything produced for one valuation date.
///
/// Curves themselves are not serialized; the pillar records carry
/// enough to rebuild them under the same configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateResult {
    /// The valuation date.
    pub valuation_date: Date,
    /// Solved discount curve pillars.
    pub discount_pillars: Vec<Pillar>,
    /// Discount curve repricing report.
    pub discount_report: RepricingReport,
    /// Solved forecast curve pillars, when forecast quotes exist.
    pub forecast_pillars: Vec<Pillar>,
    /// Forecast curve repricing report.
    pub forecast_report: Option<RepricingReport>,
    /// Leave-one-out validation of the forecast curve.
    pub validation: Option<LeaveOneOutReport>,
}

/// Runs the bootstrap pipeline over many valuation dates.
pub struct BatchRunner {
    profile: MarketProfile,
    config: BootstrapConfig,
}

impl BatchRunner {
    /// Creates a runner for one market.
    #[must_use]
    pub fn new(profile: MarketProfile, config: BootstrapConfig) -> Self {
        Self { profile, config }
    }

    /// Processes all snapshots in parallel, preserving input order.
    ///
    /// A failing date never aborts the batch; it comes back as a
    /// [`DateFailure`] in its slot.
    #[must_use]
    pub fn run(&self, snapshots: &[MarketSnapshot]) -> Vec<Result<DateResult, DateFailure>> {
        snapshots
            .par_iter()
            .map(|snapshot| self.run_date(snapshot))
            .collect()
    }

    fn run_date(&self, snapshot: &MarketSnapshot) -> Result<DateResult, DateFailure> {
        let date = snapshot.valuation_date;
        if let Err(err) = snapshot.validate() {
            warn!("{date}: rejected snapshot: {err}");
            return Err(DateFailure::new(date, Stage::Discount, &err));
        }

        let context = ValuationContext::new(date, self.profile);
        let bootstrapper = CurveBootstrapper::new(&context, self.config);

        let mut ois = self
            .ois_instruments(&context, snapshot)
            .map_err(|err| DateFailure::new(date, Stage::Discount, &err))?;
        let discount = bootstrapper
            .bootstrap_discount(&mut ois)
            .map_err(|err| {
                warn!("{date}: discount bootstrap failed: {err}");
                DateFailure::new(date, Stage::Discount, &err)
            })?;

        let mut forecast_instruments = self
            .forecast_instruments(&context, snapshot)
            .map_err(|err| DateFailure::new(date, Stage::Forecast, &err))?;

        let forecast: Option<BootstrappedCurve> = if forecast_instruments.is_empty() {
            None
        } else {
            Some(
                bootstrapper
                    .bootstrap_forecast(&mut forecast_instruments, &discount.zero)
                    .map_err(|err| {
                        warn!("{date}: forecast bootstrap failed: {err}");
                        DateFailure::new(date, Stage::Forecast, &err)
                    })?,
            )
        };

        let validation = forecast.as_ref().map(|curve| {
            LeaveOneOutValidator::new(curve, &forecast_instruments, &discount.zero).validate()
        });

        info!(
            "{date}: {} discount pillars, {} forecast pillars, max repricing {:.6} bp",
            discount.pillars.len(),
            forecast.as_ref().map_or(0, |c| c.pillars.len()),
            forecast
                .as_ref()
                .map_or(discount.report.max_error_bp(), |c| c
                    .report
                    .max_error_bp()
                    .max(discount.report.max_error_bp()))
        );

        Ok(DateResult {
            valuation_date: date,
            discount_pillars: discount.pillars,
            discount_report: discount.report,
            forecast_pillars: forecast
                .as_ref()
                .map_or_else(Vec::new, |c| c.pillars.clone()),
            forecast_report: forecast.map(|c| c.report),
            validation,
        })
    }

    fn ois_instruments(
        &self,
        context: &ValuationContext,
        snapshot: &MarketSnapshot,
    ) -> Result<Vec<Box<dyn RateHelper>>, CurveError> {
        snapshot
            .ois
            .iter()
            .map(|quote| {
                OisSwap::new(context, quote.tenor, quote.mid())
                    .map(|ois| Box::new(ois) as Box<dyn RateHelper>)
            })
            .collect()
    }

    fn forecast_instruments(
        &self,
        context: &ValuationContext,
        snapshot: &MarketSnapshot,
    ) -> Result<Vec<Box<dyn RateHelper>>, CurveError> {
        let mut instruments: Vec<Box<dyn RateHelper>> = Vec::new();
        if let Some(deposit) = &snapshot.deposit {
            instruments.push(Box::new(Deposit::new(
                context,
                deposit.tenor,
                deposit.mid(),
            )?));
        }
        for quote in &snapshot.swaps {
            instruments.push(Box::new(VanillaSwap::new(
                context,
                quote.tenor,
                quote.mid(),
            )?));
        }
        Ok(instruments)
    }
}

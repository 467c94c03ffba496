//! # Kurva Curves
//!
//! Multi-curve bootstrapping and validation for the Kurva library.
//!
//! This crate builds a per-valuation-date curve set from market
//! quotes:
//!
//! - **Bootstrap**: sequential pillar-by-pillar calibration of an OIS
//!   discount curve and an index forecast curve, with dual-curve swap
//!   pricing
//! - **Curves**: immutable zero and discrete forward curves over a
//!   pluggable interpolation scheme
//! - **Instruments**: OIS, deposit, and vanilla swap rate helpers
//!   carrying their market conventions
//! - **Validation**: post-bootstrap repricing reports and leave-one-out
//!   pillar reconstruction
//! - **Batch**: parallel processing of many valuation dates
//!
//! ## Example
//!
//! ```rust
//! use kurva_core::types::{Date, Tenor};
//! use kurva_curves::prelude::*;
//!
//! let mut snapshot = MarketSnapshot::new(Date::from_ymd(2018, 6, 15).unwrap());
//! snapshot.ois = vec![
//!     Quote::from_mid(Tenor::years(1), 0.0040),
//!     Quote::from_mid(Tenor::years(2), 0.0055),
//!     Quote::from_mid(Tenor::years(5), 0.0090),
//! ];
//! snapshot.deposit = Some(Quote::from_mid(Tenor::months(3), 0.0080));
//! snapshot.swaps = vec![
//!     Quote::from_mid(Tenor::years(2), 0.0105),
//!     Quote::from_mid(Tenor::years(5), 0.0140),
//! ];
//!
//! let runner = BatchRunner::new(MarketProfile::sek(), BootstrapConfig::default());
//! let results = runner.run(&[snapshot]);
//! let result = results[0].as_ref().unwrap();
//! assert!(result.discount_report.all_passed());
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

pub mod batch;
pub mod bootstrap;
pub mod compounding;
pub mod conventions;
pub mod curve;
pub mod error;
pub mod instruments;
pub mod loo;
pub mod pillar;
pub mod quotes;
pub mod repricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{BatchRunner, DateFailure, DateResult, Stage};
    pub use crate::bootstrap::{BootstrapConfig, BootstrappedCurve, CurveBootstrapper};
    pub use crate::compounding::Compounding;
    pub use crate::conventions::{MarketProfile, ValuationContext};
    pub use crate::curve::{Curve, RateSpace};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{
        Deposit, InstrumentKind, MarketCurves, OisSwap, RateHelper, VanillaSwap,
    };
    pub use crate::loo::{LeaveOneOutReport, LeaveOneOutValidator};
    pub use crate::pillar::Pillar;
    pub use crate::quotes::{MarketSnapshot, Quote};
    pub use crate::repricing::{RepricingCheck, RepricingReport};
}

pub use error::{CurveError, CurveResult};

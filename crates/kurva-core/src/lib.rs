//! # Kurva Core
//!
//! Core types and conventions for the Kurva multi-curve library.
//!
//! This crate provides the foundational building blocks used throughout Kurva:
//!
//! - **Types**: Domain-specific types like `Date` and `Tenor`
//! - **Day Count Conventions**: Year fraction calculations for accrual and curve time
//! - **Business Day Calendars**: Swedish and TARGET holiday calendars with rolling
//!
//! ## Example
//!
//! ```rust
//! use kurva_core::prelude::*;
//!
//! let cal = SwedenCalendar;
//! let quote_date = Date::from_ymd(2018, 6, 15).unwrap();
//! let settlement = cal.add_business_days(quote_date, 2);
//!
//! let maturity = "3M".parse::<Tenor>().unwrap().add_to(settlement).unwrap();
//! let maturity = cal.adjust(maturity, BusinessDayConvention::ModifiedFollowing);
//! let accrual = Act360.year_fraction(settlement, maturity);
//! assert!(accrual > 0.2);
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
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, CalendarKind, SwedenCalendar, TargetCalendar,
        WeekendCalendar,
    };
    pub use crate::daycounts::{
        Act360, Act365Fixed, ActActIsda, DayCount, DayCountConvention, Thirty360,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Tenor, TenorUnit};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Tenor};

//! Day count conventions for year fraction computation.
//!
//! Day count conventions determine how interest accrues by specifying
//! how to count days between two dates and the year basis.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360, money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`ActActIsda`]: Actual/Actual ISDA, year-based split
//! - [`Thirty360`]: 30/360 Bond Basis, fixed swap legs
//!
//! # Usage
//!
//! ```rust
//! use kurva_core::daycounts::{Act360, DayCount};
//! use kurva_core::types::Date;
//!
//! let dc = Act360;
//! let start = Date::from_ymd(2018, 1, 1).unwrap();
//! let end = Date::from_ymd(2018, 7, 1).unwrap();
//!
//! let yf = dc.year_fraction(start, end);
//! assert!((yf - 181.0 / 360.0).abs() < 1e-12);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActIsda;
pub use thirty360::Thirty360;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction between two dates
/// according to specific market conventions.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days. For 30/360
    /// conventions this uses the 30-day month assumption.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// Convenient for storing a convention in a market profile and
/// dispatching without boxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/360, deposits and OIS legs.
    Act360,
    /// Actual/365 Fixed.
    Act365Fixed,
    /// Actual/Actual ISDA, curve time axes.
    ActActIsda,
    /// 30/360 Bond Basis, annual fixed swap legs.
    Thirty360,
}

impl DayCountConvention {
    /// Calculates the year fraction under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
            DayCountConvention::ActActIsda => ActActIsda.year_fraction(start, end),
            DayCountConvention::Thirty360 => Thirty360.year_fraction(start, end),
        }
    }

    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::ActActIsda => Box::new(ActActIsda),
            DayCountConvention::Thirty360 => Box::new(Thirty360),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
            DayCountConvention::Thirty360 => "30/360",
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

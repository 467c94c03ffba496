//! Business day calendars and adjustment conventions.
//!
//! This module provides:
//! - Business day calendars for the Swedish and euro-area markets
//! - Business day adjustment conventions
//! - Holiday detection and date rolling

mod conventions;
mod sweden;
mod target;

pub use conventions::BusinessDayConvention;
pub use sweden::SwedenCalendar;
pub use target::TargetCalendar;

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a number of business days.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Enumeration of the built-in market calendars.
///
/// Market profiles store one of these so that profiles stay `Copy` and
/// serializable; `to_calendar` produces the working trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    /// Swedish bank holidays.
    Sweden,
    /// TARGET (euro area) closing days.
    Target,
    /// Weekends only.
    WeekendOnly,
}

impl CalendarKind {
    /// Creates a boxed calendar implementation.
    #[must_use]
    pub fn to_calendar(&self) -> Box<dyn Calendar> {
        match self {
            CalendarKind::Sweden => Box::new(SwedenCalendar),
            CalendarKind::Target => Box::new(TargetCalendar),
            CalendarKind::WeekendOnly => Box::new(WeekendCalendar),
        }
    }
}

/// Returns the date of Easter Sunday for the given year.
///
/// Anonymous Gregorian computus. Both the Swedish and TARGET calendars
/// place holidays relative to Easter.
pub(crate) fn easter_sunday(year: i32) -> Date {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    Date::from_ymd(year, month as u32, day as u32)
        .expect("computus yields a valid March or April date")
}

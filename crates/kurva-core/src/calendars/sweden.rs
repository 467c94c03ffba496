//! Swedish bank holiday calendar.

use chrono::Weekday;

use super::{easter_sunday, Calendar};
use crate::types::Date;

/// Swedish bank holiday calendar.
///
/// Covers the holidays observed by the Stockholm interbank market:
/// New Year's Day, Epiphany, Good Friday, Easter Monday, May Day,
/// Ascension Day, National Day, Midsummer Eve, and the Christmas and
/// New Year closing days.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwedenCalendar;

impl SwedenCalendar {
    fn is_swedish_holiday(&self, date: Date) -> bool {
        let month = date.month();
        let day = date.day();

        // Fixed-date holidays.
        match (month, day) {
            (1, 1) => return true,   // New Year's Day
            (1, 6) => return true,   // Epiphany
            (5, 1) => return true,   // May Day
            (6, 6) => return true,   // National Day
            (12, 24) => return true, // Christmas Eve
            (12, 25) => return true, // Christmas Day
            (12, 26) => return true, // Boxing Day
            (12, 31) => return true, // New Year's Eve
            _ => {}
        }

        // Midsummer Eve: the Friday between June 19 and June 25.
        if month == 6 && (19..=25).contains(&day) && date.weekday() == Weekday::Fri {
            return true;
        }

        // Easter-relative holidays.
        let easter = easter_sunday(date.year());
        let offset = easter.days_between(&date);
        matches!(offset, -2 | 1 | 39) // Good Friday, Easter Monday, Ascension
    }
}

impl Calendar for SwedenCalendar {
    fn name(&self) -> &'static str {
        "Sweden"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.is_weekend() {
            return false;
        }
        !self.is_swedish_holiday(date)
    }
}

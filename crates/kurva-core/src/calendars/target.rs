//! TARGET (euro area) closing day calendar.

use super::{easter_sunday, Calendar};
use crate::types::Date;

/// TARGET closing day calendar for euro-denominated instruments.
///
/// The Trans-European Automated Real-time Gross settlement Express
/// Transfer system closes on New Year's Day, Good Friday, Easter
/// Monday, Labour Day, Christmas Day, and Boxing Day.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetCalendar;

impl TargetCalendar {
    fn is_closing_day(&self, date: Date) -> bool {
        let month = date.month();
        let day = date.day();

        match (month, day) {
            (1, 1) => return true,   // New Year's Day
            (5, 1) => return true,   // Labour Day
            (12, 25) => return true, // Christmas Day
            (12, 26) => return true, // Boxing Day
            _ => {}
        }

        let easter = easter_sunday(date.year());
        let offset = easter.days_between(&date);
        matches!(offset, -2 | 1) // Good Friday, Easter Monday
    }
}

impl Calendar for TargetCalendar {
    fn name(&self) -> &'static str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.is_weekend() {
            return false;
        }
        !self.is_closing_day(date)
    }
}

//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// Year fraction is actual calendar days divided by 365, regardless of
/// leap years.
#[derive(Debug, Clone, Copy, Default)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

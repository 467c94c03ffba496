//! Actual/360 day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// Year fraction is actual calendar days divided by 360. The standard
/// money market convention for deposits and OIS floating legs in most
/// European markets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

//! 30/360 Bond Basis day count convention.

use super::DayCount;
use crate::types::Date;

/// 30/360 Bond Basis day count convention.
///
/// Assumes 30-day months and a 360-day year. Day-of-month adjustments:
/// if the start day is 31 it becomes 30, and if the end day is 31 while
/// the (adjusted) start day is 30 it also becomes 30. Standard for
/// annual fixed swap legs in European markets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let mut d1 = i64::from(start.day());
        let mut d2 = i64::from(end.day());

        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 && d1 == 30 {
            d2 = 30;
        }

        360 * i64::from(end.year() - start.year())
            + 30 * (i64::from(end.month()) - i64::from(start.month()))
            + (d2 - d1)
    }
}

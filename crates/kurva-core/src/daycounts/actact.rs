//! Actual/Actual ISDA day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// Splits the accrual period at year boundaries and divides the days in
/// each calendar year by that year's actual length (365 or 366). Used
/// here for curve time axes so that pillar times reflect true calendar
/// spacing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start == end {
            return 0.0;
        }
        if end < start {
            return -self.year_fraction(end, start);
        }

        if start.year() == end.year() {
            return start.days_between(&end) as f64 / f64::from(start.days_in_year());
        }

        // Days from start to the end of its year.
        let start_next_year = start
            .start_of_year()
            .add_days(i64::from(start.days_in_year()));
        let head = start.days_between(&start_next_year) as f64 / f64::from(start.days_in_year());

        // Days from the start of end's year.
        let end_year_start = end.start_of_year();
        let tail = end_year_start.days_between(&end) as f64 / f64::from(end.days_in_year());

        let whole_years = f64::from(end.year() - start.year() - 1);

        head + whole_years + tail
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_year() {
        let start = Date::from_ymd(2018, 1, 1).unwrap();
        let end = Date::from_ymd(2018, 7, 1).unwrap();
        assert_relative_eq!(ActActIsda.year_fraction(start, end), 181.0 / 365.0);
    }

    #[test]
    fn test_exact_years() {
        let start = Date::from_ymd(2018, 1, 1).unwrap();
        let end = Date::from_ymd(2021, 1, 1).unwrap();
        assert_relative_eq!(ActActIsda.year_fraction(start, end), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_boundary_split() {
        // 2019-07-01 to 2020-07-01 spans a leap year start
        let start = Date::from_ymd(2019, 7, 1).unwrap();
        let end = Date::from_ymd(2020, 7, 1).unwrap();
        let expected = 184.0 / 365.0 + 182.0 / 366.0;
        assert_relative_eq!(ActActIsda.year_fraction(start, end), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_antisymmetric() {
        let a = Date::from_ymd(2018, 3, 1).unwrap();
        let b = Date::from_ymd(2020, 9, 1).unwrap();
        assert_relative_eq!(
            ActActIsda.year_fraction(a, b),
            -ActActIsda.year_fraction(b, a),
            epsilon = 1e-12
        );
    }
}

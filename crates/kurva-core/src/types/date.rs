//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date for financial calculations.
///
/// A newtype wrapper around `chrono::NaiveDate` providing the arithmetic
/// that schedule generation and year-fraction computation need.
///
/// # Example
///
/// ```rust
/// use kurva_core::types::Date;
///
/// let date = Date::from_ymd(2018, 6, 15).unwrap();
/// let next = date.add_months(6).unwrap();
/// assert_eq!(next.year(), 2018);
/// assert_eq!(next.month(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` on arithmetic overflow.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total = self.year() * 12 + self.month() as i32 - 1 + months;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;

        let mut day = self.day();
        loop {
            if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
                return Ok(Date(d));
            }
            if day == 0 {
                return Err(CoreError::invalid_date(format!(
                    "{year}-{month:02} + {months} months"
                )));
            }
            day -= 1;
        }
    }

    /// Adds a number of years to the date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` on arithmetic overflow.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        self.add_months(years * 12)
    }

    /// Returns the number of days from `self` to `other` (signed).
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `chrono::NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the weekday.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true if the date falls on a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the first day of the date's year.
    #[must_use]
    pub fn start_of_year(&self) -> Self {
        Date(NaiveDate::from_ymd_opt(self.year(), 1, 1).expect("Jan 1 always exists"))
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd() {
        let date = Date::from_ymd(2018, 2, 28).unwrap();
        assert_eq!(date.year(), 2018);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 28);

        assert!(Date::from_ymd(2018, 2, 30).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2018-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2018, 6, 15).unwrap());
        assert!(Date::parse("15/06/2018").is_err());
    }

    #[test]
    fn test_add_months_end_of_month() {
        let date = Date::from_ymd(2018, 1, 31).unwrap();
        let next = date.add_months(1).unwrap();
        assert_eq!(next, Date::from_ymd(2018, 2, 28).unwrap());
    }

    #[test]
    fn test_add_months_negative() {
        let date = Date::from_ymd(2018, 3, 15).unwrap();
        let prev = date.add_months(-4).unwrap();
        assert_eq!(prev, Date::from_ymd(2017, 11, 15).unwrap());
    }

    #[test]
    fn test_days_between() {
        let a = Date::from_ymd(2018, 1, 1).unwrap();
        let b = Date::from_ymd(2019, 1, 1).unwrap();
        assert_eq!(a.days_between(&b), 365);
        assert_eq!(b.days_between(&a), -365);
    }

    #[test]
    fn test_weekend() {
        // 2018-06-16 was a Saturday
        assert!(Date::from_ymd(2018, 6, 16).unwrap().is_weekend());
        assert!(!Date::from_ymd(2018, 6, 15).unwrap().is_weekend());
    }

    #[test]
    fn test_serde_roundtrip() {
        let date = Date::from_ymd(2018, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2018-06-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}

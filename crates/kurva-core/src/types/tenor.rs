//! Tenor (period) expressions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// The unit of a tenor expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks.
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

/// A market tenor such as `1D`, `2W`, `3M`, or `10Y`.
///
/// Tenors identify quote columns and drive schedule date arithmetic.
/// The overnight label `ON` parses as one day.
///
/// # Example
///
/// ```rust
/// use kurva_core::types::{Date, Tenor};
///
/// let tenor: Tenor = "18M".parse().unwrap();
/// let start = Date::from_ymd(2018, 1, 15).unwrap();
/// assert_eq!(tenor.add_to(start).unwrap(), Date::from_ymd(2019, 7, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    length: u32,
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor from a length and unit.
    #[must_use]
    pub fn new(length: u32, unit: TenorUnit) -> Self {
        Self { length, unit }
    }

    /// Convenience constructor for day tenors.
    #[must_use]
    pub fn days(n: u32) -> Self {
        Self::new(n, TenorUnit::Days)
    }

    /// Convenience constructor for month tenors.
    #[must_use]
    pub fn months(n: u32) -> Self {
        Self::new(n, TenorUnit::Months)
    }

    /// Convenience constructor for year tenors.
    #[must_use]
    pub fn years(n: u32) -> Self {
        Self::new(n, TenorUnit::Years)
    }

    /// Returns the tenor length in its unit.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the tenor unit.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Advances a date by this tenor (unadjusted).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` on date arithmetic failure.
    pub fn add_to(&self, date: Date) -> CoreResult<Date> {
        match self.unit {
            TenorUnit::Days => Ok(date.add_days(i64::from(self.length))),
            TenorUnit::Weeks => Ok(date.add_days(i64::from(self.length) * 7)),
            TenorUnit::Months => date.add_months(self.length as i32),
            TenorUnit::Years => date.add_years(self.length as i32),
        }
    }

    /// Approximate tenor length in years, for ordering instruments.
    #[must_use]
    pub fn approx_years(&self) -> f64 {
        match self.unit {
            TenorUnit::Days => f64::from(self.length) / 365.0,
            TenorUnit::Weeks => f64::from(self.length) * 7.0 / 365.0,
            TenorUnit::Months => f64::from(self.length) / 12.0,
            TenorUnit::Years => f64::from(self.length),
        }
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim().to_uppercase();
        if s == "ON" || s == "O/N" {
            return Ok(Tenor::days(1));
        }

        let (digits, unit) = s.split_at(s.len().saturating_sub(1));
        let length: u32 = digits
            .parse()
            .map_err(|_| CoreError::invalid_tenor(&s))?;
        if length == 0 {
            return Err(CoreError::invalid_tenor(&s));
        }

        let unit = match unit {
            "D" => TenorUnit::Days,
            "W" => TenorUnit::Weeks,
            "M" => TenorUnit::Months,
            "Y" => TenorUnit::Years,
            _ => return Err(CoreError::invalid_tenor(&s)),
        };

        Ok(Tenor::new(length, unit))
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            TenorUnit::Days => "D",
            TenorUnit::Weeks => "W",
            TenorUnit::Months => "M",
            TenorUnit::Years => "Y",
        };
        write!(f, "{}{}", self.length, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tenor() {
        assert_eq!("3M".parse::<Tenor>().unwrap(), Tenor::months(3));
        assert_eq!("10Y".parse::<Tenor>().unwrap(), Tenor::years(10));
        assert_eq!("2W".parse::<Tenor>().unwrap(), Tenor::new(2, TenorUnit::Weeks));
        assert_eq!("1d".parse::<Tenor>().unwrap(), Tenor::days(1));
        assert_eq!("ON".parse::<Tenor>().unwrap(), Tenor::days(1));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Tenor>().is_err());
        assert!("Y".parse::<Tenor>().is_err());
        assert!("0M".parse::<Tenor>().is_err());
        assert!("5Q".parse::<Tenor>().is_err());
    }

    #[test]
    fn test_add_to() {
        let start = Date::from_ymd(2018, 1, 31).unwrap();
        assert_eq!(
            Tenor::months(1).add_to(start).unwrap(),
            Date::from_ymd(2018, 2, 28).unwrap()
        );
        assert_eq!(
            Tenor::years(2).add_to(start).unwrap(),
            Date::from_ymd(2020, 1, 31).unwrap()
        );
        assert_eq!(
            Tenor::days(1).add_to(start).unwrap(),
            Date::from_ymd(2018, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_ordering_by_approx_years() {
        let mut tenors = vec![Tenor::years(1), Tenor::days(1), Tenor::months(6)];
        tenors.sort_by(|a, b| a.approx_years().total_cmp(&b.approx_years()));
        assert_eq!(tenors, vec![Tenor::days(1), Tenor::months(6), Tenor::years(1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tenor::months(3).to_string(), "3M");
        assert_eq!(Tenor::days(1).to_string(), "1D");
    }
}

//! Market profiles and the per-date valuation context.

use kurva_core::calendars::{BusinessDayConvention, Calendar, CalendarKind};
use kurva_core::daycounts::DayCountConvention;
use kurva_core::types::{Date, Tenor};

use crate::error::CurveResult;

/// Conventions for a single market's curve set.
///
/// A profile bundles everything that differs between markets: the
/// holiday calendar, settlement lag, day counts for the money market
/// and fixed swap legs, the float index tenor, and the day count used
/// for the curve time axis.
#[derive(Debug, Clone, Copy)]
pub struct MarketProfile {
    /// Market name, e.g. "SEK" or "EUR".
    pub name: &'static str,
    /// Holiday calendar for date rolling.
    pub calendar: CalendarKind,
    /// Business days between quote date and settlement.
    pub settlement_days: i32,
    /// Day count for deposits and OIS accrual.
    pub money_market_daycount: DayCountConvention,
    /// Day count for the annual fixed swap leg.
    pub fixed_leg_daycount: DayCountConvention,
    /// Tenor of the float index the forecast curve projects.
    pub float_tenor: Tenor,
    /// Day count mapping dates onto the curve time axis.
    pub curve_daycount: DayCountConvention,
    /// Adjustment for schedule dates landing on holidays.
    pub business_day_convention: BusinessDayConvention,
}

impl MarketProfile {
    /// The Swedish market: STIBOR 3M forecast curve against a SEK OIS
    /// discount curve.
    #[must_use]
    pub fn sek() -> Self {
        Self {
            name: "SEK",
            calendar: CalendarKind::Sweden,
            settlement_days: 2,
            money_market_daycount: DayCountConvention::Act360,
            fixed_leg_daycount: DayCountConvention::Thirty360,
            float_tenor: Tenor::months(3),
            curve_daycount: DayCountConvention::ActActIsda,
            business_day_convention: BusinessDayConvention::ModifiedFollowing,
        }
    }

    /// The euro market: EURIBOR 6M forecast curve against a EUR OIS
    /// discount curve.
    #[must_use]
    pub fn eur() -> Self {
        Self {
            name: "EUR",
            calendar: CalendarKind::Target,
            settlement_days: 2,
            money_market_daycount: DayCountConvention::Act365Fixed,
            fixed_leg_daycount: DayCountConvention::Thirty360,
            float_tenor: Tenor::months(6),
            curve_daycount: DayCountConvention::ActActIsda,
            business_day_convention: BusinessDayConvention::ModifiedFollowing,
        }
    }
}

/// Resolved dates and conventions for one valuation date.
///
/// Every curve built for a given date shares one context: the
/// settlement date is rolled once, and all instruments map their
/// schedule dates onto the curve time axis through
/// [`ValuationContext::year_fraction`].
pub struct ValuationContext {
    valuation_date: Date,
    settlement_date: Date,
    profile: MarketProfile,
    calendar: Box<dyn Calendar>,
}

impl ValuationContext {
    /// Creates a context for the given valuation date and market.
    #[must_use]
    pub fn new(valuation_date: Date, profile: MarketProfile) -> Self {
        let calendar = profile.calendar.to_calendar();
        let settlement_date = calendar.add_business_days(valuation_date, profile.settlement_days);
        Self {
            valuation_date,
            settlement_date,
            profile,
            calendar,
        }
    }

    /// Returns the valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the settlement (spot) date.
    #[must_use]
    pub fn settlement_date(&self) -> Date {
        self.settlement_date
    }

    /// Returns the market profile.
    #[must_use]
    pub fn profile(&self) -> &MarketProfile {
        &self.profile
    }

    /// Maps a date onto the curve time axis.
    ///
    /// Time is measured from the valuation date under the profile's
    /// curve day count.
    #[must_use]
    pub fn year_fraction(&self, date: Date) -> f64 {
        self.profile
            .curve_daycount
            .year_fraction(self.valuation_date, date)
    }

    /// Resolves the unadjusted maturity of a tenor from settlement and
    /// rolls it onto a business day.
    pub fn maturity_of(&self, tenor: Tenor) -> CurveResult<Date> {
        let raw = tenor.add_to(self.settlement_date)?;
        Ok(self
            .calendar
            .adjust(raw, self.profile.business_day_convention))
    }

    /// Adjusts a schedule date onto a business day.
    #[must_use]
    pub fn adjust(&self, date: Date) -> Date {
        self.calendar
            .adjust(date, self.profile.business_day_convention)
    }
}

//! Money market deposits on the float index.

use kurva_core::types::{Date, Tenor};

use crate::conventions::ValuationContext;
use crate::error::CurveResult;
use crate::instruments::{InstrumentKind, MarketCurves, RateHelper};

/// A deposit at the float index fixing, e.g. STIBOR 3M.
///
/// The deposit seeds the short end of the forecast curve. Its fair
/// rate is the simple forward the forecast curve implies over the
/// deposit period; the discount curve plays no role.
#[derive(Debug, Clone)]
pub struct Deposit {
    tenor: Tenor,
    quote: f64,
    maturity: Date,
    start_time: f64,
    end_time: f64,
    accrual: f64,
}

impl Deposit {
    /// Creates a deposit helper from settlement to the tenor maturity.
    pub fn new(context: &ValuationContext, tenor: Tenor, quote: f64) -> CurveResult<Self> {
        let settlement = context.settlement_date();
        let maturity = context.maturity_of(tenor)?;
        let accrual = context
            .profile()
            .money_market_daycount
            .year_fraction(settlement, maturity);
        Ok(Self {
            tenor,
            quote,
            maturity,
            start_time: context.year_fraction(settlement),
            end_time: context.year_fraction(maturity),
            accrual,
        })
    }
}

impl RateHelper for Deposit {
    fn tenor(&self) -> Tenor {
        self.tenor
    }

    fn maturity(&self) -> Date {
        self.maturity
    }

    fn pillar_time(&self) -> f64 {
        self.end_time
    }

    fn quote(&self) -> f64 {
        self.quote
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Deposit
    }

    fn fair_rate(&self, curves: &MarketCurves) -> CurveResult<f64> {
        let forecast = curves.forecast_for("deposit")?;
        let df_start = forecast.discount_factor(self.start_time)?;
        let df_end = forecast.discount_factor(self.end_time)?;
        Ok((df_start / df_end - 1.0) / self.accrual)
    }
}

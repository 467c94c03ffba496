//! Overnight index swaps.

use kurva_core::types::{Date, Tenor};

use crate::conventions::ValuationContext;
use crate::error::CurveResult;
use crate::instruments::{InstrumentKind, MarketCurves, RateHelper};

/// An overnight index swap quoted as a par fixed rate.
///
/// OIS swaps calibrate the discount curve, so the fair rate reads
/// discount factors off the discount curve only. Tenors up to one year
/// pay a single simple coupon; longer tenors quote an annually
/// compounded rate over the full period.
#[derive(Debug, Clone)]
pub struct OisSwap {
    tenor: Tenor,
    quote: f64,
    maturity: Date,
    start_time: f64,
    end_time: f64,
    accrual: f64,
}

impl OisSwap {
    /// Creates an OIS helper for the context's settlement and market
    /// conventions.
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

impl RateHelper for OisSwap {
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
        InstrumentKind::Ois
    }

    fn fair_rate(&self, curves: &MarketCurves) -> CurveResult<f64> {
        let df_start = curves.discount.discount_factor(self.start_time)?;
        let df_end = curves.discount.discount_factor(self.end_time)?;
        let growth = df_start / df_end;
        if self.accrual <= 1.0 {
            Ok((growth - 1.0) / self.accrual)
        } else {
            Ok(growth.powf(1.0 / self.accrual) - 1.0)
        }
    }
}

//! Fixed/float interest rate swaps.

use kurva_core::types::{Date, Tenor, TenorUnit};
use kurva_core::CoreError;

use crate::conventions::ValuationContext;
use crate::error::{CurveError, CurveResult};
use crate::instruments::{InstrumentKind, MarketCurves, RateHelper};

/// One fixed leg coupon period.
#[derive(Debug, Clone, Copy)]
struct FixedPeriod {
    pay_time: f64,
    accrual: f64,
}

/// One float leg period with its forward window.
#[derive(Debug, Clone, Copy)]
struct FloatPeriod {
    start_time: f64,
    end_time: f64,
    pay_time: f64,
    accrual: f64,
}

/// A par fixed/float swap against the market's float index.
///
/// The fixed leg pays annually on the fixed leg day count; the float
/// leg pays at the index tenor with forwards projected off the
/// forecast curve. Both legs discount on the discount curve. The fair
/// rate is the float leg PV per unit of fixed annuity, so solving the
/// forecast pillar to match the quote calibrates the curve without
/// touching discounting.
#[derive(Debug, Clone)]
pub struct VanillaSwap {
    tenor: Tenor,
    quote: f64,
    maturity: Date,
    pillar_time: f64,
    fixed: Vec<FixedPeriod>,
    float: Vec<FloatPeriod>,
}

impl VanillaSwap {
    /// Creates a swap helper with both leg schedules resolved.
    ///
    /// # Errors
    ///
    /// Fails for tenors not expressible in whole months (day and week
    /// swap tenors are not quoted).
    pub fn new(context: &ValuationContext, tenor: Tenor, quote: f64) -> CurveResult<Self> {
        let total_months = months_of(tenor)?;
        let float_months = months_of(context.profile().float_tenor)?;
        if float_months == 0 || total_months == 0 {
            return Err(CoreError::convention_mismatch(format!(
                "swap {tenor}: zero-length schedule"
            ))
            .into());
        }

        let settlement = context.settlement_date();
        let maturity = context.maturity_of(tenor)?;
        let pillar_time = context.year_fraction(maturity);

        let fixed_dates = schedule(context, settlement, maturity, total_months, 12)?;
        let float_dates = schedule(context, settlement, maturity, total_months, float_months)?;

        let fixed_dc = context.profile().fixed_leg_daycount;
        let mut fixed = Vec::with_capacity(fixed_dates.len());
        let mut prev = settlement;
        for date in fixed_dates {
            fixed.push(FixedPeriod {
                pay_time: context.year_fraction(date),
                accrual: fixed_dc.year_fraction(prev, date),
            });
            prev = date;
        }

        let float_dc = context.profile().money_market_daycount;
        let mut float = Vec::with_capacity(float_dates.len());
        let mut prev = settlement;
        for date in float_dates {
            float.push(FloatPeriod {
                start_time: context.year_fraction(prev),
                end_time: context.year_fraction(date),
                pay_time: context.year_fraction(date),
                accrual: float_dc.year_fraction(prev, date),
            });
            prev = date;
        }

        Ok(Self {
            tenor,
            quote,
            maturity,
            pillar_time,
            fixed,
            float,
        })
    }
}

/// Expresses a tenor in whole months.
fn months_of(tenor: Tenor) -> CurveResult<u32> {
    match tenor.unit() {
        TenorUnit::Months => Ok(tenor.length()),
        TenorUnit::Years => Ok(tenor.length() * 12),
        TenorUnit::Days | TenorUnit::Weeks => Err(CoreError::convention_mismatch(format!(
            "swap tenor {tenor} is not a whole number of months"
        ))
        .into()),
    }
}

/// Generates adjusted period end dates stepping `step_months` from
/// settlement, with the final date pinned to the adjusted maturity.
fn schedule(
    context: &ValuationContext,
    settlement: Date,
    maturity: Date,
    total_months: u32,
    step_months: u32,
) -> CurveResult<Vec<Date>> {
    let periods = total_months.div_ceil(step_months);
    let mut dates = Vec::with_capacity(periods as usize);
    for k in 1..periods {
        let raw = settlement.add_months((k * step_months) as i32)?;
        dates.push(context.adjust(raw));
    }
    dates.push(maturity);
    Ok(dates)
}

impl RateHelper for VanillaSwap {
    fn tenor(&self) -> Tenor {
        self.tenor
    }

    fn maturity(&self) -> Date {
        self.maturity
    }

    fn pillar_time(&self) -> f64 {
        self.pillar_time
    }

    fn quote(&self) -> f64 {
        self.quote
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Swap
    }

    fn fair_rate(&self, curves: &MarketCurves) -> CurveResult<f64> {
        let forecast = curves.forecast_for("swap")?;

        let mut annuity = 0.0;
        for period in &self.fixed {
            annuity += period.accrual * curves.discount.discount_factor(period.pay_time)?;
        }
        if annuity <= 0.0 {
            return Err(CurveError::singular_curve(format!(
                "swap {}: non-positive fixed annuity {annuity}",
                self.tenor
            )));
        }

        let mut float_pv = 0.0;
        for period in &self.float {
            let df_start = forecast.discount_factor(period.start_time)?;
            let df_end = forecast.discount_factor(period.end_time)?;
            let forward = (df_start / df_end - 1.0) / period.accrual;
            float_pv +=
                forward * period.accrual * curves.discount.discount_factor(period.pay_time)?;
        }

        Ok(float_pv / annuity)
    }
}

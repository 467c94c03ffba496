//! Sequential curve bootstrap.
//!
//! Pillars are solved one at a time in maturity order. At each step a
//! candidate curve is built from the already-solved pillars plus a
//! trial value at the new pillar, and a bracketing root solve drives
//! the instrument's par residual to zero. A short refinement phase
//! then re-solves each pillar against the complete grid, since global
//! interpolation schemes let a late pillar bend the curve through
//! earlier ones. The solve stays a chain of one-dimensional problems
//! rather than one global system.
//!
//! Every curve carries an anchor pillar at time zero whose value is
//! pinned to the first solved rate, keeping the short end flat below
//! the first instrument.

use std::cell::RefCell;

use log::debug;

use kurva_math::interpolation::InterpolationMethod;
use kurva_math::solvers::{bracket_root, brent, SolverConfig};

use crate::compounding::Compounding;
use crate::conventions::ValuationContext;
use crate::curve::{Curve, RateSpace};
use crate::error::{CurveError, CurveResult};
use crate::instruments::{sort_by_pillar, MarketCurves, RateHelper};
use crate::pillar::Pillar;
use crate::repricing::{RepricingCheck, RepricingReport, DEFAULT_REPRICING_TOLERANCE_BP};

/// Rate interval scanned for a sign change before each root solve.
pub const DEFAULT_RATE_BOUNDS: (f64, f64) = (-0.10, 0.50);

/// Subintervals used by the bracketing scan.
pub const DEFAULT_BRACKET_STEPS: u32 = 60;

/// Cap on full-grid refinement sweeps after the sequential pass.
const MAX_REFINEMENT_SWEEPS: u32 = 30;

/// Bootstrap settings shared by all pillars of one curve.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapConfig {
    /// Interpolation scheme for the zero curve.
    pub interpolation: InterpolationMethod,
    /// Whether built curves may extrapolate beyond the last pillar.
    pub allow_extrapolation: bool,
    /// Compounding convention for the zero rates.
    pub compounding: Compounding,
    /// Root solver tolerance and iteration cap.
    pub solver: SolverConfig,
    /// Rate interval scanned when bracketing each pillar.
    pub rate_bounds: (f64, f64),
    /// Number of bracketing subintervals.
    pub bracket_steps: u32,
    /// Repricing report threshold in basis points.
    pub repricing_tolerance_bp: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::NaturalCubicSpline,
            allow_extrapolation: true,
            compounding: Compounding::Annual,
            solver: SolverConfig::default(),
            rate_bounds: DEFAULT_RATE_BOUNDS,
            bracket_steps: DEFAULT_BRACKET_STEPS,
            repricing_tolerance_bp: DEFAULT_REPRICING_TOLERANCE_BP,
        }
    }
}

impl BootstrapConfig {
    /// Replaces the interpolation scheme.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.interpolation = method;
        self
    }

    /// Replaces the compounding convention.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }
}

/// A bootstrapped curve pair with its solved pillars and repricing
/// report.
///
/// The zero curve is the calibrated object; the forward curve is a
/// companion in discrete forward space built so that both imply
/// identical discount factors at every pillar.
#[derive(Debug, Clone)]
pub struct BootstrappedCurve {
    /// Zero rate curve.
    pub zero: Curve,
    /// Companion discrete forward curve.
    pub forward: Curve,
    /// Solved pillars in maturity order, anchor excluded.
    pub pillars: Vec<Pillar>,
    /// Instruments repriced against the final curves.
    pub report: RepricingReport,
}

/// Sequentially bootstraps curves for one valuation date.
pub struct CurveBootstrapper<'a> {
    context: &'a ValuationContext,
    config: BootstrapConfig,
}

impl<'a> CurveBootstrapper<'a> {
    /// Creates a bootstrapper over the given context.
    #[must_use]
    pub fn new(context: &'a ValuationContext, config: BootstrapConfig) -> Self {
        Self { context, config }
    }

    /// Bootstraps the discount curve from OIS instruments.
    ///
    /// Instruments are sorted by pillar time in place.
    pub fn bootstrap_discount(
        &self,
        instruments: &mut [Box<dyn RateHelper>],
    ) -> CurveResult<BootstrappedCurve> {
        self.solve_curve(instruments, None)
    }

    /// Bootstraps the forecast curve from deposit and swap instruments,
    /// discounting every cash flow on the given discount curve.
    ///
    /// Instruments are sorted by pillar time in place.
    pub fn bootstrap_forecast(
        &self,
        instruments: &mut [Box<dyn RateHelper>],
        discount: &Curve,
    ) -> CurveResult<BootstrappedCurve> {
        self.solve_curve(instruments, Some(discount))
    }

    fn solve_curve(
        &self,
        instruments: &mut [Box<dyn RateHelper>],
        discount: Option<&Curve>,
    ) -> CurveResult<BootstrappedCurve> {
        if instruments.is_empty() {
            return Err(CurveError::bootstrap_failed(
                "curve",
                "no instruments to bootstrap from",
            ));
        }
        sort_by_pillar(instruments);
        for i in 1..instruments.len() {
            let prev = instruments[i - 1].pillar_time();
            let current = instruments[i].pillar_time();
            if current <= prev {
                return Err(CurveError::non_monotonic_pillars(i, prev, current));
            }
        }
        if instruments[0].pillar_time() <= 0.0 {
            return Err(CurveError::bootstrap_failed(
                instruments[0].description(),
                "pillar at or before the valuation date",
            ));
        }

        let mut solved_times: Vec<f64> = Vec::with_capacity(instruments.len());
        let mut solved_values: Vec<f64> = Vec::with_capacity(instruments.len());

        for helper in instruments.iter() {
            let time = helper.pillar_time();
            let stash: RefCell<Option<CurveError>> = RefCell::new(None);
            let objective = |rate: f64| {
                match self.residual_at(
                    helper.as_ref(),
                    &solved_times,
                    &solved_values,
                    time,
                    rate,
                    discount,
                ) {
                    Ok(residual) => residual,
                    Err(err) => {
                        stash.borrow_mut().get_or_insert(err);
                        f64::NAN
                    }
                }
            };
            let take_stashed = |err| match stash.borrow_mut().take() {
                Some(curve_err) => curve_err,
                None => CurveError::root_solve_failed(helper.description(), err),
            };

            let (lo, hi) = self.config.rate_bounds;
            let (a, b) = bracket_root(&objective, lo, hi, self.config.bracket_steps)
                .map_err(take_stashed)?;
            let solution = brent(&objective, a, b, &self.config.solver).map_err(take_stashed)?;

            debug!(
                "solved {} at {:.6}% in {} iterations, residual {:.3e}",
                helper.description(),
                solution.root * 100.0,
                solution.iterations,
                solution.residual
            );
            solved_times.push(time);
            solved_values.push(solution.root);
        }

        // Spline schemes are global: solving a later pillar bends the
        // curve through earlier ones. Re-solve each pillar against the
        // complete grid until the values stop moving. Linear
        // interpolation has local support and stabilizes on the first
        // sweep.
        self.refine(instruments, discount, &solved_times, &mut solved_values)?;

        self.assemble(instruments, discount, &solved_times, &solved_values)
    }

    fn refine(
        &self,
        instruments: &[Box<dyn RateHelper>],
        discount: Option<&Curve>,
        solved_times: &[f64],
        solved_values: &mut [f64],
    ) -> CurveResult<()> {
        let mut times = Vec::with_capacity(solved_times.len() + 1);
        times.push(0.0);
        times.extend_from_slice(solved_times);

        for sweep in 0..MAX_REFINEMENT_SWEEPS {
            let mut max_shift = 0.0_f64;
            for (i, helper) in instruments.iter().enumerate() {
                let stash: RefCell<Option<CurveError>> = RefCell::new(None);
                let objective = |rate: f64| {
                    let mut values = Vec::with_capacity(times.len());
                    values.push(if i == 0 { rate } else { solved_values[0] });
                    values.extend_from_slice(solved_values);
                    values[i + 1] = rate;
                    match self.price_residual(helper.as_ref(), &times, values, discount) {
                        Ok(residual) => residual,
                        Err(err) => {
                            stash.borrow_mut().get_or_insert(err);
                            f64::NAN
                        }
                    }
                };
                let take_stashed = |err| match stash.borrow_mut().take() {
                    Some(curve_err) => curve_err,
                    None => CurveError::root_solve_failed(helper.description(), err),
                };

                let (lo, hi) = self.config.rate_bounds;
                let (a, b) = bracket_root(&objective, lo, hi, self.config.bracket_steps)
                    .map_err(take_stashed)?;
                let solution =
                    brent(&objective, a, b, &self.config.solver).map_err(take_stashed)?;

                max_shift = max_shift.max((solution.root - solved_values[i]).abs());
                solved_values[i] = solution.root;
            }
            // A loose multiple of the solver tolerance; the roots
            // themselves jitter at solver precision between sweeps.
            if max_shift <= self.config.solver.tolerance * 10.0 {
                debug!("refinement converged after {} sweeps", sweep + 1);
                return Ok(());
            }
        }
        Err(CurveError::bootstrap_failed(
            "curve",
            "pillar refinement did not stabilize",
        ))
    }

    /// Par residual of one instrument on the candidate curve that
    /// extends the solved pillars with a trial rate.
    fn residual_at(
        &self,
        helper: &dyn RateHelper,
        solved_times: &[f64],
        solved_values: &[f64],
        time: f64,
        rate: f64,
        discount: Option<&Curve>,
    ) -> CurveResult<f64> {
        let mut times = Vec::with_capacity(solved_times.len() + 2);
        times.push(0.0);
        times.extend_from_slice(solved_times);
        times.push(time);

        // The anchor tracks the first solved rate; while the first
        // pillar is still being solved it tracks the trial rate.
        let anchor = solved_values.first().copied().unwrap_or(rate);
        let mut values = Vec::with_capacity(times.len());
        values.push(anchor);
        values.extend_from_slice(solved_values);
        values.push(rate);

        self.price_residual(helper, &times, values, discount)
    }

    /// Par residual of one instrument on the curve defined by the
    /// given grid.
    fn price_residual(
        &self,
        helper: &dyn RateHelper,
        times: &[f64],
        values: Vec<f64>,
        discount: Option<&Curve>,
    ) -> CurveResult<f64> {
        let candidate = Curve::new(
            self.context.valuation_date(),
            RateSpace::Zero,
            self.config.compounding,
            self.config.interpolation,
            self.config.allow_extrapolation,
            times.to_vec(),
            values,
        )?;
        let curves = match discount {
            Some(d) => MarketCurves::dual(d, &candidate),
            None => MarketCurves::discount_only(&candidate),
        };
        helper.par_residual(&curves)
    }

    /// Builds the final zero and forward curves, pillar records, and
    /// repricing report from the solved values.
    fn assemble(
        &self,
        instruments: &[Box<dyn RateHelper>],
        discount: Option<&Curve>,
        solved_times: &[f64],
        solved_values: &[f64],
    ) -> CurveResult<BootstrappedCurve> {
        let n = solved_times.len();
        let mut times = Vec::with_capacity(n + 1);
        times.push(0.0);
        times.extend_from_slice(solved_times);
        let mut values = Vec::with_capacity(n + 1);
        values.push(solved_values[0]);
        values.extend_from_slice(solved_values);

        let zero = Curve::new(
            self.context.valuation_date(),
            RateSpace::Zero,
            self.config.compounding,
            self.config.interpolation,
            self.config.allow_extrapolation,
            times.clone(),
            values.clone(),
        )?;

        // Discrete forwards over each segment, from the pillar discount
        // factors. The anchor forward repeats the first segment's so
        // the forward curve is flat below the first pillar.
        let mut dfs = Vec::with_capacity(times.len());
        dfs.push(1.0);
        for i in 1..times.len() {
            dfs.push(self.config.compounding.discount_factor(values[i], times[i]));
        }
        let mut forwards = vec![0.0; times.len()];
        for i in 1..times.len() {
            forwards[i] = (dfs[i - 1].ln() - dfs[i].ln()) / (times[i] - times[i - 1]);
        }
        forwards[0] = forwards[1];

        let forward = Curve::new(
            self.context.valuation_date(),
            RateSpace::DiscreteForward,
            self.config.compounding,
            self.config.interpolation,
            self.config.allow_extrapolation,
            times.clone(),
            forwards.clone(),
        )?;

        let mut pillars = Vec::with_capacity(n);
        for (i, helper) in instruments.iter().enumerate() {
            pillars.push(Pillar {
                tenor: helper.tenor(),
                date: helper.maturity(),
                time: times[i + 1],
                zero_rate: values[i + 1],
                forward_rate: forwards[i + 1],
                discount_factor: dfs[i + 1],
            });
        }

        let final_curves = match discount {
            Some(d) => MarketCurves::dual(d, &zero),
            None => MarketCurves::discount_only(&zero),
        };
        let mut checks = Vec::with_capacity(n);
        for helper in instruments {
            let fair = helper.fair_rate(&final_curves)?;
            checks.push(RepricingCheck::new(
                helper.description(),
                helper.kind(),
                helper.tenor(),
                helper.quote(),
                fair,
                self.config.repricing_tolerance_bp,
            ));
        }
        let report = RepricingReport::new(checks, self.config.repricing_tolerance_bp);

        Ok(BootstrappedCurve {
            zero,
            forward,
            pillars,
            report,
        })
    }
}

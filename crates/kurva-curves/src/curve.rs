//! Immutable curve value objects.

use std::fmt;
use std::sync::Arc;

use kurva_core::types::Date;
use kurva_math::interpolation::{InterpolationMethod, Interpolator};
use kurva_math::MathError;

use crate::compounding::Compounding;
use crate::error::{CurveError, CurveResult};

/// The space a curve's pillar values live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateSpace {
    /// Spot zero rates from the reference date to each pillar.
    Zero,
    /// Piecewise-constant forwards over the segment ending at each pillar.
    DiscreteForward,
}

impl RateSpace {
    /// Returns the name of the space.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RateSpace::Zero => "Zero",
            RateSpace::DiscreteForward => "DiscreteForward",
        }
    }
}

impl fmt::Display for RateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An immutable curve over a fixed pillar grid.
///
/// A curve owns its pillar times and values plus a prebuilt
/// interpolator; reading the curve never mutates it. Pillar surgery
/// for validation goes through [`Curve::without_pillar`] and
/// [`Curve::with_value_at`], which build new curves.
///
/// Discounting depends on the space. Zero curves convert the
/// interpolated rate with their compounding convention; discrete
/// forward curves integrate the piecewise-constant forwards, so both
/// members of a bootstrapped pair imply identical pillar discount
/// factors.
#[derive(Clone)]
pub struct Curve {
    reference_date: Date,
    space: RateSpace,
    compounding: Compounding,
    method: InterpolationMethod,
    allow_extrapolation: bool,
    times: Vec<f64>,
    values: Vec<f64>,
    interpolator: Arc<dyn Interpolator>,
}

impl Curve {
    /// Creates a curve over the given pillar grid.
    ///
    /// # Errors
    ///
    /// Returns `SingularCurve` for fewer than two pillars,
    /// `NonMonotonicPillars` if times do not strictly increase, and an
    /// interpolation error if the scheme rejects the grid.
    pub fn new(
        reference_date: Date,
        space: RateSpace,
        compounding: Compounding,
        method: InterpolationMethod,
        allow_extrapolation: bool,
        times: Vec<f64>,
        values: Vec<f64>,
    ) -> CurveResult<Self> {
        if times.len() < 2 {
            return Err(CurveError::singular_curve(format!(
                "need at least 2 pillars, got {}",
                times.len()
            )));
        }
        if times.len() != values.len() {
            return Err(CurveError::singular_curve(format!(
                "pillar times and values differ in length: {} vs {}",
                times.len(),
                values.len()
            )));
        }
        for i in 1..times.len() {
            if times[i] <= times[i - 1] {
                return Err(CurveError::non_monotonic_pillars(
                    i,
                    times[i - 1],
                    times[i],
                ));
            }
        }

        // Spline schemes need three pillars; shorter grids (partial
        // curves during bootstrap) degrade to linear.
        let effective = if times.len() < 3 {
            InterpolationMethod::Linear
        } else {
            method
        };
        let interpolator: Arc<dyn Interpolator> =
            Arc::from(effective.build(times.clone(), values.clone(), allow_extrapolation)?);

        Ok(Self {
            reference_date,
            space,
            compounding,
            method,
            allow_extrapolation,
            times,
            values,
            interpolator,
        })
    }

    /// Returns the curve's reference date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns the space the pillar values live in.
    #[must_use]
    pub fn space(&self) -> RateSpace {
        self.space
    }

    /// Returns the compounding convention.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Returns the pillar times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the pillar values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the curve has no pillars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Interpolates the curve value at time t in its native space.
    pub fn value(&self, t: f64) -> CurveResult<f64> {
        Ok(self.interpolator.interpolate(t)?)
    }

    /// Returns the zero rate at time t.
    ///
    /// For zero curves this is the interpolated value. For forward
    /// curves it is recovered from the integrated discount factor.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        match self.space {
            RateSpace::Zero => self.value(t),
            RateSpace::DiscreteForward => {
                let df = self.discount_factor(t)?;
                Ok(self.compounding.rate_from_df(df, t))
            }
        }
    }

    /// Returns the discount factor at time t.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        match self.space {
            RateSpace::Zero => {
                let rate = self.value(t)?;
                Ok(self.compounding.discount_factor(rate, t))
            }
            RateSpace::DiscreteForward => self.flat_forward_df(t),
        }
    }

    /// Integrates the piecewise-constant forwards up to t.
    ///
    /// The forward at pillar i applies over the segment from the
    /// previous pillar (or the reference date). An anchor pillar at
    /// t = 0 contributes nothing.
    fn flat_forward_df(&self, t: f64) -> CurveResult<f64> {
        let mut acc = 0.0;
        let mut prev = 0.0;

        for (i, &seg_end) in self.times.iter().enumerate() {
            if seg_end <= prev {
                continue;
            }
            if t <= seg_end {
                acc += self.values[i] * (t - prev);
                return Ok((-acc).exp());
            }
            acc += self.values[i] * (seg_end - prev);
            prev = seg_end;
        }

        if !self.allow_extrapolation {
            return Err(MathError::ExtrapolationNotAllowed {
                x: t,
                min: self.times[0],
                max: prev,
            }
            .into());
        }

        // Past the last pillar the final forward keeps running
        acc += self.values[self.values.len() - 1] * (t - prev);
        Ok((-acc).exp())
    }

    /// Returns the simple forward rate between t1 and t2.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 <= t1 {
            return Err(MathError::invalid_input(format!(
                "forward period [{t1}, {t2}] is not increasing"
            ))
            .into());
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok((df1 / df2 - 1.0) / (t2 - t1))
    }

    /// Builds a new curve with pillar `index` removed.
    pub fn without_pillar(&self, index: usize) -> CurveResult<Self> {
        if index >= self.times.len() {
            return Err(CurveError::PillarOutOfRange {
                index,
                len: self.times.len(),
            });
        }

        let mut times = self.times.clone();
        let mut values = self.values.clone();
        times.remove(index);
        values.remove(index);

        Self::new(
            self.reference_date,
            self.space,
            self.compounding,
            self.method,
            self.allow_extrapolation,
            times,
            values,
        )
    }

    /// Builds a new curve with the value at pillar `index` replaced.
    pub fn with_value_at(&self, index: usize, value: f64) -> CurveResult<Self> {
        if index >= self.times.len() {
            return Err(CurveError::PillarOutOfRange {
                index,
                len: self.times.len(),
            });
        }

        let mut values = self.values.clone();
        values[index] = value;

        Self::new(
            self.reference_date,
            self.space,
            self.compounding,
            self.method,
            self.allow_extrapolation,
            self.times.clone(),
            values,
        )
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("reference_date", &self.reference_date)
            .field("space", &self.space)
            .field("compounding", &self.compounding)
            .field("method", &self.method)
            .field("pillars", &self.times.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ref_date() -> Date {
        Date::from_ymd(2018, 6, 15).unwrap()
    }

    fn zero_curve(times: Vec<f64>, values: Vec<f64>) -> Curve {
        Curve::new(
            ref_date(),
            RateSpace::Zero,
            Compounding::Continuous,
            InterpolationMethod::Linear,
            false,
            times,
            values,
        )
        .unwrap()
    }

    #[test]
    fn test_zero_curve_discounting() {
        let curve = zero_curve(vec![0.0, 1.0, 2.0], vec![0.01, 0.01, 0.012]);

        assert_relative_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
        assert_relative_eq!(
            curve.discount_factor(1.0).unwrap(),
            (-0.01_f64).exp(),
            epsilon = 1e-14
        );
        assert_relative_eq!(curve.zero_rate(2.0).unwrap(), 0.012, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_curve_domain_error() {
        let curve = zero_curve(vec![0.0, 1.0, 2.0], vec![0.01, 0.01, 0.012]);
        assert!(matches!(
            curve.value(2.5),
            Err(CurveError::Interpolation(
                MathError::ExtrapolationNotAllowed { .. }
            ))
        ));
    }

    #[test]
    fn test_forward_curve_matches_zero_pillar_dfs() {
        // Zero pillars and the implied flat forwards
        let times = vec![1.0, 2.0, 3.0];
        let zeros = vec![0.010, 0.012, 0.015];
        let zero = Curve::new(
            ref_date(),
            RateSpace::Zero,
            Compounding::Continuous,
            InterpolationMethod::Linear,
            false,
            times.clone(),
            zeros.clone(),
        )
        .unwrap();

        // f_i = (ln df_{i-1} - ln df_i) / (t_i - t_{i-1})
        let dfs: Vec<f64> = times
            .iter()
            .map(|&t| zero.discount_factor(t).unwrap())
            .collect();
        let mut fwd_times = vec![0.0];
        let mut fwds = vec![0.0];
        let mut prev_t = 0.0;
        let mut prev_df: f64 = 1.0;
        for (&t, &df) in times.iter().zip(dfs.iter()) {
            fwd_times.push(t);
            fwds.push((prev_df.ln() - df.ln()) / (t - prev_t));
            prev_t = t;
            prev_df = df;
        }
        fwds[0] = fwds[1];

        let forward = Curve::new(
            ref_date(),
            RateSpace::DiscreteForward,
            Compounding::Continuous,
            InterpolationMethod::Linear,
            false,
            fwd_times,
            fwds,
        )
        .unwrap();

        for (&t, &df) in times.iter().zip(dfs.iter()) {
            assert_relative_eq!(forward.discount_factor(t).unwrap(), df, epsilon = 1e-12);
        }
        // Mid-segment the forward curve compounds at the segment rate
        let df_15 = forward.discount_factor(1.5).unwrap();
        assert!(df_15 < dfs[0] && df_15 > dfs[1]);
    }

    #[test]
    fn test_simple_forward_rate() {
        let curve = zero_curve(vec![0.0, 1.0, 2.0], vec![0.01, 0.01, 0.015]);
        // Continuous zeros 1% to 1y and 1.5% to 2y imply a 2% segment
        // forward; the simple forward adds a small compounding term.
        let f = curve.forward_rate(1.0, 2.0).unwrap();
        assert_relative_eq!(f, (0.02_f64).exp() - 1.0, epsilon = 1e-12);
        assert!(curve.forward_rate(2.0, 1.0).is_err());
    }

    #[test]
    fn test_without_pillar_leaves_original_untouched() {
        let curve = zero_curve(vec![0.0, 1.0, 2.0, 3.0], vec![0.01, 0.01, 0.012, 0.015]);
        let reduced = curve.without_pillar(2).unwrap();

        assert_eq!(curve.len(), 4);
        assert_eq!(reduced.len(), 3);
        assert_relative_eq!(reduced.times()[2], 3.0);
        // Removed pillar is now interpolated from its neighbours
        assert_relative_eq!(reduced.value(2.0).unwrap(), 0.0125, epsilon = 1e-14);
    }

    #[test]
    fn test_with_value_at() {
        let curve = zero_curve(vec![0.0, 1.0, 2.0], vec![0.01, 0.01, 0.012]);
        let bumped = curve.with_value_at(2, 0.020).unwrap();

        assert_relative_eq!(curve.values()[2], 0.012);
        assert_relative_eq!(bumped.value(2.0).unwrap(), 0.020, epsilon = 1e-14);
    }

    #[test]
    fn test_pillar_index_out_of_range() {
        let curve = zero_curve(vec![0.0, 1.0], vec![0.01, 0.01]);
        assert!(matches!(
            curve.without_pillar(5),
            Err(CurveError::PillarOutOfRange { .. })
        ));
    }

    #[test]
    fn test_non_monotonic_rejected() {
        let result = Curve::new(
            ref_date(),
            RateSpace::Zero,
            Compounding::Continuous,
            InterpolationMethod::Linear,
            false,
            vec![0.0, 2.0, 1.0],
            vec![0.01, 0.01, 0.01],
        );
        assert!(matches!(
            result,
            Err(CurveError::NonMonotonicPillars { .. })
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Both representations of one curve pair imply the same
            // discount factor at every pillar, for any rate level
            // including negative regimes.
            #[test]
            fn prop_zero_and_forward_pillar_dfs_agree(
                zeros in proptest::collection::vec(-0.02f64..0.10, 3..8),
            ) {
                let times: Vec<f64> = (1..=zeros.len()).map(|i| i as f64).collect();
                let zero = Curve::new(
                    ref_date(),
                    RateSpace::Zero,
                    Compounding::Continuous,
                    InterpolationMethod::Linear,
                    false,
                    times.clone(),
                    zeros.clone(),
                )
                .unwrap();

                let mut fwd_times = vec![0.0];
                let mut fwds = vec![0.0];
                let mut prev_t = 0.0;
                let mut prev_ln_df = 0.0;
                for &t in &times {
                    let ln_df = zero.discount_factor(t).unwrap().ln();
                    fwd_times.push(t);
                    fwds.push((prev_ln_df - ln_df) / (t - prev_t));
                    prev_t = t;
                    prev_ln_df = ln_df;
                }
                fwds[0] = fwds[1];

                let forward = Curve::new(
                    ref_date(),
                    RateSpace::DiscreteForward,
                    Compounding::Continuous,
                    InterpolationMethod::Linear,
                    false,
                    fwd_times,
                    fwds,
                )
                .unwrap();

                for &t in &times {
                    let df_zero = zero.discount_factor(t).unwrap();
                    let df_fwd = forward.discount_factor(t).unwrap();
                    prop_assert!((df_zero - df_fwd).abs() < 1e-12);
                }
            }
        }
    }
}

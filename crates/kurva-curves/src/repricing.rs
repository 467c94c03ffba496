//! Post-bootstrap repricing checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use kurva_core::types::Tenor;

use crate::instruments::InstrumentKind;

/// Repricing error threshold in basis points.
///
/// A sequential bootstrap reprices its own instruments to solver
/// tolerance, so anything above a hundredth of a basis point signals a
/// convergence or construction problem.
pub const DEFAULT_REPRICING_TOLERANCE_BP: f64 = 0.01;

/// One instrument repriced against the bootstrapped curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepricingCheck {
    /// Instrument description.
    pub instrument: String,
    /// Instrument kind.
    pub kind: InstrumentKind,
    /// Quoted tenor.
    pub tenor: Tenor,
    /// Market quote as a decimal rate.
    pub quote: f64,
    /// Fair rate off the bootstrapped curves.
    pub fair: f64,
    /// Absolute repricing error in basis points.
    pub error_bp: f64,
    /// Whether the error is within tolerance.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a check from a quote/fair pair.
    #[must_use]
    pub fn new(
        instrument: String,
        kind: InstrumentKind,
        tenor: Tenor,
        quote: f64,
        fair: f64,
        tolerance_bp: f64,
    ) -> Self {
        let error_bp = (fair - quote).abs() * 10_000.0;
        Self {
            instrument,
            kind,
            tenor,
            quote,
            fair,
            error_bp,
            passed: error_bp <= tolerance_bp,
        }
    }
}

/// Repricing report for one bootstrapped curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepricingReport {
    /// Per-instrument checks in pillar order.
    pub checks: Vec<RepricingCheck>,
    /// Threshold the checks were graded against, in basis points.
    pub tolerance_bp: f64,
}

impl RepricingReport {
    /// Creates a report from graded checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>, tolerance_bp: f64) -> Self {
        Self {
            checks,
            tolerance_bp,
        }
    }

    /// Largest repricing error across all instruments, in basis points.
    #[must_use]
    pub fn max_error_bp(&self) -> f64 {
        self.checks
            .iter()
            .map(|c| c.error_bp)
            .fold(0.0, f64::max)
    }

    /// Returns true when every instrument repriced within tolerance.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Number of failing instruments.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} {:>10} {:>10} {:>10}  status",
            "instrument", "quote %", "fair %", "err bp"
        )?;
        for check in &self.checks {
            writeln!(
                f,
                "{:<20} {:>10.4} {:>10.4} {:>10.6}  {}",
                check.instrument,
                check.quote * 100.0,
                check.fair * 100.0,
                check.error_bp,
                if check.passed { "ok" } else { "FAIL" }
            )?;
        }
        write!(
            f,
            "max error {:.6} bp, {} of {} within {:.4} bp",
            self.max_error_bp(),
            self.checks.len() - self.failures(),
            self.checks.len(),
            self.tolerance_bp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(quote: f64, fair: f64) -> RepricingCheck {
        RepricingCheck::new(
            "OIS 2Y".to_string(),
            InstrumentKind::Ois,
            Tenor::years(2),
            quote,
            fair,
            DEFAULT_REPRICING_TOLERANCE_BP,
        )
    }

    #[test]
    fn test_error_in_basis_points() {
        let c = check(0.0120, 0.0121);
        assert!((c.error_bp - 1.0).abs() < 1e-9);
        assert!(!c.passed);
    }

    #[test]
    fn test_passes_within_tolerance() {
        let c = check(0.0120, 0.012_000_000_1);
        assert!(c.passed);
    }

    #[test]
    fn test_report_aggregates() {
        let report = RepricingReport::new(
            vec![check(0.01, 0.01), check(0.012, 0.0125)],
            DEFAULT_REPRICING_TOLERANCE_BP,
        );
        assert!(!report.all_passed());
        assert_eq!(report.failures(), 1);
        assert!((report.max_error_bp() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_contains_status() {
        let report = RepricingReport::new(vec![check(0.01, 0.02)], DEFAULT_REPRICING_TOLERANCE_BP);
        let text = report.to_string();
        assert!(text.contains("FAIL"));
        assert!(text.contains("max error"));
    }
}

//! Report rendering: the verifier's entire observable output.
//!
//! Rendering is a pure function of the verdict, so two runs over an
//! unchanged artifact produce byte-identical text (the idempotence
//! contract). Banner and line shapes match the producer's published
//! verifier output:
//!
//! ```text
//! PASS
//!
//! Regime call summary (bursty ROI-vs-bg contrast):
//!   k=0.000  contrast=0.000020
//! ...
//! ```
//!
//! FAIL reports carry one ` - ` line per collected problem/issue.

use std::fmt::Write;

use probe_kernel::verify::DigestProblem;
use probe_regime::call::RegimeIssue;
use probe_regime::sweep::ContrastSeries;

use crate::verifier::VerdictV1;

/// Render the PASS banner plus the per-row series summary.
#[must_use]
pub fn render_pass(bursty: &ContrastSeries, diffuse: &ContrastSeries) -> String {
    let mut out = String::from("PASS\n");

    out.push_str("\nRegime call summary (bursty ROI-vs-bg contrast):\n");
    push_series(&mut out, bursty);

    out.push_str("\nDiffuse ROI-vs-bg contrast (should stay ~0):\n");
    push_series(&mut out, diffuse);

    out
}

/// Render the digest-stage FAIL banner plus every problem line.
#[must_use]
pub fn render_digest_failure(problems: &[DigestProblem]) -> String {
    let mut out = String::from("FAIL: digest verification failed\n");
    for problem in problems {
        let _ = writeln!(out, " - {problem}");
    }
    out
}

/// Render the regime-stage FAIL banner plus every issue line.
#[must_use]
pub fn render_regime_failure(issues: &[RegimeIssue]) -> String {
    let mut out = String::from("FAIL: regime call failed\n");
    for issue in issues {
        let _ = writeln!(out, " - {issue}");
    }
    out
}

/// Render any verdict to its report text.
#[must_use]
pub fn render_verdict(verdict: &VerdictV1) -> String {
    match verdict {
        VerdictV1::Pass { bursty, diffuse } => render_pass(bursty, diffuse),
        VerdictV1::DigestFailure { problems } => render_digest_failure(problems),
        VerdictV1::RegimeFailure { issues } => render_regime_failure(issues),
    }
}

/// Fixed-precision per-row printout: kappa to 3 decimals, contrast to 6.
fn push_series(out: &mut String, series: &ContrastSeries) {
    for &(kappa, contrast) in &series.points {
        let _ = writeln!(out, "  k={kappa:.3}  contrast={contrast:.6}");
    }
}

//! The two-stage verification pipeline.
//!
//! Stage 1 (digests) is a precondition for stage 2 (regime call): an
//! artifact that cannot be trusted byte-for-byte must not have its numbers
//! analyzed, so on any digest problem the sweep is never even
//! schema-validated. Within each stage, problems are collected rather than
//! short-circuited; across stages there is a hard gate.

use std::path::Path;

use probe_kernel::verify::{verify_digests, DigestProblem};
use probe_regime::call::{regime_call, RegimeIssue};
use probe_regime::sweep::{extract_series, parse_sweep, ContrastSeries, SweepSchemaError};
use probe_regime::thresholds::ThresholdsV1;

use crate::artifact::{ArtifactDirV1, ArtifactError};

/// Fatal error during verification (no verdict produced).
#[derive(Debug)]
pub enum VerifyError {
    /// The artifact directory failed to load.
    Artifact(ArtifactError),
    /// `sweep_summary.json` verified byte-for-byte but violates the schema.
    SweepSchema(SweepSchemaError),
}

impl std::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Artifact(e) => write!(f, "{e}"),
            Self::SweepSchema(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for VerifyError {}

/// Outcome of a completed verification run.
///
/// A verdict is only produced when the run itself completed; fatal input
/// errors are [`VerifyError`] instead.
#[derive(Debug, Clone)]
pub enum VerdictV1 {
    /// Both stages passed. Carries the extracted series for the summary
    /// printout.
    Pass {
        bursty: ContrastSeries,
        diffuse: ContrastSeries,
    },
    /// Stage 1 failed; the regime call was never attempted.
    DigestFailure { problems: Vec<DigestProblem> },
    /// Stage 1 passed, stage 2 collected violations.
    RegimeFailure { issues: Vec<RegimeIssue> },
}

impl VerdictV1 {
    /// `true` only for [`VerdictV1::Pass`].
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }
}

/// Run the full pipeline over an artifact directory.
///
/// # Errors
///
/// Returns [`VerifyError`] if the artifact fails to load or (after digests
/// verify) the sweep summary violates the schema.
pub fn run_verification(
    artifact_dir: &Path,
    thresholds: &ThresholdsV1,
) -> Result<VerdictV1, VerifyError> {
    let artifact = ArtifactDirV1::load(artifact_dir).map_err(VerifyError::Artifact)?;

    // Stage 1: digest verification gates everything numeric.
    let digest_report = verify_digests(&artifact.dir, &artifact.manifest);
    if !digest_report.passed() {
        return Ok(VerdictV1::DigestFailure {
            problems: digest_report.problems,
        });
    }

    // Stage 2: the sweep bytes are now trusted; validate and replay.
    let rows = parse_sweep(&artifact.sweep).map_err(VerifyError::SweepSchema)?;
    let (bursty, diffuse) = extract_series(&rows);
    let call = regime_call(&bursty, &diffuse, thresholds);

    if call.passed() {
        Ok(VerdictV1::Pass { bursty, diffuse })
    } else {
        Ok(VerdictV1::RegimeFailure {
            issues: call.issues,
        })
    }
}

//! Independent verifier for a regime probe proof artifact.
//!
//! 1. Verifies SHA-256 digests for every retained file in the manifest.
//! 2. Replays the pre-declared regime call on `sweep_summary.json`.
//!
//! Usage: `verify_regime_call [--artifact-dir <dir>] [--thresholds <file>]`
//!
//! `--artifact_dir` is accepted as an alias for `--artifact-dir`; the
//! producer's published invocation uses the underscore spelling.
//!
//! PASS summaries and digest/regime FAIL reports go to stdout; pre-digest
//! failures (missing required file, unreadable input, bad arguments) go to
//! stderr. Exit status: 0 on PASS, 1 on any failure.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use probe_harness::report::render_verdict;
use probe_harness::verifier::run_verification;
use probe_regime::thresholds::ThresholdsV1;

const USAGE: &str = "usage: verify_regime_call [--artifact-dir <dir>] [--thresholds <file>]";

/// Default artifact directory, matching the producer's retention layout.
const DEFAULT_ARTIFACT_DIR: &str = "proof_artifact";

#[derive(Debug)]
struct CliArgs {
    artifact_dir: PathBuf,
    thresholds: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut artifact_dir = PathBuf::from(DEFAULT_ARTIFACT_DIR);
    let mut thresholds = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            // The underscore spelling matches the producer's documented
            // invocation.
            "--artifact-dir" | "--artifact_dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                artifact_dir = PathBuf::from(value);
            }
            "--thresholds" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--thresholds requires a value".to_string())?;
                thresholds = Some(PathBuf::from(value));
            }
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }

    Ok(CliArgs {
        artifact_dir,
        thresholds,
    })
}

/// Defaults merged with the optional override document.
fn load_thresholds(path: Option<&Path>) -> Result<ThresholdsV1, String> {
    let Some(path) = path else {
        return Ok(ThresholdsV1::default());
    };
    let bytes = std::fs::read(path)
        .map_err(|e| format!("cannot read thresholds file {}: {e}", path.display()))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| format!("invalid JSON in thresholds file {}: {e}", path.display()))?;
    ThresholdsV1::with_overrides(&value).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("FAIL: {msg}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let thresholds = match load_thresholds(args.thresholds.as_deref()) {
        Ok(thresholds) => thresholds,
        Err(msg) => {
            eprintln!("FAIL: {msg}");
            return ExitCode::FAILURE;
        }
    };

    match run_verification(&args.artifact_dir, &thresholds) {
        Ok(verdict) => {
            print!("{}", render_verdict(&verdict));
            if verdict.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("FAIL: {e}");
            ExitCode::FAILURE
        }
    }
}

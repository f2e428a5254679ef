//! Binary that builds a known-good artifact directory in a temp location,
//! runs the full verification pipeline twice, and prints deterministic
//! output lines for cross-process verification.
//!
//! Used by the cross-process determinism test to verify that the rendered
//! report and verdict are identical across different process environments.
//!
//! Usage: `verify_fixture`
//! Output: four lines, each `key=value`:
//!   `verdict`=PASS
//!   `report_sha256`=<64-hex digest of the rendered report>
//!   `rerun`=identical
//!   `bursty_rows`=4

use lock_tests::artifact_fixture::{passing_sweep_rows, write_artifact_dir};
use probe_harness::report::render_verdict;
use probe_harness::verifier::{run_verification, VerdictV1};
use probe_kernel::digest::sha256_bytes;
use probe_regime::thresholds::ThresholdsV1;

fn main() {
    let dir = std::env::temp_dir().join(format!("probe_verify_fixture_{}", std::process::id()));
    // Clean up any previous run.
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create fixture dir");

    write_artifact_dir(&dir, &passing_sweep_rows());

    let thresholds = ThresholdsV1::default();
    let first = run_verification(&dir, &thresholds).expect("verification failed");
    let second = run_verification(&dir, &thresholds).expect("verification failed");

    let first_report = render_verdict(&first);
    let second_report = render_verdict(&second);

    let bursty_rows = match &first {
        VerdictV1::Pass { bursty, .. } => bursty.points.len(),
        other => panic!("fixture artifact did not pass: {other:?}"),
    };

    // Clean up.
    let _ = std::fs::remove_dir_all(&dir);

    let verdict = if first.passed() { "PASS" } else { "FAIL" };
    let rerun = if first_report == second_report {
        "identical"
    } else {
        "MISMATCH"
    };

    println!("verdict={verdict}");
    println!("report_sha256={}", sha256_bytes(first_report.as_bytes()));
    println!("rerun={rerun}");
    println!("bursty_rows={bursty_rows}");
}

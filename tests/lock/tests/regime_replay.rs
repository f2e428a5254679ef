//! Lock tests for the regime-call replay: the verdict is a mechanical
//! function of the retained numbers and the declared thresholds.

use lock_tests::artifact_fixture::{
    passing_sweep_rows, sweep_row, write_artifact_dir,
};
use probe_harness::report::render_verdict;
use probe_harness::verifier::{run_verification, VerdictV1};
use probe_regime::call::{RegimeIssue, SeriesSide};
use probe_regime::thresholds::ThresholdsV1;

fn issues_of(verdict: VerdictV1) -> Vec<RegimeIssue> {
    match verdict {
        VerdictV1::RegimeFailure { issues } => issues,
        other => panic!("expected RegimeFailure, got {other:?}"),
    }
}

#[test]
fn rendered_report_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    write_artifact_dir(dir.path(), &passing_sweep_rows());

    let thresholds = ThresholdsV1::default();
    let first = render_verdict(&run_verification(dir.path(), &thresholds).unwrap());
    let second = render_verdict(&run_verification(dir.path(), &thresholds).unwrap());
    assert_eq!(first, second, "unchanged artifact must render identically");
    assert!(first.starts_with("PASS\n"));
}

#[test]
fn threshold_override_flips_the_null_collapse_check() {
    let dir = tempfile::tempdir().unwrap();
    // Zero-kappa bursty contrast of 2e-4: beyond the default eps_zero.
    let rows = vec![
        sweep_row(0.0, 2e-4, 0.0),
        sweep_row(1.0, 2.0, 1e-3),
        sweep_row(2.0, 4.0, 1e-3),
    ];
    write_artifact_dir(dir.path(), &rows);

    let issues = issues_of(run_verification(dir.path(), &ThresholdsV1::default()).unwrap());
    assert_eq!(issues.len(), 1);
    assert!(matches!(
        issues[0],
        RegimeIssue::ZeroContrastNotNull {
            side: SeriesSide::Bursty,
            ..
        }
    ));

    // The same artifact passes under an override document loosening eps_zero.
    let loose = ThresholdsV1::with_overrides(&serde_json::json!({ "eps_zero": 5e-4 })).unwrap();
    assert!(run_verification(dir.path(), &loose).unwrap().passed());
}

#[test]
fn input_row_order_does_not_change_the_verdict() {
    // A monotonicity violation at k=2 must be found wherever the row sits
    // in the document: series are re-sorted by kappa before evaluation.
    let ordered = vec![
        sweep_row(0.0, 0.0, 0.0),
        sweep_row(1.0, 0.5, 0.0),
        sweep_row(2.0, 0.3, 0.0),
    ];
    let mut shuffled = ordered.clone();
    shuffled.rotate_left(2);

    // ratio_min would also fire on these small contrasts; pin it down so
    // the monotonicity defect is isolated.
    let thresholds =
        ThresholdsV1::with_overrides(&serde_json::json!({ "ratio_min": 0.1 })).unwrap();

    let mut verdicts = Vec::new();
    for rows in [ordered, shuffled] {
        let dir = tempfile::tempdir().unwrap();
        write_artifact_dir(dir.path(), &rows);
        let issues = issues_of(run_verification(dir.path(), &thresholds).unwrap());
        assert_eq!(issues.len(), 1);
        match issues[0] {
            RegimeIssue::NotMonotonic {
                kappa,
                value,
                previous,
            } => {
                assert!((kappa - 2.0).abs() < f64::EPSILON);
                assert!((value - 0.3).abs() < f64::EPSILON);
                assert!((previous - 0.5).abs() < f64::EPSILON);
            }
            ref other => panic!("expected NotMonotonic, got {other:?}"),
        }
        verdicts.push(issues);
    }
    assert_eq!(verdicts[0], verdicts[1]);
}

#[test]
fn missing_zero_row_is_an_issue_not_a_crash() {
    let dir = tempfile::tempdir().unwrap();
    // No kappa=0 row at all; the k=1 diffuse row also violates containment,
    // proving checks B-D still evaluate on the remaining rows.
    let rows = vec![sweep_row(1.0, 2.0, 1e-2), sweep_row(2.0, 4.0, 1e-3)];
    write_artifact_dir(dir.path(), &rows);

    let issues = issues_of(run_verification(dir.path(), &ThresholdsV1::default()).unwrap());
    assert_eq!(
        issues[..2],
        [
            RegimeIssue::MissingZeroRow {
                side: SeriesSide::Bursty
            },
            RegimeIssue::MissingZeroRow {
                side: SeriesSide::Diffuse
            },
        ]
    );
    assert!(issues
        .iter()
        .any(|i| matches!(i, RegimeIssue::DiffuseContrastTooLarge { .. })));
}

#[test]
fn fail_report_lists_every_issue_line() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec![
        sweep_row(0.0, 2e-4, 0.0),
        sweep_row(1.0, 2.0, 1e-2),
        sweep_row(2.0, 1.0, 0.0),
    ];
    write_artifact_dir(dir.path(), &rows);

    let verdict = run_verification(dir.path(), &ThresholdsV1::default()).unwrap();
    let report = render_verdict(&verdict);
    assert!(report.starts_with("FAIL: regime call failed\n"));
    // A (zero contrast), B (diffuse at k=1), C (ratio at k=2), D (2.0 -> 1.0).
    assert_eq!(report.lines().count(), 5);
    assert!(report.contains(" - kappa=0 bursty contrast not ~0: 0.0002\n"));
    assert!(report.contains(" - Diffuse contrast too large at k=1: 0.01\n"));
    assert!(report.contains(" - Bursty contrast/kappa ratio too small at k=2: 0.5 (<1.5)\n"));
    assert!(report.contains(" - Bursty contrast not monotonic: k=2 v=1 < prev=2\n"));
}

//! Cross-process determinism: the verifier's rendered report must not be
//! influenced by process-level state.
//!
//! Spawns the `verify_fixture` binary under several environment variants
//! and asserts that all produce identical output.

use std::process::Command;

/// Resolve the path to the compiled `verify_fixture` binary.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("verify_fixture");
    path.to_string_lossy().to_string()
}

/// Run the binary with the given environment overrides.
fn run_variant(env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} (overrides={env_overrides:?}): {e}"));

    assert!(
        output.status.success(),
        "verify_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let baseline = run_variant(&[]);

    assert!(
        baseline.contains("verdict=PASS"),
        "baseline output missing verdict=PASS"
    );
    assert!(
        baseline.contains("report_sha256="),
        "baseline output missing report_sha256"
    );
    assert!(
        baseline.contains("rerun=identical"),
        "baseline output missing rerun=identical"
    );
    assert!(
        baseline.contains("bursty_rows=4"),
        "baseline output missing bursty_rows=4"
    );

    // Variant 2: different locale env.
    let variant_locale = run_variant(&[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(
        baseline, variant_locale,
        "output differs when LC_ALL=C LANG=C"
    );

    // Variant 3: spurious env vars.
    let variant_noise = run_variant(&[
        ("PROBE_NOISE", "should_not_matter"),
        ("TZ", "America/New_York"),
    ]);
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars (PROBE_NOISE, TZ)"
    );
}

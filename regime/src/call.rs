//! The regime call: four structural checks over the extracted series.
//!
//! This is a pure function of (bursty series, diffuse series, thresholds).
//! All four checks run unconditionally — no short-circuit — and every
//! violation is appended to the issue list, so a single run reports every
//! defect. Issue order is check order A→B→C→D; within a check, ascending
//! kappa as encountered (the series are pre-sorted at extraction time).
//!
//! # Checks
//!
//! - **A** Null collapse: the `kappa = 0` contrast of each series must be
//!   within `eps_zero` of zero. A missing zero row is reported per side and
//!   the check proceeds with whichever side exists.
//! - **B** Diffuse containment: `|contrast| <= diffuse_max_abs_contrast` for
//!   diffuse rows at `kappa > 0`.
//! - **C** Bursty separability and proportionality: contrast strictly
//!   positive and `contrast / kappa >= ratio_min` for bursty rows at
//!   `kappa > 0`.
//! - **D** Monotonic non-decrease of bursty contrast along ascending kappa,
//!   with `monotonic_tol` slack.
//!
//! Rows at `kappa <= 0` are exempt from B and skipped by C. Negative-kappa
//! rows are therefore untested by both; that asymmetry is part of the
//! declared rule and is preserved, not patched.

use crate::sweep::ContrastSeries;
use crate::thresholds::ThresholdsV1;

/// Absolute tolerance for locating the `kappa = 0` row (exact-match
/// semantics, not "smallest kappa").
const KAPPA_ZERO_TOL: f64 = 1e-12;

/// Which experimental condition an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSide {
    /// The bursty condition.
    Bursty,
    /// The diffuse condition.
    Diffuse,
}

impl std::fmt::Display for SeriesSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bursty => f.write_str("bursty"),
            Self::Diffuse => f.write_str("diffuse"),
        }
    }
}

/// One regime-call violation. `Display` produces the report line.
#[derive(Debug, Clone, PartialEq)]
pub enum RegimeIssue {
    /// Check A: a series has no row with `kappa = 0`.
    MissingZeroRow { side: SeriesSide },
    /// Check A: the zero-kappa contrast is not within `eps_zero` of zero.
    ZeroContrastNotNull { side: SeriesSide, value: f64 },
    /// Check B: a diffuse contrast at `kappa > 0` exceeds the containment
    /// threshold in absolute value.
    DiffuseContrastTooLarge { kappa: f64, value: f64 },
    /// Check C: a bursty contrast at `kappa > 0` is not strictly positive.
    BurstyContrastNotPositive { kappa: f64, value: f64 },
    /// Check C: `contrast / kappa` is below `ratio_min`.
    RatioTooSmall { kappa: f64, ratio: f64, min: f64 },
    /// Check D: a bursty contrast decreased (beyond tolerance) along
    /// ascending kappa.
    NotMonotonic {
        kappa: f64,
        value: f64,
        previous: f64,
    },
}

impl std::fmt::Display for RegimeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingZeroRow { side } => {
                write!(f, "Missing kappa=0.0 row in {side} series")
            }
            Self::ZeroContrastNotNull { side, value } => {
                write!(f, "kappa=0 {side} contrast not ~0: {value}")
            }
            Self::DiffuseContrastTooLarge { kappa, value } => {
                write!(f, "Diffuse contrast too large at k={kappa}: {value}")
            }
            Self::BurstyContrastNotPositive { kappa, value } => {
                write!(f, "Bursty contrast not positive at k={kappa}: {value}")
            }
            Self::RatioTooSmall { kappa, ratio, min } => {
                write!(
                    f,
                    "Bursty contrast/kappa ratio too small at k={kappa}: {ratio} (<{min})"
                )
            }
            Self::NotMonotonic {
                kappa,
                value,
                previous,
            } => {
                write!(
                    f,
                    "Bursty contrast not monotonic: k={kappa} v={value} < prev={previous}"
                )
            }
        }
    }
}

/// The replayed regime call for one verification run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeCallV1 {
    /// Violations in check order A→B→C→D; empty means the call passes.
    pub issues: Vec<RegimeIssue>,
}

impl RegimeCallV1 {
    /// `true` when no check reported a violation.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Locate the contrast at the `kappa = 0` row, if the series has one.
fn zero_row_contrast(series: &ContrastSeries) -> Option<f64> {
    series
        .points
        .iter()
        .find(|(k, _)| k.abs() < KAPPA_ZERO_TOL)
        .map(|&(_, v)| v)
}

/// Replay the pre-declared regime call.
///
/// Both series must already be sorted ascending by kappa (the extraction
/// step guarantees this); Check D relies on it for its left-to-right walk.
#[must_use]
pub fn regime_call(
    bursty: &ContrastSeries,
    diffuse: &ContrastSeries,
    thresholds: &ThresholdsV1,
) -> RegimeCallV1 {
    let mut issues = Vec::new();

    // A) Null collapse at kappa=0, each side reported independently.
    for (side, series) in [(SeriesSide::Bursty, bursty), (SeriesSide::Diffuse, diffuse)] {
        match zero_row_contrast(series) {
            None => issues.push(RegimeIssue::MissingZeroRow { side }),
            Some(value) => {
                if value.abs() > thresholds.eps_zero {
                    issues.push(RegimeIssue::ZeroContrastNotNull { side, value });
                }
            }
        }
    }

    // B) Diffuse must remain small at kappa > 0.
    for &(kappa, value) in &diffuse.points {
        if kappa > 0.0 && value.abs() > thresholds.diffuse_max_abs_contrast {
            issues.push(RegimeIssue::DiffuseContrastTooLarge { kappa, value });
        }
    }

    // C) Bursty separability + proportionality at kappa > 0. Both conditions
    // are evaluated on every row, so a non-positive contrast can yield two
    // issues for the same row.
    for &(kappa, value) in &bursty.points {
        if kappa <= 0.0 {
            continue;
        }
        if value <= 0.0 {
            issues.push(RegimeIssue::BurstyContrastNotPositive { kappa, value });
        }
        let ratio = value / kappa;
        if ratio < thresholds.ratio_min {
            issues.push(RegimeIssue::RatioTooSmall {
                kappa,
                ratio,
                min: thresholds.ratio_min,
            });
        }
    }

    // D) Monotonic non-decrease of bursty contrast along ascending kappa.
    // The first row has no predecessor and is exempt.
    let mut previous: Option<f64> = None;
    for &(kappa, value) in &bursty.points {
        if let Some(prev) = previous {
            if value + thresholds.monotonic_tol < prev {
                issues.push(RegimeIssue::NotMonotonic {
                    kappa,
                    value,
                    previous: prev,
                });
            }
        }
        previous = Some(value);
    }

    RegimeCallV1 { issues }
}

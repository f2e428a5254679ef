//! Threshold set: the four configurable parameters of the regime call.
//!
//! Constructed once at startup by merging hard-coded defaults with an
//! optional override document, immutable thereafter. Overrides are
//! fail-closed: an unknown key or a non-numeric value is a typed error,
//! never silently carried along.

/// Max allowed `|contrast|` at `kappa = 0` (Check A).
const DEFAULT_EPS_ZERO: f64 = 1e-4;
/// Max allowed `|contrast|` for the diffuse series at `kappa > 0` (Check B).
const DEFAULT_DIFFUSE_MAX_ABS_CONTRAST: f64 = 5e-3;
/// Min allowed `contrast / kappa` for the bursty series at `kappa > 0` (Check C).
const DEFAULT_RATIO_MIN: f64 = 1.5;
/// Slack allowed for the non-decrease walk (Check D).
const DEFAULT_MONOTONIC_TOL: f64 = 1e-9;

/// The immutable threshold set for one verification run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdsV1 {
    /// Max allowed `|contrast|` at `kappa = 0`.
    pub eps_zero: f64,
    /// Max allowed `|contrast|` for diffuse rows at `kappa > 0`.
    pub diffuse_max_abs_contrast: f64,
    /// Min allowed `contrast / kappa` for bursty rows at `kappa > 0`.
    pub ratio_min: f64,
    /// Slack allowed for the bursty non-decrease check.
    pub monotonic_tol: f64,
}

impl Default for ThresholdsV1 {
    fn default() -> Self {
        Self {
            eps_zero: DEFAULT_EPS_ZERO,
            diffuse_max_abs_contrast: DEFAULT_DIFFUSE_MAX_ABS_CONTRAST,
            ratio_min: DEFAULT_RATIO_MIN,
            monotonic_tol: DEFAULT_MONOTONIC_TOL,
        }
    }
}

/// Error merging a threshold override document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    /// The override document is not a JSON object.
    NotAnObject,
    /// The override document contains a key that is not one of the four
    /// threshold parameters.
    UnknownKey { key: String },
    /// A threshold value is not a JSON number.
    NotNumeric { key: String },
}

impl std::fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "threshold override is not a JSON object"),
            Self::UnknownKey { key } => write!(f, "unknown threshold key: {key}"),
            Self::NotNumeric { key } => write!(f, "threshold {key} is not a number"),
        }
    }
}

impl std::error::Error for ThresholdError {}

impl ThresholdsV1 {
    /// Build a threshold set from defaults plus an optional override document.
    ///
    /// The override may replace any subset of the four keys. Fail-closed:
    /// unknown keys and non-numeric values are errors.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError`] if the document is not an object, names an
    /// unknown key, or carries a non-numeric value.
    pub fn with_overrides(overrides: &serde_json::Value) -> Result<Self, ThresholdError> {
        let obj = overrides.as_object().ok_or(ThresholdError::NotAnObject)?;

        let mut thresholds = Self::default();
        for (key, value) in obj {
            let slot = match key.as_str() {
                "eps_zero" => &mut thresholds.eps_zero,
                "diffuse_max_abs_contrast" => &mut thresholds.diffuse_max_abs_contrast,
                "ratio_min" => &mut thresholds.ratio_min,
                "monotonic_tol" => &mut thresholds.monotonic_tol,
                _ => return Err(ThresholdError::UnknownKey { key: key.clone() }),
            };
            *slot = value.as_f64().ok_or_else(|| ThresholdError::NotNumeric {
                key: key.clone(),
            })?;
        }
        Ok(thresholds)
    }
}

//! Typed sweep schema and series extraction.
//!
//! `sweep_summary.json` is parsed into explicit record types here, at the
//! boundary. A missing or mistyped field is a [`SweepSchemaError`] naming the
//! row index and field path — a corrupt row is never silently skipped, since
//! it could mask a violation. No duck-typed JSON access survives past this
//! module; the check logic only ever sees validated numbers.

// Field path to the contrast measurement inside each condition record.
const ROI_PROBE: &str = "roi_probe";
const CONTRAST_FIELD: &str = "Delta_Lambda_roi_minus_bg";

/// One experimental trial at a fixed sweep parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRowV1 {
    /// The independent sweep variable.
    pub kappa: f64,
    /// ROI-vs-background contrast under the bursty condition.
    pub bursty_contrast: f64,
    /// ROI-vs-background contrast under the diffuse condition.
    pub diffuse_contrast: f64,
}

/// A `(kappa, contrast)` series sorted ascending by kappa.
///
/// Read-only view computed once per run by [`extract_series`]; no mutation
/// occurs after derivation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContrastSeries {
    /// Points in ascending-kappa order.
    pub points: Vec<(f64, f64)>,
}

/// Error validating the sweep summary schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepSchemaError {
    /// The document is not a JSON array.
    NotAnArray,
    /// A row is not a JSON object.
    RowNotAnObject { row: usize },
    /// A required field is missing from a row (path like
    /// `bursty.roi_probe.Delta_Lambda_roi_minus_bg`).
    FieldMissing { row: usize, field: String },
    /// A required field is present but not a JSON number.
    FieldNotNumeric { row: usize, field: String },
}

impl std::fmt::Display for SweepSchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnArray => write!(f, "sweep summary is not a JSON array"),
            Self::RowNotAnObject { row } => {
                write!(f, "sweep row {row} is not a JSON object")
            }
            Self::FieldMissing { row, field } => {
                write!(f, "sweep row {row} is missing field {field}")
            }
            Self::FieldNotNumeric { row, field } => {
                write!(f, "sweep row {row} field {field} is not a number")
            }
        }
    }
}

impl std::error::Error for SweepSchemaError {}

/// Extract one numeric field from a row, with the full dotted path in errors.
fn numeric_field(
    row_value: &serde_json::Value,
    row: usize,
    path: &[&str],
) -> Result<f64, SweepSchemaError> {
    let mut cursor = row_value;
    for segment in path {
        cursor = cursor
            .get(segment)
            .ok_or_else(|| SweepSchemaError::FieldMissing {
                row,
                field: path.join("."),
            })?;
    }
    cursor.as_f64().ok_or_else(|| SweepSchemaError::FieldNotNumeric {
        row,
        field: path.join("."),
    })
}

/// Parse the `sweep_summary.json` document into validated rows.
///
/// Row order is preserved as given; sorting happens in [`extract_series`].
///
/// # Errors
///
/// Returns [`SweepSchemaError`] on the first structural defect encountered.
/// Schema errors are fatal by design — unlike regime issues, they are not
/// collected, because a malformed document has no trustworthy remainder.
pub fn parse_sweep(value: &serde_json::Value) -> Result<Vec<SweepRowV1>, SweepSchemaError> {
    let rows_json = value.as_array().ok_or(SweepSchemaError::NotAnArray)?;

    let mut rows = Vec::with_capacity(rows_json.len());
    for (row, row_value) in rows_json.iter().enumerate() {
        if !row_value.is_object() {
            return Err(SweepSchemaError::RowNotAnObject { row });
        }
        rows.push(SweepRowV1 {
            kappa: numeric_field(row_value, row, &["kappa"])?,
            bursty_contrast: numeric_field(row_value, row, &["bursty", ROI_PROBE, CONTRAST_FIELD])?,
            diffuse_contrast: numeric_field(
                row_value,
                row,
                &["diffuse", ROI_PROBE, CONTRAST_FIELD],
            )?,
        });
    }
    Ok(rows)
}

/// Project the bursty and diffuse `(kappa, contrast)` series from the rows,
/// each sorted ascending by kappa.
#[must_use]
pub fn extract_series(rows: &[SweepRowV1]) -> (ContrastSeries, ContrastSeries) {
    let mut bursty: Vec<(f64, f64)> = rows.iter().map(|r| (r.kappa, r.bursty_contrast)).collect();
    let mut diffuse: Vec<(f64, f64)> =
        rows.iter().map(|r| (r.kappa, r.diffuse_contrast)).collect();

    bursty.sort_by(|a, b| a.0.total_cmp(&b.0));
    diffuse.sort_by(|a, b| a.0.total_cmp(&b.0));

    (
        ContrastSeries { points: bursty },
        ContrastSeries { points: diffuse },
    )
}

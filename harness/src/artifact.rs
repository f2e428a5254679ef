//! Artifact directory loading.
//!
//! An artifact directory retains exactly three required documents:
//!
//! ```text
//! <dir>/
//!   config.json         — domain configuration (read, not interpreted)
//!   sweep_summary.json  — ordered sweep rows
//!   digests.json        — producer-declared digest manifest
//! ```
//!
//! Loading is fail-closed: a missing required file, unreadable bytes, or
//! invalid JSON is a typed error and nothing downstream runs. The directory
//! is a read-only snapshot for the duration of a run; the verifier never
//! writes into it.

use std::path::{Path, PathBuf};

use probe_kernel::manifest::{DigestManifestV1, ManifestParseError};

/// The three documents every artifact directory must retain.
pub const REQUIRED_FILES: [&str; 3] = ["config.json", "sweep_summary.json", "digests.json"];

/// Error loading an artifact directory.
#[derive(Debug)]
pub enum ArtifactError {
    /// A required document is absent.
    MissingRequiredFile { name: String },
    /// A document exists but could not be read.
    Io { name: String, detail: String },
    /// A document is not valid JSON.
    JsonParse { name: String, detail: String },
    /// `digests.json` parsed but did not normalize to a digest manifest.
    ManifestInvalid(ManifestParseError),
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredFile { name } => {
                write!(f, "missing required file: {name}")
            }
            Self::Io { name, detail } => write!(f, "I/O error reading {name}: {detail}"),
            Self::JsonParse { name, detail } => {
                write!(f, "invalid JSON in {name}: {detail}")
            }
            Self::ManifestInvalid(e) => write!(f, "invalid digests.json: {e}"),
        }
    }
}

impl std::error::Error for ArtifactError {}

/// A loaded artifact directory: the three parsed documents plus the
/// directory path the manifest entries resolve against.
#[derive(Debug, Clone)]
pub struct ArtifactDirV1 {
    /// The directory the artifact was loaded from.
    pub dir: PathBuf,
    /// Parsed `config.json`. Retained for context; the core checks do not
    /// interpret it.
    pub config: serde_json::Value,
    /// Parsed `sweep_summary.json` (schema validation happens in
    /// `probe-regime`, after digest trust is established).
    pub sweep: serde_json::Value,
    /// Normalized digest manifest from `digests.json`.
    pub manifest: DigestManifestV1,
}

impl ArtifactDirV1 {
    /// Load and parse the three required documents.
    ///
    /// Required-file presence is checked for all three up front, so the
    /// first missing name reported is deterministic regardless of which
    /// reads would have failed.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError`] on a missing file, unreadable bytes,
    /// invalid JSON, or a malformed digest manifest.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        for name in REQUIRED_FILES {
            if !dir.join(name).exists() {
                return Err(ArtifactError::MissingRequiredFile {
                    name: name.to_string(),
                });
            }
        }

        let config = load_json(dir, "config.json")?;
        let sweep = load_json(dir, "sweep_summary.json")?;
        let digests = load_json(dir, "digests.json")?;

        let manifest =
            DigestManifestV1::from_value(&digests).map_err(ArtifactError::ManifestInvalid)?;

        Ok(Self {
            dir: dir.to_path_buf(),
            config,
            sweep,
            manifest,
        })
    }
}

/// Read and parse one JSON document from the directory.
pub fn load_json(dir: &Path, name: &str) -> Result<serde_json::Value, ArtifactError> {
    let bytes = std::fs::read(dir.join(name)).map_err(|e| ArtifactError::Io {
        name: name.to_string(),
        detail: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| ArtifactError::JsonParse {
        name: name.to_string(),
        detail: e.to_string(),
    })
}

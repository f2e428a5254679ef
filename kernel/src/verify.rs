//! Digest verification: compare every manifest entry against the bytes on disk.
//!
//! # Fail-closed, collect-all semantics
//!
//! Every entry is checked; the verifier does NOT stop at the first problem,
//! so a single run reports every defect. The caller must treat a non-empty
//! problem list as fatal — an artifact that cannot be trusted byte-for-byte
//! must not have its numbers analyzed.
//!
//! # Known limitation
//!
//! Manifest paths are joined to the artifact directory as given. Path
//! traversal outside the directory (`../`) is not defended against; the
//! manifest is producer-declared input, not an adversarial surface.

use std::path::Path;

use crate::digest::{sha256_file, HexDigest};
use crate::manifest::DigestManifestV1;

/// One per-path digest problem, in manifest (sorted path) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestProblem {
    /// The manifest names a path that does not exist under the artifact
    /// directory.
    MissingFile { path: String },
    /// The file exists but its computed digest differs from the expected one.
    Mismatch {
        path: String,
        expected: HexDigest,
        computed: HexDigest,
    },
    /// The file exists but could not be read.
    ReadFailed { path: String, detail: String },
}

impl std::fmt::Display for DigestProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile { path } => write!(f, "Missing file for digest: {path}"),
            Self::Mismatch {
                path,
                expected,
                computed,
            } => write!(f, "SHA mismatch for {path}: expected {expected}, got {computed}"),
            Self::ReadFailed { path, detail } => {
                write!(f, "Read failed for {path}: {detail}")
            }
        }
    }
}

/// Result of verifying a digest manifest against an artifact directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestReportV1 {
    /// Problems in sorted path order; empty means every entry verified.
    pub problems: Vec<DigestProblem>,
}

impl DigestReportV1 {
    /// `true` when every manifest entry verified byte-for-byte.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Verify every manifest entry against the files under `artifact_dir`.
///
/// Digests compare case-insensitively (both sides are normalized lowercase
/// by [`HexDigest`]). An empty manifest trivially passes. Read-only.
#[must_use]
pub fn verify_digests(artifact_dir: &Path, manifest: &DigestManifestV1) -> DigestReportV1 {
    let mut problems = Vec::new();

    for (rel_path, expected) in &manifest.entries {
        let abs_path = artifact_dir.join(rel_path);
        if !abs_path.exists() {
            problems.push(DigestProblem::MissingFile {
                path: rel_path.clone(),
            });
            continue;
        }
        match sha256_file(&abs_path) {
            Ok(computed) => {
                if computed != *expected {
                    problems.push(DigestProblem::Mismatch {
                        path: rel_path.clone(),
                        expected: expected.clone(),
                        computed,
                    });
                }
            }
            Err(e) => problems.push(DigestProblem::ReadFailed {
                path: rel_path.clone(),
                detail: e.to_string(),
            }),
        }
    }

    DigestReportV1 { problems }
}

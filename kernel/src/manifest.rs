//! Digest manifest: the producer's declared path → SHA-256 mapping.
//!
//! Two on-disk shapes are accepted, normalized once at load time so the
//! verification logic only ever sees one canonical mapping type:
//!
//! ```text
//! {"sha256": {"<relative path>": "<64-hex>", ...}}   — wrapped
//! {"<relative path>": "<64-hex>", ...}               — bare
//! ```
//!
//! The wrapper key is recognized only when its value is itself an object;
//! anything else is treated as the bare form and fails entry validation.

use std::collections::BTreeMap;

use crate::digest::HexDigest;

/// JSON key under which the producer may nest the mapping.
const WRAPPER_KEY: &str = "sha256";

/// Normalized digest manifest: relative path → expected digest.
///
/// `BTreeMap` gives deterministic iteration order, so problem reports do not
/// depend on the key order of the JSON document (digest verification is
/// order-independent by contract).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigestManifestV1 {
    /// Entries in sorted path order.
    pub entries: BTreeMap<String, HexDigest>,
}

/// Error normalizing a digest manifest from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestParseError {
    /// The document (or the wrapped mapping) is not a JSON object.
    NotAnObject,
    /// An entry's value is not a JSON string.
    EntryNotAString { path: String },
    /// An entry's value is not a valid 64-hex SHA-256 string.
    EntryNotADigest { path: String, found: String },
}

impl std::fmt::Display for ManifestParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "digest manifest is not a JSON object"),
            Self::EntryNotAString { path } => {
                write!(f, "digest for {path} is not a string")
            }
            Self::EntryNotADigest { path, found } => {
                write!(f, "digest for {path} is not 64-hex sha256: {found}")
            }
        }
    }
}

impl std::error::Error for ManifestParseError {}

impl DigestManifestV1 {
    /// Normalize a parsed `digests.json` document into the canonical mapping.
    ///
    /// Accepts the wrapped form (`{"sha256": {...}}`) and the bare mapping.
    /// An empty mapping is valid (and trivially verifies).
    ///
    /// # Errors
    ///
    /// Returns [`ManifestParseError`] if the document is not an object or any
    /// entry is not a valid digest string.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ManifestParseError> {
        let top = value.as_object().ok_or(ManifestParseError::NotAnObject)?;

        let mapping = match top.get(WRAPPER_KEY).and_then(|v| v.as_object()) {
            Some(wrapped) => wrapped,
            None => top,
        };

        let mut entries = BTreeMap::new();
        for (path, digest_value) in mapping {
            let digest_str =
                digest_value
                    .as_str()
                    .ok_or_else(|| ManifestParseError::EntryNotAString {
                        path: path.clone(),
                    })?;
            let digest = HexDigest::parse(digest_str).ok_or_else(|| {
                ManifestParseError::EntryNotADigest {
                    path: path.clone(),
                    found: digest_str.to_string(),
                }
            })?;
            entries.insert(path.clone(), digest);
        }

        Ok(Self { entries })
    }
}

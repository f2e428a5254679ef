//! SHA-256 digest type and file hashing.
//!
//! **Exactly one place computes file digests** in the verifier. The digest is
//! over the file's raw bytes — no canonicalization, no domain separation. The
//! producer recorded plain `sha256(content)` hex strings, and the whole point
//! of the check is byte-identity with what was retained.

use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Read size for streamed file hashing. Any chunk size yields an identical
/// digest; 1 MiB matches the producer's retention tooling.
const HASH_CHUNK_BYTES: usize = 1024 * 1024;

/// A lowercase SHA-256 hex digest (exactly 64 hex characters).
///
/// Invariant: the inner string is always 64 lowercase hex characters
/// (enforced by [`HexDigest::parse`]; [`sha256_bytes`] and [`sha256_file`]
/// produce it directly from `hex::encode`, which is lowercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexDigest(String);

impl HexDigest {
    /// Parse an expected-digest string as recorded by the producer.
    ///
    /// Comparison with computed digests is case-insensitive, so uppercase
    /// input is accepted and normalized to lowercase here.
    ///
    /// Returns `None` if the string is not exactly 64 hex characters.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != 64 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(s.to_ascii_lowercase()))
    }

    /// The lowercase hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the SHA-256 digest of a byte slice.
#[must_use]
pub fn sha256_bytes(data: &[u8]) -> HexDigest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    HexDigest(hex::encode(hasher.finalize()))
}

/// Compute the SHA-256 digest of a file's full byte content, streamed in
/// fixed-size chunks.
///
/// # Errors
///
/// Returns the underlying [`std::io::Error`] if the file cannot be opened
/// or read.
pub fn sha256_file(path: &Path) -> Result<HexDigest, std::io::Error> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; HASH_CHUNK_BYTES];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(HexDigest(hex::encode(hasher.finalize())))
}

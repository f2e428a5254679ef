//! Probe Harness: orchestration for the regime probe artifact verifier.
//!
//! The harness loads the artifact directory, runs the digest stage through
//! `probe-kernel`, and — only once every retained byte is trusted — replays
//! the regime call through `probe-regime`. It implements no digest or check
//! logic itself; it owns sequencing, rendering, and the process contract.
//!
//! # Pipeline
//!
//! ```text
//! ArtifactDirV1::load() → verify_digests()
//!   → parse_sweep() → extract_series() → regime_call()
//!   → render report → exit 0/1
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod artifact;
pub mod report;
pub mod verifier;

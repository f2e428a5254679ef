//! Probe Kernel: digest primitives for the regime probe artifact verifier.
//!
//! # API Surface
//!
//! - [`digest::sha256_file`] -- streamed SHA-256 of a file's full byte content
//! - [`manifest::DigestManifestV1`] -- normalized path → expected digest mapping
//! - [`verify::verify_digests`] -- compare every manifest entry against disk
//!
//! # Module Dependency Direction
//!
//! `digest` ← `manifest` ← `verify`
//!
//! One-way only. No cycles. `digest` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod manifest;
pub mod verify;

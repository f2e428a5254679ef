//! Lock-test support for the regime probe verifier.
//!
//! Helpers build self-consistent artifact directories (retained files plus a
//! digest manifest that actually matches their bytes), so negative tests
//! exercise the defect they intend to and not an accidental digest mismatch.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

//! Probe Regime: the pre-declared regime call, replayed mechanically.
//!
//! This crate owns the numeric side of the verifier: the typed sweep schema,
//! the threshold set, and the four structural checks. It performs no file
//! I/O and does not depend on `probe-kernel` — digest trust is established
//! by the caller before any of this code runs.
//!
//! # Key types
//!
//! - [`sweep::SweepRowV1`] — one trial, validated at parse time
//! - [`sweep::ContrastSeries`] — `(kappa, contrast)` pairs sorted by kappa
//! - [`thresholds::ThresholdsV1`] — the four configurable parameters
//! - [`call::RegimeCallV1`] — verdict plus ordered issue list

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod call;
pub mod sweep;
pub mod thresholds;

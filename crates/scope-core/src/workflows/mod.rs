//! # Workflows Module
//!
//! The public entry points of AminoScope.
//!
//! ## Overview
//!
//! Workflows run the [`engine`](crate::engine) analyzers over a sequence and package
//! their results into immutable reports. Callers outside this crate are expected to
//! go through these functions rather than call the analyzers directly.
//!
//! - **Single Sequence** ([`analyze`]) - Normalizes a raw string and assembles one
//!   [`AnalysisReport`](analyze::AnalysisReport). Degenerate input (empty, missing,
//!   unrecognized characters only) still yields a well-formed report.
//! - **Dataset Batch** ([`batch`]) - Analyzes every protein of a dataset
//!   independently, in parallel when the `parallel` feature is enabled, with progress
//!   reporting and CSV export.

pub mod analyze;
pub mod batch;

//! # AminoScope Core Library
//!
//! A deterministic analysis engine for linear amino-acid sequences. Given a raw
//! sequence string it derives residue classifications, compositional percentages,
//! physicochemical indices and motif occurrences.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data: the canonical residue partition and
//!   classification table, normalized sequences, constant property tables, motif
//!   patterns and registries, and dataset I/O.
//!
//! - **[`engine`]: The Logic Core.** Pure analyzers over a normalized sequence:
//!   composition, physicochemical metrics and the motif scanner, together with the
//!   error taxonomy and batch configuration.
//!
//! - **[`workflows`]: The Public API.** Assembles engine results into immutable
//!   [`AnalysisReport`](workflows::analyze::AnalysisReport)s, for a single sequence or
//!   for a whole dataset.
//!
//! ## Quick Start
//!
//! ```
//! let report = aminoscope::analyze("KK").unwrap();
//! assert_eq!(report.net_charge(), 1.8);
//!
//! let unknown = aminoscope::describe_residue('Z');
//! assert_eq!(unknown.name, "Unknown");
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::models::residue::describe_residue;
pub use crate::workflows::analyze::analyze;

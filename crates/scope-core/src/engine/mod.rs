//! # Engine Module
//!
//! The pure analyzers of AminoScope.
//!
//! ## Overview
//!
//! Every function here is a total, synchronous function of a normalized
//! [`Sequence`](crate::core::models::sequence::Sequence). No state is shared between
//! calls, so the engine can be driven from any number of threads at once.
//!
//! - [`composition`] - Five-class partition counts and percentages
//! - [`metrics`] - Net charge, aromaticity, aliphatic index, molecular weight, GRAVY
//!   and the longest hydrophobic run
//! - [`scanner`] - Motif occurrence counts in registry order
//! - [`rounding`] - The half-up rounding and percentage helpers every metric shares
//! - [`error`] - The engine error taxonomy; only an internal-consistency failure can
//!   interrupt an analysis
//! - [`config`] and [`progress`] - Batch analysis settings and progress callbacks

pub mod composition;
pub mod config;
pub mod error;
pub mod metrics;
pub mod progress;
pub mod rounding;
pub mod scanner;

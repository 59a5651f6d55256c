//! # Core Module
//!
//! Stateless building blocks shared by every analysis in AminoScope.
//!
//! ## Overview
//!
//! Nothing in this module performs an analysis by itself. It defines the vocabulary
//! the [`engine`](crate::engine) computes over:
//!
//! - **Residue Representation** ([`models`]) - The canonical residue partition, the
//!   classification table, normalized sequences and dataset records
//! - **Property Tables** ([`properties`]) - Per-residue masses, hydropathy values and
//!   charge weights
//! - **Motif Definitions** ([`motifs`]) - Fixed-width sequence patterns and the
//!   ordered registry of named motifs
//! - **Dataset I/O** ([`io`]) - FASTA and JSON dataset readers and writers
//!
//! All tables are process-wide immutable statics. They are built at compile time
//! (`phf`) or once on first use, and are safe to share across threads.

pub mod io;
pub mod models;
pub mod motifs;
pub mod properties;

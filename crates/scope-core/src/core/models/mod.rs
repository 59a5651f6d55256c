//! # Core Models Module
//!
//! Data structures describing residues, sequences and datasets.
//!
//! ## Key Components
//!
//! - [`residue`] - The single residue partition, its classification table and
//!   the total [`describe_residue`](residue::describe_residue) lookup
//! - [`sequence`] - Normalized, immutable residue sequences
//! - [`protein`] - Dataset records and the built-in sample dataset
//!
//! ## Usage
//!
//! ```
//! use aminoscope::core::models::residue::{ResidueClass, describe_residue};
//! use aminoscope::core::models::sequence::Sequence;
//!
//! let seq = Sequence::normalize("mvhl");
//! assert_eq!(seq.to_string(), "MVHL");
//! assert_eq!(describe_residue('h').class, ResidueClass::Positive);
//! ```

pub mod protein;
pub mod residue;
pub mod sequence;

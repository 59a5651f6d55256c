//! # Motifs Module
//!
//! Short, named sequence patterns probed by the motif scanner.
//!
//! - [`pattern`] - A small fixed-width pattern language and its non-overlapping
//!   left-to-right matcher
//! - [`registry`] - The ordered table of named motifs: the built-in probes plus any
//!   loaded from TOML files
//!
//! ```
//! use aminoscope::core::motifs::pattern::MotifPattern;
//!
//! let p_loop = MotifPattern::parse("[AG]....GKT").unwrap();
//! let residues: Vec<char> = "GGGGGGKTGKT".chars().collect();
//! assert_eq!(p_loop.count_matches(&residues), 1);
//! ```

pub mod pattern;
pub mod registry;

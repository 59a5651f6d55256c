use crate::core::models::residue::ResidueClass;
use crate::core::motifs::registry::MotifLoadError;
use thiserror::Error;

/// The composition class sets disagree with the residue classification table.
///
/// This signals a programming defect, never bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("Residue '{code}' is a member of both the {first} and {second} class sets")]
    DuplicateMembership {
        code: char,
        first: ResidueClass,
        second: ResidueClass,
    },

    #[error("Residue '{code}' is {table} in the classification table but {sets} in the class sets")]
    ClassMismatch {
        code: char,
        table: ResidueClass,
        sets: ResidueClass,
    },

    #[error("Class sets matched {classified} residues in a sequence of length {length}")]
    CountOverflow { length: usize, classified: usize },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Internal consistency failure: {0}")]
    Consistency(#[from] ConsistencyError),

    #[error("Motif registry error: {0}")]
    MotifRegistry(#[from] MotifLoadError),
}

//! # Dataset I/O Module
//!
//! Readers and writers for protein datasets.
//!
//! - [`traits`] - The [`DatasetFile`](traits::DatasetFile) interface shared by all formats
//! - [`fasta`] - Multi-record FASTA
//! - [`json`] - JSON arrays of protein objects
//!
//! Batch results are exported to CSV by
//! [`workflows::batch::write_csv`](crate::workflows::batch::write_csv), which reports
//! failures as a [`DatasetError`] as well.
//!
//! Both readers sanitize sequences (upper-case, canonical residues only) because the
//! analysis engine itself never strips characters.

pub mod fasta;
pub mod json;
pub mod traits;

use crate::core::models::protein::Protein;
use std::path::Path;
use thiserror::Error;
use traits::DatasetFile;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON dataset must be an array of proteins")]
    NotAnArray,
    #[error("Protein at index {index} is missing a valid sequence")]
    MissingSequence { index: usize },
    #[error("FASTA input has no records")]
    NoRecords,
    #[error("No valid sequences found in FASTA input")]
    NoValidSequences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Fasta,
    Json,
}

impl DatasetFormat {
    /// `.json` files are JSON; everything else is read as FASTA.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DatasetFormat::Json,
            _ => DatasetFormat::Fasta,
        }
    }
}

pub fn read_dataset(path: &Path) -> Result<Vec<Protein>, DatasetError> {
    match DatasetFormat::from_path(path) {
        DatasetFormat::Json => json::JsonFile::read_from_path(path),
        DatasetFormat::Fasta => fasta::FastaFile::read_from_path(path),
    }
}

pub fn write_dataset(dataset: &[Protein], path: &Path) -> Result<(), DatasetError> {
    match DatasetFormat::from_path(path) {
        DatasetFormat::Json => json::JsonFile::write_to_path(dataset, path),
        DatasetFormat::Fasta => fasta::FastaFile::write_to_path(dataset, path),
    }
}

use super::DatasetError;
use crate::core::models::protein::Protein;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Common interface of the dataset file formats.
///
/// Implementors parse a whole dataset from a buffered reader and serialize one back.
pub trait DatasetFile {
    /// Reads every usable protein record.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or holds no usable record.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Protein>, DatasetError>;

    /// Writes `dataset` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(dataset: &[Protein], writer: &mut impl Write) -> Result<(), DatasetError>;

    fn read_from_str(content: &str) -> Result<Vec<Protein>, DatasetError> {
        Self::read_from(&mut content.as_bytes())
    }

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Protein>, DatasetError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(dataset: &[Protein], path: P) -> Result<(), DatasetError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(dataset, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

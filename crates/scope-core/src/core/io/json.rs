use super::DatasetError;
use super::traits::DatasetFile;
use crate::core::models::protein::Protein;
use crate::core::models::sequence::Sequence;
use serde_json::Value;
use std::io::{BufRead, Write};

/// JSON datasets: a top-level array of protein objects.
///
/// Only `sequence` is required. Scalars are accepted loosely (`"id": 7` becomes
/// `"7"`), missing fields get positional defaults.
pub struct JsonFile;

fn loose_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn protein_from_value(index: usize, value: &Value) -> Result<Protein, DatasetError> {
    let raw_sequence = loose_string(value.get("sequence")).unwrap_or_default();
    let sequence = Sequence::sanitize(&raw_sequence);
    if sequence.is_empty() {
        return Err(DatasetError::MissingSequence { index });
    }

    let length = value
        .get("length")
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .unwrap_or(sequence.len());
    let tags = value
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| tags.iter().filter_map(|t| loose_string(Some(t))).collect())
        .unwrap_or_default();

    Ok(Protein {
        id: loose_string(value.get("id")).unwrap_or_else(|| format!("p_{}", index + 1)),
        name: loose_string(value.get("name"))
            .unwrap_or_else(|| format!("Protein {}", index + 1)),
        organism: loose_string(value.get("organism")).filter(|o| !o.is_empty()),
        length,
        sequence: sequence.to_string(),
        tags,
    })
}

impl DatasetFile for JsonFile {
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Protein>, DatasetError> {
        let raw: Value = serde_json::from_reader(reader)?;
        let entries = raw.as_array().ok_or(DatasetError::NotAnArray)?;
        entries
            .iter()
            .enumerate()
            .map(|(index, value)| protein_from_value(index, value))
            .collect()
    }

    fn write_to(dataset: &[Protein], writer: &mut impl Write) -> Result<(), DatasetError> {
        serde_json::to_writer_pretty(&mut *writer, dataset)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// A one-entry dataset showing the accepted shape.
pub fn template() -> Vec<Protein> {
    vec![
        Protein::new(
            "custom_1",
            "My Protein",
            "MVHLTPEEKSAVTALWGKVNVDEVGGEALGRLLVVYPWTQRFF",
        )
        .with_organism("Unknown")
        .with_tags(["custom"]),
    ]
}

use super::DatasetError;
use super::traits::DatasetFile;
use crate::core::models::protein::Protein;
use crate::core::models::sequence::Sequence;
use std::io::{BufRead, Read, Write};

const LINE_WIDTH: usize = 60;

/// Multi-record FASTA datasets.
///
/// The text is cut at every line that starts with `>`. Each non-empty piece is
/// trimmed, its first line is the header and the rest is the sequence. The name is
/// the header up to the first `|`. Pieces whose sequence is empty after
/// sanitization are skipped, but still count towards the `fasta_<n>` numbering;
/// that includes text before the first `>`, even blank lines.
pub struct FastaFile;

/// Splits at every `>` that opens a line, dropping the `>` itself.
fn split_records(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, _) in text.match_indices('>') {
        if i == 0 || text.as_bytes()[i - 1] == b'\n' {
            pieces.push(&text[start..i]);
            start = i + 1;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

impl DatasetFile for FastaFile {
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Protein>, DatasetError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let content = content.replace('\r', "");

        let blocks: Vec<&str> = split_records(&content)
            .into_iter()
            .filter(|piece| !piece.is_empty())
            .collect();
        if blocks.is_empty() {
            return Err(DatasetError::NoRecords);
        }

        let proteins: Vec<Protein> = blocks
            .iter()
            .enumerate()
            .filter_map(|(i, block)| {
                let mut lines = block.trim().split('\n');
                let header = lines.next().unwrap_or_default().trim();
                let sequence = Sequence::sanitize(&lines.collect::<String>());
                if sequence.is_empty() {
                    return None;
                }
                let name = header.split('|').next().unwrap_or_default().trim();
                let name = if name.is_empty() {
                    format!("FASTA {}", i + 1)
                } else {
                    name.to_string()
                };
                Some(
                    Protein::new(format!("fasta_{}", i + 1), name, sequence.to_string())
                        .with_tags(["uploaded"]),
                )
            })
            .collect();

        if proteins.is_empty() {
            return Err(DatasetError::NoValidSequences);
        }
        Ok(proteins)
    }

    fn write_to(dataset: &[Protein], writer: &mut impl Write) -> Result<(), DatasetError> {
        for protein in dataset {
            writeln!(writer, ">{}", protein.name)?;
            let residues: Vec<char> = protein.sequence.chars().collect();
            for chunk in residues.chunks(LINE_WIDTH) {
                writeln!(writer, "{}", chunk.iter().collect::<String>())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_parses_multiple_records() {
        let content = ">sp|P69905|HBA_HUMAN Hemoglobin\nMVLSPADKTN\nVKAAWGKVGA\n>Second one\nmkv\n";
        let dataset = FastaFile::read_from_str(content).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].id, "fasta_1");
        assert_eq!(dataset[0].name, "sp");
        assert_eq!(dataset[0].sequence, "MVLSPADKTNVKAAWGKVGA");
        assert_eq!(dataset[0].length, 20);
        assert_eq!(dataset[0].tags, vec!["uploaded".to_string()]);
        assert_eq!(dataset[1].name, "Second one");
        assert_eq!(dataset[1].sequence, "MKV");
    }

    #[test]
    fn read_handles_crlf_and_strips_invalid_characters() {
        let content = ">p1\r\nMK*V-X\r\nAA\r\n";
        let dataset = FastaFile::read_from_str(content).unwrap();
        assert_eq!(dataset[0].name, "p1");
        assert_eq!(dataset[0].sequence, "MKVAA");
    }

    #[test]
    fn read_skips_empty_records_but_keeps_numbering() {
        let content = ">empty\n***\n>real\nACD\n";
        let dataset = FastaFile::read_from_str(content).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].id, "fasta_2");
        assert_eq!(dataset[0].name, "real");
    }

    #[test]
    fn read_names_headerless_record_by_index() {
        let content = ">| only id\nKK\n";
        let dataset = FastaFile::read_from_str(content).unwrap();
        assert_eq!(dataset[0].id, "fasta_1");
        assert_eq!(dataset[0].name, "FASTA 1");
    }

    #[test]
    fn read_takes_first_line_of_trimmed_record_as_header() {
        let content = ">\nACD\n>second\nKK\n";
        let dataset = FastaFile::read_from_str(content).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].id, "fasta_2");
        assert_eq!(dataset[0].name, "second");
    }

    #[test]
    fn read_counts_text_before_first_header_as_a_record() {
        let blank_lines = FastaFile::read_from_str("\n\n>a\nACD\n").unwrap();
        assert_eq!(blank_lines.len(), 1);
        assert_eq!(blank_lines[0].id, "fasta_2");

        let bare = FastaFile::read_from_str("untitled\nMKV\n>b\nKK").unwrap();
        assert_eq!(bare[0].id, "fasta_1");
        assert_eq!(bare[0].name, "untitled");
        assert_eq!(bare[0].sequence, "MKV");
        assert_eq!(bare[1].id, "fasta_2");
    }

    #[test]
    fn read_only_splits_on_headers_at_line_start() {
        let dataset = FastaFile::read_from_str(">a>b\nAC>D\n").unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].name, "a>b");
        assert_eq!(dataset[0].sequence, "ACD");
    }

    #[test]
    fn read_fails_on_empty_input() {
        assert!(matches!(
            FastaFile::read_from_str(""),
            Err(DatasetError::NoRecords)
        ));
    }

    #[test]
    fn read_fails_when_no_record_has_residues() {
        assert!(matches!(
            FastaFile::read_from_str(">a\n123\n>b\n"),
            Err(DatasetError::NoValidSequences)
        ));
    }

    #[test]
    fn write_wraps_sequences() {
        let protein = Protein::new("1", "Long", "A".repeat(130));
        let mut out = Vec::new();
        FastaFile::write_to(&[protein], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], ">Long");
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 10);
    }
}

use super::residue::{is_canonical, to_single_uppercase};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Position {position} is out of range for a sequence of length {length}")]
    PositionOutOfRange { position: usize, length: usize },
}

/// An upper-cased, immutable residue sequence.
///
/// Normalization never removes characters: its length is the character count of the
/// upper-cased input. Stripping non-canonical characters is opt-in through
/// [`Sequence::sanitize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    residues: Vec<char>,
}

impl Sequence {
    pub fn normalize(raw: &str) -> Self {
        Self {
            residues: raw.to_uppercase().chars().collect(),
        }
    }

    /// Upper-cases `raw` and drops every character outside the canonical alphabet.
    pub fn sanitize(raw: &str) -> Self {
        Self {
            residues: raw
                .to_uppercase()
                .chars()
                .filter(|&c| is_canonical(c))
                .collect(),
        }
    }

    /// Number of characters [`Sequence::sanitize`] would drop from `raw`.
    pub fn count_non_canonical(raw: &str) -> usize {
        raw.to_uppercase()
            .chars()
            .filter(|&c| !is_canonical(c))
            .count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    #[inline]
    pub fn residues(&self) -> &[char] {
        &self.residues
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.residues.iter().copied()
    }

    pub fn count_of(&self, code: char) -> usize {
        self.residues.iter().filter(|&&c| c == code).count()
    }

    /// Per-character occurrence counts, including unrecognized characters.
    pub fn residue_counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for &c in &self.residues {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    /// Returns a copy with the residue at 0-based `position` replaced by `residue`
    /// (upper-cased).
    pub fn substitute(&self, position: usize, residue: char) -> Result<Self, SequenceError> {
        if position >= self.residues.len() {
            return Err(SequenceError::PositionOutOfRange {
                position,
                length: self.residues.len(),
            });
        }
        let mut residues = self.residues.clone();
        residues[position] = to_single_uppercase(residue);
        Ok(Self { residues })
    }
}

impl From<&str> for Sequence {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

/// A missing sequence is analyzed as the empty sequence.
impl From<Option<&str>> for Sequence {
    fn from(raw: Option<&str>) -> Self {
        raw.map(Self::normalize).unwrap_or_default()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.residues.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_without_removing_characters() {
        let seq = Sequence::normalize("mk-x 1");
        assert_eq!(seq.to_string(), "MK-X 1");
        assert_eq!(seq.len(), 6);
    }

    #[test]
    fn normalize_of_empty_string_is_empty() {
        let seq = Sequence::normalize("");
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn missing_sequence_becomes_empty() {
        assert!(Sequence::from(None).is_empty());
        assert_eq!(Sequence::from(Some("ak")).to_string(), "AK");
    }

    #[test]
    fn sanitize_strips_everything_outside_canonical_alphabet() {
        let seq = Sequence::sanitize("mvh l*t-pbzx\n");
        assert_eq!(seq.to_string(), "MVHLTP");
    }

    #[test]
    fn count_non_canonical_counts_dropped_characters() {
        assert_eq!(Sequence::count_non_canonical("ACDXZ1"), 3);
        assert_eq!(Sequence::count_non_canonical("acd"), 0);
        assert_eq!(Sequence::count_non_canonical(""), 0);
    }

    #[test]
    fn residue_counts_include_unrecognized_characters() {
        let counts = Sequence::normalize("AAXk").residue_counts();
        assert_eq!(counts.get(&'A'), Some(&2));
        assert_eq!(counts.get(&'X'), Some(&1));
        assert_eq!(counts.get(&'K'), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn count_of_returns_zero_for_absent_residue() {
        let seq = Sequence::normalize("KKR");
        assert_eq!(seq.count_of('K'), 2);
        assert_eq!(seq.count_of('D'), 0);
    }

    #[test]
    fn substitute_replaces_single_residue_and_uppercases() {
        let seq = Sequence::normalize("MVHL");
        let mutated = seq.substitute(2, 'a').unwrap();
        assert_eq!(mutated.to_string(), "MVAL");
        assert_eq!(seq.to_string(), "MVHL");
    }

    #[test]
    fn substitute_rejects_out_of_range_position() {
        let seq = Sequence::normalize("MV");
        assert_eq!(
            seq.substitute(2, 'A'),
            Err(SequenceError::PositionOutOfRange {
                position: 2,
                length: 2
            })
        );
    }
}

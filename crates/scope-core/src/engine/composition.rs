use super::error::{ConsistencyError, EngineError};
use super::rounding::pct;
use crate::core::models::residue::{ResidueClass, canonical_residues};
use crate::core::models::sequence::Sequence;
use once_cell::sync::Lazy;
use serde::Serialize;

static CLASS_SETS: Lazy<Result<ClassSets, ConsistencyError>> = Lazy::new(ClassSets::from_partition);

/// Membership sets for the four explicitly counted classes.
///
/// `Special` has no set: it is whatever the other four leave over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSets {
    hydrophobic: Vec<char>,
    polar: Vec<char>,
    positive: Vec<char>,
    negative: Vec<char>,
}

impl ClassSets {
    pub fn new(
        hydrophobic: impl IntoIterator<Item = char>,
        polar: impl IntoIterator<Item = char>,
        positive: impl IntoIterator<Item = char>,
        negative: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            hydrophobic: hydrophobic.into_iter().collect(),
            polar: polar.into_iter().collect(),
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }

    /// Derives the sets from the residue classification table and verifies them.
    pub fn from_partition() -> Result<Self, ConsistencyError> {
        let sets = Self::new(
            ResidueClass::Hydrophobic.members(),
            ResidueClass::Polar.members(),
            ResidueClass::Positive.members(),
            ResidueClass::Negative.members(),
        );
        sets.verify()?;
        Ok(sets)
    }

    /// The process-wide sets, built once on first use.
    pub fn shared() -> Result<&'static ClassSets, ConsistencyError> {
        CLASS_SETS.as_ref().map_err(Clone::clone)
    }

    pub fn members(&self, class: ResidueClass) -> &[char] {
        match class {
            ResidueClass::Hydrophobic => &self.hydrophobic,
            ResidueClass::Polar => &self.polar,
            ResidueClass::Positive => &self.positive,
            ResidueClass::Negative => &self.negative,
            ResidueClass::Special => &[],
        }
    }

    /// Checks that, restricted to the canonical codes, the sets reproduce the
    /// classification table exactly.
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        for residue in canonical_residues() {
            let mut memberships = ResidueClass::EXPLICIT
                .into_iter()
                .filter(|&class| self.members(class).contains(&residue.code));
            let assigned = memberships.next().unwrap_or(ResidueClass::Special);
            if let Some(second) = memberships.next() {
                return Err(ConsistencyError::DuplicateMembership {
                    code: residue.code,
                    first: assigned,
                    second,
                });
            }
            if assigned != residue.class {
                return Err(ConsistencyError::ClassMismatch {
                    code: residue.code,
                    table: residue.class,
                    sets: assigned,
                });
            }
        }
        Ok(())
    }

    /// Counts each explicit class by membership and derives `special` as the
    /// remainder.
    pub fn count(&self, sequence: &Sequence) -> Result<CompositionCounts, ConsistencyError> {
        let count_in = |class: ResidueClass| {
            let members = self.members(class);
            sequence.iter().filter(|c| members.contains(c)).count()
        };
        let hydrophobic = count_in(ResidueClass::Hydrophobic);
        let polar = count_in(ResidueClass::Polar);
        let positive = count_in(ResidueClass::Positive);
        let negative = count_in(ResidueClass::Negative);

        let classified = hydrophobic + polar + positive + negative;
        let special = sequence.len().checked_sub(classified).ok_or(
            ConsistencyError::CountOverflow {
                length: sequence.len(),
                classified,
            },
        )?;

        Ok(CompositionCounts {
            hydrophobic,
            polar,
            positive,
            negative,
            special,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompositionCounts {
    pub hydrophobic: usize,
    pub polar: usize,
    pub positive: usize,
    pub negative: usize,
    pub special: usize,
}

impl CompositionCounts {
    pub fn get(&self, class: ResidueClass) -> usize {
        match class {
            ResidueClass::Hydrophobic => self.hydrophobic,
            ResidueClass::Polar => self.polar,
            ResidueClass::Positive => self.positive,
            ResidueClass::Negative => self.negative,
            ResidueClass::Special => self.special,
        }
    }

    pub fn total(&self) -> usize {
        self.hydrophobic + self.polar + self.positive + self.negative + self.special
    }
}

/// Class percentages, each rounded to one decimal independently.
///
/// Because of that independent rounding the five values need not add up to exactly
/// 100.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub hydrophobic_pct: f64,
    pub polar_pct: f64,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub special_pct: f64,
}

impl Composition {
    pub fn from_counts(counts: &CompositionCounts, length: usize) -> Self {
        Self {
            hydrophobic_pct: pct(counts.hydrophobic, length),
            polar_pct: pct(counts.polar, length),
            positive_pct: pct(counts.positive, length),
            negative_pct: pct(counts.negative, length),
            special_pct: pct(counts.special, length),
        }
    }

    pub fn get(&self, class: ResidueClass) -> f64 {
        match class {
            ResidueClass::Hydrophobic => self.hydrophobic_pct,
            ResidueClass::Polar => self.polar_pct,
            ResidueClass::Positive => self.positive_pct,
            ResidueClass::Negative => self.negative_pct,
            ResidueClass::Special => self.special_pct,
        }
    }

    pub fn total(&self) -> f64 {
        ResidueClass::ALL.iter().map(|&class| self.get(class)).sum()
    }
}

pub fn count_classes(sequence: &Sequence) -> Result<CompositionCounts, EngineError> {
    Ok(ClassSets::shared()?.count(sequence)?)
}

pub fn composition(sequence: &Sequence) -> Result<Composition, EngineError> {
    let counts = count_classes(sequence)?;
    Ok(Composition::from_counts(&counts, sequence.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        Sequence::normalize(s)
    }

    #[test]
    fn class_sets_agree_with_classification_table() {
        let sets = ClassSets::from_partition().unwrap();
        for residue in canonical_residues() {
            let in_sets: Vec<_> = ResidueClass::EXPLICIT
                .into_iter()
                .filter(|&class| sets.members(class).contains(&residue.code))
                .collect();
            match residue.class {
                ResidueClass::Special => assert!(in_sets.is_empty(), "{}", residue.code),
                class => assert_eq!(in_sets, vec![class], "{}", residue.code),
            }
        }
    }

    #[test]
    fn class_sets_have_expected_members() {
        let sets = ClassSets::shared().unwrap();
        let as_string = |class| sets.members(class).iter().collect::<String>();
        assert_eq!(as_string(ResidueClass::Hydrophobic), "AFILMVW");
        assert_eq!(as_string(ResidueClass::Polar), "NQSTY");
        assert_eq!(as_string(ResidueClass::Positive), "HKR");
        assert_eq!(as_string(ResidueClass::Negative), "DE");
    }

    #[test]
    fn verify_detects_duplicate_membership() {
        let sets = ClassSets::new("AILMFWV".chars(), "STNQYK".chars(), "KRH".chars(), "DE".chars());
        assert_eq!(
            sets.verify(),
            Err(ConsistencyError::DuplicateMembership {
                code: 'K',
                first: ResidueClass::Polar,
                second: ResidueClass::Positive,
            })
        );
    }

    #[test]
    fn verify_detects_class_mismatch() {
        let sets = ClassSets::new("AILMFWVC".chars(), "STNQY".chars(), "KRH".chars(), "DE".chars());
        assert_eq!(
            sets.verify(),
            Err(ConsistencyError::ClassMismatch {
                code: 'C',
                table: ResidueClass::Special,
                sets: ResidueClass::Hydrophobic,
            })
        );
    }

    #[test]
    fn count_raises_instead_of_going_negative_when_sets_overlap() {
        let sets = ClassSets::new("AK".chars(), "".chars(), "K".chars(), "".chars());
        assert_eq!(
            sets.count(&seq("KK")),
            Err(ConsistencyError::CountOverflow {
                length: 2,
                classified: 4
            })
        );
    }

    #[test]
    fn counts_sum_to_length_including_unrecognized_characters() {
        let counts = count_classes(&seq("ACDEFGHIKLMNPQRSTVWYXZ*")).unwrap();
        assert_eq!(
            counts,
            CompositionCounts {
                hydrophobic: 7,
                polar: 5,
                positive: 3,
                negative: 2,
                special: 6,
            }
        );
        assert_eq!(counts.total(), 23);
    }

    #[test]
    fn composition_of_empty_sequence_is_all_zero() {
        let composition = composition(&seq("")).unwrap();
        assert_eq!(composition, Composition::default());
        assert_eq!(composition.total(), 0.0);
    }

    #[test]
    fn composition_of_all_hydrophobic_sequence() {
        let composition = composition(&seq("AAAAA")).unwrap();
        assert_eq!(composition.hydrophobic_pct, 100.0);
        assert_eq!(composition.special_pct, 0.0);
    }

    #[test]
    fn composition_is_case_insensitive_after_normalization() {
        assert_eq!(
            composition(&seq("kkdd")).unwrap(),
            composition(&seq("KKDD")).unwrap()
        );
    }

    #[test]
    fn independent_rounding_may_miss_one_hundred_within_tolerance() {
        let composition = composition(&seq("CAACAAAAHAAH")).unwrap();
        assert_eq!(composition.hydrophobic_pct, 66.7);
        assert_eq!(composition.positive_pct, 16.7);
        assert_eq!(composition.special_pct, 16.7);
        let total = composition.total();
        assert_ne!(total, 100.0);
        assert!((total - 100.0).abs() <= 0.4, "total = {total}");
    }

    #[test]
    fn composition_of_full_alphabet() {
        let composition = composition(&seq("ACDEFGHIKLMNPQRSTVWY")).unwrap();
        assert_eq!(
            composition,
            Composition {
                hydrophobic_pct: 35.0,
                polar_pct: 25.0,
                positive_pct: 15.0,
                negative_pct: 10.0,
                special_pct: 15.0,
            }
        );
    }
}

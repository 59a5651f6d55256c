use phf::{OrderedMap, phf_ordered_map};
use serde::Serialize;
use std::fmt;

/// Coarse physicochemical category of a residue.
///
/// The five classes partition the 20 canonical amino acids. `Special` also absorbs
/// every unrecognized character when a sequence is composed (see
/// [`engine::composition`](crate::engine::composition)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidueClass {
    Hydrophobic,
    Polar,
    Positive,
    Negative,
    Special,
}

impl ResidueClass {
    pub const ALL: [ResidueClass; 5] = [
        ResidueClass::Hydrophobic,
        ResidueClass::Polar,
        ResidueClass::Positive,
        ResidueClass::Negative,
        ResidueClass::Special,
    ];

    /// Classes that are counted by explicit membership. `Special` is the complement.
    pub const EXPLICIT: [ResidueClass; 4] = [
        ResidueClass::Hydrophobic,
        ResidueClass::Polar,
        ResidueClass::Positive,
        ResidueClass::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResidueClass::Hydrophobic => "hydrophobic",
            ResidueClass::Polar => "polar",
            ResidueClass::Positive => "positive",
            ResidueClass::Negative => "negative",
            ResidueClass::Special => "special",
        }
    }

    /// Canonical codes assigned to this class, in table order.
    pub fn members(self) -> impl Iterator<Item = char> {
        RESIDUE_TABLE
            .entries()
            .filter(move |(_, entry)| entry.class == self)
            .map(|(&code, _)| code)
    }
}

impl fmt::Display for ResidueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Everything the presentation layer knows about a single residue code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResidueDescriptor {
    pub code: char,
    pub name: &'static str,
    pub class: ResidueClass,
    pub note: &'static str,
}

impl ResidueDescriptor {
    /// Fallback for characters outside the canonical alphabet. The `Polar` class is
    /// kept for compatibility with consumers that expect a class on every residue.
    pub fn unknown(code: char) -> Self {
        Self {
            code,
            name: "Unknown",
            class: ResidueClass::Polar,
            note: "",
        }
    }

    pub fn is_canonical(&self) -> bool {
        RESIDUE_TABLE.contains_key(&self.code)
    }
}

struct ResidueEntry {
    name: &'static str,
    class: ResidueClass,
    note: &'static str,
}

// The one definition of the residue partition. Composition class sets, the
// hydrophobic-run scanner and the lookup below are all derived from it.
#[rustfmt::skip]
static RESIDUE_TABLE: OrderedMap<char, ResidueEntry> = phf_ordered_map! {
    'A' => ResidueEntry { name: "Alanine",       class: ResidueClass::Hydrophobic, note: "Small, helix-friendly" },
    'C' => ResidueEntry { name: "Cysteine",      class: ResidueClass::Special,     note: "Disulfides; redox" },
    'D' => ResidueEntry { name: "Aspartate",     class: ResidueClass::Negative,    note: "Acidic; salt bridges" },
    'E' => ResidueEntry { name: "Glutamate",     class: ResidueClass::Negative,    note: "Acidic; helix capper" },
    'F' => ResidueEntry { name: "Phenylalanine", class: ResidueClass::Hydrophobic, note: "Aromatic core packing" },
    'G' => ResidueEntry { name: "Glycine",       class: ResidueClass::Special,     note: "Very flexible; tight turns" },
    'H' => ResidueEntry { name: "Histidine",     class: ResidueClass::Positive,    note: "pH-sensitive; catalysis" },
    'I' => ResidueEntry { name: "Isoleucine",    class: ResidueClass::Hydrophobic, note: "Bulky hydrophobe" },
    'K' => ResidueEntry { name: "Lysine",        class: ResidueClass::Positive,    note: "Basic; surface" },
    'L' => ResidueEntry { name: "Leucine",       class: ResidueClass::Hydrophobic, note: "Helix, coiled-coils" },
    'M' => ResidueEntry { name: "Methionine",    class: ResidueClass::Hydrophobic, note: "Start; thioether" },
    'N' => ResidueEntry { name: "Asparagine",    class: ResidueClass::Polar,       note: "H-bonding; turns" },
    'P' => ResidueEntry { name: "Proline",       class: ResidueClass::Special,     note: "Helix breaker; kinks" },
    'Q' => ResidueEntry { name: "Glutamine",     class: ResidueClass::Polar,       note: "H-bonding; flexible" },
    'R' => ResidueEntry { name: "Arginine",      class: ResidueClass::Positive,    note: "Strongly basic; binds phosphates" },
    'S' => ResidueEntry { name: "Serine",        class: ResidueClass::Polar,       note: "Phosphorylation; H-bonds" },
    'T' => ResidueEntry { name: "Threonine",     class: ResidueClass::Polar,       note: "Phosphorylation; beta sheets" },
    'V' => ResidueEntry { name: "Valine",        class: ResidueClass::Hydrophobic, note: "Beta sheets; core" },
    'W' => ResidueEntry { name: "Tryptophan",    class: ResidueClass::Hydrophobic, note: "Large aromatic; binding" },
    'Y' => ResidueEntry { name: "Tyrosine",      class: ResidueClass::Polar,       note: "Aromatic; phosphorylation" },
};

fn descriptor(code: char, entry: &ResidueEntry) -> ResidueDescriptor {
    ResidueDescriptor {
        code,
        name: entry.name,
        class: entry.class,
        note: entry.note,
    }
}

/// Returns the descriptor for `code`, upper-casing it first.
///
/// This lookup is total: any character outside the 20 canonical codes yields
/// [`ResidueDescriptor::unknown`].
pub fn describe_residue(code: char) -> ResidueDescriptor {
    let code = to_single_uppercase(code);
    RESIDUE_TABLE
        .get(&code)
        .map(|entry| descriptor(code, entry))
        .unwrap_or_else(|| ResidueDescriptor::unknown(code))
}

/// Upper-cases `code` unless its upper-case form spans several characters (e.g. `ß`).
pub(crate) fn to_single_uppercase(code: char) -> char {
    let mut upper = code.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => code,
    }
}

/// Class of an already-normalized canonical code, `None` for anything else.
#[inline]
pub fn class_of(code: char) -> Option<ResidueClass> {
    RESIDUE_TABLE.get(&code).map(|entry| entry.class)
}

#[inline]
pub fn is_canonical(code: char) -> bool {
    RESIDUE_TABLE.contains_key(&code)
}

/// All 20 canonical descriptors in alphabetical code order.
pub fn canonical_residues() -> impl Iterator<Item = ResidueDescriptor> {
    RESIDUE_TABLE
        .entries()
        .map(|(&code, entry)| descriptor(code, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_contains_exactly_the_twenty_canonical_codes() {
        let codes: String = canonical_residues().map(|d| d.code).collect();
        assert_eq!(codes, "ACDEFGHIKLMNPQRSTVWY");
    }

    #[test]
    fn every_canonical_code_belongs_to_exactly_one_class() {
        let mut seen = HashSet::new();
        for class in ResidueClass::ALL {
            for code in class.members() {
                assert!(seen.insert(code), "{code} appears in more than one class");
            }
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn class_members_match_expected_partition() {
        let members = |class: ResidueClass| class.members().collect::<String>();
        assert_eq!(members(ResidueClass::Hydrophobic), "AFILMVW");
        assert_eq!(members(ResidueClass::Polar), "NQSTY");
        assert_eq!(members(ResidueClass::Positive), "HKR");
        assert_eq!(members(ResidueClass::Negative), "DE");
        assert_eq!(members(ResidueClass::Special), "CGP");
    }

    #[test]
    fn describe_residue_returns_stored_descriptor_for_canonical_code() {
        let lys = describe_residue('K');
        assert_eq!(lys.code, 'K');
        assert_eq!(lys.name, "Lysine");
        assert_eq!(lys.class, ResidueClass::Positive);
        assert_eq!(lys.note, "Basic; surface");
        assert!(lys.is_canonical());
    }

    #[test]
    fn describe_residue_uppercases_input() {
        let trp = describe_residue('w');
        assert_eq!(trp.code, 'W');
        assert_eq!(trp.name, "Tryptophan");
    }

    #[test]
    fn describe_residue_falls_back_to_unknown_polar() {
        let z = describe_residue('Z');
        assert_eq!(z, ResidueDescriptor {
            code: 'Z',
            name: "Unknown",
            class: ResidueClass::Polar,
            note: "",
        });
        assert!(!z.is_canonical());
    }

    #[test]
    fn describe_residue_is_total_over_arbitrary_characters() {
        for c in ['1', '-', '*', ' ', 'x', 'é', '\u{1F9EC}'] {
            let d = describe_residue(c);
            assert!(!d.class.as_str().is_empty());
            assert_eq!(d.name, "Unknown");
        }
    }

    #[test]
    fn class_of_does_not_normalize_case() {
        assert_eq!(class_of('D'), Some(ResidueClass::Negative));
        assert_eq!(class_of('d'), None);
        assert_eq!(class_of('X'), None);
    }

    #[test]
    fn residue_class_displays_lowercase_name() {
        assert_eq!(ResidueClass::Hydrophobic.to_string(), "hydrophobic");
        assert_eq!(ResidueClass::Special.to_string(), "special");
    }
}

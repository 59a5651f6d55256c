use super::sequence::Sequence;
use serde::{Deserialize, Serialize};

/// One entry of a protein dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protein {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organism: Option<String>,
    pub length: usize,
    pub sequence: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Protein {
    /// Builds a record whose `length` is taken from the sequence itself.
    pub fn new(id: impl Into<String>, name: impl Into<String>, sequence: impl Into<String>) -> Self {
        let sequence = sequence.into();
        Self {
            id: id.into(),
            name: name.into(),
            organism: None,
            length: sequence.chars().count(),
            sequence,
            tags: Vec::new(),
        }
    }

    pub fn with_organism(mut self, organism: impl Into<String>) -> Self {
        self.organism = Some(organism.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn normalized_sequence(&self) -> Sequence {
        Sequence::normalize(&self.sequence)
    }

    pub fn sanitized_sequence(&self) -> Sequence {
        Sequence::sanitize(&self.sequence)
    }
}

const HEMOGLOBIN_BETA: &str = "MVHLTPEEKSAVTALWGKVNVDEVGGEALGRLLVVYPWTQRFFESFGDLSSPDAVMGNPKVKAHGKKVLGAFSDGLAHLDNLKGTFATLSELHCDKLHVDPENFRLLGNVLVCVLAHHFGKEFTPPVQAAYQKVVAGVANALAHKYH";
const UBIQUITIN: &str =
    "MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG";
const LYSOZYME_C: &str = "KVFGRCELAAAMKRHGLDNYRGYSLGNWVCAAKFESNFNTQATNRNTDGSTDYGILQINSRWWCNDGRTPGSRNLCNIPCSALLSSDITASVNCAKKIVSDGNGMNAWVAWRNRCKGTDVQAWIRGCRL";

/// The built-in dataset loaded when no file is given.
pub fn sample_dataset() -> Vec<Protein> {
    vec![
        Protein::new("1", "Hemoglobin beta chain", HEMOGLOBIN_BETA)
            .with_organism("Homo sapiens")
            .with_tags(["oxygen transport", "globin", "classic"]),
        Protein::new("2", "Ubiquitin", UBIQUITIN)
            .with_organism("Homo sapiens")
            .with_tags(["protein degradation", "ubiquitin", "small"]),
        Protein::new("3", "Lysozyme C", LYSOZYME_C)
            .with_organism("Gallus gallus")
            .with_tags(["antimicrobial", "enzyme", "secreted"]),
    ]
}

/// Looks a protein up by id, falling back to the first entry like the dataset picker does.
pub fn select<'a>(dataset: &'a [Protein], id: &str) -> Option<&'a Protein> {
    dataset
        .iter()
        .find(|p| p.id == id)
        .or_else(|| dataset.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_dataset_lengths_match_sequences() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 3);
        let lengths: Vec<_> = dataset.iter().map(|p| p.length).collect();
        assert_eq!(lengths, vec![147, 76, 129]);
        for protein in &dataset {
            assert_eq!(protein.length, protein.sequence.len());
            assert_eq!(Sequence::count_non_canonical(&protein.sequence), 0);
        }
    }

    #[test]
    fn select_finds_by_id() {
        let dataset = sample_dataset();
        assert_eq!(select(&dataset, "2").unwrap().name, "Ubiquitin");
    }

    #[test]
    fn select_falls_back_to_first_entry() {
        let dataset = sample_dataset();
        assert_eq!(select(&dataset, "missing").unwrap().id, "1");
        assert!(select(&[], "1").is_none());
    }

    #[test]
    fn new_derives_length_from_sequence() {
        let protein = Protein::new("x", "Test", "MKV");
        assert_eq!(protein.length, 3);
        assert!(protein.organism.is_none());
        assert!(protein.tags.is_empty());
    }

    #[test]
    fn sanitized_sequence_strips_invalid_characters() {
        let protein = Protein::new("x", "Test", "mk*v");
        assert_eq!(protein.normalized_sequence().to_string(), "MK*V");
        assert_eq!(protein.sanitized_sequence().to_string(), "MKV");
    }
}

use crate::core::models::sequence::Sequence;
use crate::core::motifs::registry::{MotifLoadError, MotifRegistry};
use serde::Serialize;
use std::fmt;

/// A motif found at least once in a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotifHit {
    pub label: String,
    pub count: usize,
}

impl fmt::Display for MotifHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.count)
    }
}

/// Counts non-overlapping occurrences of every registered motif.
#[derive(Debug, Clone, Copy)]
pub struct MotifScanner<'r> {
    registry: &'r MotifRegistry,
}

impl<'r> MotifScanner<'r> {
    pub fn new(registry: &'r MotifRegistry) -> Self {
        Self { registry }
    }

    pub fn builtin() -> Result<MotifScanner<'static>, MotifLoadError> {
        MotifRegistry::builtin().map(MotifScanner::new)
    }

    pub fn registry(&self) -> &'r MotifRegistry {
        self.registry
    }

    /// Hits in registry order. Motifs without a match are omitted.
    pub fn hits(&self, sequence: &Sequence) -> Vec<MotifHit> {
        self.registry
            .iter()
            .filter_map(|motif| {
                let count = motif.pattern.count_matches(sequence.residues());
                (count > 0).then(|| MotifHit {
                    label: motif.label.clone(),
                    count,
                })
            })
            .collect()
    }

    /// The hits rendered as `"label: count"` lines.
    pub fn scan(&self, sequence: &Sequence) -> Vec<String> {
        self.hits(sequence).iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motifs::pattern::MotifPattern;

    fn seq(s: &str) -> Sequence {
        Sequence::normalize(s)
    }

    #[test]
    fn p_loop_matches_do_not_overlap() {
        let lines = MotifScanner::builtin().unwrap().scan(&seq("GGGGGGKTGKT"));
        assert_eq!(lines, vec!["ATP-binding P-loop: 1".to_string()]);
    }

    #[test]
    fn metalloprotease_motif_counts_once_when_hits_would_share_a_histidine() {
        let lines = MotifScanner::builtin().unwrap().scan(&seq("HEAAHEAAH"));
        assert_eq!(lines, vec!["HExxH metalloprotease-like: 1".to_string()]);
    }

    #[test]
    fn zinc_finger_like_motif() {
        let lines = MotifScanner::builtin().unwrap().scan(&seq("CAACAAAAHAAH"));
        assert_eq!(lines, vec!["C2H2-like: 1".to_string()]);
    }

    #[test]
    fn glycosylation_sites_are_counted_across_sequence() {
        let hits = MotifScanner::builtin().unwrap().hits(&seq("nnstnpsnat"));
        assert_eq!(
            hits,
            vec![MotifHit {
                label: "N-glycosylation (NXS/T)".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn sequence_without_matches_has_no_hits() {
        assert!(MotifScanner::builtin().unwrap().scan(&seq("")).is_empty());
        assert!(MotifScanner::builtin().unwrap().scan(&seq("AAAAAAAAAAAAAAA")).is_empty());
    }

    #[test]
    fn hits_follow_registration_order_not_alphabetical() {
        let mut registry = MotifRegistry::new();
        registry.register("zeta", MotifPattern::parse("KK").unwrap()).unwrap();
        registry.register("alpha", MotifPattern::parse("AA").unwrap()).unwrap();
        registry.register("never", MotifPattern::parse("WW").unwrap()).unwrap();
        let lines = MotifScanner::new(&registry).scan(&seq("AAKKAAAA"));
        assert_eq!(lines, vec!["zeta: 1".to_string(), "alpha: 3".to_string()]);
    }
}

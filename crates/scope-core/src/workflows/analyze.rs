use crate::core::models::residue::describe_residue;
use crate::core::models::sequence::Sequence;
use crate::core::motifs::registry::MotifRegistry;
use crate::engine::composition::{ClassSets, Composition, CompositionCounts};
use crate::engine::error::EngineError;
use crate::engine::metrics::PhysicochemicalMetrics;
use crate::engine::scanner::{MotifHit, MotifScanner};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// An occurrence count of a single residue code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResidueFrequency {
    pub code: char,
    pub count: usize,
    pub name: &'static str,
}

/// The complete, immutable result of analyzing one sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    length: usize,
    #[serde(serialize_with = "serialize_counts")]
    counts: BTreeMap<char, usize>,
    composition_counts: CompositionCounts,
    composition: Composition,
    #[serde(flatten)]
    metrics: PhysicochemicalMetrics,
    #[serde(rename = "motifs", serialize_with = "serialize_hits")]
    motif_hits: Vec<MotifHit>,
}

fn serialize_counts<S: Serializer>(
    counts: &BTreeMap<char, usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(counts.iter().map(|(code, n)| (code.to_string(), n)))
}

fn serialize_hits<S: Serializer>(hits: &[MotifHit], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(hits.iter().map(ToString::to_string))
}

impl AnalysisReport {
    pub fn length(&self) -> usize {
        self.length
    }

    /// Per-character counts, unrecognized characters included.
    pub fn counts(&self) -> &BTreeMap<char, usize> {
        &self.counts
    }

    pub fn composition_counts(&self) -> &CompositionCounts {
        &self.composition_counts
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn metrics(&self) -> &PhysicochemicalMetrics {
        &self.metrics
    }

    pub fn net_charge(&self) -> f64 {
        self.metrics.net_charge
    }

    pub fn aromaticity_pct(&self) -> f64 {
        self.metrics.aromaticity_pct
    }

    pub fn aliphatic_index(&self) -> f64 {
        self.metrics.aliphatic_index
    }

    pub fn molecular_weight_da(&self) -> i64 {
        self.metrics.molecular_weight_da
    }

    pub fn gravy(&self) -> f64 {
        self.metrics.gravy
    }

    pub fn longest_hydrophobic_run(&self) -> usize {
        self.metrics.longest_hydrophobic_run
    }

    pub fn motif_hits(&self) -> &[MotifHit] {
        &self.motif_hits
    }

    /// Detected motifs as `"label: count"`, in registry order.
    pub fn motifs(&self) -> Vec<String> {
        self.motif_hits.iter().map(ToString::to_string).collect()
    }

    /// The `n` most frequent characters, by descending count and then ascending code.
    pub fn most_frequent(&self, n: usize) -> Vec<ResidueFrequency> {
        let mut frequencies: Vec<ResidueFrequency> = self
            .counts
            .iter()
            .map(|(&code, &count)| ResidueFrequency {
                code,
                count,
                name: describe_residue(code).name,
            })
            .collect();
        // `counts` iterates in code order and the sort is stable.
        frequencies.sort_by(|a, b| b.count.cmp(&a.count));
        frequencies.truncate(n);
        frequencies
    }
}

/// Assembles the report for an already normalized sequence.
///
/// # Errors
///
/// Returns [`EngineError::Consistency`] only if the composition class sets disagree
/// with the residue classification table.
pub fn run(sequence: &Sequence, registry: &MotifRegistry) -> Result<AnalysisReport, EngineError> {
    let composition_counts = ClassSets::shared()?.count(sequence)?;
    let report = AnalysisReport {
        length: sequence.len(),
        counts: sequence.residue_counts(),
        composition: Composition::from_counts(&composition_counts, sequence.len()),
        composition_counts,
        metrics: PhysicochemicalMetrics::compute(sequence),
        motif_hits: MotifScanner::new(registry).hits(sequence),
    };
    debug!(
        length = report.length,
        motifs = report.motif_hits.len(),
        "Sequence analyzed."
    );
    Ok(report)
}

/// Normalizes `sequence` and analyzes it against the built-in motifs.
///
/// A missing sequence (`None`) is analyzed as the empty sequence.
#[instrument(skip_all, name = "analyze_workflow")]
pub fn analyze(sequence: impl Into<Sequence>) -> Result<AnalysisReport, EngineError> {
    run(&sequence.into(), MotifRegistry::builtin()?)
}

use super::analyze::{self, AnalysisReport};
use crate::core::io::DatasetError;
use crate::core::models::protein::Protein;
use crate::core::models::sequence::Sequence;
use crate::core::motifs::registry::MotifRegistry;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The report of one dataset entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinAnalysis {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organism: Option<String>,
    /// Characters dropped before analysis when stripping is enabled.
    pub removed_characters: usize,
    pub report: AnalysisReport,
}

fn analyze_protein(
    protein: &Protein,
    config: &AnalysisConfig,
    registry: &MotifRegistry,
) -> Result<ProteinAnalysis, EngineError> {
    let (sequence, removed_characters) = if config.strip_non_canonical {
        (
            protein.sanitized_sequence(),
            Sequence::count_non_canonical(&protein.sequence),
        )
    } else {
        (protein.normalized_sequence(), 0)
    };
    let report = analyze::run(&sequence, registry)?;
    Ok(ProteinAnalysis {
        id: protein.id.clone(),
        name: protein.name.clone(),
        organism: protein.organism.clone(),
        removed_characters,
        report,
    })
}

/// Analyzes every protein of `dataset` independently.
///
/// Results keep dataset order regardless of how the work is scheduled.
#[instrument(skip_all, name = "batch_workflow")]
pub fn run(
    dataset: &[Protein],
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<ProteinAnalysis>, EngineError> {
    let registry = config.motif_registry()?;
    info!(
        proteins = dataset.len(),
        motifs = registry.len(),
        "Starting batch analysis."
    );
    reporter.report(Progress::BatchStart {
        total: dataset.len() as u64,
    });
    if let Some(path) = &config.extra_motifs_path {
        reporter.report(Progress::Message(format!(
            "Scanning {} motif(s), including the registry at {}",
            registry.len(),
            path.display()
        )));
    }

    #[cfg(not(feature = "parallel"))]
    let iterator = dataset.iter();

    #[cfg(feature = "parallel")]
    let iterator = dataset.par_iter();

    let results: Vec<Result<ProteinAnalysis, EngineError>> = iterator
        .map(|protein| {
            let analysis = analyze_protein(protein, config, &registry);
            reporter.report(Progress::ProteinAnalyzed {
                id: protein.id.clone(),
            });
            analysis
        })
        .collect();

    reporter.report(Progress::BatchFinish);
    let analyses = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    info!(analyzed = analyses.len(), "Batch analysis finished.");
    Ok(analyses)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    length: usize,
    hydrophobic_pct: f64,
    polar_pct: f64,
    positive_pct: f64,
    negative_pct: f64,
    special_pct: f64,
    net_charge: f64,
    aromaticity_pct: f64,
    aliphatic_index: f64,
    molecular_weight_da: i64,
    gravy: f64,
    longest_hydrophobic_run: usize,
    motifs: String,
}

impl<'a> From<&'a ProteinAnalysis> for CsvRow<'a> {
    fn from(analysis: &'a ProteinAnalysis) -> Self {
        let report = &analysis.report;
        let composition = report.composition();
        Self {
            id: &analysis.id,
            name: &analysis.name,
            length: report.length(),
            hydrophobic_pct: composition.hydrophobic_pct,
            polar_pct: composition.polar_pct,
            positive_pct: composition.positive_pct,
            negative_pct: composition.negative_pct,
            special_pct: composition.special_pct,
            net_charge: report.net_charge(),
            aromaticity_pct: report.aromaticity_pct(),
            aliphatic_index: report.aliphatic_index(),
            molecular_weight_da: report.molecular_weight_da(),
            gravy: report.gravy(),
            longest_hydrophobic_run: report.longest_hydrophobic_run(),
            motifs: report.motifs().join("; "),
        }
    }
}

/// Writes one CSV row per analysis, with a header row.
pub fn write_csv(analyses: &[ProteinAnalysis], writer: impl Write) -> Result<(), DatasetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for analysis in analyses {
        csv_writer.serialize(CsvRow::from(analysis))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::protein::sample_dataset;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[test]
    fn run_keeps_dataset_order() {
        let dataset = sample_dataset();
        let analyses = run(&dataset, &AnalysisConfig::default(), &ProgressReporter::new()).unwrap();
        let ids: Vec<_> = analyses.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(analyses[0].report.length(), 147);
        assert_eq!(analyses[2].report.net_charge(), 6.4);
    }

    #[test]
    fn run_strips_non_canonical_characters_when_configured() {
        let dataset = vec![Protein::new("x", "Noisy", "kk-x*")];
        let stripped = run(&dataset, &AnalysisConfig::default(), &ProgressReporter::new()).unwrap();
        assert_eq!(stripped[0].removed_characters, 3);
        assert_eq!(stripped[0].report.length(), 2);
        assert_eq!(stripped[0].report.net_charge(), 1.8);

        let config = AnalysisConfig {
            strip_non_canonical: false,
            ..AnalysisConfig::default()
        };
        let raw = run(&dataset, &config, &ProgressReporter::new()).unwrap();
        assert_eq!(raw[0].removed_characters, 0);
        assert_eq!(raw[0].report.length(), 5);
        assert_eq!(raw[0].report.composition_counts().special, 3);
    }

    #[test]
    fn run_reports_progress_for_every_protein() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        run(&sample_dataset(), &AnalysisConfig::default(), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], Progress::BatchStart { total: 3 }));
        assert!(matches!(events[4], Progress::BatchFinish));
        let mut analyzed: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                Progress::ProteinAnalyzed { id } => Some(id.as_str()),
                _ => None,
            })
            .collect();
        analyzed.sort_unstable();
        assert_eq!(analyzed, vec!["1", "2", "3"]);
    }

    #[test]
    fn run_fails_when_extra_registry_cannot_be_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[motif]]\nlabel = \"bad\"\npattern = \"[ST\"\n").unwrap();
        let config = AnalysisConfig {
            extra_motifs_path: Some(path),
            ..AnalysisConfig::default()
        };
        let result = run(&sample_dataset(), &config, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::MotifRegistry(_))));
    }

    #[test]
    fn run_uses_extra_motifs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        fs::write(&path, "[[motif]]\nlabel = \"GG\"\npattern = \"GG\"\n").unwrap();
        let config = AnalysisConfig {
            extra_motifs_path: Some(path),
            ..AnalysisConfig::default()
        };
        let dataset = vec![Protein::new("g", "Gly", "GGGGGGKTGKT")];
        let analyses = run(&dataset, &config, &ProgressReporter::new()).unwrap();
        assert_eq!(
            analyses[0].report.motifs(),
            vec!["ATP-binding P-loop: 1".to_string(), "GG: 3".to_string()]
        );
    }

    #[test]
    fn run_announces_extra_registry_after_batch_start() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        fs::write(&path, "[[motif]]\nlabel = \"GG\"\npattern = \"GG\"\n").unwrap();
        let config = AnalysisConfig {
            extra_motifs_path: Some(path),
            ..AnalysisConfig::default()
        };
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        run(&[Protein::new("g", "Gly", "GG")], &config, &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], Progress::BatchStart { total: 1 }));
        match &events[1] {
            Progress::Message(msg) => {
                assert!(msg.starts_with("Scanning 5 motif(s)"), "{}", msg);
                assert!(msg.ends_with("extra.toml"), "{}", msg);
            }
            other => panic!("expected a message, got {:?}", other),
        }
    }

    #[test]
    fn write_csv_emits_header_and_one_row_per_protein() {
        let dataset = vec![
            Protein::new("a", "Basic", "KK"),
            Protein::new("b", "Loop", "GGGGGGKTGKT"),
        ];
        let analyses = run(&dataset, &AnalysisConfig::default(), &ProgressReporter::new()).unwrap();
        let mut out = Vec::new();
        write_csv(&analyses, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,name,length,hydrophobic_pct"));
        assert!(lines[0].ends_with("longest_hydrophobic_run,motifs"));
        assert_eq!(lines[1], "a,Basic,2,0.0,0.0,100.0,0.0,0.0,1.8,0.0,0.0,238,-3.9,0,");
        assert!(lines[2].ends_with(",ATP-binding P-loop: 1"));
    }
}

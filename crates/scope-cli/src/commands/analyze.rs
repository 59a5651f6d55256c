use crate::cli::AnalyzeArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::render;
use crate::utils::parser::Mutation;
use crate::utils::progress::CliProgressHandler;
use aminoscope::core::io::read_dataset;
use aminoscope::core::models::protein::{self, Protein, sample_dataset};
use aminoscope::engine::config::AnalysisConfig;
use aminoscope::engine::progress::ProgressReporter;
use aminoscope::workflows::batch;
use std::io::Write;
use tracing::{info, warn};

const INPUT_ID: &str = "input";
const INPUT_NAME: &str = "Input sequence";

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let output = execute(&args)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, output)?;
            println!("Report written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn execute(args: &AnalyzeArgs) -> Result<String> {
    let app_config = build_config(&args.config)?;
    let mut dataset = load_dataset(args)?;

    if !args.mutations.is_empty() {
        let [protein] = dataset.as_mut_slice() else {
            return Err(CliError::Argument(format!(
                "--mutate needs a single protein, but {} were selected.",
                dataset.len()
            )));
        };
        apply_mutations(protein, &args.mutations, &app_config.core_config)?;
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = if dataset.len() > 1 {
        ProgressReporter::with_callback(progress_handler.get_callback())
    } else {
        ProgressReporter::new()
    };

    info!("Analyzing {} protein(s).", dataset.len());
    let analyses = batch::run(&dataset, &app_config.core_config, &reporter)?;

    for analysis in analyses.iter().filter(|a| a.removed_characters > 0) {
        warn!(
            "Removed {} non-canonical character(s) from '{}'.",
            analysis.removed_characters, analysis.name
        );
    }

    render::render_analyses(&analyses, app_config.format, args.top)
}

fn load_dataset(args: &AnalyzeArgs) -> Result<Vec<Protein>> {
    if let Some(sequence) = &args.sequence {
        return Ok(vec![Protein::new(INPUT_ID, INPUT_NAME, sequence.as_str())]);
    }

    if let Some(path) = &args.input {
        info!("Loading dataset from {:?}", path);
        return read_dataset(path).map_err(|e| CliError::FileParsing {
            path: path.clone(),
            source: e.into(),
        });
    }

    let samples = sample_dataset();
    match &args.sample {
        Some(id) => {
            let selected = protein::select(&samples, id)
                .cloned()
                .ok_or_else(|| CliError::Argument("The sample dataset is empty.".to_string()))?;
            if selected.id != *id {
                warn!(
                    "No sample with id '{}', using '{}' instead.",
                    id, selected.name
                );
            }
            Ok(vec![selected])
        }
        None => Ok(samples),
    }
}

fn apply_mutations(
    protein: &mut Protein,
    mutations: &[Mutation],
    config: &AnalysisConfig,
) -> Result<()> {
    let mut sequence = if config.strip_non_canonical {
        protein.sanitized_sequence()
    } else {
        protein.normalized_sequence()
    };
    for mutation in mutations {
        sequence = sequence.substitute(mutation.position - 1, mutation.residue)?;
        info!(
            "Substituted position {} with '{}' in '{}'.",
            mutation.position, mutation.residue, protein.name
        );
    }
    protein.sequence = sequence.to_string();
    protein.length = sequence.len();
    Ok(())
}

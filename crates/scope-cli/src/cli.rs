use crate::utils::parser::{self, Mutation};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "AminoScope Developers",
    version,
    about = "AminoScope CLI - Residue composition, physicochemical indices and motif scans for amino-acid sequences.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for dataset analysis.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a sequence, a dataset file or an entry of the built-in sample dataset.
    Analyze(AnalyzeArgs),
    /// Show the name, class and note of a residue code.
    Describe(DescribeArgs),
    /// List the motifs that an analysis scans for.
    Motifs(MotifsArgs),
    /// List the built-in sample dataset.
    Samples(SamplesArgs),
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Toml,
    Csv,
}

/// Options shared by every command that builds a motif registry or an analysis.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    /// Defaults to `aminoscope/config.toml` in the user configuration directory, if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Additional motif registry (TOML `[[motif]]` entries), scanned after the built-in motifs.
    #[arg(short = 'm', long = "motifs", value_name = "PATH")]
    pub extra_motifs: Option<PathBuf>,

    /// Override `motifs.include-builtin` from the config file.
    #[command(flatten)]
    pub builtin_motifs: BuiltinMotifs,

    /// Override `input.strip-non-canonical` from the config file.
    #[command(flatten)]
    pub strip: StripNonCanonical,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.format=json
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive flags for the built-in motif table.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct BuiltinMotifs {
    /// Scan for the built-in motifs.
    #[arg(long)]
    pub with_builtin_motifs: bool,
    /// Scan only for the motifs of the additional registry.
    #[arg(long)]
    pub no_builtin_motifs: bool,
}

/// Mutually exclusive flags for removing characters outside the 20 canonical codes.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct StripNonCanonical {
    /// Remove non-canonical characters before analysis.
    #[arg(long)]
    pub strip_non_canonical: bool,
    /// Analyze the sequence as given; unrecognized characters count as special.
    #[arg(long)]
    pub keep_non_canonical: bool,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Sequence to analyze (one-letter codes, case-insensitive).
    #[arg(value_name = "SEQUENCE", conflicts_with_all = ["input", "sample"])]
    pub sequence: Option<String>,

    /// Dataset file to analyze (`.json`, otherwise FASTA).
    #[arg(short, long, value_name = "PATH", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Id of the built-in sample protein to analyze. Unknown ids fall back to the first sample.
    #[arg(short, long, value_name = "ID")]
    pub sample: Option<String>,

    /// Substitute a residue before analysis, 1-based (e.g. 6:V). Can be used multiple times.
    #[arg(long = "mutate", value_name = "POS:RES", value_parser = parser::parse_mutation)]
    pub mutations: Vec<Mutation>,

    /// Number of most frequent residues listed in text output.
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Write the report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// One-letter residue code.
    #[arg(value_name = "CODE", value_parser = parser::parse_residue_code)]
    pub code: char,
}

/// Arguments for the `motifs` subcommand.
#[derive(Args, Debug)]
pub struct MotifsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `samples` subcommand.
#[derive(Args, Debug)]
pub struct SamplesArgs {
    /// Print a JSON dataset template instead of the sample list.
    #[arg(long)]
    pub template: bool,
}

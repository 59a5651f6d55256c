use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use aminoscope::engine::config as core_config;
use std::path::PathBuf;
use tracing::debug;

pub fn build_config(args: &ConfigArgs) -> Result<AppConfig> {
    let file_config = load_file_config(args)?;
    merge_config(args, file_config)
}

fn load_file_config(args: &ConfigArgs) -> Result<FileConfig> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => match FileConfig::default_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No configuration file found, using built-in defaults.");
                return Ok(FileConfig::default());
            }
        },
    };

    let mut file_config = FileConfig::from_file(&path)?;

    // A relative registry path in the file is relative to the file itself.
    if let (Some(motifs), Some(base)) = (file_config.motifs.as_mut(), path.parent()) {
        if let Some(registry) = motifs.extra_registry.as_mut() {
            if registry.is_relative() {
                *registry = base.join(&*registry);
            }
        }
    }
    Ok(file_config)
}

fn merge_config(args: &ConfigArgs, file_config: FileConfig) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let input_file = file_config.input.take().unwrap_or_default();
    let strip_non_canonical = match (
        args.strip.strip_non_canonical,
        args.strip.keep_non_canonical,
    ) {
        (true, false) => true,
        (false, true) => false,
        _ => input_file
            .strip_non_canonical
            .unwrap_or(defaults.strip_non_canonical),
    };

    let motifs_file = file_config.motifs.take().unwrap_or_default();
    let include_builtin_motifs = match (
        args.builtin_motifs.with_builtin_motifs,
        args.builtin_motifs.no_builtin_motifs,
    ) {
        (true, false) => true,
        (false, true) => false,
        _ => motifs_file
            .include_builtin
            .unwrap_or(defaults.include_builtin_motifs),
    };
    let extra_motifs_path = args
        .extra_motifs
        .clone()
        .or(motifs_file.extra_registry);

    let format = args
        .format
        .or(file_config.output.and_then(|output| output.format))
        .unwrap_or(defaults.format);

    let core_config = core_config::AnalysisConfigBuilder::new()
        .strip_non_canonical(strip_non_canonical)
        .include_builtin_motifs(include_builtin_motifs)
        .extra_motifs_path(extra_motifs_path)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        core_config,
        format,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;
        let invalid = |e: parser::ParseError| CliError::Config(format!("{}: {}", key, e));

        match key {
            "input.strip-non-canonical" => {
                config
                    .input
                    .get_or_insert_with(Default::default)
                    .strip_non_canonical = Some(parser::parse_bool(value_str).map_err(invalid)?);
            }
            "motifs.include-builtin" => {
                config
                    .motifs
                    .get_or_insert_with(Default::default)
                    .include_builtin = Some(parser::parse_bool(value_str).map_err(invalid)?);
            }
            "motifs.extra-registry" => {
                config
                    .motifs
                    .get_or_insert_with(Default::default)
                    .extra_registry = Some(PathBuf::from(value_str));
            }
            "output.format" => {
                config.output.get_or_insert_with(Default::default).format =
                    Some(parser::parse_format(value_str).map_err(invalid)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

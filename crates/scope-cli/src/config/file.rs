use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileInputConfig {
    #[serde(rename = "strip-non-canonical")]
    pub strip_non_canonical: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileMotifsConfig {
    #[serde(rename = "include-builtin")]
    pub include_builtin: Option<bool>,
    #[serde(rename = "extra-registry")]
    pub extra_registry: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<FileInputConfig>,
    pub motifs: Option<FileMotifsConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// `aminoscope/config.toml` in the platform's user configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "aminoscope", "aminoscope")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

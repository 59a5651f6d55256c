use crate::core::motifs::registry::{MotifLoadError, MotifRegistry};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Settings for analyzing a whole dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub include_builtin_motifs: bool,
    pub extra_motifs_path: Option<PathBuf>,
    pub strip_non_canonical: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_builtin_motifs: true,
            extra_motifs_path: None,
            strip_non_canonical: true,
        }
    }
}

impl AnalysisConfig {
    /// Built-in motifs first (if enabled), then the entries of the extra registry
    /// file in file order.
    pub fn motif_registry(&self) -> Result<MotifRegistry, MotifLoadError> {
        let mut registry = if self.include_builtin_motifs {
            MotifRegistry::builtin()?.clone()
        } else {
            MotifRegistry::new()
        };
        if let Some(path) = &self.extra_motifs_path {
            registry.extend(MotifRegistry::load(path)?)?;
        }
        Ok(registry)
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    include_builtin_motifs: Option<bool>,
    extra_motifs_path: Option<PathBuf>,
    strip_non_canonical: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_builtin_motifs(mut self, include: bool) -> Self {
        self.include_builtin_motifs = Some(include);
        self
    }
    pub fn extra_motifs_path(mut self, path: Option<PathBuf>) -> Self {
        self.extra_motifs_path = path;
        self
    }
    pub fn strip_non_canonical(mut self, strip: bool) -> Self {
        self.strip_non_canonical = Some(strip);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        Ok(AnalysisConfig {
            include_builtin_motifs: self
                .include_builtin_motifs
                .ok_or(ConfigError::MissingParameter("include_builtin_motifs"))?,
            extra_motifs_path: self.extra_motifs_path,
            strip_non_canonical: self
                .strip_non_canonical
                .ok_or(ConfigError::MissingParameter("strip_non_canonical"))?,
        })
    }
}

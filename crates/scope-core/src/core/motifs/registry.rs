use super::pattern::{MotifPattern, PatternError};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[rustfmt::skip]
const BUILTIN_MOTIFS: [(&str, &str); 4] = [
    ("N-glycosylation (NXS/T)",    "N[^P][ST]"),
    ("ATP-binding P-loop",         "[AG]....GKT"),
    ("HExxH metalloprotease-like", "HE..H"),
    ("C2H2-like",                  "C..C....H..H"),
];

static BUILTIN_REGISTRY: Lazy<Result<MotifRegistry, String>> =
    Lazy::new(|| MotifRegistry::from_table(&BUILTIN_MOTIFS).map_err(|e| e.to_string()));

#[derive(Debug, Error)]
pub enum MotifLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid pattern for motif '{label}': {source}")]
    Pattern { label: String, source: PatternError },
    #[error("Motif '{0}' is registered more than once")]
    DuplicateLabel(String),
    #[error("Built-in motif table is invalid: {0}")]
    InvalidBuiltin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    pub label: String,
    pub pattern: MotifPattern,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MotifEntry {
    label: String,
    pattern: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MotifFile {
    #[serde(default, rename = "motif")]
    motifs: Vec<MotifEntry>,
}

/// Named motifs in registration order. Scan results follow this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotifRegistry {
    motifs: Vec<Motif>,
}

impl MotifRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four probes every analysis runs by default.
    pub fn builtin() -> Result<&'static MotifRegistry, MotifLoadError> {
        BUILTIN_REGISTRY
            .as_ref()
            .map_err(|msg| MotifLoadError::InvalidBuiltin(msg.clone()))
    }

    /// Builds a registry from `(label, pattern)` pairs, in order.
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self, MotifLoadError> {
        let mut registry = Self::new();
        for &(label, source) in table {
            let pattern = MotifPattern::parse(source).map_err(|e| MotifLoadError::Pattern {
                label: label.to_string(),
                source: e,
            })?;
            registry.register(label, pattern)?;
        }
        Ok(registry)
    }

    /// Loads the `[[motif]]` entries of a TOML file, in file order.
    pub fn load(path: &Path) -> Result<Self, MotifLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| MotifLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let registry = Self::from_toml_str(&content, &path.to_string_lossy())?;
        debug!(
            path = %path.display(),
            motifs = registry.len(),
            "Loaded motif registry."
        );
        Ok(registry)
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, MotifLoadError> {
        let file: MotifFile = toml::from_str(content).map_err(|e| MotifLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        let mut registry = Self::new();
        for entry in file.motifs {
            let pattern =
                MotifPattern::parse(&entry.pattern).map_err(|e| MotifLoadError::Pattern {
                    label: entry.label.clone(),
                    source: e,
                })?;
            registry.register(entry.label, pattern)?;
        }
        Ok(registry)
    }

    pub fn register(
        &mut self,
        label: impl Into<String>,
        pattern: MotifPattern,
    ) -> Result<(), MotifLoadError> {
        let label = label.into();
        if self.get(&label).is_some() {
            return Err(MotifLoadError::DuplicateLabel(label));
        }
        self.motifs.push(Motif { label, pattern });
        Ok(())
    }

    /// Appends every motif of `other` after the existing ones.
    pub fn extend(&mut self, other: MotifRegistry) -> Result<(), MotifLoadError> {
        for motif in other.motifs {
            self.register(motif.label, motif.pattern)?;
        }
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&Motif> {
        self.motifs.iter().find(|m| m.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Motif> {
        self.motifs.iter()
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}

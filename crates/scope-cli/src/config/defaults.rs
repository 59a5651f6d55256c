use crate::cli::OutputFormat;

pub struct DefaultsConfig {
    pub strip_non_canonical: bool,
    pub include_builtin_motifs: bool,
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            strip_non_canonical: true,
            include_builtin_motifs: true,
            format: OutputFormat::Text,
        }
    }
}

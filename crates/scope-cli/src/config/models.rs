use crate::cli::OutputFormat;
use aminoscope::engine::config as core_config;

pub struct AppConfig {
    pub core_config: core_config::AnalysisConfig,
    pub format: OutputFormat,
}

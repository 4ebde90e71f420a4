use crate::config::{
    compute_config::ComputeConfig,
    log_config::LoggingConfig,
    output_config::{OutputConfig, OutputFormat},
};
use config::{Config, ConfigError, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize, Default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub compute: ComputeConfig,
}

pub struct AppConfigBuilder {
    logging: LoggingConfig,
    output: OutputConfig,
    compute: ComputeConfig,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self {
            logging: config.logging,
            output: config.output,
            compute: config.compute,
        }
    }
}

impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfig::default().into()
    }

    pub fn with_log_level(mut self, log_level: String) -> Self {
        self.logging.log_level = log_level;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }

    pub fn with_dot_dir(mut self, dot_dir: Option<PathBuf>) -> Self {
        self.output.dot_dir = dot_dir;
        self
    }

    pub fn with_degree_distribution(mut self, degree_distribution: bool) -> Self {
        self.output.degree_distribution = degree_distribution;
        self
    }

    pub fn with_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.compute.num_threads = num_threads;
        self
    }

    pub fn build(self) -> AppConfig {
        AppConfig {
            logging: self.logging,
            output: self.output,
            compute: self.compute,
        }
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Order of precedence of config loading: config args >> config path >> config default.
// `app_config` seeds the defaults; values found in the file at `config_path` replace them.
pub fn load_config(
    app_config: Option<AppConfig>,
    config_path: Option<PathBuf>,
) -> Result<AppConfig, ConfigError> {
    let app_config = app_config.unwrap_or_default();
    let json =
        serde_json::to_string(&app_config).map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let mut builder = Config::builder().add_source(config::File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(config::File::from(config_path));
    }
    builder.build()?.try_deserialize::<AppConfig>()
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// When set, a `<file stem>.dot` rendering description is written here for every input.
    pub dot_dir: Option<PathBuf>,
    pub degree_distribution: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            dot_dir: None,
            degree_distribution: true,
        }
    }
}

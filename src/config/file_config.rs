use crate::error::BootstrapError;
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration. Every field mirrors a CLI flag; values set
/// here override the CLI.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub db_path: Option<String>,
    pub in_memory: Option<bool>,
    pub connection_string: Option<String>,
    pub samples_dir: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, BootstrapError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BootstrapError::Configuration(format!("failed to read config file {:?}: {}", path, e))
        })?;
        toml::from_str(&content).map_err(|e| {
            BootstrapError::Configuration(format!("failed to parse config file {:?}: {}", path, e))
        })
    }
}

//! Bootstrap configuration.
//!
//! One configuration value selects the storage target: an explicit SQLite
//! URI, a transient in-memory database, or a file path (the default).
//! Values come from CLI flags and an optional TOML file, resolved once into
//! an `AppConfig` that is passed explicitly to the initializer and loader.

mod file_config;

pub use file_config::FileConfig;

use crate::error::BootstrapError;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "db/chinook.db";
pub const DEFAULT_SAMPLES_DIR: &str = "samples";

/// Where the relational store lives. The rest of the crate consumes this as
/// an opaque descriptor and never inspects connection strings itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    File(PathBuf),
    InMemory,
    Uri(String),
}

impl ConnectionTarget {
    pub fn describe(&self) -> String {
        match self {
            ConnectionTarget::File(path) => format!("file {:?}", path),
            ConnectionTarget::InMemory => "in-memory database".to_string(),
            ConnectionTarget::Uri(uri) => format!("uri {}", uri),
        }
    }
}

/// Anything that can point the store at a database.
pub trait StoreConfig {
    fn connection_target(&self) -> ConnectionTarget;
}

/// CLI arguments relevant to config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub in_memory: bool,
    pub connection_string: Option<String>,
    pub samples_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub target: ConnectionTarget,
    pub samples_dir: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file
    /// config. TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self, BootstrapError> {
        let file = file_config.unwrap_or_default();

        let connection_string = file
            .connection_string
            .or_else(|| cli.connection_string.clone());
        let in_memory = file.in_memory.unwrap_or(cli.in_memory);
        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone());

        let selected = [connection_string.is_some(), in_memory, db_path.is_some()]
            .iter()
            .filter(|set| **set)
            .count();
        if selected > 1 {
            return Err(BootstrapError::Configuration(
                "db-path, in-memory and connection-string are mutually exclusive".to_string(),
            ));
        }

        let target = if let Some(uri) = connection_string {
            if uri.is_empty() {
                return Err(BootstrapError::Configuration(
                    "connection string must not be empty".to_string(),
                ));
            }
            ConnectionTarget::Uri(uri)
        } else if in_memory {
            ConnectionTarget::InMemory
        } else {
            ConnectionTarget::File(db_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)))
        };

        let samples_dir = file
            .samples_dir
            .map(PathBuf::from)
            .or_else(|| cli.samples_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLES_DIR));
        if !samples_dir.is_dir() {
            return Err(BootstrapError::Configuration(format!(
                "samples directory does not exist: {:?}",
                samples_dir
            )));
        }

        Ok(AppConfig {
            target,
            samples_dir,
        })
    }
}

impl StoreConfig for AppConfig {
    fn connection_target(&self) -> ConnectionTarget {
        self.target.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_samples() -> CliConfig {
        CliConfig {
            samples_dir: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_target_is_file_backed() {
        let config = AppConfig::resolve(&cli_with_samples(), None).unwrap();
        assert_eq!(
            config.target,
            ConnectionTarget::File(PathBuf::from(DEFAULT_DB_PATH))
        );
    }

    #[test]
    fn test_in_memory_flag() {
        let cli = CliConfig {
            in_memory: true,
            ..cli_with_samples()
        };
        let config = AppConfig::resolve(&cli, None).unwrap();
        assert_eq!(config.target, ConnectionTarget::InMemory);
    }

    #[test]
    fn test_explicit_connection_string() {
        let cli = CliConfig {
            connection_string: Some("file:demo?mode=memory&cache=shared".to_string()),
            ..cli_with_samples()
        };
        let config = AppConfig::resolve(&cli, None).unwrap();
        assert_eq!(
            config.target,
            ConnectionTarget::Uri("file:demo?mode=memory&cache=shared".to_string())
        );
    }

    #[test]
    fn test_conflicting_targets_rejected() {
        let cli = CliConfig {
            in_memory: true,
            db_path: Some(PathBuf::from("some.db")),
            ..cli_with_samples()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(matches!(result, Err(BootstrapError::Configuration(_))));
    }

    #[test]
    fn test_empty_connection_string_rejected() {
        let cli = CliConfig {
            connection_string: Some(String::new()),
            ..cli_with_samples()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(matches!(result, Err(BootstrapError::Configuration(_))));
    }

    #[test]
    fn test_file_config_overrides_cli() {
        let file = FileConfig {
            in_memory: Some(true),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli_with_samples(), Some(file)).unwrap();
        assert_eq!(config.target, ConnectionTarget::InMemory);
    }

    #[test]
    fn test_missing_samples_dir_rejected() {
        let cli = CliConfig {
            samples_dir: Some(PathBuf::from("/definitely/not/here")),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(matches!(result, Err(BootstrapError::Configuration(_))));
    }
}

// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::{TrimConfig, DEFAULT_CONFIG_PATHS};
use crate::domain::errors::*;
use crate::ports::*;

/// TOML configuration adapter
#[derive(Debug, Clone)]
pub struct TomlConfigAdapter {
    search_paths: Vec<PathBuf>,
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TomlConfigAdapter {
    /// Create new TOML config adapter searching the default locations
    pub fn new() -> Self {
        Self {
            search_paths: DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).collect(),
        }
    }

    /// Create an adapter with custom fallback locations
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    fn read(path: &Path) -> Result<TrimConfig, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigFail(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        TrimConfig::from_toml(&content)
    }
}

#[async_trait]
impl ConfigPort for TomlConfigAdapter {
    async fn load_config(&self, file_path: Option<&Path>) -> Result<TrimConfig, DomainError> {
        if let Some(path) = file_path {
            if !path.exists() {
                return Err(DomainError::FileNotFound(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            info!("Loading configuration from: {}", path.display());
            return Self::read(path);
        }

        for path in &self.search_paths {
            if path.is_file() {
                info!("Loading configuration from: {}", path.display());
                return Self::read(path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(TrimConfig::default())
    }
}

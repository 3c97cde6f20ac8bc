//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// The configuration file name inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── engine.yaml    # Server, metrics and telemetry settings
/// └── metrics.json   # Optional metrics snapshot referenced by engine.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use commission_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Listening on {}", loader.bind_address());
/// # Ok::<(), commission_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if `engine.yaml` is missing or unreadable
    /// - `ConfigParseError` if it is not valid YAML or lacks required fields
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let base_dir = path.as_ref().to_path_buf();
        let config = Self::load_yaml::<EngineConfig>(&base_dir.join(CONFIG_FILE_NAME))?;

        Ok(Self { config, base_dir })
    }

    /// Wraps an already-built configuration; relative paths resolve against
    /// `base_dir`.
    pub fn from_config(config: EngineConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the address the HTTP server binds to.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }

    /// Returns the default log filter.
    pub fn log_level(&self) -> &str {
        &self.config.telemetry.log_level
    }

    /// Returns the metrics snapshot path resolved against the configuration
    /// directory, if one is configured.
    pub fn metrics_snapshot_path(&self) -> Option<PathBuf> {
        self.config
            .metrics
            .snapshot_path
            .as_ref()
            .map(|p| if p.is_absolute() { p.clone() } else { self.base_dir.join(p) })
    }
}

//! Configuration types for the engine service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`.

use std::path::PathBuf;

use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The socket address to listen on (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

/// Where agent performance metrics come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Path to a JSON metrics snapshot, relative to the configuration
    /// directory. Without one, metrics are treated as unavailable.
    pub snapshot_path: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Default log filter, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Server settings.
    pub server: ServerConfig,
    /// Metrics source settings.
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Logging settings.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

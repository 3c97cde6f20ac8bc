//! Metrics sources.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::PerformanceMetrics;

use super::envelope::parse_metrics_envelope;

/// Supplies the current performance snapshot for bonus evaluation.
pub trait MetricsSource: Send + Sync + fmt::Debug {
    /// Fetches the latest metrics.
    fn fetch(&self) -> EngineResult<PerformanceMetrics>;
}

/// Reads a metrics envelope exported to a JSON file.
#[derive(Debug, Clone)]
pub struct FileMetricsSource {
    path: PathBuf,
}

impl FileMetricsSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MetricsSource for FileMetricsSource {
    fn fetch(&self) -> EngineResult<PerformanceMetrics> {
        let path = self.path.display();

        let content = fs::read_to_string(&self.path).map_err(|e| EngineError::MetricsUnavailable {
            message: format!("cannot read {}: {}", path, e),
        })?;

        let envelope: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| EngineError::MetricsUnavailable {
                message: format!("{} is not valid JSON: {}", path, e),
            })?;

        parse_metrics_envelope(&envelope)
    }
}

/// Always returns the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticMetricsSource(pub PerformanceMetrics);

impl MetricsSource for StaticMetricsSource {
    fn fetch(&self) -> EngineResult<PerformanceMetrics> {
        Ok(self.0.clone())
    }
}

/// Used when no metrics source is configured; every fetch fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredMetricsSource;

impl MetricsSource for UnconfiguredMetricsSource {
    fn fetch(&self) -> EngineResult<PerformanceMetrics> {
        Err(EngineError::MetricsUnavailable {
            message: "metrics source not configured".to_string(),
        })
    }
}

/// Builds the metrics source described by the configuration.
pub fn metrics_source_from_config(config: &ConfigLoader) -> Arc<dyn MetricsSource> {
    match config.metrics_snapshot_path() {
        Some(path) => {
            debug!(path = %path.display(), "Using file metrics source");
            Arc::new(FileMetricsSource::new(path))
        }
        None => Arc::new(UnconfiguredMetricsSource),
    }
}

/// Fetches metrics, falling back to an all-zero snapshot on failure.
///
/// All-zero metrics fail the bonus eligibility gate, so an unreachable
/// source shows up as "ineligible" rather than as an error.
pub fn load_metrics_or_default(source: &dyn MetricsSource) -> PerformanceMetrics {
    match source.fetch() {
        Ok(metrics) => metrics,
        Err(err) => {
            warn!(error = %err, "Metrics load failed, using zero metrics");
            PerformanceMetrics::default()
        }
    }
}

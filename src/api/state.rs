//! Application state for the Commission Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::metrics::{MetricsSource, metrics_source_from_config};

/// Shared application state.
///
/// Holds the metrics source consulted when a report request does not carry
/// its own metrics, and served by `GET /metrics`.
#[derive(Clone)]
pub struct AppState {
    metrics_source: Arc<dyn MetricsSource>,
}

impl AppState {
    /// Creates application state, building the metrics source from the
    /// configuration.
    pub fn new(config: &ConfigLoader) -> Self {
        Self::with_metrics_source(metrics_source_from_config(config))
    }

    /// Creates application state with an explicit metrics source.
    pub fn with_metrics_source(metrics_source: Arc<dyn MetricsSource>) -> Self {
        Self { metrics_source }
    }

    /// Returns the metrics source.
    pub fn metrics_source(&self) -> &dyn MetricsSource {
        self.metrics_source.as_ref()
    }
}

//! Agent performance metrics retrieval.
//!
//! Bonus evaluation needs a [`PerformanceMetrics`](crate::models::PerformanceMetrics)
//! snapshot from an external tracker. This module parses the tracker's
//! response format and provides the [`MetricsSource`] implementations used by
//! the service. Retrieval failures never reach the rule engine: callers use
//! [`load_metrics_or_default`] to substitute an all-zero snapshot.

mod envelope;
mod source;

pub use envelope::parse_metrics_envelope;
pub use source::{
    FileMetricsSource, MetricsSource, StaticMetricsSource, UnconfiguredMetricsSource,
    load_metrics_or_default, metrics_source_from_config,
};

//! Configuration loading and management for the Commission Engine.
//!
//! This module loads the service configuration (bind address, metrics source,
//! log level) from a YAML file. The commission and bonus rules themselves
//! are compiled in; see [`crate::calculation`].
//!
//! # Example
//!
//! ```no_run
//! use commission_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Binding to {}", config.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{EngineConfig, MetricsConfig, ServerConfig, TelemetryConfig};

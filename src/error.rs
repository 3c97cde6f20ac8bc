//! Error types for the Commission Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur around the rule engine. The rule engine
//! itself never fails; errors come from configuration loading, request
//! validation, and metrics retrieval.

use thiserror::Error;

/// The main error type for the Commission Engine.
///
/// # Example
///
/// ```
/// use commission_engine::error::EngineError;
///
/// let error = EngineError::InvalidRequest {
///     field: "age".to_string(),
///     message: "Invalid age.".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid request field 'age': Invalid age.");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A commission request failed caller-side validation.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// A user-facing description of the problem.
        message: String,
    },

    /// Performance metrics could not be retrieved or understood.
    #[error("Performance metrics unavailable: {message}")]
    MetricsUnavailable {
        /// A description of the retrieval failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidRequest`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Response types for the Commission Engine API.
//!
//! This module defines the error response structures, the plan catalogue
//! listing, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::has_commission_rules;
use crate::error::EngineError;
use crate::models::{PlanKind, Product};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRequest { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Field '{}' is invalid", field),
                ),
            },
            EngineError::MetricsUnavailable { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "METRICS_UNAVAILABLE",
                    "Performance metrics unavailable",
                    message,
                ),
            },
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                // The body text carries serde's description, including the field.
                let body_text = err.body_text();
                if body_text.contains("missing field") {
                    ApiError::validation_error(body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };

        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

/// One entry of the `/plans` catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    /// Canonical plan identifier.
    pub id: String,
    /// Human-readable plan name.
    pub label: String,
    /// Whether the engine has commission rules for this plan.
    pub has_commission_rules: bool,
    /// Sub-products that can be selected for this plan.
    pub products: &'static [Product],
}

impl From<&PlanKind> for PlanSummary {
    fn from(plan: &PlanKind) -> Self {
        Self {
            id: plan.id().to_string(),
            label: plan.label().to_string(),
            has_commission_rules: has_commission_rules(plan),
            products: plan.products(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_request_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::invalid("age", "Invalid age.").into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert_eq!(response.error.message, "Invalid age.");
        assert_eq!(response.error.details.as_deref(), Some("Field 'age' is invalid"));
    }

    #[test]
    fn test_metrics_unavailable_maps_to_bad_gateway() {
        let response: ApiErrorResponse = EngineError::MetricsUnavailable {
            message: "Bad metrics".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.code, "METRICS_UNAVAILABLE");
    }

    #[test]
    fn test_plan_summary() {
        let summary = PlanSummary::from(&PlanKind::UhoneHip);
        assert_eq!(summary.id, "uhoneHIP");
        assert!(summary.has_commission_rules);
        assert!(summary.products.is_empty());

        let summary = PlanSummary::from(&PlanKind::UhoneVision);
        assert!(!summary.has_commission_rules);
        assert_eq!(summary.products.len(), 2);
    }
}

//! Request types for the Commission Engine API.
//!
//! `/commission` takes a [`CommissionRequest`] directly; the types here are
//! the bodies of `/bonus` and `/report`.

use serde::{Deserialize, Serialize};

use crate::models::{ClientDetails, CommissionRequest, PerformanceMetrics};

/// Request body for the `/bonus` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRequest {
    /// The agent's performance snapshot.
    #[serde(default)]
    pub metrics: PerformanceMetrics,
    /// Whether to evaluate Annual Enrollment Period tiers.
    #[serde(default)]
    pub is_aep: bool,
}

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Client details to carry onto the report.
    #[serde(default)]
    pub client: ClientDetails,
    /// The policy submission.
    pub policy: CommissionRequest,
    /// Metrics to evaluate the bonus with. When absent, the service's
    /// metrics source is consulted.
    #[serde(default)]
    pub metrics: Option<PerformanceMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanKind;
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_report_request() {
        let json = r#"{
            "client": {
                "full_name": "Pat Doe",
                "date_submitted": "2026-10-15"
            },
            "policy": {
                "plan": "maMapd",
                "state": "FL",
                "age": 67,
                "monthly_premium": "0",
                "is_aep": true
            }
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.client.full_name.as_deref(), Some("Pat Doe"));
        assert_eq!(
            request.client.date_submitted,
            NaiveDate::from_ymd_opt(2026, 10, 15)
        );
        assert_eq!(request.policy.plan, PlanKind::MaMapd);
        assert!(request.metrics.is_none());
    }

    #[test]
    fn test_deserialize_bonus_request_defaults() {
        let request: BonusRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.metrics, PerformanceMetrics::default());
        assert!(!request.is_aep);
    }

    #[test]
    fn test_report_request_requires_policy() {
        let result: Result<ReportRequest, _> = serde_json::from_str(r#"{"client": {}}"#);
        assert!(result.unwrap_err().to_string().contains("missing field `policy`"));
    }
}

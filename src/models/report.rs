//! The combined submission report.
//!
//! A [`CommissionReport`] is the record a caller displays or persists after
//! running both the commission and bonus rules for one submission.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BonusResult, CommissionResult, PlanKind};

/// Details about the client on a submission. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDetails {
    /// The client's full name.
    pub full_name: Option<String>,
    /// The client's phone number.
    pub phone: Option<String>,
    /// The client's Medicare Beneficiary Identifier.
    pub mbi: Option<String>,
    /// The date the application was submitted.
    pub date_submitted: Option<NaiveDate>,
    /// The date the policy takes effect.
    pub effective_date: Option<NaiveDate>,
}

/// The full outcome of a submission: policy, commission, and bonus.
///
/// # Example
///
/// ```
/// use commission_engine::calculation::build_report;
/// use commission_engine::models::{ClientDetails, CommissionRequest, PerformanceMetrics, PlanKind};
///
/// let request = CommissionRequest {
///     plan: PlanKind::MaMapd,
///     product: None,
///     state: "FL".to_string(),
///     age: 67,
///     monthly_premium: Some("25.00".parse().unwrap()),
///     annual_premium: None,
///     is_aep: false,
/// };
///
/// let report = build_report(ClientDetails::default(), &request, &PerformanceMetrics::default());
/// assert_eq!(report.commission.commission.to_string(), "200.00");
/// assert!(!report.bonus.eligible);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// Client details captured with the submission.
    pub client: ClientDetails,
    /// The plan the policy was written under.
    pub plan: PlanKind,
    /// The sub-product, if any.
    pub product: Option<String>,
    /// Jurisdiction code.
    pub state: String,
    /// Age of the insured.
    pub age: u32,
    /// Whether the submission falls in the Annual Enrollment Period.
    pub is_aep: bool,
    /// Monthly premium after normalization.
    pub monthly_premium: Decimal,
    /// Annual premium after normalization.
    pub annual_premium: Decimal,
    /// The commission breakdown.
    pub commission: CommissionResult,
    /// The bonus decision.
    pub bonus: BonusResult,
}

//! Commission request and result models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PlanKind;

/// A policy submission to compute commission for.
///
/// Callers validate requests with
/// [`validate_commission_request`](crate::calculation::validate_commission_request)
/// before handing them to the calculator.
///
/// # Example
///
/// ```
/// use commission_engine::models::{CommissionRequest, PlanKind};
///
/// let json = r#"{
///     "plan": "uhoneHIP",
///     "state": "TX",
///     "age": 45,
///     "annual_premium": "1000.00"
/// }"#;
///
/// let request: CommissionRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.plan, PlanKind::UhoneHip);
/// assert!(request.monthly_premium.is_none());
/// assert!(!request.is_aep);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRequest {
    /// The plan the policy was written under.
    pub plan: PlanKind,
    /// Optional sub-product identifier; not interpreted by the rules.
    #[serde(default)]
    pub product: Option<String>,
    /// Two-letter jurisdiction code.
    pub state: String,
    /// Age of the insured.
    pub age: u32,
    /// Monthly premium, if entered.
    #[serde(default)]
    pub monthly_premium: Option<Decimal>,
    /// Annual premium, if entered.
    #[serde(default)]
    pub annual_premium: Option<Decimal>,
    /// Whether the policy was written during the Annual Enrollment Period.
    #[serde(default)]
    pub is_aep: bool,
}

/// The repayment exposure attached to a commission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClawbackRisk {
    /// No clawback applies.
    None,
    /// Commission is recovered if the policy lapses within 93 days.
    SurvivalClawback93Day,
    /// Commission is charged back if the policy is cancelled in its first year.
    ChargebackFirst12Months,
    /// Free-text risk specific to a plan.
    PlanSpecific(String),
}

impl ClawbackRisk {
    /// The user-facing description of this risk.
    pub fn as_str(&self) -> &str {
        match self {
            ClawbackRisk::None => "None",
            ClawbackRisk::SurvivalClawback93Day => "93-day survival clawback",
            ClawbackRisk::ChargebackFirst12Months => "Chargeback if cancelled in first 12 months",
            ClawbackRisk::PlanSpecific(text) => text,
        }
    }
}

impl From<String> for ClawbackRisk {
    fn from(text: String) -> Self {
        match text.as_str() {
            "None" => ClawbackRisk::None,
            "93-day survival clawback" => ClawbackRisk::SurvivalClawback93Day,
            "Chargeback if cancelled in first 12 months" => ClawbackRisk::ChargebackFirst12Months,
            _ => ClawbackRisk::PlanSpecific(text),
        }
    }
}

impl From<ClawbackRisk> for String {
    fn from(risk: ClawbackRisk) -> Self {
        match risk {
            ClawbackRisk::PlanSpecific(text) => text,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ClawbackRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The commission breakdown for a single policy.
///
/// Every monetary field is rounded to cents when it is computed and carries
/// exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionResult {
    /// Annual premium, entered or derived from the monthly premium.
    pub annual: Decimal,
    /// Monthly premium, entered or derived from the annual premium.
    pub monthly: Decimal,
    /// Fractional commission rate applied; zero for flat-fee plans.
    pub rate: Decimal,
    /// Rate applied to the annual premium, before the retention split.
    pub gross_commission: Decimal,
    /// Total commission payable.
    pub commission: Decimal,
    /// Amount paid up front.
    pub advance: Decimal,
    /// Amount earned after the advance is netted out.
    pub earned: Decimal,
    /// Earned amount spread over each month of the earning window.
    pub monthly_earned: Decimal,
    /// Short plain-text summary.
    pub breakdown: String,
    /// Formatted multi-line audit explanation with the computed amounts.
    pub breakdown_html: String,
    /// Human-readable caveats.
    pub notes: String,
    /// Clawback exposure for this policy.
    pub clawback_risk: ClawbackRisk,
}

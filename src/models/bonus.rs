//! Performance metrics and bonus result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A snapshot of an agent's performance for the bonus period.
///
/// Every field defaults to zero, which is also the snapshot used when the
/// upstream metrics source cannot be reached.
///
/// # Example
///
/// ```
/// use commission_engine::models::PerformanceMetrics;
/// use rust_decimal::Decimal;
///
/// let metrics: PerformanceMetrics = serde_json::from_str(r#"{"total_apps": 12}"#).unwrap();
/// assert_eq!(metrics.total_apps, 12);
/// assert_eq!(metrics.placement_rate, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceMetrics {
    /// Applications submitted in the period.
    pub total_apps: u32,
    /// Ancillary attach rate, as a percentage.
    pub ancillary_attach: Decimal,
    /// Closing rate, as a percentage.
    pub closing_rate: Decimal,
    /// Placement rate, as a percentage.
    pub placement_rate: Decimal,
    /// Compliance rate, as a percentage.
    pub compliance_rate: Decimal,
}

/// The bonus decision for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusResult {
    /// Whether the agent passed the placement and compliance gate.
    pub eligible: bool,
    /// Bonus paid per qualifying application.
    pub bonus_per_app: Decimal,
    /// Flat survival bonus paid during the Annual Enrollment Period.
    pub survival_bonus: Decimal,
    /// The tier reached, or why the agent is ineligible.
    pub bonus_notes: String,
}

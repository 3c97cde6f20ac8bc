//! Report assembly.
//!
//! Runs both rule sets for one submission and combines their results with
//! the submitted policy and client details.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{ClientDetails, CommissionReport, CommissionRequest, PerformanceMetrics};

use super::bonus::compute_bonus;
use super::commission::compute_commission;

/// Builds the combined commission and bonus report for a submission.
///
/// The bonus is evaluated with the request's AEP flag. Each report gets a
/// fresh id and timestamp; the commission and bonus sections depend only on
/// the inputs.
pub fn build_report(
    client: ClientDetails,
    request: &CommissionRequest,
    metrics: &PerformanceMetrics,
) -> CommissionReport {
    let commission = compute_commission(request);
    let bonus = compute_bonus(metrics, request.is_aep);

    CommissionReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        client,
        plan: request.plan.clone(),
        product: request.product.clone().filter(|p| !p.trim().is_empty()),
        state: request.state.trim().to_uppercase(),
        age: request.age,
        is_aep: request.is_aep,
        monthly_premium: commission.monthly,
        annual_premium: commission.annual,
        commission,
        bonus,
    }
}

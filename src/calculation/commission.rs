//! Commission calculation.
//!
//! Each plan with commission rules has its own function; [`compute_commission`]
//! dispatches on [`PlanKind`] with an exhaustive match, so a new plan variant
//! must be routed to rules (or explicitly to the unmodeled branch) before the
//! crate compiles.

use rust_decimal::Decimal;

use crate::models::{ClawbackRisk, CommissionRequest, CommissionResult, PlanKind};

use super::premium::{NormalizedPremiums, normalize_premiums};
use super::rounding::{format_money, format_percent, round2};

/// Flat MA/MAPD payout outside the Annual Enrollment Period.
pub const MA_MAPD_STANDARD_PAYOUT: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Flat MA/MAPD payout during the Annual Enrollment Period.
pub const MA_MAPD_AEP_PAYOUT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// UHOne HIP commission rate applied to the annual premium (73.25%).
pub const UHONE_HIP_RATE: Decimal = Decimal::from_parts(7325, 0, 0, false, 4);

/// Share of gross commission the agent retains (54%).
pub const UHONE_HIP_RETENTION: Decimal = Decimal::from_parts(54, 0, 0, false, 2);

/// Share of gross commission paid as the initial advance (75%).
pub const UHONE_HIP_ADVANCE_SHARE: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Months (10 to 12 of the policy year) across which the remainder is earned.
pub const UHONE_HIP_EARNING_MONTHS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Notes attached to plans that have no commission rules.
pub const UNMODELED_PLAN_NOTES: &str = "No commission rules defined for this plan yet.";

/// Computes the commission breakdown for a policy submission.
///
/// This never fails: plans without rules produce an all-zero result with
/// [`UNMODELED_PLAN_NOTES`]. Callers are expected to have run
/// [`validate_commission_request`](super::validate_commission_request) first.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::compute_commission;
/// use commission_engine::models::{CommissionRequest, PlanKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let request = CommissionRequest {
///     plan: PlanKind::UhoneHip,
///     product: None,
///     state: "TX".to_string(),
///     age: 45,
///     monthly_premium: None,
///     annual_premium: Some(Decimal::from_str("1000.00").unwrap()),
///     is_aep: false,
/// };
///
/// let result = compute_commission(&request);
/// assert_eq!(result.commission.to_string(), "395.55");
/// assert_eq!(result.advance.to_string(), "296.66");
/// assert_eq!(result.earned.to_string(), "98.89");
/// assert_eq!(result.monthly_earned.to_string(), "32.96");
/// ```
pub fn compute_commission(request: &CommissionRequest) -> CommissionResult {
    let premiums = normalize_premiums(request.monthly_premium, request.annual_premium);

    match &request.plan {
        PlanKind::MaMapd => ma_mapd_commission(premiums, request.is_aep),
        PlanKind::UhoneHip => uhone_hip_commission(premiums),
        PlanKind::HeartlandHip
        | PlanKind::HeartlandChas
        | PlanKind::HeartlandSthhc
        | PlanKind::MedSupp
        | PlanKind::Annuity
        | PlanKind::UhoneCritical
        | PlanKind::UhoneDental
        | PlanKind::UhoneVision
        | PlanKind::AmAmicable
        | PlanKind::LibertyBankers
        | PlanKind::Citizens
        | PlanKind::Unrecognized(_) => unmodeled_commission(premiums),
    }
}

/// Returns true if the plan has commission rules rather than the all-zero
/// fallback.
pub fn has_commission_rules(plan: &PlanKind) -> bool {
    matches!(plan, PlanKind::MaMapd | PlanKind::UhoneHip)
}

/// Flat fee paid in full on submission, subject to the 93-day survival clawback.
fn ma_mapd_commission(premiums: NormalizedPremiums, is_aep: bool) -> CommissionResult {
    let commission = round2(if is_aep {
        MA_MAPD_AEP_PAYOUT
    } else {
        MA_MAPD_STANDARD_PAYOUT
    });

    let notes = if is_aep {
        "AEP: $100 on-submit; subject to $100 survival bonus (93-day)."
    } else {
        "Standard: $200 on-submit; subject to 93-day clawback."
    };

    CommissionResult {
        annual: premiums.annual,
        monthly: premiums.monthly,
        rate: Decimal::ZERO,
        gross_commission: round2(Decimal::ZERO),
        commission,
        advance: commission,
        earned: round2(Decimal::ZERO),
        monthly_earned: round2(Decimal::ZERO),
        breakdown: "Flat payout".to_string(),
        breakdown_html: format!("Flat payout: ${}", format_money(commission)),
        notes: notes.to_string(),
        clawback_risk: ClawbackRisk::SurvivalClawback93Day,
    }
}

/// Rate-based commission with an advance and a deferred earned remainder.
///
/// Commission, advance, earned and monthly earned are each rounded to cents
/// as they are computed, and later amounts build on the rounded values.
fn uhone_hip_commission(premiums: NormalizedPremiums) -> CommissionResult {
    let rate = UHONE_HIP_RATE;
    let gross_commission = premiums.annual.checked_mul(rate).unwrap_or(Decimal::MAX);

    let commission = round2(gross_commission * UHONE_HIP_RETENTION);
    let advance = round2(gross_commission * UHONE_HIP_ADVANCE_SHARE * UHONE_HIP_RETENTION);
    let earned = round2(commission - advance);
    let monthly_earned = round2(earned / UHONE_HIP_EARNING_MONTHS);

    let breakdown_html = [
        format!("Annual Premium: ${}", format_money(premiums.annual)),
        format!("Rate: {}", format_percent(rate)),
        format!("Gross Commission: ${}", format_money(gross_commission)),
        format!("Initial Advance (75% × 54%): ${}", format_money(advance)),
        format!("Earned (Months 10–12): ${} total", format_money(earned)),
        format!("→ ${} each month", format_money(monthly_earned)),
        format!("Final Total Commission Paid: ${}", format_money(commission)),
    ]
    .join("<br>\n");

    CommissionResult {
        annual: premiums.annual,
        monthly: premiums.monthly,
        rate,
        gross_commission: round2(gross_commission),
        commission,
        advance,
        earned,
        monthly_earned,
        breakdown: format!("Rate: {}", format_percent(rate)),
        breakdown_html,
        notes: "UHOne HIP: Advance (~month 1), then earned months 10–12 (54% retention)."
            .to_string(),
        clawback_risk: ClawbackRisk::ChargebackFirst12Months,
    }
}

fn unmodeled_commission(premiums: NormalizedPremiums) -> CommissionResult {
    let zero = round2(Decimal::ZERO);

    CommissionResult {
        annual: premiums.annual,
        monthly: premiums.monthly,
        rate: Decimal::ZERO,
        gross_commission: zero,
        commission: zero,
        advance: zero,
        earned: zero,
        monthly_earned: zero,
        breakdown: "N/A".to_string(),
        breakdown_html: "No commission calculation available for this plan.".to_string(),
        notes: UNMODELED_PLAN_NOTES.to_string(),
        clawback_risk: ClawbackRisk::None,
    }
}

//! Calculation logic for the Commission Engine.
//!
//! This module contains the commission rules per plan, bonus tier
//! evaluation, premium normalization, cent rounding helpers, caller-side
//! request validation, and assembly of the combined submission report.
//! Every calculation here is a pure function of its inputs.

mod bonus;
mod commission;
mod premium;
mod report;
mod rounding;
mod validation;

pub use bonus::{
    AEP_SURVIVAL_BONUS, AEP_TIERS, BonusTier, INELIGIBLE_NOTES, MIN_COMPLIANCE_RATE,
    MIN_PLACEMENT_RATE, MONTHLY_TIERS, compute_bonus, resolve_tier,
};
pub use commission::{
    MA_MAPD_AEP_PAYOUT, MA_MAPD_STANDARD_PAYOUT, UHONE_HIP_ADVANCE_SHARE,
    UHONE_HIP_EARNING_MONTHS, UHONE_HIP_RATE, UHONE_HIP_RETENTION, UNMODELED_PLAN_NOTES,
    compute_commission, has_commission_rules,
};
pub use premium::{NormalizedPremiums, normalize_premiums};
pub use report::build_report;
pub use rounding::{format_money, format_percent, round2};
pub use validation::{MAX_PREMIUM, validate_commission_request};

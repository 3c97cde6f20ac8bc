//! Caller-side validation of commission requests.
//!
//! The calculator accepts any request; these checks reject submissions that
//! are incomplete before they reach it, naming the offending field.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::CommissionRequest;

/// Largest premium, monthly or annual, accepted for a submission.
pub const MAX_PREMIUM: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Checks that a request is complete enough to compute commission for.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRequest`] when:
/// - `plan` is empty
/// - `state` is empty
/// - `age` is zero
/// - either premium is negative or exceeds [`MAX_PREMIUM`]
/// - neither premium is positive (reported against `premium`)
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::validate_commission_request;
/// use commission_engine::error::EngineError;
/// use commission_engine::models::{CommissionRequest, PlanKind};
///
/// let request = CommissionRequest {
///     plan: PlanKind::MaMapd,
///     product: None,
///     state: "".to_string(),
///     age: 70,
///     monthly_premium: None,
///     annual_premium: None,
///     is_aep: false,
/// };
///
/// match validate_commission_request(&request) {
///     Err(EngineError::InvalidRequest { field, .. }) => assert_eq!(field, "state"),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn validate_commission_request(request: &CommissionRequest) -> EngineResult<()> {
    if request.plan.id().trim().is_empty() {
        return Err(EngineError::invalid("plan", "Please choose a plan type."));
    }

    if request.state.trim().is_empty() {
        return Err(EngineError::invalid("state", "Please choose a state."));
    }

    if request.age == 0 {
        return Err(EngineError::invalid("age", "Invalid age."));
    }

    for (field, value) in [
        ("monthly_premium", request.monthly_premium),
        ("annual_premium", request.annual_premium),
    ] {
        if value.is_some_and(|v| v < Decimal::ZERO) {
            return Err(EngineError::invalid(field, "must not be negative"));
        }
        if value.is_some_and(|v| v > MAX_PREMIUM) {
            return Err(EngineError::invalid(
                field,
                format!("must not exceed {}", MAX_PREMIUM),
            ));
        }
    }

    let has_premium = [request.monthly_premium, request.annual_premium]
        .into_iter()
        .flatten()
        .any(|v| v > Decimal::ZERO);
    if !has_premium {
        return Err(EngineError::invalid("premium", "Enter a valid premium."));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_valid_request() -> CommissionRequest {
        CommissionRequest {
            plan: PlanKind::UhoneHip,
            product: None,
            state: "TX".to_string(),
            age: 45,
            monthly_premium: Some(dec("120.00")),
            annual_premium: None,
            is_aep: false,
        }
    }

    fn rejected_field(request: &CommissionRequest) -> (String, String) {
        match validate_commission_request(request) {
            Err(EngineError::InvalidRequest { field, message }) => (field, message),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_commission_request(&create_valid_request()).is_ok());
    }

    #[test]
    fn test_unrecognized_plan_passes() {
        let mut request = create_valid_request();
        request.plan = PlanKind::parse("hospitalIndemnity");
        assert!(validate_commission_request(&request).is_ok());
    }

    #[test]
    fn test_empty_plan_rejected() {
        let mut request = create_valid_request();
        request.plan = PlanKind::parse("   ");
        assert_eq!(
            rejected_field(&request),
            ("plan".to_string(), "Please choose a plan type.".to_string())
        );
    }

    #[test]
    fn test_blank_state_rejected() {
        let mut request = create_valid_request();
        request.state = "  ".to_string();
        assert_eq!(rejected_field(&request).0, "state");
    }

    #[test]
    fn test_zero_age_rejected() {
        let mut request = create_valid_request();
        request.age = 0;
        assert_eq!(
            rejected_field(&request),
            ("age".to_string(), "Invalid age.".to_string())
        );
    }

    #[test]
    fn test_missing_premiums_rejected() {
        let mut request = create_valid_request();
        request.monthly_premium = None;
        assert_eq!(
            rejected_field(&request),
            ("premium".to_string(), "Enter a valid premium.".to_string())
        );

        request.monthly_premium = Some(Decimal::ZERO);
        request.annual_premium = Some(Decimal::ZERO);
        assert_eq!(rejected_field(&request).0, "premium");
    }

    #[test]
    fn test_negative_premium_rejected() {
        let mut request = create_valid_request();
        request.annual_premium = Some(dec("-1"));
        assert_eq!(
            rejected_field(&request),
            (
                "annual_premium".to_string(),
                "must not be negative".to_string()
            )
        );
    }

    #[test]
    fn test_premium_above_maximum_rejected() {
        let mut request = create_valid_request();
        request.monthly_premium = Some(dec("7000000000000000000000000000"));
        assert_eq!(
            rejected_field(&request),
            (
                "monthly_premium".to_string(),
                "must not exceed 10000000".to_string()
            )
        );

        request.monthly_premium = None;
        request.annual_premium = Some(MAX_PREMIUM + dec("0.01"));
        assert_eq!(rejected_field(&request).0, "annual_premium");

        request.annual_premium = Some(MAX_PREMIUM);
        assert!(validate_commission_request(&request).is_ok());
    }

    #[test]
    fn test_annual_only_passes() {
        let mut request = create_valid_request();
        request.monthly_premium = None;
        request.annual_premium = Some(dec("1000"));
        assert!(validate_commission_request(&request).is_ok());
    }

    #[test]
    fn test_checks_run_in_field_order() {
        let request = CommissionRequest {
            plan: PlanKind::parse(""),
            product: None,
            state: String::new(),
            age: 0,
            monthly_premium: None,
            annual_premium: None,
            is_aep: false,
        };
        assert_eq!(rejected_field(&request).0, "plan");
    }
}

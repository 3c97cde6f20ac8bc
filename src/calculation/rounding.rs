//! Cent rounding and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to cents, half away from zero, and fixes the
/// scale at two decimal places so `200` renders as `200.00`.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::round2;
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round2(Decimal::from_str("296.6625").unwrap()).to_string(), "296.66");
/// assert_eq!(round2(Decimal::from_str("0.125").unwrap()).to_string(), "0.13");
/// assert_eq!(round2(Decimal::from(200)).to_string(), "200.00");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats an amount as dollars and cents, without the currency symbol.
pub fn format_money(value: Decimal) -> String {
    round2(value).to_string()
}

/// Formats a fractional rate as a percentage with two decimal places.
///
/// ```
/// use commission_engine::calculation::format_percent;
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percent(Decimal::from_str("0.7325").unwrap()), "73.25%");
/// ```
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", round2(rate * Decimal::ONE_HUNDRED))
}

//! Premium normalization.
//!
//! Agents may enter either the monthly or the annual premium. The missing
//! (or zero) side is derived from the other and rounded to cents.

use rust_decimal::Decimal;

use super::rounding::round2;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Monthly and annual premium after one has been derived from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedPremiums {
    /// The annual premium.
    pub annual: Decimal,
    /// The monthly premium.
    pub monthly: Decimal,
}

/// Derives the annual and monthly premium from whichever was entered.
///
/// The annual premium wins when positive; otherwise it is `monthly × 12`.
/// The monthly premium is kept when positive; otherwise it is `annual ÷ 12`.
/// Both zero yields both zero. A derived annual premium too large to
/// represent saturates at [`Decimal::MAX`].
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::normalize_premiums;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let p = normalize_premiums(None, Some(Decimal::from_str("1000").unwrap()));
/// assert_eq!(p.monthly.to_string(), "83.33");
///
/// let p = normalize_premiums(Some(Decimal::from_str("45.50").unwrap()), None);
/// assert_eq!(p.annual.to_string(), "546.00");
/// ```
pub fn normalize_premiums(
    monthly_premium: Option<Decimal>,
    annual_premium: Option<Decimal>,
) -> NormalizedPremiums {
    let entered_monthly = positive(monthly_premium);
    let entered_annual = positive(annual_premium);

    let annual = match (entered_annual, entered_monthly) {
        (Some(annual), _) => round2(annual),
        (None, Some(monthly)) => {
            round2(monthly.checked_mul(MONTHS_PER_YEAR).unwrap_or(Decimal::MAX))
        }
        (None, None) => round2(Decimal::ZERO),
    };

    let monthly = match entered_monthly {
        Some(monthly) => round2(monthly),
        None => round2(annual / MONTHS_PER_YEAR),
    };

    NormalizedPremiums { annual, monthly }
}

fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| *v > Decimal::ZERO)
}

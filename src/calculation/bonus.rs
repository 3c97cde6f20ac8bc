//! Bonus tier evaluation.
//!
//! An agent first has to clear the placement and compliance gate. Past the
//! gate, the per-application bonus comes from the highest tier whose
//! application count, ancillary attach rate and closing rate minimums are all
//! met. The Annual Enrollment Period has its own tier table and adds a flat
//! survival bonus.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{BonusResult, PerformanceMetrics};

use super::rounding::round2;

/// Bonus notes for an agent who fails the placement or compliance gate.
pub const INELIGIBLE_NOTES: &str = "ineligible";

/// Minimum placement rate (percent) to be eligible for any bonus.
pub const MIN_PLACEMENT_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// Minimum compliance rate (percent) to be eligible for any bonus.
pub const MIN_COMPLIANCE_RATE: Decimal = Decimal::from_parts(85, 0, 0, false, 0);

/// Survival bonus paid during the Annual Enrollment Period.
pub const AEP_SURVIVAL_BONUS: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// A bonus tier. All three minimums must be met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusTier {
    /// Minimum applications submitted.
    pub min_apps: u32,
    /// Minimum ancillary attach rate (percent).
    pub min_ancillary_attach: Decimal,
    /// Minimum closing rate (percent).
    pub min_closing_rate: Decimal,
    /// Bonus paid per application at this tier.
    pub bonus_per_app: Decimal,
}

impl BonusTier {
    const fn new(min_apps: u32, min_ancillary_attach: u32, min_closing_rate: u32, bonus: u32) -> Self {
        Self {
            min_apps,
            min_ancillary_attach: Decimal::from_parts(min_ancillary_attach, 0, 0, false, 0),
            min_closing_rate: Decimal::from_parts(min_closing_rate, 0, 0, false, 0),
            bonus_per_app: Decimal::from_parts(bonus, 0, 0, false, 0),
        }
    }

    /// Returns true if the metrics meet every minimum of this tier.
    pub fn is_met_by(&self, metrics: &PerformanceMetrics) -> bool {
        metrics.total_apps >= self.min_apps
            && metrics.ancillary_attach >= self.min_ancillary_attach
            && metrics.closing_rate >= self.min_closing_rate
    }
}

/// Monthly tiers, highest first.
pub const MONTHLY_TIERS: [BonusTier; 4] = [
    BonusTier::new(60, 15, 20, 150),
    BonusTier::new(40, 12, 18, 100),
    BonusTier::new(30, 8, 16, 50),
    BonusTier::new(20, 5, 10, 25),
];

/// Annual Enrollment Period tiers, highest first.
pub const AEP_TIERS: [BonusTier; 4] = [
    BonusTier::new(350, 20, 25, 200),
    BonusTier::new(275, 15, 22, 150),
    BonusTier::new(200, 12, 18, 100),
    BonusTier::new(150, 8, 15, 75),
];

/// Returns the first (highest) tier met by the metrics.
pub fn resolve_tier<'a>(tiers: &'a [BonusTier], metrics: &PerformanceMetrics) -> Option<&'a BonusTier> {
    tiers.iter().find(|tier| tier.is_met_by(metrics))
}

/// Evaluates bonus eligibility and tier for an agent.
///
/// Agents below [`MIN_PLACEMENT_RATE`] or [`MIN_COMPLIANCE_RATE`] receive no
/// bonus and no tier lookup happens. All-zero metrics are therefore always
/// ineligible.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::compute_bonus;
/// use commission_engine::models::PerformanceMetrics;
/// use rust_decimal::Decimal;
///
/// let metrics = PerformanceMetrics {
///     total_apps: 65,
///     ancillary_attach: Decimal::from(16),
///     closing_rate: Decimal::from(21),
///     placement_rate: Decimal::from(80),
///     compliance_rate: Decimal::from(90),
/// };
///
/// let result = compute_bonus(&metrics, false);
/// assert_eq!(result.bonus_per_app.to_string(), "150.00");
/// assert_eq!(result.bonus_notes, "Monthly bonus tier: $150/MA-MAPD app.");
/// ```
pub fn compute_bonus(metrics: &PerformanceMetrics, is_aep: bool) -> BonusResult {
    let placement_short = metrics.placement_rate < MIN_PLACEMENT_RATE;
    let compliance_short = metrics.compliance_rate < MIN_COMPLIANCE_RATE;

    if placement_short || compliance_short {
        debug!(
            placement_rate = %metrics.placement_rate,
            compliance_rate = %metrics.compliance_rate,
            placement_short,
            compliance_short,
            "Bonus gate not met"
        );

        return BonusResult {
            eligible: false,
            bonus_per_app: round2(Decimal::ZERO),
            survival_bonus: round2(Decimal::ZERO),
            bonus_notes: INELIGIBLE_NOTES.to_string(),
        };
    }

    let tiers: &[BonusTier] = if is_aep { &AEP_TIERS } else { &MONTHLY_TIERS };
    let bonus_per_app = resolve_tier(tiers, metrics)
        .map(|tier| tier.bonus_per_app)
        .unwrap_or(Decimal::ZERO);

    if is_aep {
        BonusResult {
            eligible: true,
            bonus_per_app: round2(bonus_per_app),
            survival_bonus: round2(AEP_SURVIVAL_BONUS),
            bonus_notes: format!(
                "AEP bonus tier: ${}/app + ${} survival bonus.",
                bonus_per_app, AEP_SURVIVAL_BONUS
            ),
        }
    } else {
        BonusResult {
            eligible: true,
            bonus_per_app: round2(bonus_per_app),
            survival_bonus: round2(Decimal::ZERO),
            bonus_notes: format!("Monthly bonus tier: ${}/MA-MAPD app.", bonus_per_app),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_metrics(
        total_apps: u32,
        ancillary_attach: &str,
        closing_rate: &str,
        placement_rate: &str,
        compliance_rate: &str,
    ) -> PerformanceMetrics {
        PerformanceMetrics {
            total_apps,
            ancillary_attach: dec(ancillary_attach),
            closing_rate: dec(closing_rate),
            placement_rate: dec(placement_rate),
            compliance_rate: dec(compliance_rate),
        }
    }

    /// BE-001: low placement fails the gate regardless of volume
    #[test]
    fn test_low_placement_is_ineligible() {
        let metrics = create_metrics(500, "30", "40", "70", "90");
        let result = compute_bonus(&metrics, false);

        assert!(!result.eligible);
        assert_eq!(result.bonus_per_app, Decimal::ZERO);
        assert_eq!(result.survival_bonus, Decimal::ZERO);
        assert_eq!(result.bonus_notes, "ineligible");
    }

    /// BE-002: low compliance fails the gate, even during AEP
    #[test]
    fn test_low_compliance_is_ineligible_during_aep() {
        let metrics = create_metrics(400, "25", "30", "90", "84.9");
        let result = compute_bonus(&metrics, true);

        assert!(!result.eligible);
        assert_eq!(result.bonus_per_app, Decimal::ZERO);
        assert_eq!(result.survival_bonus, Decimal::ZERO);
        assert_eq!(result.bonus_notes, "ineligible");
    }

    /// BE-003: all-zero metrics are ineligible
    #[test]
    fn test_zero_metrics_are_ineligible() {
        let result = compute_bonus(&PerformanceMetrics::default(), true);

        assert!(!result.eligible);
        assert_eq!(result.bonus_per_app, Decimal::ZERO);
        assert_eq!(result.survival_bonus, Decimal::ZERO);
        assert_eq!(result.bonus_notes, "ineligible");
    }

    /// BE-004: gate thresholds are inclusive
    #[test]
    fn test_gate_thresholds_are_inclusive() {
        let metrics = create_metrics(20, "5", "10", "75", "85");
        let result = compute_bonus(&metrics, false);

        assert!(result.eligible);
        assert_eq!(result.bonus_per_app, dec("25"));
    }

    /// BE-005: exceeding the top monthly tier pays the top tier
    #[test]
    fn test_top_monthly_tier() {
        let metrics = create_metrics(65, "16", "21", "80", "90");
        let result = compute_bonus(&metrics, false);

        assert_eq!(result.bonus_per_app, dec("150.00"));
        assert_eq!(result.survival_bonus, Decimal::ZERO);
        assert_eq!(result.bonus_notes, "Monthly bonus tier: $150/MA-MAPD app.");
    }

    /// BE-006: a single short metric drops to the next tier
    #[test]
    fn test_short_closing_rate_drops_a_tier() {
        let metrics = create_metrics(65, "16", "19", "80", "90");
        let result = compute_bonus(&metrics, false);

        assert_eq!(result.bonus_per_app, dec("100"));
    }

    #[test]
    fn test_each_monthly_tier() {
        let cases = [
            (60, "15", "20", "150"),
            (40, "12", "18", "100"),
            (30, "8", "16", "50"),
            (20, "5", "10", "25"),
            (19, "50", "50", "0"),
        ];

        for (apps, attach, closing, expected) in cases {
            let metrics = create_metrics(apps, attach, closing, "80", "90");
            let result = compute_bonus(&metrics, false);
            assert_eq!(result.bonus_per_app, dec(expected), "apps {}", apps);
        }
    }

    /// BE-007: top AEP tier with survival bonus
    #[test]
    fn test_top_aep_tier() {
        let metrics = create_metrics(360, "21", "26", "80", "90");
        let result = compute_bonus(&metrics, true);

        assert!(result.eligible);
        assert_eq!(result.bonus_per_app, dec("200"));
        assert_eq!(result.survival_bonus, dec("100"));
        assert_eq!(
            result.bonus_notes,
            "AEP bonus tier: $200/app + $100 survival bonus."
        );
    }

    #[test]
    fn test_each_aep_tier() {
        let cases = [
            (350, "20", "25", "200"),
            (275, "15", "22", "150"),
            (200, "12", "18", "100"),
            (150, "8", "15", "75"),
        ];

        for (apps, attach, closing, expected) in cases {
            let metrics = create_metrics(apps, attach, closing, "80", "90");
            let result = compute_bonus(&metrics, true);
            assert_eq!(result.bonus_per_app, dec(expected), "apps {}", apps);
            assert_eq!(result.survival_bonus, dec("100"));
        }
    }

    /// BE-008: survival bonus is paid even with no AEP tier reached
    #[test]
    fn test_aep_survival_bonus_without_tier() {
        let metrics = create_metrics(100, "30", "30", "80", "90");
        let result = compute_bonus(&metrics, true);

        assert_eq!(result.bonus_per_app, Decimal::ZERO);
        assert_eq!(result.survival_bonus, dec("100"));
        assert_eq!(
            result.bonus_notes,
            "AEP bonus tier: $0/app + $100 survival bonus."
        );
    }

    #[test]
    fn test_monthly_volume_below_aep_minimum() {
        // Top monthly tier but below every AEP tier.
        let metrics = create_metrics(65, "16", "21", "80", "90");

        assert_eq!(compute_bonus(&metrics, false).bonus_per_app, dec("150"));
        assert_eq!(compute_bonus(&metrics, true).bonus_per_app, Decimal::ZERO);
    }

    #[test]
    fn test_resolve_tier_returns_highest_match() {
        let metrics = create_metrics(1000, "100", "100", "100", "100");
        let tier = resolve_tier(&MONTHLY_TIERS, &metrics).unwrap();

        assert_eq!(tier.bonus_per_app, dec("150"));
        assert!(resolve_tier(&MONTHLY_TIERS, &PerformanceMetrics::default()).is_none());
    }

    #[test]
    fn test_tier_tables_descend() {
        for tiers in [&MONTHLY_TIERS, &AEP_TIERS] {
            for pair in tiers.windows(2) {
                assert!(pair[0].min_apps > pair[1].min_apps);
                assert!(pair[0].bonus_per_app > pair[1].bonus_per_app);
            }
        }
    }
}

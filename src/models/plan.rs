//! Plan kinds and the product catalogue.
//!
//! Every plan an agent can submit is a variant of [`PlanKind`]. Identifiers
//! that match no known plan are kept verbatim in [`PlanKind::Unrecognized`]
//! so the commission rules can degrade gracefully instead of rejecting them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A sub-product offered under a plan (e.g. a dental tier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    /// The product identifier submitted alongside the plan.
    pub id: &'static str,
    /// The human-readable product label.
    pub label: &'static str,
}

const fn product(id: &'static str, label: &'static str) -> Product {
    Product { id, label }
}

const UHONE_CRITICAL_PRODUCTS: &[Product] = &[
    product("criticalGuardU25", "CriticalGuard Under 25k"),
    product("criticalGuard25Plus", "CriticalGuard 25k+"),
    product("criticalIllness", "Critical Illness"),
    product("criticalLifeSafeGuard", "Critical Life SafeGuard (10yr/20yr)"),
];

const UHONE_DENTAL_PRODUCTS: &[Product] = &[
    product("dentalWiseBasic", "DentalWise Basic"),
    product("dentalWise1000", "DentalWise 1000/2000"),
    product("dentalWiseMax", "DentalWise Max"),
    product("dentalGen", "Dental Gen"),
    product("dentalPrimary", "Dental Primary"),
    product("dentalPremier", "Dental Premier"),
    product("advantageGuard", "AdvantageGuard"),
];

const UHONE_VISION_PRODUCTS: &[Product] = &[
    product("visionStandalone", "Vision Standalone"),
    product("visionWisePremier", "VisionWise Premier"),
];

const AM_AMICABLE_PRODUCTS: &[Product] = &[
    product("expressUL", "Express UL (43%)"),
    product("platinumSolutions", "Platinum Solutions (52%)"),
    product("goldenSolutions", "Golden Solutions (50%)"),
    product("easyTerm", "Easy Term (45%)"),
    product("homeProtector", "Home Protector (54%)"),
    product("secureLifePlus", "SecureLife Plus (57%)"),
    product("securityProtector", "Security Protector (45%)"),
    product("survivorProtector", "Survivor Protector (55%)"),
    product("termMadeSimple", "Term Made Simple (43%)"),
];

const LIBERTY_BANKERS_PRODUCTS: &[Product] = &[
    product("t2SimplPref", "T2 SIMPL PREF Yr1 (49.99%)"),
    product("t2SimplStd", "T2 SIMPL STD Yr1 (48.21%)"),
    product("modWL", "MOD WL Yr1 (32.14%)"),
    product("flex4LifeBase", "Flex4Life Base Yr1 (42.85%)"),
    product("flex4Life10Yr", "Flex4Life 10Yr Yr1 (28.57%)"),
];

const CITIZENS_PRODUCTS: &[Product] = &[product("guaranteedIssue", "Guaranteed Issue (33.92%)")];

/// The kind of plan a policy was written under.
///
/// Parsing is lenient about case and separators, so `"MA_MAPD"`, `"maMapd"`
/// and `"ma-mapd"` all resolve to [`PlanKind::MaMapd`]. Serialization always
/// emits the canonical identifier returned by [`PlanKind::id`].
///
/// # Example
///
/// ```
/// use commission_engine::models::PlanKind;
///
/// assert_eq!(PlanKind::parse("UHONE_HIP"), PlanKind::UhoneHip);
/// assert_eq!(PlanKind::UhoneHip.id(), "uhoneHIP");
/// assert_eq!(
///     PlanKind::parse("pet insurance"),
///     PlanKind::Unrecognized("pet insurance".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanKind {
    /// Medicare Advantage / Medicare Advantage Prescription Drug (flat fee).
    MaMapd,
    /// Heartland health insurance plan.
    HeartlandHip,
    /// UnitedHealthOne health insurance plan (rate based, deferred earning).
    UhoneHip,
    /// Heartland CHAS.
    HeartlandChas,
    /// Heartland short-term home health care.
    HeartlandSthhc,
    /// Medicare Supplement.
    MedSupp,
    /// Annuity.
    Annuity,
    /// UnitedHealthOne critical illness lines.
    UhoneCritical,
    /// UnitedHealthOne dental lines.
    UhoneDental,
    /// UnitedHealthOne vision lines.
    UhoneVision,
    /// American Amicable life products.
    AmAmicable,
    /// Liberty Bankers life products.
    LibertyBankers,
    /// Citizens life products.
    Citizens,
    /// Any identifier that matches no known plan, kept as submitted.
    Unrecognized(String),
}

impl PlanKind {
    /// Every known plan, in catalogue order.
    pub const KNOWN: [PlanKind; 13] = [
        PlanKind::MaMapd,
        PlanKind::HeartlandHip,
        PlanKind::UhoneHip,
        PlanKind::HeartlandChas,
        PlanKind::HeartlandSthhc,
        PlanKind::MedSupp,
        PlanKind::Annuity,
        PlanKind::UhoneCritical,
        PlanKind::UhoneDental,
        PlanKind::UhoneVision,
        PlanKind::AmAmicable,
        PlanKind::LibertyBankers,
        PlanKind::Citizens,
    ];

    /// Resolves a plan identifier.
    pub fn parse(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "mamapd" => PlanKind::MaMapd,
            "heartlandhip" => PlanKind::HeartlandHip,
            "uhonehip" => PlanKind::UhoneHip,
            "heartlandchas" => PlanKind::HeartlandChas,
            "heartlandsthhc" => PlanKind::HeartlandSthhc,
            "medsupp" => PlanKind::MedSupp,
            "annuity" => PlanKind::Annuity,
            "uhonecritical" => PlanKind::UhoneCritical,
            "uhonedental" => PlanKind::UhoneDental,
            "uhonevision" => PlanKind::UhoneVision,
            "amamicable" => PlanKind::AmAmicable,
            "libertybankers" => PlanKind::LibertyBankers,
            "citizens" => PlanKind::Citizens,
            _ => PlanKind::Unrecognized(raw.trim().to_string()),
        }
    }

    /// The canonical identifier for this plan.
    pub fn id(&self) -> &str {
        match self {
            PlanKind::MaMapd => "maMapd",
            PlanKind::HeartlandHip => "heartlandHIP",
            PlanKind::UhoneHip => "uhoneHIP",
            PlanKind::HeartlandChas => "heartlandCHAS",
            PlanKind::HeartlandSthhc => "heartlandSTHHC",
            PlanKind::MedSupp => "medSupp",
            PlanKind::Annuity => "annuity",
            PlanKind::UhoneCritical => "uhoneCritical",
            PlanKind::UhoneDental => "uhoneDental",
            PlanKind::UhoneVision => "uhoneVision",
            PlanKind::AmAmicable => "amAmicable",
            PlanKind::LibertyBankers => "libertyBankers",
            PlanKind::Citizens => "citizens",
            PlanKind::Unrecognized(raw) => raw,
        }
    }

    /// The human-readable plan name.
    pub fn label(&self) -> &str {
        match self {
            PlanKind::MaMapd => "MA/MAPD",
            PlanKind::HeartlandHip => "Heartland HIP",
            PlanKind::UhoneHip => "UHOne HIP",
            PlanKind::HeartlandChas => "Heartland CHAS",
            PlanKind::HeartlandSthhc => "Heartland STHHC",
            PlanKind::MedSupp => "Medicare Supplement",
            PlanKind::Annuity => "Annuity",
            PlanKind::UhoneCritical => "UHOne Critical Illness",
            PlanKind::UhoneDental => "UHOne Dental",
            PlanKind::UhoneVision => "UHOne Vision",
            PlanKind::AmAmicable => "American Amicable",
            PlanKind::LibertyBankers => "Liberty Bankers",
            PlanKind::Citizens => "Citizens",
            PlanKind::Unrecognized(raw) => raw,
        }
    }

    /// Sub-products that can be chosen for this plan; empty when the plan
    /// takes no product.
    pub fn products(&self) -> &'static [Product] {
        match self {
            PlanKind::UhoneCritical => UHONE_CRITICAL_PRODUCTS,
            PlanKind::UhoneDental => UHONE_DENTAL_PRODUCTS,
            PlanKind::UhoneVision => UHONE_VISION_PRODUCTS,
            PlanKind::AmAmicable => AM_AMICABLE_PRODUCTS,
            PlanKind::LibertyBankers => LIBERTY_BANKERS_PRODUCTS,
            PlanKind::Citizens => CITIZENS_PRODUCTS,
            _ => &[],
        }
    }

    /// Returns true if the identifier matched a known plan.
    pub fn is_known(&self) -> bool {
        !matches!(self, PlanKind::Unrecognized(_))
    }
}

impl From<&str> for PlanKind {
    fn from(raw: &str) -> Self {
        PlanKind::parse(raw)
    }
}

impl From<String> for PlanKind {
    fn from(raw: String) -> Self {
        PlanKind::parse(&raw)
    }
}

impl From<PlanKind> for String {
    fn from(plan: PlanKind) -> Self {
        match plan {
            PlanKind::Unrecognized(raw) => raw,
            known => known.id().to_string(),
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

use crate::core::classifier::DomainTag;
use crate::core::domains::{check_size_points, matched_groups, DomainInput, DomainScore};
use crate::core::scoring::InvestorCategory;

/// Real estate deals need the provider to cover at least half the raise
pub const MIN_OVERLAP: f64 = 0.50;

const PROPERTY_WEIGHT: f64 = 0.30;
const DEAL_STAGE_WEIGHT: f64 = 0.25;
const GEOGRAPHY_WEIGHT: f64 = 0.20;
const INVESTOR_WEIGHT: f64 = 0.15;
const CHECK_SIZE_WEIGHT: f64 = 0.10;

const MISMATCH_SCORE: f64 = 25.0;
const MISMATCH_MULTIPLIER: f64 = 0.5;

const PROPERTY_TYPES: &[(&str, &[&str])] = &[
    ("multifamily", &["multifamily", "multi family", "apartment", "apartments"]),
    ("residential", &["residential", "single family", "homes", "housing"]),
    ("office", &["office"]),
    ("industrial", &["industrial", "warehouse", "cold storage", "logistics facility"]),
    ("retail", &["retail", "shopping center", "strip mall"]),
    ("hospitality", &["hospitality", "hotel", "hotels", "resort"]),
    ("mixed use", &["mixed use"]),
    ("self storage", &["self storage"]),
    ("senior living", &["senior living", "assisted living"]),
    ("student housing", &["student housing"]),
];

/// Ordered from lowest to highest risk
const DEAL_STAGES: &[(&str, &[&str])] = &[
    ("core", &["core", "stabilized", "stabilised"]),
    ("core-plus", &["core plus", "light value add"]),
    ("value-add", &["value add", "repositioning", "renovation", "rehab"]),
    ("opportunistic", &["opportunistic", "distressed"]),
    ("development", &["ground up", "new construction", "development"]),
];

const SPECIALIST_KEYWORDS: &[&str] = &[
    "real estate",
    "reit",
    "property fund",
    "real assets",
    "real estate private equity",
];

fn property_type_score(input: &DomainInput<'_>) -> (f64, Option<&'static str>) {
    let seeker = matched_groups(&input.seeker_text, PROPERTY_TYPES);
    let provider = matched_groups(&input.provider_text, PROPERTY_TYPES);
    if let Some(shared) = seeker.iter().find(|index| provider.contains(index)) {
        return (100.0, Some(PROPERTY_TYPES[*shared].0));
    }
    let score = if seeker.is_empty() || provider.is_empty() {
        60.0
    } else {
        25.0
    };
    (score, None)
}

fn deal_stage_score(input: &DomainInput<'_>) -> f64 {
    // A seeker naming several stages is placed at the riskiest one
    let Some(seeker) = matched_groups(&input.seeker_text, DEAL_STAGES).into_iter().max() else {
        return 60.0;
    };
    let provider = matched_groups(&input.provider_text, DEAL_STAGES);
    let Some(distance) = provider.iter().map(|index| index.abs_diff(seeker)).min() else {
        return 60.0;
    };
    match distance {
        0 => 100.0,
        1 => 70.0,
        _ => 35.0,
    }
}

fn investor_score(input: &DomainInput<'_>) -> f64 {
    if input.provider_text.any(SPECIALIST_KEYWORDS) {
        return 90.0;
    }
    match input.provider.investor_type().and_then(InvestorCategory::from_type) {
        Some(InvestorCategory::FamilyOffice | InvestorCategory::PrivateEquity) => 90.0,
        Some(InvestorCategory::VentureCapital | InvestorCategory::Accelerator) => 40.0,
        _ => 60.0,
    }
}

/// Score a real estate seeker against a provider
pub fn score(input: &DomainInput<'_>) -> DomainScore {
    if let Some(overlap) = input.overlap.filter(|ratio| *ratio < MIN_OVERLAP) {
        return DomainScore::auto_reject(
            DomainTag::RealEstate,
            format!(
                "Check size covers {:.0}% of the raise; real estate requires {:.0}%",
                overlap * 100.0,
                MIN_OVERLAP * 100.0
            ),
        );
    }
    // Auto-rejects above outrank the cross-domain penalty
    if input.is_domain_mismatch() {
        return input.mismatch(MISMATCH_SCORE, MISMATCH_MULTIPLIER);
    }

    let mut reasons = Vec::new();

    let (property, shared_type) = property_type_score(input);
    if let Some(property_type) = shared_type {
        reasons.push(format!("Invests in {} properties", property_type));
    }

    let deal_stage = deal_stage_score(input);
    if deal_stage >= 100.0 {
        reasons.push("Matching deal risk profile".to_string());
    }

    let investor = investor_score(input);
    if investor >= 90.0 {
        reasons.push("Real estate capital provider".to_string());
    }

    let score = property * PROPERTY_WEIGHT
        + deal_stage * DEAL_STAGE_WEIGHT
        + input.breakdown.geographic_practicality * GEOGRAPHY_WEIGHT
        + investor * INVESTOR_WEIGHT
        + check_size_points(input.overlap) * CHECK_SIZE_WEIGHT;

    DomainScore::new(DomainTag::RealEstate, score, 1.0, reasons)
}

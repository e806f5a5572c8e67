// Property tests for Capital Match

use capital_match::core::check_size::parse_check_size;
use capital_match::core::Matcher;
use capital_match::models::{InvestmentFirm, Seeker};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

const STAGES: &[&str] = &[
    "pre-seed",
    "seed",
    "series a",
    "series b",
    "series c",
    "growth",
    "late stage",
    "sometime",
];
const INDUSTRIES: &[&str] = &[
    "Fintech",
    "Film",
    "Real Estate",
    "Biotech",
    "Medtech",
    "SaaS",
    "CPG",
    "Deep Tech",
    "Gaming",
    "",
];
const DESCRIPTIONS: &[&str] = &[
    "Single-picture equity financing for a horror feature",
    "Senior secured debt lender for motion picture production",
    "Value-add multifamily acquisition fund",
    "Preclinical antibody therapeutics",
    "Workflow software for small businesses with recurring revenue",
    "Plastic-free household cleaning products in specialty retail",
    "Generalist investor backing ambitious founders",
    "",
];

fn seeker(industry: usize, description: usize, stage: usize, target: Option<f64>) -> Seeker {
    Seeker {
        id: "seeker".to_string(),
        industries: vec![INDUSTRIES[industry].to_string()],
        description: Some(DESCRIPTIONS[description].to_string()),
        stage: Some(STAGES[stage].to_string()),
        target_amount: target,
        location: Some("Austin, TX".to_string()),
        ..Default::default()
    }
}

fn firm(description: usize, stage: usize, min: f64, span: f64, age_days: i64) -> InvestmentFirm {
    let as_of = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    InvestmentFirm {
        id: "firm".to_string(),
        name: "Firm".to_string(),
        description: Some(DESCRIPTIONS[description].to_string()),
        firm_type: Some("Family Office".to_string()),
        stages: vec![STAGES[stage].to_string()],
        check_size_min: Some(min),
        check_size_max: Some(min + span),
        portfolio_count: Some(12),
        website: Some("https://firm.example".to_string()),
        last_updated: Some(as_of - Duration::days(age_days)),
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn scores_stay_in_bounds(
        industry in 0..INDUSTRIES.len(),
        seeker_desc in 0..DESCRIPTIONS.len(),
        provider_desc in 0..DESCRIPTIONS.len(),
        seeker_stage in 0..STAGES.len(),
        provider_stage in 0..STAGES.len(),
        target in proptest::option::of(10_000.0f64..50_000_000.0),
        min in 0.0f64..20_000_000.0,
        span in 1.0f64..20_000_000.0,
        age_days in 0i64..1000,
    ) {
        let as_of = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let seeker = seeker(industry, seeker_desc, seeker_stage, target);
        let provider = firm(provider_desc, provider_stage, min, span, age_days);
        let result =
            Matcher::with_default_weights().score_candidate(&seeker, &provider, false, as_of);

        prop_assert!((0.0..=100.0).contains(&result.score));
        prop_assert!((0.0..=100.0).contains(&result.base_score));
        prop_assert!(result.context_multiplier >= 1.0 && result.context_multiplier <= 1.5);
        prop_assert!(result.activity_multiplier >= 1.0 && result.activity_multiplier <= 1.3);
        if let Some(b) = result.breakdown {
            for factor in [
                b.semantic_fit,
                b.stage_compatibility,
                b.economic_fit,
                b.geographic_practicality,
                b.investor_behavior,
                b.investor_type_logic,
                b.network_warmth,
            ] {
                prop_assert!((0.0..=100.0).contains(&factor));
            }
        }
        if !result.passed_hard_constraints {
            prop_assert_eq!(result.score, 0.0);
            prop_assert!(result.reasons.is_empty());
            prop_assert!(!result.constraint_failures.is_empty());
        }
    }

    #[test]
    fn scoring_is_deterministic(
        seeker_desc in 0..DESCRIPTIONS.len(),
        provider_desc in 0..DESCRIPTIONS.len(),
        min in 0.0f64..5_000_000.0,
    ) {
        let as_of = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let seeker = seeker(0, seeker_desc, 1, Some(1_000_000.0));
        let provider = firm(provider_desc, 1, min, 2_000_000.0, 10);
        let matcher = Matcher::with_default_weights();
        let first = matcher.score_candidate(&seeker, &provider, false, as_of);
        let second = matcher.score_candidate(&seeker, &provider, false, as_of);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parsed_ranges_are_ordered(text in "\\PC{0,40}") {
        if let Some(range) = parse_check_size(&text) {
            prop_assert!(range.min >= 0.0);
            prop_assert!(range.min <= range.max);
            prop_assert!(range.max > 0.0);
        }
    }
}

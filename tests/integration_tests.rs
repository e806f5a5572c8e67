// Integration tests for Capital Match

use capital_match::core::{DomainTag, Matcher};
use capital_match::models::{
    IndividualInvestor, InvestmentFirm, MatchOptions, Provider, ProviderKind, Seeker,
};
use capital_match::services::{InMemoryStore, MatchError, MatchingService};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
}

fn options() -> MatchOptions {
    MatchOptions {
        as_of: Some(as_of()),
        ..Default::default()
    }
}

fn create_fintech_seeker() -> Seeker {
    Seeker {
        id: "ledgerly".to_string(),
        name: Some("Ledgerly".to_string()),
        industries: vec!["Fintech".to_string()],
        description: Some("Fintech payments platform for independent clinics".to_string()),
        stage: Some("Seed".to_string()),
        target_amount: Some(1_000_000.0),
        location: Some("Austin, TX".to_string()),
        ..Default::default()
    }
}

fn create_fintech_firm(id: &str, min: f64, max: f64) -> InvestmentFirm {
    InvestmentFirm {
        id: id.to_string(),
        name: format!("Firm {}", id),
        description: Some("We back fintech payments platform founders".to_string()),
        firm_type: Some("Venture Capital".to_string()),
        stages: vec!["seed".to_string(), "series-a".to_string()],
        check_size_min: Some(min),
        check_size_max: Some(max),
        location: Some("New York, NY".to_string()),
        last_updated: Some(as_of() - Duration::days(30)),
        ..Default::default()
    }
}

#[test]
fn test_integration_fintech_scenario() {
    let matcher = Matcher::with_default_weights();
    let seeker = create_fintech_seeker();
    let firm = create_fintech_firm("north", 500_000.0, 1_500_000.0);

    let result = matcher.score_candidate(&seeker, &firm, false, as_of());

    assert!(result.passed_hard_constraints);
    assert_eq!(result.domain, DomainTag::Fintech);
    let breakdown = result.breakdown.expect("passing results carry a breakdown");
    assert!(breakdown.economic_fit >= 80.0);
    assert_eq!(breakdown.stage_compatibility, 100.0);
    assert!(
        result.score >= 70.0 && result.score <= 95.0,
        "final score {} outside 70-95",
        result.score
    );
    assert!(result.reasons.iter().any(|r| r.contains("fintech")));
}

#[test]
fn test_integration_check_size_mismatch() {
    let matcher = Matcher::with_default_weights();
    let seeker = Seeker {
        target_amount: Some(10_000_000.0),
        ..create_fintech_seeker()
    };
    let firm = InvestmentFirm {
        check_size_min: None,
        check_size_max: Some(50_000.0),
        ..create_fintech_firm("micro", 0.0, 0.0)
    };

    let result = matcher.score_candidate(&seeker, &firm, false, as_of());

    assert!(!result.passed_hard_constraints);
    assert_eq!(result.score, 0.0);
    assert!(result.reasons.is_empty());
    assert!(result
        .constraint_failures
        .iter()
        .any(|f| f.starts_with("Check size mismatch")));
}

#[test]
fn test_integration_film_equity_vs_senior_debt() {
    let matcher = Matcher::with_default_weights();
    let seeker = Seeker {
        id: "indie".to_string(),
        industries: vec!["Film".to_string()],
        description: Some("Single-picture equity financing for an indie feature film".to_string()),
        stage: Some("seed".to_string()),
        target_amount: Some(2_000_000.0),
        ..Default::default()
    };
    let lender = InvestmentFirm {
        id: "senior".to_string(),
        name: "Senior Film Capital".to_string(),
        description: Some(
            "Senior secured film debt lender for motion picture production".to_string(),
        ),
        firm_type: Some("Lender".to_string()),
        check_size_min: Some(1_000_000.0),
        check_size_max: Some(5_000_000.0),
        ..Default::default()
    };

    let result = matcher.score_candidate(&seeker, &lender, false, as_of());

    assert_eq!(result.domain, DomainTag::Film);
    assert_eq!(result.score, 0.0);
    assert!(!result.passed_hard_constraints);
    assert!(result.breakdown.is_some());
    assert!(result
        .constraint_failures
        .iter()
        .any(|f| f.contains("Incompatible deal structure")));
}

#[test]
fn test_integration_auto_reject_outranks_cross_domain_classification() {
    let matcher = Matcher::with_default_weights();
    let seeker = Seeker {
        id: "indie".to_string(),
        industries: vec!["Film".to_string()],
        description: Some("Single-picture equity financing for an indie feature film".to_string()),
        stage: Some("seed".to_string()),
        target_amount: Some(2_000_000.0),
        ..Default::default()
    };
    let lender = InvestmentFirm {
        id: "credit".to_string(),
        name: "Producer Credit".to_string(),
        description: Some(
            "Senior secured lending and credit facilities for independent producers".to_string(),
        ),
        check_size_min: Some(1_000_000.0),
        check_size_max: Some(5_000_000.0),
        last_updated: Some(as_of() - Duration::days(30)),
        ..Default::default()
    };

    let result = matcher.score_candidate(&seeker, &lender, false, as_of());

    assert!(!result.passed_hard_constraints);
    assert_eq!(result.score, 0.0);
    assert!(result
        .constraint_failures
        .iter()
        .any(|f| f.contains("Incompatible deal structure")));
}

#[test]
fn test_integration_stage_boundary() {
    let matcher = Matcher::with_default_weights();
    let seeker = create_fintech_seeker();

    let mut one_away = create_fintech_firm("a", 500_000.0, 1_500_000.0);
    one_away.stages = vec!["Series A".to_string()];
    assert!(matcher.score_candidate(&seeker, &one_away, false, as_of()).passed_hard_constraints);

    let mut two_away = create_fintech_firm("b", 500_000.0, 1_500_000.0);
    two_away.stages = vec!["Series B".to_string()];
    let result = matcher.score_candidate(&seeker, &two_away, false, as_of());
    assert!(!result.passed_hard_constraints);
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_integration_monotonic_in_overlap() {
    let matcher = Matcher::with_default_weights();
    let seeker = create_fintech_seeker();

    // Seeker range is 0.5M..1.5M; lowering the provider minimum widens the overlap
    let scores: Vec<(f64, f64)> = [1_300_000.0, 1_000_000.0, 700_000.0, 500_000.0]
        .iter()
        .map(|min| {
            let firm = create_fintech_firm("m", *min, 3_000_000.0);
            let result = matcher.score_candidate(&seeker, &firm, false, as_of());
            assert!(result.passed_hard_constraints);
            let economic = result.breakdown.map(|b| b.economic_fit).unwrap_or_default();
            (economic, result.score)
        })
        .collect();

    for pair in scores.windows(2) {
        assert!(pair[1].0 > pair[0].0, "economic fit not increasing: {:?}", scores);
        assert!(pair[1].1 >= pair[0].1, "final score decreased: {:?}", scores);
    }
}

#[test]
fn test_integration_ranking_is_deterministic() {
    let matcher = Matcher::with_default_weights();
    let seeker = create_fintech_seeker();
    let providers: Vec<Provider> = (0..30)
        .map(|i| {
            let min = 300_000.0 + (i % 7) as f64 * 100_000.0;
            let firm = create_fintech_firm(&format!("f{:02}", i), min, 1_500_000.0);
            Provider::Firm(firm)
        })
        .collect();

    let first = matcher.rank(&seeker, &providers, &options());
    let second = matcher.rank(&seeker, &providers, &options());
    assert_eq!(first.matches, second.matches);

    for pair in first.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_integration_end_to_end_service() {
    let seeker = create_fintech_seeker();
    let providers = vec![
        Provider::Firm(create_fintech_firm("good", 500_000.0, 1_500_000.0)),
        Provider::Firm(create_fintech_firm("tiny", 10_000.0, 50_000.0)),
        Provider::Individual(IndividualInvestor {
            id: "angel".to_string(),
            name: "Dana".to_string(),
            bio: Some("Angel investor in fintech payments".to_string()),
            investor_type: Some("Angel".to_string()),
            typical_check_size: Some("$500K-$2M".to_string()),
            ..Default::default()
        }),
        Provider::Individual(IndividualInvestor {
            id: "partner".to_string(),
            name: "Partner at Good".to_string(),
            firm_id: Some("good".to_string()),
            typical_check_size: Some("$1M".to_string()),
            ..Default::default()
        }),
    ];
    let service = MatchingService::new(
        InMemoryStore::new(vec![seeker], providers),
        Matcher::with_default_weights(),
    );

    let ranked = service.rank_for_seeker("ledgerly", &options()).unwrap();
    assert_eq!(ranked.total_candidates, 3);
    assert_eq!(ranked.rejected_by_gate, 1);
    assert!(ranked.matches.iter().all(|m| m.passed_hard_constraints));
    assert!(ranked.matches.iter().all(|m| m.provider.id != "partner"));
    assert!(ranked
        .matches
        .iter()
        .any(|m| m.provider.kind == ProviderKind::Individual));

    let missing = service.run_matching("unknown", options());
    assert!(matches!(missing, Err(MatchError::SeekerNotFound(_))));
}

#[test]
fn test_integration_json_dataset() {
    let json = r#"{
        "seekers": [{
            "id": "s1",
            "industries": ["Fintech"],
            "description": "Fintech payments platform",
            "stage": "seed",
            "targetAmount": 1000000,
            "location": "Austin, TX"
        }],
        "providers": [
            {"kind": "firm", "id": "f1", "name": "North",
             "description": "Fintech payments investor",
             "firmType": "Venture Capital", "stages": ["seed"], "typicalCheckSize": "$500K-$2M",
             "lastUpdated": "2026-05-01T00:00:00Z"},
            {"kind": "firm", "id": "f2", "name": "Stale",
             "description": "Fintech payments investor",
             "stages": ["seed"], "checkSizeMin": 500000, "checkSizeMax": 1500000,
             "lastUpdated": "2024-01-01T00:00:00Z"}
        ]
    }"#;
    let service = MatchingService::new(
        InMemoryStore::from_json_str(json).unwrap(),
        Matcher::with_default_weights(),
    );

    let active_only = service.run_matching("s1", options()).unwrap();
    assert_eq!(active_only.len(), 1);
    assert_eq!(active_only[0].provider.id, "f1");

    let with_inactive = service
        .run_matching(
            "s1",
            MatchOptions {
                include_inactive_providers: true,
                ..options()
            },
        )
        .unwrap();
    assert_eq!(with_inactive.len(), 2);
}

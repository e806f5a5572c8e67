//! Film finance scoring.
//!
//! Film deals are judged on what the capital is for (one picture, a slate or
//! gap financing), the risk appetite on each side and whether the deal
//! structures can coexist at all. Equity raised from a senior debt lender is
//! an auto-reject.

use crate::core::classifier::{keywords_for, DomainTag};
use crate::core::domains::{DomainInput, DomainScore};
use crate::core::text::KeywordText;

const INTENT_WEIGHT: f64 = 0.25;
const RISK_WEIGHT: f64 = 0.20;
const STRUCTURE_WEIGHT: f64 = 0.25;
const FOCUS_WEIGHT: f64 = 0.15;
const ECONOMIC_WEIGHT: f64 = 0.15;

const MISMATCH_SCORE: f64 = 25.0;
const MISMATCH_MULTIPLIER: f64 = 0.5;

const GENRE_BOOST: f64 = 1.05;
const GENRE_DRAG: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapitalIntent {
    SinglePicture,
    Slate,
    Gap,
}

impl CapitalIntent {
    // Detection order: the narrowest intent wins for the seeker
    const ALL: [CapitalIntent; 3] = [
        CapitalIntent::Gap,
        CapitalIntent::Slate,
        CapitalIntent::SinglePicture,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            CapitalIntent::SinglePicture => &[
                "single picture",
                "single film",
                "one picture",
                "standalone feature",
                "feature film",
            ],
            CapitalIntent::Slate => &[
                "slate",
                "multi picture",
                "multiple films",
                "portfolio of films",
            ],
            CapitalIntent::Gap => &["gap financing", "gap loan", "gap funding", "bridge financing"],
        }
    }

    fn label(self) -> &'static str {
        match self {
            CapitalIntent::SinglePicture => "single-picture",
            CapitalIntent::Slate => "slate",
            CapitalIntent::Gap => "gap",
        }
    }

    fn is_adjacent(self, other: CapitalIntent) -> bool {
        matches!(
            (self, other),
            (CapitalIntent::SinglePicture, CapitalIntent::Gap)
                | (CapitalIntent::Gap, CapitalIntent::SinglePicture)
                | (CapitalIntent::SinglePicture, CapitalIntent::Slate)
                | (CapitalIntent::Slate, CapitalIntent::SinglePicture)
        )
    }

    fn detect_all(text: &KeywordText) -> Vec<CapitalIntent> {
        Self::ALL.into_iter().filter(|intent| text.any(intent.keywords())).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RiskProfile {
    Preservation,
    Upside,
}

const PRESERVATION_KEYWORDS: &[&str] = &[
    "capital preservation",
    "senior secured",
    "secured",
    "low risk",
    "downside protection",
    "collateral",
    "pre sales",
    "tax credit",
    "minimum guarantee",
    "first position",
];

const UPSIDE_KEYWORDS: &[&str] = &[
    "upside",
    "breakout",
    "high risk",
    "high return",
    "profit participation",
    "back end",
    "asymmetric",
    "outsized",
];

impl RiskProfile {
    fn detect(text: &KeywordText) -> Option<RiskProfile> {
        let preservation = text.hits(PRESERVATION_KEYWORDS);
        let upside = text.hits(UPSIDE_KEYWORDS);
        match preservation.cmp(&upside) {
            std::cmp::Ordering::Greater => Some(RiskProfile::Preservation),
            std::cmp::Ordering::Less => Some(RiskProfile::Upside),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DealStructure {
    Equity,
    Debt,
    RevenueShare,
    Preferred,
}

impl DealStructure {
    const ALL: [DealStructure; 4] = [
        DealStructure::Equity,
        DealStructure::Debt,
        DealStructure::RevenueShare,
        DealStructure::Preferred,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            DealStructure::Equity => &["equity"],
            DealStructure::Debt => &[
                "debt",
                "loan",
                "lender",
                "lending",
                "senior secured",
                "credit facility",
                "credit facilities",
            ],
            DealStructure::RevenueShare => &["revenue share", "rev share", "royalty", "royalties"],
            DealStructure::Preferred => &["preferred"],
        }
    }

    fn index(self) -> usize {
        match self {
            DealStructure::Equity => 0,
            DealStructure::Debt => 1,
            DealStructure::RevenueShare => 2,
            DealStructure::Preferred => 3,
        }
    }

    fn detect_all(text: &KeywordText) -> Vec<DealStructure> {
        Self::ALL.into_iter().filter(|s| text.any(s.keywords())).collect()
    }
}

/// Seeker structure (row) against provider structure (column)
const STRUCTURE_MATRIX: [[f64; 4]; 4] = [
    [1.0, 0.0, 0.6, 0.7],
    [0.0, 1.0, 0.7, 0.6],
    [0.6, 0.7, 1.0, 0.6],
    [0.7, 0.6, 0.6, 1.0],
];

/// Structure compatibility when either side states nothing
const UNKNOWN_STRUCTURE: f64 = 0.7;

fn structure_compatibility(seeker: &[DealStructure], provider: &[DealStructure]) -> f64 {
    if seeker.is_empty() || provider.is_empty() {
        return UNKNOWN_STRUCTURE;
    }
    seeker
        .iter()
        .flat_map(|s| provider.iter().map(move |p| STRUCTURE_MATRIX[s.index()][p.index()]))
        .fold(0.0, f64::max)
}

fn intent_score(seeker: Option<CapitalIntent>, provider: &[CapitalIntent]) -> f64 {
    match seeker {
        None => 60.0,
        Some(_) if provider.is_empty() => 60.0,
        Some(intent) if provider.contains(&intent) => 100.0,
        Some(intent) if provider.iter().any(|p| intent.is_adjacent(*p)) => 65.0,
        Some(_) => 30.0,
    }
}

fn risk_score(seeker: Option<RiskProfile>, provider: Option<RiskProfile>) -> f64 {
    match (seeker, provider) {
        (Some(a), Some(b)) if a == b => 100.0,
        (Some(_), Some(_)) => 40.0,
        _ => 65.0,
    }
}

fn genre_multiplier(seeker: &KeywordText) -> (f64, Option<&'static str>) {
    if seeker.any(&["horror", "thriller"]) {
        return (GENRE_BOOST, Some("Genre with strong commercial track record"));
    }
    let prestige = seeker.any(&[
        "prestige drama",
        "arthouse",
        "art house",
        "period drama",
        "drama",
    ]);
    let distributed = seeker.any(&[
        "distribution secured",
        "distributor attached",
        "distribution deal",
        "sales agent",
        "pre sold",
        "pre sales",
    ]);
    if prestige && !distributed {
        return (GENRE_DRAG, Some("Prestige drama without distribution in place"));
    }
    (1.0, None)
}

fn activity_bonus(age_days: Option<i64>) -> f64 {
    match age_days {
        Some(days) if days <= 90 => 5.0,
        Some(days) if days <= 180 => 2.0,
        _ => 0.0,
    }
}

/// Score a film seeker against a provider
pub fn score(input: &DomainInput<'_>) -> DomainScore {

    let seeker_structures = DealStructure::detect_all(&input.seeker_text);
    let provider_structures = DealStructure::detect_all(&input.provider_text);
    let compatibility = structure_compatibility(&seeker_structures, &provider_structures);
    if compatibility == 0.0 {
        return DomainScore::auto_reject(
            DomainTag::Film,
            "Incompatible deal structure: equity raise against a debt-only provider".to_string(),
        );
    }
    if input.is_domain_mismatch() {
        return input.mismatch(MISMATCH_SCORE, MISMATCH_MULTIPLIER);
    }

    let mut reasons = Vec::new();

    let seeker_intent = CapitalIntent::detect_all(&input.seeker_text).first().copied();
    let provider_intents = CapitalIntent::detect_all(&input.provider_text);
    let intent = intent_score(seeker_intent, &provider_intents);
    if intent >= 100.0 {
        if let Some(found) = seeker_intent {
            reasons.push(format!("Provider finances {} film deals", found.label()));
        }
    }

    let risk = risk_score(
        RiskProfile::detect(&input.seeker_text),
        RiskProfile::detect(&input.provider_text),
    );
    if risk >= 100.0 {
        reasons.push("Aligned risk appetite".to_string());
    }

    if compatibility >= 1.0 {
        reasons.push("Deal structure matches provider's instruments".to_string());
    }

    let focus = match keywords_for(DomainTag::Film) {
        Some(row) if input.provider_text.any(row.strong) => {
            reasons.push("Provider has an explicit film focus".to_string());
            100.0
        }
        _ => 50.0,
    };

    let score = intent * INTENT_WEIGHT
        + risk * RISK_WEIGHT
        + compatibility * 100.0 * STRUCTURE_WEIGHT
        + focus * FOCUS_WEIGHT
        + input.breakdown.economic_fit * ECONOMIC_WEIGHT
        + activity_bonus(input.provider_age_days());

    let (multiplier, genre_reason) = genre_multiplier(&input.seeker_text);
    if let Some(reason) = genre_reason {
        reasons.push(reason.to_string());
    }

    DomainScore::new(DomainTag::Film, score, multiplier, reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domains::input_for;
    use crate::models::{FactorBreakdown, InvestmentFirm, Seeker};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    fn film_seeker(description: &str) -> Seeker {
        Seeker {
            id: "film".to_string(),
            industries: vec!["Film".to_string()],
            description: Some(description.to_string()),
            stage: Some("seed".to_string()),
            target_amount: Some(2_000_000.0),
            ..Default::default()
        }
    }

    fn film_firm(description: &str, firm_type: &str) -> InvestmentFirm {
        InvestmentFirm {
            id: "fund".to_string(),
            name: "Fund".to_string(),
            description: Some(description.to_string()),
            firm_type: Some(firm_type.to_string()),
            sectors: vec!["Film".to_string(), "Entertainment".to_string()],
            check_size_min: Some(1_000_000.0),
            check_size_max: Some(3_000_000.0),
            last_updated: Some(as_of() - Duration::days(30)),
            ..Default::default()
        }
    }

    fn breakdown() -> FactorBreakdown {
        FactorBreakdown {
            economic_fit: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_equity_seeker_vs_senior_debt_lender_auto_rejects() {
        let seeker = film_seeker("Single-picture equity financing for an indie feature film");
        let firm = film_firm(
            "Senior secured film debt lender for motion picture production",
            "Lender",
        );
        let breakdown = breakdown();
        let result = score(&input_for(&seeker, &firm, &breakdown, as_of()));
        assert!(result.is_auto_reject());
        assert_eq!(result.effective_score(), 0.0);
    }

    #[test]
    fn test_aligned_film_equity_scores_high() {
        let seeker =
            film_seeker("Single-picture equity raise for a feature film with breakout upside");
        let firm = film_firm(
            "Equity investor in single-picture feature film deals seeking upside",
            "Venture Capital",
        );
        let breakdown = breakdown();
        let result = score(&input_for(&seeker, &firm, &breakdown, as_of()));
        assert!(!result.is_auto_reject());
        assert!(result.score >= 90.0, "score was {}", result.score);
        assert!(result.reasons.iter().any(|r| r.contains("single-picture")));
    }

    #[test]
    fn test_genre_multipliers() {
        let (boost, _) = genre_multiplier(&KeywordText::new("A low budget horror feature"));
        assert_eq!(boost, GENRE_BOOST);

        let (drag, _) = genre_multiplier(&KeywordText::new("Prestige drama from a debut director"));
        assert_eq!(drag, GENRE_DRAG);

        let (neutral, _) =
            genre_multiplier(&KeywordText::new("Period drama with a distribution deal in place"));
        assert_eq!(neutral, 1.0);
    }

    #[test]
    fn test_structure_matrix_takes_best_pair() {
        let seeker = [DealStructure::Equity];
        assert_eq!(structure_compatibility(&seeker, &[DealStructure::Debt]), 0.0);
        assert_eq!(
            structure_compatibility(&seeker, &[DealStructure::Debt, DealStructure::Preferred]),
            0.7
        );
        assert_eq!(structure_compatibility(&seeker, &[]), UNKNOWN_STRUCTURE);
    }

    #[test]
    fn test_intent_adjacency() {
        assert_eq!(intent_score(Some(CapitalIntent::Gap), &[CapitalIntent::SinglePicture]), 65.0);
        assert_eq!(intent_score(Some(CapitalIntent::Gap), &[CapitalIntent::Slate]), 30.0);
        assert_eq!(intent_score(None, &[CapitalIntent::Slate]), 60.0);
    }

    #[test]
    fn test_cross_domain_provider_is_penalized() {
        let seeker = film_seeker("Single picture equity for a documentary");
        let firm = InvestmentFirm {
            id: "bio".to_string(),
            name: "Bio".to_string(),
            description: Some("Biotech therapeutics and drug discovery investor".to_string()),
            ..Default::default()
        };
        let breakdown = breakdown();
        let result = score(&input_for(&seeker, &firm, &breakdown, as_of()));
        assert_eq!(result.score, MISMATCH_SCORE);
        assert_eq!(result.multiplier, MISMATCH_MULTIPLIER);
    }

    #[test]
    fn test_debt_structure_rejects_even_when_provider_classifies_elsewhere() {
        let seeker = film_seeker("Single-picture equity financing for an indie feature film");
        let firm = InvestmentFirm {
            id: "credit".to_string(),
            name: "Credit".to_string(),
            description: Some(
                "Senior secured lending and credit facilities for independent producers"
                    .to_string(),
            ),
            check_size_min: Some(1_000_000.0),
            check_size_max: Some(5_000_000.0),
            ..Default::default()
        };
        let breakdown = breakdown();
        let input = input_for(&seeker, &firm, &breakdown, as_of());
        assert_eq!(input.provider_domain, DomainTag::Fintech);

        let result = score(&input);
        assert!(result.is_auto_reject());
        assert!(result.reasons[0].contains("Incompatible deal structure"));
    }
}

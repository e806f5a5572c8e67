use crate::core::classifier::DomainTag;
use crate::core::domains::vertical::{score_vertical, Adjustment, VerticalProfile, VerticalWeights};
use crate::core::domains::{DomainInput, DomainScore};

const PRECLINICAL_MISMATCH_PENALTY: f64 = -15.0;

// Development ladder indices referenced by the adjustment
const LAST_PRECLINICAL_STAGE: usize = 1;
const COMMERCIAL_STAGE: usize = 5;

pub const PROFILE: VerticalProfile = VerticalProfile {
    domain: DomainTag::Biotech,
    technologies: &[
        ("small molecules", &["small molecule", "small molecules"]),
        ("biologics", &["biologics", "antibody", "antibodies", "protein therapeutics"]),
        ("gene and cell therapy", &["gene therapy", "cell therapy", "gene editing", "crispr"]),
        ("rna medicines", &["mrna", "rna therapeutics", "sirna"]),
        (
            "discovery platforms",
            &[
                "drug discovery platform",
                "ai drug discovery",
                "computational drug",
            ],
        ),
        ("vaccines", &["vaccine", "vaccines"]),
    ],
    development_stages: &[
        ("discovery", &["discovery stage", "target validation", "lead optimization"]),
        ("preclinical", &["preclinical", "pre clinical", "ind enabling"]),
        ("phase 1", &["phase 1", "first in human"]),
        ("phase 2", &["phase 2", "proof of concept"]),
        ("phase 3", &["phase 3", "pivotal"]),
        (
            "commercial",
            &[
                "commercial stage",
                "approved product",
                "marketed product",
                "commercialization",
            ],
        ),
    ],
    markets: &[
        ("oncology", &["oncology", "cancer"]),
        ("neurology", &["neurology", "neuroscience", "neurodegenerative"]),
        ("immunology", &["immunology", "autoimmune", "inflammation"]),
        ("rare disease", &["rare disease", "orphan"]),
        ("infectious disease", &["infectious disease", "antiviral", "antibiotic"]),
        ("cardiometabolic", &["cardiovascular", "metabolic", "obesity", "diabetes"]),
    ],
    specialist_keywords: &[
        "life sciences",
        "biotech",
        "biopharma",
        "therapeutics investor",
        "healthcare fund",
    ],
    deal_structures: &[
        ("licensing", &["licensing", "milestone payments"]),
        ("royalty financing", &["royalty"]),
        ("non-dilutive funding", &["grant", "non dilutive", "sbir"]),
    ],
    min_overlap: 0.25,
    weights: VerticalWeights {
        technology: 0.30,
        development: 0.25,
        market: 0.15,
        check_size: 0.15,
        investor: 0.15,
    },
    deal_bonus: 5.0,
    adjustment: commercial_only_penalty,
};

/// Early assets pitched to providers that only back commercial products
fn commercial_only_penalty(
    input: &DomainInput<'_>,
    profile: &VerticalProfile,
) -> Option<Adjustment> {
    let seeker = profile.development_index(&input.seeker_text)?;
    let provider = profile.development_indices(&input.provider_text);
    let commercial_only =
        !provider.is_empty() && provider.iter().all(|index| *index == COMMERCIAL_STAGE);
    (seeker <= LAST_PRECLINICAL_STAGE && commercial_only).then(|| Adjustment {
        points: PRECLINICAL_MISMATCH_PENALTY,
        reason: "Provider backs commercial-stage assets only".to_string(),
    })
}

pub fn score(input: &DomainInput<'_>) -> DomainScore {
    score_vertical(input, &PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domains::input_for;
    use crate::models::{FactorBreakdown, InvestmentFirm, Seeker};
    use chrono::{DateTime, TimeZone, Utc};

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    fn seeker() -> Seeker {
        Seeker {
            id: "bio".to_string(),
            industries: vec!["Biotech".to_string()],
            description: Some("Preclinical antibody therapeutics for oncology".to_string()),
            target_amount: Some(10_000_000.0),
            ..Default::default()
        }
    }

    fn fund(description: &str) -> InvestmentFirm {
        InvestmentFirm {
            id: "ls".to_string(),
            name: "LS".to_string(),
            description: Some(description.to_string()),
            firm_type: Some("Venture Capital".to_string()),
            check_size_min: Some(5_000_000.0),
            check_size_max: Some(15_000_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((PROFILE.weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_specialist_fund_scores_high() {
        let seeker = seeker();
        let firm = fund(
            "Life sciences fund backing preclinical antibody and biologics programs in oncology",
        );
        let breakdown = FactorBreakdown::default();
        let result = score(&input_for(&seeker, &firm, &breakdown, as_of()));
        // 100*.30 + 100*.25 + 100*.15 + 100*.15 + 95*.15
        assert!((result.score - 99.25).abs() < 1e-9, "score was {}", result.score);
        assert!(result.reasons.iter().any(|r| r.contains("biologics")));
    }

    #[test]
    fn test_commercial_only_provider_is_penalized() {
        let seeker = seeker();
        let aligned = fund("Biotech investor in preclinical oncology therapeutics");
        let commercial = fund("Biotech investor in commercial stage oncology therapeutics");
        let breakdown = FactorBreakdown::default();

        let aligned_score = score(&input_for(&seeker, &aligned, &breakdown, as_of()));
        let commercial_score = score(&input_for(&seeker, &commercial, &breakdown, as_of()));
        assert!(commercial_score
            .reasons
            .iter()
            .any(|r| r.contains("commercial-stage")));
        assert!(commercial_score.score < aligned_score.score - 15.0);
    }

    #[test]
    fn test_min_overlap_applies_before_domain_mismatch() {
        let seeker = seeker();
        // 5M..6M of a 5M-wide provider range
        let lender = InvestmentFirm {
            description: Some("Fintech lending and payments investor".to_string()),
            check_size_min: Some(1_000_000.0),
            check_size_max: Some(6_000_000.0),
            ..fund("")
        };
        let breakdown = FactorBreakdown::default();
        let input = input_for(&seeker, &lender, &breakdown, as_of());
        assert_eq!(input.provider_domain, DomainTag::Fintech);

        let result = score(&input);
        assert!(result.is_auto_reject());
        assert!(result.reasons[0].contains("requires 25%"));
    }
}

use crate::core::classifier::DomainTag;
use crate::core::domains::vertical::{score_vertical, Adjustment, VerticalProfile, VerticalWeights};
use crate::core::domains::{DomainInput, DomainScore};

const RETAIL_DISTRIBUTION_BONUS: f64 = 5.0;

const RETAIL_DISTRIBUTION_SIGNALS: &[&str] = &[
    "retail distribution",
    "stores nationwide",
    "whole foods",
    "walmart",
    "costco",
    "on shelf",
    "retail partners",
];

pub const PROFILE: VerticalProfile = VerticalProfile {
    domain: DomainTag::Cpg,
    technologies: &[
        ("food and beverage", &["food", "snack", "snacks", "beverage", "drinks"]),
        ("personal care", &["personal care", "skincare", "beauty", "hygiene"]),
        ("household goods", &["household", "cleaning products", "home goods"]),
        ("pet products", &["pet food", "pet care", "pet products"]),
        ("wellness", &["supplement", "supplements", "wellness", "vitamin"]),
    ],
    development_stages: &[
        ("pre-launch", &["pre launch", "prototype", "test batch"]),
        ("dtc traction", &["dtc", "direct to consumer", "online sales", "ecommerce"]),
        ("regional retail", &["regional retail", "wholesale", "grocery", "specialty retail"]),
        ("national distribution", &["national distribution", "nationwide", "mass retail"]),
    ],
    markets: &[
        ("better-for-you", &["better for you", "healthy", "clean label", "organic"]),
        ("premium", &["premium", "luxury"]),
        ("mass market", &["affordable", "mass market"]),
        ("sustainable", &["sustainable", "eco friendly", "plastic free"]),
    ],
    specialist_keywords: &[
        "consumer brands",
        "consumer products",
        "cpg",
        "consumer packaged goods",
        "consumer fund",
    ],
    deal_structures: &[
        (
            "inventory financing",
            &[
                "inventory financing",
                "purchase order financing",
                "working capital",
            ],
        ),
        ("revenue-based financing", &["revenue based", "rbf"]),
    ],
    min_overlap: 0.25,
    weights: VerticalWeights {
        technology: 0.25,
        development: 0.25,
        market: 0.15,
        check_size: 0.15,
        investor: 0.20,
    },
    deal_bonus: 5.0,
    adjustment: retail_distribution_bonus,
};

/// Brands already on retail shelves
fn retail_distribution_bonus(
    input: &DomainInput<'_>,
    _profile: &VerticalProfile,
) -> Option<Adjustment> {
    input.seeker_text.any(RETAIL_DISTRIBUTION_SIGNALS).then(|| Adjustment {
        points: RETAIL_DISTRIBUTION_BONUS,
        reason: "Established retail distribution".to_string(),
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

    fn brand(description: &str) -> Seeker {
        Seeker {
            id: "brand".to_string(),
            industries: vec!["CPG".to_string()],
            description: Some(description.to_string()),
            target_amount: Some(1_500_000.0),
            ..Default::default()
        }
    }

    fn fund() -> InvestmentFirm {
        InvestmentFirm {
            id: "cf".to_string(),
            name: "CF".to_string(),
            description: Some(
                "Consumer brands fund backing plastic-free household goods in specialty retail"
                    .to_string(),
            ),
            check_size_min: Some(1_000_000.0),
            check_size_max: Some(2_000_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((PROFILE.weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_retail_distribution_bonus_and_reasons() {
        let on_shelf = brand(
            "Plastic-free household cleaning products in specialty retail, on shelf at Walmart",
        );
        let firm = fund();
        let breakdown = FactorBreakdown::default();
        let result = score(&input_for(&on_shelf, &firm, &breakdown, as_of()));
        assert!(result.reasons.iter().any(|r| r == "Established retail distribution"));
        assert!(result.reasons.iter().any(|r| r.contains("sustainable")));
        assert!(result.reasons.iter().any(|r| r.contains("regional retail")));
    }

    #[test]
    fn test_generalist_provider_scores_lower_than_specialist() {
        let seeker = brand("Plastic-free household cleaning products in specialty retail");
        let specialist = fund();
        let mut generalist = fund();
        generalist.description = Some("Generalist investor".to_string());
        let breakdown = FactorBreakdown {
            investor_type_logic: 60.0,
            ..Default::default()
        };
        let a = score(&input_for(&seeker, &specialist, &breakdown, as_of()));
        let b = score(&input_for(&seeker, &generalist, &breakdown, as_of()));
        assert!(a.score > b.score);
    }
}

use crate::core::classifier::DomainTag;
use crate::core::domains::vertical::{score_vertical, Adjustment, VerticalProfile, VerticalWeights};
use crate::core::domains::{DomainInput, DomainScore};

const RECURRING_REVENUE_BONUS: f64 = 5.0;

const RECURRING_REVENUE_SIGNALS: &[&str] = &[
    "annual recurring revenue",
    "monthly recurring revenue",
    "recurring revenue",
    "mrr",
    "net revenue retention",
    "net dollar retention",
    "churn",
];

pub const PROFILE: VerticalProfile = VerticalProfile {
    domain: DomainTag::Saas,
    technologies: &[
        ("vertical software", &["vertical saas", "vertical software"]),
        ("developer tools", &["developer tools", "devtools", "api first"]),
        ("data and analytics", &["analytics", "data platform", "business intelligence"]),
        ("applied ai", &["machine learning", "artificial intelligence", "llm", "generative ai"]),
        ("workflow automation", &["workflow", "automation"]),
        ("security and compliance", &["security", "compliance"]),
    ],
    development_stages: &[
        ("pre-revenue", &["pre revenue", "beta", "mvp"]),
        ("early revenue", &["early revenue", "first customers", "pilot customers"]),
        ("product-market fit", &["product market fit", "paying customers", "repeatable sales"]),
        ("scaling", &["scaling", "go to market expansion", "international expansion"]),
    ],
    markets: &[
        ("smb", &["smb", "small business", "small businesses"]),
        ("mid-market", &["mid market"]),
        ("enterprise", &["enterprise", "fortune 500"]),
        ("prosumer", &["prosumer", "creators"]),
    ],
    specialist_keywords: &[
        "saas",
        "b2b software",
        "software investor",
        "enterprise software",
        "cloud software",
    ],
    deal_structures: &[
        ("revenue-based financing", &["revenue based", "rbf"]),
        ("venture debt", &["venture debt"]),
    ],
    min_overlap: 0.25,
    weights: VerticalWeights {
        technology: 0.25,
        development: 0.25,
        market: 0.20,
        check_size: 0.15,
        investor: 0.15,
    },
    deal_bonus: 5.0,
    adjustment: recurring_revenue_bonus,
};

/// Seekers reporting subscription metrics
fn recurring_revenue_bonus(
    input: &DomainInput<'_>,
    _profile: &VerticalProfile,
) -> Option<Adjustment> {
    input.seeker_text.any(RECURRING_REVENUE_SIGNALS).then(|| Adjustment {
        points: RECURRING_REVENUE_BONUS,
        reason: "Reports recurring revenue metrics".to_string(),
    })
}

pub fn score(input: &DomainInput<'_>) -> DomainScore {
    score_vertical(input, &PROFILE)
}

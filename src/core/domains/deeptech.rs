use crate::core::classifier::DomainTag;
use crate::core::domains::vertical::{score_vertical, Adjustment, VerticalProfile, VerticalWeights};
use crate::core::domains::{DomainInput, DomainScore};

const PATIENT_CAPITAL_BONUS: f64 = 5.0;

const IP_SIGNALS: &[&str] = &["patent", "patents", "proprietary ip", "ip portfolio", "licensed ip"];
const PATIENT_CAPITAL_SIGNALS: &[&str] = &[
    "patient capital",
    "long horizon",
    "long term capital",
    "10 year fund",
];

pub const PROFILE: VerticalProfile = VerticalProfile {
    domain: DomainTag::Deeptech,
    technologies: &[
        ("quantum", &["quantum"]),
        ("semiconductors", &["semiconductor", "semiconductors", "chip design", "photonics"]),
        ("robotics", &["robotics", "autonomous systems", "autonomy"]),
        (
            "advanced materials",
            &[
                "materials science",
                "advanced materials",
                "nanotech",
                "nanomaterials",
            ],
        ),
        ("space", &["aerospace", "satellite", "space tech", "launch vehicle"]),
        (
            "ai infrastructure",
            &[
                "ai hardware",
                "machine learning infrastructure",
                "ai accelerator",
            ],
        ),
    ],
    development_stages: &[
        ("research", &["lab scale", "research stage", "university spinout", "spin out"]),
        ("prototype", &["prototype", "proof of concept"]),
        ("pilot", &["pilot deployment", "pilot customers", "first customers"]),
        ("scale-up", &["scale up", "manufacturing scale", "mass production"]),
    ],
    markets: &[
        ("defense", &["defense", "defence", "dual use", "national security"]),
        ("industrial", &["industrial", "manufacturing"]),
        ("energy", &["energy", "grid"]),
        ("computing", &["computing", "data center", "data centre"]),
        ("mobility", &["automotive", "mobility"]),
    ],
    specialist_keywords: &["deep tech", "deeptech", "hard tech", "frontier tech"],
    deal_structures: &[
        ("non-dilutive funding", &["grant", "sbir", "darpa", "non dilutive"]),
        ("strategic partnership", &["strategic partner", "corporate partner", "joint development"]),
    ],
    min_overlap: 0.15,
    weights: VerticalWeights {
        technology: 0.35,
        development: 0.20,
        market: 0.15,
        check_size: 0.10,
        investor: 0.20,
    },
    deal_bonus: 5.0,
    adjustment: patient_capital_bonus,
};

/// IP-heavy companies paired with long-horizon capital
fn patient_capital_bonus(
    input: &DomainInput<'_>,
    _profile: &VerticalProfile,
) -> Option<Adjustment> {
    let patient = input.provider_text.any(PATIENT_CAPITAL_SIGNALS);
    (input.seeker_text.any(IP_SIGNALS) && patient).then(|| Adjustment {
        points: PATIENT_CAPITAL_BONUS,
        reason: "Patient capital for an IP-heavy company".to_string(),
    })
}

pub fn score(input: &DomainInput<'_>) -> DomainScore {
    score_vertical(input, &PROFILE)
}

use crate::core::classifier::DomainTag;
use crate::core::domains::vertical::{score_vertical, Adjustment, VerticalProfile, VerticalWeights};
use crate::core::domains::{DomainInput, DomainScore};

const REGULATORY_PATHWAY_BONUS: f64 = 5.0;

const REGULATORY_PATHWAYS: &[&str] = &["510 k", "de novo", "pma", "ce mark", "breakthrough device"];

pub const PROFILE: VerticalProfile = VerticalProfile {
    domain: DomainTag::Medtech,
    technologies: &[
        ("implantables", &["implant", "implantable"]),
        ("surgical systems", &["surgical", "robotic surgery", "minimally invasive"]),
        ("diagnostics", &["diagnostic", "diagnostics", "in vitro"]),
        ("imaging", &["imaging", "ultrasound", "radiology"]),
        ("monitoring devices", &["wearable", "remote monitoring", "sensor"]),
    ],
    development_stages: &[
        ("prototype", &["prototype", "concept stage", "bench testing"]),
        ("clinical", &["clinical study", "pilot study", "clinical validation", "first in human"]),
        ("regulatory", &["fda clearance", "fda approval", "regulatory submission", "cleared"]),
        (
            "commercial",
            &[
                "commercial launch",
                "reimbursement",
                "hospital sales",
                "commercial stage",
            ],
        ),
    ],
    markets: &[
        ("cardiology", &["cardiac", "cardiology", "cardiovascular"]),
        ("orthopedics", &["orthopedic", "orthopaedic", "spine"]),
        ("neurology", &["neurology", "neurovascular", "neuromodulation"]),
        ("ophthalmology", &["ophthalmic", "ophthalmology"]),
        ("women's health", &["women s health", "fertility", "maternal"]),
    ],
    specialist_keywords: &[
        "medtech",
        "medical device",
        "medical devices",
        "healthcare",
        "life sciences",
    ],
    deal_structures: &[
        ("strategic partnership", &["strategic partner", "distribution partner", "oem"]),
        ("venture debt", &["venture debt"]),
        ("non-dilutive funding", &["grant", "sbir", "non dilutive"]),
    ],
    min_overlap: 0.20,
    weights: VerticalWeights {
        technology: 0.25,
        development: 0.25,
        market: 0.15,
        check_size: 0.15,
        investor: 0.20,
    },
    deal_bonus: 5.0,
    adjustment: regulatory_pathway_bonus,
};

/// A named FDA or CE route de-risks the raise
fn regulatory_pathway_bonus(
    input: &DomainInput<'_>,
    _profile: &VerticalProfile,
) -> Option<Adjustment> {
    input
        .seeker_text
        .first_match(REGULATORY_PATHWAYS)
        .map(|pathway| Adjustment {
            points: REGULATORY_PATHWAY_BONUS,
            reason: format!("Defined regulatory pathway ({})", pathway),
        })
}

pub fn score(input: &DomainInput<'_>) -> DomainScore {
    score_vertical(input, &PROFILE)
}

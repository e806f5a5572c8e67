use chrono::{DateTime, Utc};

use crate::core::{
    check_size::check_size_overlap,
    geography::classify_locations,
    stages::{normalize_stage, stage_distance, Stage},
    text::{jaccard, tokenize_fields, KeywordText},
};
use crate::models::{FactorBreakdown, FactorWeights, ProviderProfile, Seeker};

/// Predefined investment-thesis clusters for the semantic bonus
pub const THESIS_CLUSTERS: &[(&str, &[&str])] = &[
    (
        "film_finance",
        &[
            "film",
            "movie",
            "motion picture",
            "slate",
            "production financing",
            "gap financing",
            "entertainment",
        ],
    ),
    (
        "climate",
        &[
            "climate",
            "clean energy",
            "renewable",
            "decarbonization",
            "carbon",
            "solar",
            "sustainability",
        ],
    ),
    (
        "fintech",
        &[
            "fintech",
            "payments",
            "banking",
            "lending",
            "insurtech",
            "neobank",
            "embedded finance",
        ],
    ),
    (
        "health",
        &[
            "healthcare",
            "biotech",
            "medtech",
            "therapeutics",
            "digital health",
            "life sciences",
            "diagnostics",
        ],
    ),
    (
        "enterprise_software",
        &[
            "saas",
            "enterprise software",
            "b2b software",
            "developer tools",
            "cloud infrastructure",
        ],
    ),
    (
        "ai",
        &[
            "artificial intelligence",
            "machine learning",
            "ai native",
            "generative ai",
            "computer vision",
        ],
    ),
    ("consumer", &["consumer", "cpg", "dtc", "direct to consumer", "consumer brand", "retail"]),
    ("real_estate", &["real estate", "proptech", "multifamily", "commercial property", "housing"]),
    ("deep_tech", &["deep tech", "deeptech", "quantum", "robotics", "semiconductor", "space"]),
    ("education", &["edtech", "education", "learning", "upskilling"]),
];

const JACCARD_POINTS: f64 = 70.0;
const THESIS_BONUS: f64 = 30.0;
const NETWORK_WARMTH_NEUTRAL: f64 = 50.0;
const STALE_PROFILE_DAYS: i64 = 180;
const RECENT_PROFILE_DAYS: i64 = 90;

/// Broad investor categories used by the stage/type affinity table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestorCategory {
    Angel,
    Accelerator,
    VentureCapital,
    CorporateVenture,
    FamilyOffice,
    GrowthEquity,
    PrivateEquity,
    Lender,
}

impl InvestorCategory {
    /// Map a free-text investor or firm type onto a category
    pub fn from_type(raw: &str) -> Option<Self> {
        let text = KeywordText::new(raw);
        // More specific phrases first: "corporate venture capital" is not plain VC
        let category = if text.any(&["family office"]) {
            InvestorCategory::FamilyOffice
        } else if text.any(&["corporate", "cvc", "strategic"]) {
            InvestorCategory::CorporateVenture
        } else if text.any(&["growth equity", "growth fund", "growth stage"]) {
            InvestorCategory::GrowthEquity
        } else if text.any(&["private equity", "buyout", "pe firm"]) {
            InvestorCategory::PrivateEquity
        } else if text.any(&["accelerator", "incubator", "studio"]) {
            InvestorCategory::Accelerator
        } else if text.any(&["angel", "syndicate", "individual"]) {
            InvestorCategory::Angel
        } else if text.any(&["lender", "debt", "credit", "bank", "lending"]) {
            InvestorCategory::Lender
        } else if text.any(&["venture", "vc", "micro vc", "seed fund"]) {
            InvestorCategory::VentureCapital
        } else {
            return None;
        };
        Some(category)
    }

    /// Affinity by stage level, pre-seed through late-stage
    fn affinity(self) -> [f64; 7] {
        match self {
            InvestorCategory::Angel => [100.0, 90.0, 60.0, 40.0, 30.0, 20.0, 20.0],
            InvestorCategory::Accelerator => [100.0, 85.0, 50.0, 30.0, 20.0, 20.0, 20.0],
            InvestorCategory::VentureCapital => [70.0, 90.0, 100.0, 95.0, 85.0, 70.0, 50.0],
            InvestorCategory::CorporateVenture => [50.0, 65.0, 85.0, 90.0, 90.0, 80.0, 60.0],
            InvestorCategory::FamilyOffice => [60.0, 70.0, 75.0, 75.0, 75.0, 80.0, 80.0],
            InvestorCategory::GrowthEquity => [20.0, 30.0, 50.0, 75.0, 90.0, 100.0, 95.0],
            InvestorCategory::PrivateEquity => [10.0, 20.0, 35.0, 55.0, 75.0, 95.0, 100.0],
            InvestorCategory::Lender => [30.0, 40.0, 55.0, 65.0, 75.0, 85.0, 90.0],
        }
    }
}

/// Thesis clusters hit by a piece of text
pub fn thesis_clusters(text: &KeywordText) -> Vec<&'static str> {
    THESIS_CLUSTERS
        .iter()
        .filter(|(_, keywords)| text.any(keywords))
        .map(|(name, _)| *name)
        .collect()
}

/// Semantic fit (0-100) and the first shared thesis cluster, if any
pub fn semantic_fit(
    seeker: &Seeker,
    provider: &dyn ProviderProfile,
) -> (f64, Option<&'static str>) {
    let seeker_tokens = tokenize_fields(
        seeker
            .industries
            .iter()
            .map(String::as_str)
            .chain(seeker.description.as_deref()),
    );
    let provider_tokens = tokenize_fields(
        provider
            .description()
            .into_iter()
            .chain(provider.investor_type())
            .chain(provider.sectors().iter().map(String::as_str)),
    );
    let similarity = jaccard(&seeker_tokens, &provider_tokens) * JACCARD_POINTS;

    let seeker_text = KeywordText::new(&seeker.profile_text());
    let provider_text = KeywordText::new(&provider.profile_text());
    let provider_clusters = thesis_clusters(&provider_text);
    let shared = thesis_clusters(&seeker_text)
        .into_iter()
        .find(|cluster| provider_clusters.contains(cluster));

    let bonus = if shared.is_some() { THESIS_BONUS } else { 0.0 };
    ((similarity + bonus).min(100.0), shared)
}

/// Stage compatibility from hierarchy distance; 60 when nothing is comparable
pub fn stage_compatibility(distance: Option<u32>) -> f64 {
    match distance {
        Some(0) => 100.0,
        Some(1) => 70.0,
        Some(2) => 40.0,
        Some(_) => 20.0,
        None => 60.0,
    }
}

/// Economic fit from the check-size overlap ratio, capped by AUM sanity
pub fn economic_fit(target: Option<f64>, overlap: Option<f64>, aum: Option<f64>) -> f64 {
    let Some(overlap) = overlap else {
        return 50.0;
    };
    let mut score = 30.0 + 70.0 * overlap.clamp(0.0, 1.0);
    if let (Some(target), Some(aum)) = (target, aum.filter(|a| *a > 0.0)) {
        if target > aum * 0.10 {
            score = score.min(40.0);
        } else if target < aum * 0.0001 {
            score = score.min(60.0);
        }
    }
    score
}

/// Investor behavior from completeness and recency signals
pub fn investor_behavior(provider: &dyn ProviderProfile, as_of: DateTime<Utc>) -> f64 {
    let mut score: f64 = 70.0;

    score += match provider.portfolio_count().unwrap_or(0) {
        0 => 0.0,
        1..=4 => 5.0,
        5..=19 => 10.0,
        _ => 15.0,
    };

    if let Some(updated) = provider.last_updated() {
        let age_days = (as_of - updated).num_days();
        if age_days <= RECENT_PROFILE_DAYS {
            score += 10.0;
        } else if age_days > STALE_PROFILE_DAYS {
            score -= 10.0;
        }
    }

    if provider.website().is_some() || provider.linkedin_url().is_some() {
        score += 5.0;
    }

    score.clamp(0.0, 100.0)
}

/// Stage-versus-type affinity; 60 when either side is unknown
pub fn investor_type_logic(seeker_stage: Option<Stage>, provider: &dyn ProviderProfile) -> f64 {
    let category = provider.investor_type().and_then(InvestorCategory::from_type);
    match (seeker_stage, category) {
        (Some(stage), Some(category)) => category.affinity()[stage.level() as usize],
        _ => 60.0,
    }
}

/// Relationship-graph signal; not modelled, always neutral
#[inline]
pub fn network_warmth(_seeker: &Seeker, _provider: &dyn ProviderProfile) -> f64 {
    NETWORK_WARMTH_NEUTRAL
}

/// Criteria scorer output: the breakdown plus what the reasons need
#[derive(Debug, Clone)]
pub struct CriteriaScore {
    pub breakdown: FactorBreakdown,
    pub base_score: f64,
    pub overlap: Option<f64>,
    pub shared_thesis: Option<&'static str>,
    pub stage_distance: Option<u32>,
}

/// Calculate the seven-factor breakdown and base score (0-100)
///
/// Scoring formula:
/// base = round(
///     semantic * 0.35 +          # token Jaccard + thesis bonus
///     stage * 0.20 +             # hierarchy distance
///     economic * 0.15 +          # check-size overlap
///     geographic * 0.10 +        # city / region / global
///     behavior * 0.10 +          # completeness and recency
///     investor_type * 0.05 +     # stage/type affinity
///     network * 0.05             # neutral placeholder
/// )
pub fn calculate_criteria_score(
    seeker: &Seeker,
    provider: &dyn ProviderProfile,
    weights: &FactorWeights,
    as_of: DateTime<Utc>,
) -> CriteriaScore {
    let (semantic, shared_thesis) = semantic_fit(seeker, provider);

    let distance = stage_distance(seeker.stage.as_deref(), provider.stages());
    let overlap = check_size_overlap(seeker.target_amount, provider);
    let seeker_stage = seeker.stage.as_deref().and_then(normalize_stage);

    let breakdown = FactorBreakdown {
        semantic_fit: semantic,
        stage_compatibility: stage_compatibility(distance),
        economic_fit: economic_fit(seeker.target_amount, overlap, provider.aum()),
        geographic_practicality: classify_locations(seeker.location.as_deref(), provider.location())
            .score(),
        investor_behavior: investor_behavior(provider, as_of),
        investor_type_logic: investor_type_logic(seeker_stage, provider),
        network_warmth: network_warmth(seeker, provider),
    };

    let weighted = breakdown.semantic_fit * weights.semantic
        + breakdown.stage_compatibility * weights.stage
        + breakdown.economic_fit * weights.economic
        + breakdown.geographic_practicality * weights.geographic
        + breakdown.investor_behavior * weights.behavior
        + breakdown.investor_type_logic * weights.investor_type
        + breakdown.network_warmth * weights.network;

    CriteriaScore {
        breakdown,
        base_score: weighted.round().clamp(0.0, 100.0),
        overlap,
        shared_thesis,
        stage_distance: distance,
    }
}

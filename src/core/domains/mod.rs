//! Domain-specific scoring strategies.
//!
//! Every strategy has the same signature, `fn(&DomainInput) -> DomainScore`,
//! and is selected by the seeker's [`DomainTag`]. Domains without a bespoke
//! scorer fall through to the weighted [`generic`] strategy.

pub mod biotech;
pub mod cpg;
pub mod deeptech;
pub mod film;
pub mod generic;
pub mod medtech;
pub mod real_estate;
pub mod saas;
pub mod vertical;

use chrono::{DateTime, Utc};

use crate::core::classifier::DomainTag;
use crate::core::text::KeywordText;
use crate::models::{FactorBreakdown, ProviderProfile, Seeker};

/// Share of the blended score kept from the generic criteria score
pub const BASE_SCORE_SHARE: f64 = 0.4;
/// Share of the blended score taken from the domain strategy
pub const DOMAIN_SCORE_SHARE: f64 = 0.6;

/// Domain strategy output, consumed immediately by the matcher
#[derive(Debug, Clone, PartialEq)]
pub struct DomainScore {
    pub domain: DomainTag,
    pub score: f64,
    /// Exactly 0.0 means auto-reject
    pub multiplier: f64,
    pub reasons: Vec<String>,
}

impl DomainScore {
    pub fn new(domain: DomainTag, score: f64, multiplier: f64, reasons: Vec<String>) -> Self {
        Self {
            domain,
            score: score.clamp(0.0, 100.0),
            multiplier: multiplier.max(0.0),
            reasons,
        }
    }

    /// Unconditional rejection of the pairing
    pub fn auto_reject(domain: DomainTag, reason: String) -> Self {
        Self {
            domain,
            score: 0.0,
            multiplier: 0.0,
            reasons: vec![reason],
        }
    }

    pub fn is_auto_reject(&self) -> bool {
        self.multiplier == 0.0
    }

    /// Domain score after its multiplier, capped at 100
    pub fn effective_score(&self) -> f64 {
        (self.score * self.multiplier).clamp(0.0, 100.0)
    }
}

/// Everything a domain strategy may read for one pairing
pub struct DomainInput<'a> {
    pub seeker: &'a Seeker,
    pub provider: &'a dyn ProviderProfile,
    pub breakdown: &'a FactorBreakdown,
    pub seeker_domain: DomainTag,
    pub provider_domain: DomainTag,
    /// Check-size overlap ratio, `None` when the seeker states no target
    pub overlap: Option<f64>,
    pub as_of: DateTime<Utc>,
    pub seeker_text: KeywordText,
    pub provider_text: KeywordText,
}

impl<'a> DomainInput<'a> {
    pub fn new(
        seeker: &'a Seeker,
        provider: &'a dyn ProviderProfile,
        breakdown: &'a FactorBreakdown,
        seeker_domain: DomainTag,
        provider_domain: DomainTag,
        overlap: Option<f64>,
        as_of: DateTime<Utc>,
    ) -> Self {
        Self {
            seeker,
            provider,
            breakdown,
            seeker_domain,
            provider_domain,
            overlap,
            as_of,
            seeker_text: KeywordText::new(&seeker.profile_text()),
            provider_text: KeywordText::new(&provider.profile_text()),
        }
    }

    /// Provider is confidently in a different vertical than the seeker
    pub fn is_domain_mismatch(&self) -> bool {
        self.seeker_domain != DomainTag::General
            && self.provider_domain != DomainTag::General
            && self.seeker_domain != self.provider_domain
    }

    /// Penalized result for a cross-vertical pairing
    pub fn mismatch(&self, score: f64, multiplier: f64) -> DomainScore {
        DomainScore::new(
            self.seeker_domain,
            score,
            multiplier,
            vec![format!(
                "Provider focuses on {} rather than {}",
                self.provider_domain, self.seeker_domain
            )],
        )
    }

    /// Days since the provider's profile was last updated
    pub fn provider_age_days(&self) -> Option<i64> {
        self.provider
            .last_updated()
            .map(|updated| (self.as_of - updated).num_days())
    }
}

/// Strategy signature shared by every domain scorer
pub type DomainScorer = fn(&DomainInput<'_>) -> DomainScore;

/// Strategy map over the closed domain enumeration
pub fn scorer_for(domain: DomainTag) -> DomainScorer {
    match domain {
        DomainTag::Film => film::score,
        DomainTag::RealEstate => real_estate::score,
        DomainTag::Biotech => biotech::score,
        DomainTag::Medtech => medtech::score,
        DomainTag::Deeptech => deeptech::score,
        DomainTag::Saas => saas::score,
        DomainTag::Cpg => cpg::score,
        _ => generic::score,
    }
}

/// Dispatch to the seeker domain's strategy
pub fn score_domain(input: &DomainInput<'_>) -> DomainScore {
    scorer_for(input.seeker_domain)(input)
}

/// 40/60 blend of base score and (multiplied) domain score
pub fn blend(base_score: f64, domain: &DomainScore) -> f64 {
    (base_score * BASE_SCORE_SHARE + domain.effective_score() * DOMAIN_SCORE_SHARE)
        .round()
        .clamp(0.0, 100.0)
}

/// Check-size points used by domain strategies: 30 + 70 × overlap, 50 unknown
pub(crate) fn check_size_points(overlap: Option<f64>) -> f64 {
    overlap.map_or(50.0, |ratio| 30.0 + 70.0 * ratio.clamp(0.0, 1.0))
}

/// Indices of every named keyword group present in the text
pub(crate) fn matched_groups(
    text: &KeywordText,
    groups: &[(&'static str, &'static [&'static str])],
) -> Vec<usize> {
    groups
        .iter()
        .enumerate()
        .filter(|(_, (_, keywords))| text.any(keywords))
        .map(|(index, _)| index)
        .collect()
}

/// Build an input the way the matcher does, for strategy tests
#[cfg(test)]
pub(crate) fn input_for<'a>(
    seeker: &'a Seeker,
    provider: &'a dyn ProviderProfile,
    breakdown: &'a FactorBreakdown,
    as_of: DateTime<Utc>,
) -> DomainInput<'a> {
    use crate::core::{check_size::check_size_overlap, classifier};

    DomainInput::new(
        seeker,
        provider,
        breakdown,
        classifier::classify(seeker),
        classifier::classify_provider(provider),
        check_size_overlap(seeker.target_amount, provider),
        as_of,
    )
}

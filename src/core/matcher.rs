use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::core::{
    classifier::{classify, classify_provider},
    constraints::check_constraints,
    domains::{blend, score_domain, DomainInput},
    multipliers::{activity_multiplier, context_multiplier},
    scoring::{calculate_criteria_score, CriteriaScore},
    stages::normalize_stage,
};
use crate::models::{
    FactorWeights, MatchOptions, MatchResult, Provider, ProviderProfile, RankedMatches, Seeker,
};

/// Pool size from which candidates are scored on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Main matching orchestrator - implements the multi-stage pipeline
///
/// # Pipeline Stages
/// 1. Hard-constraint gate
/// 2. Seven-factor criteria scoring
/// 3. Domain classification and domain-specific scoring
/// 4. Context and activity multipliers
/// 5. Filtering, sorting and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: FactorWeights,
    parallel_threshold: usize,
}

impl Matcher {
    pub fn new(weights: FactorWeights) -> Self {
        Self {
            weights,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(FactorWeights::default())
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    /// Score one seeker/provider pairing end to end
    ///
    /// Gate failures come back with no breakdown; domain auto-rejects keep
    /// the breakdown so callers can inspect why the pairing was refused.
    pub fn score_candidate(
        &self,
        seeker: &Seeker,
        provider: &dyn ProviderProfile,
        include_inactive: bool,
        as_of: DateTime<Utc>,
    ) -> MatchResult {
        let reference = provider.reference();
        let seeker_domain = classify(seeker);

        // Stage 1: hard constraints
        let gate = check_constraints(seeker, provider, include_inactive, as_of);
        if !gate.passed {
            trace!(provider = %reference.id, failures = gate.failures.len(), "Rejected by gate");
            return MatchResult::rejected(reference, seeker_domain, None, 0.0, gate.failures);
        }

        // Stage 2: criteria breakdown
        let criteria = calculate_criteria_score(seeker, provider, &self.weights, as_of);

        // Stage 3: domain strategy
        let provider_domain = classify_provider(provider);
        let domain = score_domain(&DomainInput::new(
            seeker,
            provider,
            &criteria.breakdown,
            seeker_domain,
            provider_domain,
            criteria.overlap,
            as_of,
        ));
        if domain.is_auto_reject() {
            trace!(
                provider = %reference.id,
                domain = %seeker_domain,
                "Auto-rejected by domain scorer"
            );
            return MatchResult::rejected(
                reference,
                seeker_domain,
                Some(criteria.breakdown),
                criteria.base_score,
                domain.reasons,
            );
        }
        let domain_adjusted = blend(criteria.base_score, &domain);

        // Stage 4: multipliers
        let context =
            context_multiplier(seeker, provider, criteria.breakdown.geographic_practicality);
        let activity = activity_multiplier(seeker, provider);
        let score = (domain_adjusted * context.value * activity.value)
            .round()
            .clamp(0.0, 100.0);

        let mut reasons = factor_reasons(seeker, &criteria);
        reasons.extend(domain.reasons);
        reasons.extend(context.reasons);
        reasons.extend(activity.reasons);

        trace!(
            provider = %reference.id,
            base = criteria.base_score,
            domain_adjusted,
            score,
            "Scored candidate"
        );

        MatchResult {
            provider: reference,
            score,
            base_score: criteria.base_score,
            domain_adjusted_score: domain_adjusted,
            domain: seeker_domain,
            context_multiplier: context.value,
            activity_multiplier: activity.value,
            reasons,
            breakdown: Some(criteria.breakdown),
            passed_hard_constraints: true,
            constraint_failures: Vec::new(),
        }
    }

    /// Rank a provider pool for a seeker
    ///
    /// Firms are considered first, then individuals without a firm
    /// affiliation. Results are sorted by score (descending), then firms
    /// before individuals, then provider id.
    pub fn rank(
        &self,
        seeker: &Seeker,
        providers: &[Provider],
        options: &MatchOptions,
    ) -> RankedMatches {
        let as_of = options.as_of.unwrap_or_else(Utc::now);
        let include_inactive = options.include_inactive_providers;
        let pool = candidate_pool(providers);
        let total_candidates = pool.len();

        let score_one = |provider: &&Provider| {
            self.score_candidate(seeker, provider.profile(), include_inactive, as_of)
        };
        let scored: Vec<MatchResult> = if total_candidates >= self.parallel_threshold {
            pool.par_iter().map(score_one).collect()
        } else {
            pool.iter().map(score_one).collect()
        };

        let rejected_by_gate = scored
            .iter()
            .filter(|r| !r.passed_hard_constraints && r.breakdown.is_none())
            .count();
        let auto_rejected = scored
            .iter()
            .filter(|r| !r.passed_hard_constraints && r.breakdown.is_some())
            .count();

        let passed: Vec<MatchResult> = scored
            .into_iter()
            .filter(|r| r.passed_hard_constraints)
            .collect();
        let passed_count = passed.len();

        let mut matches: Vec<MatchResult> = passed
            .into_iter()
            .filter(|r| r.score >= options.min_score)
            .collect();
        let below_min_score = passed_count - matches.len();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.provider.kind.cmp(&b.provider.kind))
                .then_with(|| a.provider.id.cmp(&b.provider.id))
        });
        matches.truncate(options.limit);

        debug!(
            total_candidates,
            rejected_by_gate,
            auto_rejected,
            below_min_score,
            returned = matches.len(),
            "Ranking complete"
        );

        RankedMatches {
            matches,
            total_candidates,
            rejected_by_gate,
            auto_rejected,
            below_min_score,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Firms first, then unaffiliated individuals
fn candidate_pool(providers: &[Provider]) -> Vec<&Provider> {
    let firms = providers.iter().filter(|p| matches!(p, Provider::Firm(_)));
    let individuals = providers
        .iter()
        .filter(|p| matches!(p, Provider::Individual(_)) && !p.is_affiliated_individual());
    firms.chain(individuals).collect()
}

/// Human-readable reasons drawn from the strongest factors
fn factor_reasons(seeker: &Seeker, criteria: &CriteriaScore) -> Vec<String> {
    let breakdown = &criteria.breakdown;
    let mut reasons = Vec::new();

    if let Some(cluster) = criteria.shared_thesis {
        reasons.push(format!("Shared {} thesis", cluster.replace('_', " ")));
    }
    if criteria.stage_distance == Some(0) {
        if let Some(stage) = seeker.stage.as_deref().and_then(normalize_stage) {
            reasons.push(format!("Invests at {}", stage.label()));
        }
    }
    match criteria.overlap {
        Some(ratio) if ratio >= 0.8 => reasons.push("Check size fits the raise".to_string()),
        Some(ratio) if ratio >= 0.5 => {
            reasons.push("Check size partially fits the raise".to_string())
        }
        _ => {}
    }
    if breakdown.geographic_practicality >= 90.0 {
        reasons.push("Geographically practical".to_string());
    }
    if breakdown.investor_behavior >= 85.0 {
        reasons.push("Active investor with a complete profile".to_string());
    }
    if breakdown.investor_type_logic >= 90.0 {
        reasons.push("Investor type suits the company's stage".to_string());
    }
    reasons
}

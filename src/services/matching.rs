use thiserror::Error;
use tracing::{info, info_span, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::Settings;
use crate::core::Matcher;
use crate::models::{BaselineComparison, ComparisonStats, MatchOptions, MatchResult, RankedMatches};
use crate::services::store::{ProfileStore, StoreError};

/// Errors that can occur during a matching run
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Seeker not found: {0}")]
    SeekerNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] validator::ValidationErrors),
}

/// Entry point tying the profile store to the matcher
pub struct MatchingService<S> {
    store: S,
    matcher: Matcher,
    default_options: MatchOptions,
}

impl<S: ProfileStore> MatchingService<S> {
    pub fn new(store: S, matcher: Matcher) -> Self {
        Self {
            store,
            matcher,
            default_options: MatchOptions::default(),
        }
    }

    /// Build the matcher and default run options from configuration
    pub fn from_settings(store: S, settings: &Settings) -> Self {
        let matcher = Matcher::new(settings.factor_weights())
            .with_parallel_threshold(settings.matching.parallel_threshold);
        Self {
            store,
            matcher,
            default_options: settings.default_options(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn default_options(&self) -> &MatchOptions {
        &self.default_options
    }

    /// Rank the provider pool for a seeker, keeping the run counters
    pub fn rank_for_seeker(
        &self,
        seeker_id: &str,
        options: &MatchOptions,
    ) -> Result<RankedMatches, MatchError> {
        options.validate()?;

        let run_id = Uuid::new_v4();
        let span = info_span!("run_matching", %run_id, seeker_id);
        let _guard = span.enter();

        let seeker = self
            .store
            .get_seeker_by_id(seeker_id)?
            .ok_or_else(|| MatchError::SeekerNotFound(seeker_id.to_string()))?;
        let providers = self.store.list_providers()?;

        let ranked = self.matcher.rank(&seeker, &providers, options);
        if ranked.matches.is_empty() {
            warn!("No providers passed for seeker {}", seeker_id);
        }
        info!(
            "Matched seeker {}: {} of {} candidates returned",
            seeker_id,
            ranked.matches.len(),
            ranked.total_candidates
        );
        Ok(ranked)
    }

    /// Ranked matches for a seeker
    pub fn run_matching(
        &self,
        seeker_id: &str,
        options: MatchOptions,
    ) -> Result<Vec<MatchResult>, MatchError> {
        Ok(self.rank_for_seeker(seeker_id, &options)?.matches)
    }

    /// Re-run matching with the service's default options and diff against the baseline
    ///
    /// The baseline ranking is not modelled yet and is always empty, so the
    /// deltas equal the run's own statistics.
    pub fn compare_against_baseline(
        &self,
        seeker_id: &str,
    ) -> Result<BaselineComparison, MatchError> {
        let results = self.run_matching(seeker_id, self.default_options.clone())?;
        let baseline: Vec<MatchResult> = Vec::new();

        let average_score = average(&results);
        let top_score = results.iter().map(|r| r.score).fold(0.0, f64::max);

        let comparison_stats = ComparisonStats {
            result_count: results.len(),
            baseline_count: baseline.len(),
            average_score,
            top_score,
            average_score_delta: average_score - average(&baseline),
        };

        Ok(BaselineComparison {
            results,
            comparison_stats,
        })
    }
}

fn average(results: &[MatchResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64
}

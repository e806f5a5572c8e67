use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Options for a single matching run
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchOptions {
    #[validate(range(min = 1, max = 500))]
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(rename = "includeInactiveProviders", default)]
    pub include_inactive_providers: bool,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(rename = "minScore", default = "default_min_score")]
    pub min_score: f64,
    /// Reference instant for recency checks; `None` means now
    #[serde(rename = "asOf", default)]
    pub as_of: Option<DateTime<Utc>>,
}

fn default_limit() -> usize {
    50
}

fn default_min_score() -> f64 {
    20.0
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            include_inactive_providers: false,
            min_score: default_min_score(),
            as_of: None,
        }
    }
}

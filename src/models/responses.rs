use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Output of one ranking pass over a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatches {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
    pub rejected_by_gate: usize,
    pub auto_rejected: usize,
    pub below_min_score: usize,
}

/// Summary statistics comparing a run against the placeholder baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonStats {
    #[serde(rename = "resultCount")]
    pub result_count: usize,
    #[serde(rename = "baselineCount")]
    pub baseline_count: usize,
    #[serde(rename = "averageScore")]
    pub average_score: f64,
    #[serde(rename = "topScore")]
    pub top_score: f64,
    #[serde(rename = "averageScoreDelta")]
    pub average_score_delta: f64,
}

/// Response for the baseline comparison entry point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineComparison {
    pub results: Vec<MatchResult>,
    #[serde(rename = "comparisonStats")]
    pub comparison_stats: ComparisonStats,
}

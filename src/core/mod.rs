// Core algorithm exports
pub mod check_size;
pub mod classifier;
pub mod constraints;
pub mod domains;
pub mod geography;
pub mod matcher;
pub mod multipliers;
pub mod scoring;
pub mod stages;
pub mod text;

pub use check_size::{parse_check_size, CheckSizeRange};
pub use classifier::{classify, classify_provider, DomainTag};
pub use constraints::{check_constraints, GateOutcome};
pub use domains::{DomainInput, DomainScore};
pub use matcher::Matcher;
pub use scoring::calculate_criteria_score;
pub use stages::{normalize_stage, Stage};

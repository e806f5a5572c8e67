//! Capital Match - rule-based matching engine for fundraising
//!
//! This library ranks capital providers (individual investors and firms)
//! for a fundraising seeker. It implements a multi-stage pipeline: hard
//! constraints, seven-factor criteria scoring, domain-specific strategies
//! and multiplicative adjustments.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{classify, DomainTag, Matcher};
pub use models::{
    FactorBreakdown, FactorWeights, IndividualInvestor, InvestmentFirm, MatchOptions, MatchResult,
    Provider, ProviderProfile, RankedMatches, Seeker,
};
pub use services::{InMemoryStore, MatchError, MatchingService, ProfileStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        assert!((matcher.weights().sum() - 1.0).abs() < 1e-9);
        assert_eq!(classify(&Seeker::default()), DomainTag::General);
    }
}

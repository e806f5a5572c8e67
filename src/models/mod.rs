// Model exports
pub mod domain;
pub mod profile;
pub mod requests;
pub mod responses;

pub use domain::{
    FactorBreakdown, FactorWeights, IndividualInvestor, InvestmentFirm, MatchResult, Provider,
    ProviderKind, ProviderRef, Seeker,
};
pub use profile::ProviderProfile;
pub use requests::MatchOptions;
pub use responses::{BaselineComparison, ComparisonStats, RankedMatches};

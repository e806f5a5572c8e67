use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::classifier::DomainTag;

/// Fundraising entity being matched against the provider pool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seeker {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(rename = "targetAmount", default)]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "linkedinUrl", default)]
    pub linkedin_url: Option<String>,
    #[serde(rename = "contactEmail", default)]
    pub contact_email: Option<String>,
}

impl Seeker {
    /// Industries and description joined into a single free-text blob
    pub fn profile_text(&self) -> String {
        let mut parts: Vec<&str> = self.industries.iter().map(String::as_str).collect();
        if let Some(description) = self.description.as_deref() {
            parts.push(description);
        }
        parts.join(" ")
    }
}

/// Individual investor (angel, partner, scout)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndividualInvestor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "investorType", default)]
    pub investor_type: Option<String>,
    #[serde(rename = "firmId", default)]
    pub firm_id: Option<String>,
    #[serde(default)]
    pub stages: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "typicalCheckSize", default)]
    pub typical_check_size: Option<String>,
    #[serde(rename = "checkSizeMin", default)]
    pub check_size_min: Option<f64>,
    #[serde(rename = "checkSizeMax", default)]
    pub check_size_max: Option<f64>,
    #[serde(rename = "portfolioCount", default)]
    pub portfolio_count: Option<u32>,
    #[serde(rename = "linkedinUrl", default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Investment firm (VC fund, family office, lender, PE shop)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestmentFirm {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "firmType", default)]
    pub firm_type: Option<String>,
    #[serde(default)]
    pub stages: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "typicalCheckSize", default)]
    pub typical_check_size: Option<String>,
    #[serde(rename = "checkSizeMin", default)]
    pub check_size_min: Option<f64>,
    #[serde(rename = "checkSizeMax", default)]
    pub check_size_max: Option<f64>,
    #[serde(default)]
    pub aum: Option<f64>,
    #[serde(rename = "portfolioCount", default)]
    pub portfolio_count: Option<u32>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "linkedinUrl", default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// A capital provider candidate: exactly one of the two record shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Provider {
    Individual(IndividualInvestor),
    Firm(InvestmentFirm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    // Declaration order doubles as the ranking tie-break: firms first
    Firm,
    Individual,
}

/// Stable reference back to the provider record a result was scored for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRef {
    pub kind: ProviderKind,
    pub id: String,
    pub name: String,
}

/// Seven-factor breakdown produced by the criteria scorer, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FactorBreakdown {
    #[serde(rename = "semanticFit")]
    pub semantic_fit: f64,
    #[serde(rename = "stageCompatibility")]
    pub stage_compatibility: f64,
    #[serde(rename = "economicFit")]
    pub economic_fit: f64,
    #[serde(rename = "geographicPracticality")]
    pub geographic_practicality: f64,
    #[serde(rename = "investorBehavior")]
    pub investor_behavior: f64,
    #[serde(rename = "investorTypeLogic")]
    pub investor_type_logic: f64,
    #[serde(rename = "networkWarmth")]
    pub network_warmth: f64,
}

/// Scored pairing of one seeker with one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub provider: ProviderRef,
    pub score: f64,
    #[serde(rename = "baseScore")]
    pub base_score: f64,
    #[serde(rename = "domainAdjustedScore")]
    pub domain_adjusted_score: f64,
    pub domain: DomainTag,
    #[serde(rename = "contextMultiplier")]
    pub context_multiplier: f64,
    #[serde(rename = "activityMultiplier")]
    pub activity_multiplier: f64,
    pub reasons: Vec<String>,
    pub breakdown: Option<FactorBreakdown>,
    #[serde(rename = "passedHardConstraints")]
    pub passed_hard_constraints: bool,
    #[serde(rename = "constraintFailures")]
    pub constraint_failures: Vec<String>,
}

impl MatchResult {
    /// Result for a pairing the gate or a domain scorer refused
    pub fn rejected(
        provider: ProviderRef,
        domain: DomainTag,
        breakdown: Option<FactorBreakdown>,
        base_score: f64,
        failures: Vec<String>,
    ) -> Self {
        Self {
            provider,
            score: 0.0,
            base_score,
            domain_adjusted_score: 0.0,
            domain,
            context_multiplier: 1.0,
            activity_multiplier: 1.0,
            reasons: Vec::new(),
            breakdown,
            passed_hard_constraints: false,
            constraint_failures: failures,
        }
    }
}

/// Criteria scorer weights, one per factor, summing to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    pub semantic: f64,
    pub stage: f64,
    pub economic: f64,
    pub geographic: f64,
    pub behavior: f64,
    pub investor_type: f64,
    pub network: f64,
}

impl FactorWeights {
    pub fn sum(&self) -> f64 {
        self.semantic
            + self.stage
            + self.economic
            + self.geographic
            + self.behavior
            + self.investor_type
            + self.network
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            semantic: 0.35,
            stage: 0.20,
            economic: 0.15,
            geographic: 0.10,
            behavior: 0.10,
            investor_type: 0.05,
            network: 0.05,
        }
    }
}

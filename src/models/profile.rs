use chrono::{DateTime, Utc};

use crate::models::domain::{
    IndividualInvestor, InvestmentFirm, Provider, ProviderKind, ProviderRef,
};

/// Read-only capability view shared by both provider shapes
///
/// Every scorer reads providers through this trait so individual and firm
/// records are handled by the same code paths.
pub trait ProviderProfile {
    fn kind(&self) -> ProviderKind;
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Bio for individuals, description for firms
    fn description(&self) -> Option<&str>;
    /// Investor type for individuals, firm type for firms
    fn investor_type(&self) -> Option<&str>;
    fn stages(&self) -> &[String];
    fn sectors(&self) -> &[String];
    fn location(&self) -> Option<&str>;
    fn check_size_min(&self) -> Option<f64>;
    fn check_size_max(&self) -> Option<f64>;
    fn check_size_text(&self) -> Option<&str>;
    fn aum(&self) -> Option<f64>;
    fn portfolio_count(&self) -> Option<u32>;
    fn last_updated(&self) -> Option<DateTime<Utc>>;
    fn website(&self) -> Option<&str>;
    fn linkedin_url(&self) -> Option<&str>;
    fn email(&self) -> Option<&str>;

    fn is_firm(&self) -> bool {
        self.kind() == ProviderKind::Firm
    }

    fn reference(&self) -> ProviderRef {
        ProviderRef {
            kind: self.kind(),
            id: self.id().to_string(),
            name: self.name().to_string(),
        }
    }

    /// Description, type and sector list joined into one free-text blob
    fn profile_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(description) = self.description() {
            parts.push(description);
        }
        if let Some(kind) = self.investor_type() {
            parts.push(kind);
        }
        parts.extend(self.sectors().iter().map(String::as_str));
        parts.join(" ")
    }
}

impl ProviderProfile for IndividualInvestor {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Individual
    }
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.bio.as_deref()
    }
    fn investor_type(&self) -> Option<&str> {
        self.investor_type.as_deref()
    }
    fn stages(&self) -> &[String] {
        &self.stages
    }
    fn sectors(&self) -> &[String] {
        &self.sectors
    }
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    fn check_size_min(&self) -> Option<f64> {
        self.check_size_min
    }
    fn check_size_max(&self) -> Option<f64> {
        self.check_size_max
    }
    fn check_size_text(&self) -> Option<&str> {
        self.typical_check_size.as_deref()
    }
    fn aum(&self) -> Option<f64> {
        None
    }
    fn portfolio_count(&self) -> Option<u32> {
        self.portfolio_count
    }
    fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
    fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }
    fn linkedin_url(&self) -> Option<&str> {
        self.linkedin_url.as_deref()
    }
    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl ProviderProfile for InvestmentFirm {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Firm
    }
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn investor_type(&self) -> Option<&str> {
        self.firm_type.as_deref()
    }
    fn stages(&self) -> &[String] {
        &self.stages
    }
    fn sectors(&self) -> &[String] {
        &self.sectors
    }
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    fn check_size_min(&self) -> Option<f64> {
        self.check_size_min
    }
    fn check_size_max(&self) -> Option<f64> {
        self.check_size_max
    }
    fn check_size_text(&self) -> Option<&str> {
        self.typical_check_size.as_deref()
    }
    fn aum(&self) -> Option<f64> {
        self.aum
    }
    fn portfolio_count(&self) -> Option<u32> {
        self.portfolio_count
    }
    fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
    fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }
    fn linkedin_url(&self) -> Option<&str> {
        self.linkedin_url.as_deref()
    }
    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Provider {
    /// Borrow the underlying record through the shared view
    pub fn profile(&self) -> &dyn ProviderProfile {
        match self {
            Provider::Individual(individual) => individual,
            Provider::Firm(firm) => firm,
        }
    }

    /// Individuals attached to a firm are represented by that firm in the pool
    pub fn is_affiliated_individual(&self) -> bool {
        matches!(self, Provider::Individual(individual) if individual.firm_id.is_some())
    }
}

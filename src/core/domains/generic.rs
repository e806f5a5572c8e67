use crate::core::classifier::DomainTag;
use crate::core::domains::{DomainInput, DomainScore};

const MISMATCH_SCORE: f64 = 30.0;
const MISMATCH_MULTIPLIER: f64 = 0.6;

/// Per-domain emphasis over the criteria breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenericWeights {
    pub semantic: f64,
    pub stage: f64,
    /// Read from geographic practicality
    pub market: f64,
    /// Read from economic fit
    pub check_size: f64,
    /// Read from investor-type logic
    pub investor_type: f64,
    /// Read from investor behavior
    pub deal_structure: f64,
}

impl GenericWeights {
    const fn new(
        semantic: f64,
        stage: f64,
        market: f64,
        check_size: f64,
        investor_type: f64,
        deal_structure: f64,
    ) -> Self {
        Self {
            semantic,
            stage,
            market,
            check_size,
            investor_type,
            deal_structure,
        }
    }

    pub fn sum(&self) -> f64 {
        self.semantic
            + self.stage
            + self.market
            + self.check_size
            + self.investor_type
            + self.deal_structure
    }
}

pub const GENERAL_WEIGHTS: GenericWeights = GenericWeights::new(0.30, 0.25, 0.10, 0.20, 0.10, 0.05);

/// Weight row for a domain; domains without their own row use the general one
pub fn weights_for(domain: DomainTag) -> GenericWeights {
    match domain {
        DomainTag::Fintech => GenericWeights::new(0.30, 0.20, 0.10, 0.20, 0.10, 0.10),
        DomainTag::DigitalHealth => GenericWeights::new(0.35, 0.20, 0.10, 0.15, 0.10, 0.10),
        DomainTag::Cybersecurity => GenericWeights::new(0.35, 0.20, 0.05, 0.20, 0.10, 0.10),
        DomainTag::EnterpriseSaas => GenericWeights::new(0.30, 0.20, 0.10, 0.20, 0.10, 0.10),
        DomainTag::Fashion | DomainTag::Beauty | DomainTag::FoodBeverage => {
            GenericWeights::new(0.30, 0.15, 0.20, 0.15, 0.10, 0.10)
        }
        DomainTag::Manufacturing | DomainTag::Logistics => {
            GenericWeights::new(0.30, 0.20, 0.15, 0.20, 0.10, 0.05)
        }
        DomainTag::Cleantech => GenericWeights::new(0.35, 0.20, 0.10, 0.20, 0.10, 0.05),
        DomainTag::SustainableMaterials => GenericWeights::new(0.35, 0.20, 0.10, 0.15, 0.10, 0.10),
        DomainTag::Edtech => GenericWeights::new(0.30, 0.20, 0.15, 0.15, 0.10, 0.10),
        DomainTag::Govtech => GenericWeights::new(0.30, 0.15, 0.20, 0.15, 0.10, 0.10),
        DomainTag::WealthManagement => GenericWeights::new(0.30, 0.15, 0.15, 0.20, 0.15, 0.05),
        DomainTag::Gaming => GenericWeights::new(0.35, 0.20, 0.10, 0.15, 0.10, 0.10),
        _ => GENERAL_WEIGHTS,
    }
}

/// Reweight the criteria breakdown for domains without a bespoke scorer
pub fn score(input: &DomainInput<'_>) -> DomainScore {
    if input.is_domain_mismatch() {
        return input.mismatch(MISMATCH_SCORE, MISMATCH_MULTIPLIER);
    }

    let weights = weights_for(input.seeker_domain);
    let b = input.breakdown;
    let score = b.semantic_fit * weights.semantic
        + b.stage_compatibility * weights.stage
        + b.geographic_practicality * weights.market
        + b.economic_fit * weights.check_size
        + b.investor_type_logic * weights.investor_type
        + b.investor_behavior * weights.deal_structure;

    let mut reasons = Vec::new();
    if input.seeker_domain != DomainTag::General && input.provider_domain == input.seeker_domain {
        reasons.push(format!("Provider is active in {}", input.seeker_domain));
    }

    DomainScore::new(input.seeker_domain, score, 1.0, reasons)
}

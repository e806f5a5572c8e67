use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::text::KeywordText;
use crate::models::{ProviderProfile, Seeker};

/// Industry vertical used to select a specialized scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainTag {
    Film,
    RealEstate,
    Biotech,
    Medtech,
    DigitalHealth,
    Cybersecurity,
    Deeptech,
    Fintech,
    Saas,
    EnterpriseSaas,
    Cpg,
    Fashion,
    Beauty,
    FoodBeverage,
    Manufacturing,
    Logistics,
    Cleantech,
    SustainableMaterials,
    Edtech,
    Govtech,
    WealthManagement,
    Gaming,
    General,
}

impl DomainTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainTag::Film => "film",
            DomainTag::RealEstate => "real_estate",
            DomainTag::Biotech => "biotech",
            DomainTag::Medtech => "medtech",
            DomainTag::DigitalHealth => "digital_health",
            DomainTag::Cybersecurity => "cybersecurity",
            DomainTag::Deeptech => "deeptech",
            DomainTag::Fintech => "fintech",
            DomainTag::Saas => "saas",
            DomainTag::EnterpriseSaas => "enterprise_saas",
            DomainTag::Cpg => "cpg",
            DomainTag::Fashion => "fashion",
            DomainTag::Beauty => "beauty",
            DomainTag::FoodBeverage => "food_beverage",
            DomainTag::Manufacturing => "manufacturing",
            DomainTag::Logistics => "logistics",
            DomainTag::Cleantech => "cleantech",
            DomainTag::SustainableMaterials => "sustainable_materials",
            DomainTag::Edtech => "edtech",
            DomainTag::Govtech => "govtech",
            DomainTag::WealthManagement => "wealth_management",
            DomainTag::Gaming => "gaming",
            DomainTag::General => "general",
        }
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the classification table
#[derive(Debug, Clone, Copy)]
pub struct DomainKeywords {
    pub domain: DomainTag,
    /// A single hit is decisive for seekers
    pub strong: &'static [&'static str],
    /// Two or more hits required
    pub supporting: &'static [&'static str],
}

/// Domains in evaluation priority order
///
/// Healthcare verticals come first so generic technology vocabulary
/// ("platform", "software", "ai") cannot pull biotech or medtech seekers into
/// a software bucket.
pub const DOMAIN_TAXONOMY: &[DomainKeywords] = &[
    DomainKeywords {
        domain: DomainTag::Biotech,
        strong: &[
            "biotech",
            "biotechnology",
            "therapeutics",
            "drug discovery",
            "biopharma",
            "gene therapy",
            "cell therapy",
        ],
        supporting: &[
            "preclinical",
            "molecule",
            "antibody",
            "oncology",
            "pharma",
            "biologics",
            "genomics",
            "protein",
            "clinical trial",
            "life sciences",
            "drug",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Medtech,
        strong: &[
            "medtech",
            "medical device",
            "medical devices",
            "diagnostics",
            "surgical",
            "510 k",
        ],
        supporting: &[
            "device",
            "hospital",
            "clinical",
            "implant",
            "imaging",
            "patient",
            "fda",
            "regulatory",
            "sensor",
            "clinician",
        ],
    },
    DomainKeywords {
        domain: DomainTag::DigitalHealth,
        strong: &["digital health", "telehealth", "telemedicine", "healthtech", "health tech"],
        supporting: &[
            "patient",
            "virtual care",
            "care delivery",
            "wellness",
            "healthcare",
            "clinician",
            "mental health",
            "remote monitoring",
            "ehr",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Film,
        strong: &[
            "film",
            "feature film",
            "motion picture",
            "single picture",
            "movie",
            "cinema",
            "documentary",
            "screenplay",
        ],
        supporting: &[
            "production",
            "distribution",
            "slate",
            "gap financing",
            "box office",
            "streaming",
            "studio",
            "producer",
            "director",
            "pre sales",
            "tax credit",
            "entertainment",
        ],
    },
    DomainKeywords {
        domain: DomainTag::RealEstate,
        strong: &["real estate", "realestate", "proptech", "multifamily", "reit"],
        supporting: &[
            "property",
            "properties",
            "rental",
            "commercial",
            "residential",
            "development",
            "acquisition",
            "tenant",
            "housing",
            "construction",
            "cap rate",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Cybersecurity,
        strong: &["cybersecurity", "cyber security", "infosec", "zero trust"],
        supporting: &[
            "security",
            "threat",
            "identity",
            "encryption",
            "compliance",
            "vulnerability",
            "soc 2",
            "breach",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Deeptech,
        strong: &[
            "deeptech",
            "deep tech",
            "quantum",
            "semiconductor",
            "photonics",
            "robotics",
            "hard tech",
        ],
        supporting: &[
            "hardware",
            "research lab",
            "patent",
            "materials science",
            "aerospace",
            "autonomous",
            "chip",
            "lidar",
            "machine learning",
        ],
    },
    DomainKeywords {
        domain: DomainTag::WealthManagement,
        strong: &["wealth management", "wealthtech", "financial advisor", "robo advisor"],
        supporting: &[
            "private wealth",
            "high net worth",
            "retirement",
            "asset management",
            "investment advisory",
            "estate planning",
            "financial planning",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Fintech,
        strong: &["fintech", "neobank", "insurtech", "regtech", "payments infrastructure"],
        supporting: &[
            "payments",
            "banking",
            "lending",
            "credit",
            "insurance",
            "crypto",
            "blockchain",
            "financial",
            "card",
            "fraud",
            "wallet",
        ],
    },
    DomainKeywords {
        domain: DomainTag::EnterpriseSaas,
        strong: &["enterprise saas", "enterprise software", "b2b enterprise"],
        supporting: &[
            "enterprise",
            "workflow",
            "erp",
            "crm",
            "procurement",
            "integration",
            "fortune 500",
            "it teams",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Saas,
        strong: &["saas", "software as a service", "subscription software"],
        supporting: &[
            "software",
            "platform",
            "subscription",
            "recurring revenue",
            "cloud",
            "dashboard",
            "b2b",
            "automation",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Beauty,
        strong: &["beauty", "cosmetics", "skincare", "skin care"],
        supporting: &["makeup", "haircare", "fragrance", "personal care", "clean beauty", "serum"],
    },
    DomainKeywords {
        domain: DomainTag::Fashion,
        strong: &["fashion", "apparel", "footwear"],
        supporting: &[
            "clothing",
            "designer",
            "luxury",
            "streetwear",
            "textile",
            "garment",
            "collection",
        ],
    },
    DomainKeywords {
        domain: DomainTag::FoodBeverage,
        strong: &["food and beverage", "food beverage", "beverage", "foodtech", "restaurant"],
        supporting: &[
            "food",
            "snack",
            "drink",
            "plant based",
            "organic",
            "nutrition",
            "grocery",
            "kitchen",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Cpg,
        strong: &["cpg", "consumer packaged goods", "consumer products", "consumer brand"],
        supporting: &[
            "retail",
            "brand",
            "dtc",
            "direct to consumer",
            "shelf",
            "distribution",
            "wholesale",
            "consumer",
            "packaging",
        ],
    },
    DomainKeywords {
        domain: DomainTag::SustainableMaterials,
        strong: &["sustainable materials", "bioplastics", "biomaterials", "circular economy"],
        supporting: &[
            "recycled",
            "recycling",
            "compostable",
            "biodegradable",
            "materials",
            "packaging",
            "waste",
            "fiber",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Cleantech,
        strong: &[
            "cleantech",
            "clean tech",
            "climate tech",
            "climatetech",
            "renewable energy",
            "solar",
            "carbon capture",
        ],
        supporting: &[
            "climate",
            "energy",
            "battery",
            "storage",
            "carbon",
            "emissions",
            "grid",
            "decarbonization",
            "electric vehicle",
            "hydrogen",
            "wind",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Manufacturing,
        strong: &["manufacturing", "advanced manufacturing", "industrial automation"],
        supporting: &[
            "factory",
            "industrial",
            "production line",
            "supply chain",
            "machining",
            "3d printing",
            "assembly",
            "oem",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Logistics,
        strong: &["logistics", "freight", "last mile", "shipping"],
        supporting: &[
            "supply chain",
            "warehouse",
            "fleet",
            "delivery",
            "trucking",
            "fulfillment",
            "transportation",
            "routing",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Edtech,
        strong: &["edtech", "education technology", "e learning", "online learning"],
        supporting: &[
            "education",
            "students",
            "learning",
            "school",
            "teachers",
            "courses",
            "university",
            "curriculum",
            "tutoring",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Govtech,
        strong: &["govtech", "civic tech", "civictech", "public sector"],
        supporting: &[
            "government",
            "municipal",
            "civic",
            "public",
            "agency",
            "procurement",
            "citizens",
        ],
    },
    DomainKeywords {
        domain: DomainTag::Gaming,
        strong: &["gaming", "video game", "esports", "game studio"],
        supporting: &[
            "game",
            "games",
            "players",
            "console",
            "mobile game",
            "multiplayer",
            "metaverse",
            "interactive",
        ],
    },
];

/// Look up the keyword family for a domain
pub fn keywords_for(domain: DomainTag) -> Option<&'static DomainKeywords> {
    DOMAIN_TAXONOMY.iter().find(|row| row.domain == domain)
}

/// Shared matching routine: first row whose threshold is met, else `General`
fn classify_text(text: &KeywordText, allow_strong_shortcut: bool) -> DomainTag {
    if text.is_empty() {
        return DomainTag::General;
    }
    for row in DOMAIN_TAXONOMY {
        let strong_hits = text.hits(row.strong);
        let supporting_hits = text.hits(row.supporting);
        let matched = if allow_strong_shortcut {
            strong_hits >= 1 || supporting_hits >= 2
        } else {
            strong_hits + supporting_hits >= 2
        };
        if matched {
            return row.domain;
        }
    }
    DomainTag::General
}

/// Classify a seeker from its industry tags and description
pub fn classify(seeker: &Seeker) -> DomainTag {
    classify_text(&KeywordText::new(&seeker.profile_text()), true)
}

/// Classify a provider from its free-text profile
///
/// Provider text is less structured, so a domain needs at least two hits.
/// Strong keywords count as supporting ones here: two supporting hits, two
/// strong hits or one of each all qualify, but a lone strong keyword does not.
pub fn classify_provider(provider: &dyn ProviderProfile) -> DomainTag {
    classify_text(&KeywordText::new(&provider.profile_text()), false)
}

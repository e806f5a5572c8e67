use crate::core::text::normalize;

/// Curated macro-region map: region name to countries, states and hub cities
const REGIONS: &[(&str, &[&str])] = &[
    (
        "north america",
        &[
            "usa", "us", "united states", "america", "canada", "ca", "ny", "ma", "tx", "wa", "il",
            "california", "new york", "massachusetts", "texas", "washington", "illinois",
            "colorado", "florida", "georgia", "san francisco", "bay area", "silicon valley",
            "los angeles", "boston", "austin", "seattle", "chicago", "miami", "denver", "atlanta",
            "toronto", "vancouver", "montreal", "palo alto", "menlo park", "brooklyn",
        ],
    ),
    (
        "latin america",
        &[
            "mexico", "brazil", "argentina", "chile", "colombia", "peru", "latam",
            "latin america", "sao paulo", "mexico city", "buenos aires", "bogota", "santiago",
        ],
    ),
    (
        "europe",
        &[
            "europe", "uk", "united kingdom", "england", "scotland", "ireland", "germany",
            "france", "spain", "italy", "netherlands", "sweden", "norway", "denmark", "finland",
            "switzerland", "austria", "belgium", "portugal", "poland", "estonia", "london",
            "berlin", "munich", "paris", "amsterdam", "stockholm", "zurich", "dublin", "madrid",
            "barcelona", "lisbon", "copenhagen", "milan",
        ],
    ),
    (
        "middle east",
        &[
            "middle east", "israel", "uae", "united arab emirates", "saudi arabia", "qatar",
            "dubai", "abu dhabi", "tel aviv", "riyadh", "mena",
        ],
    ),
    (
        "africa",
        &[
            "africa", "nigeria", "kenya", "south africa", "egypt", "ghana", "lagos", "nairobi",
            "cape town", "johannesburg",
        ],
    ),
    (
        "asia pacific",
        &[
            "asia", "apac", "china", "japan", "india", "singapore", "hong kong", "korea",
            "south korea", "indonesia", "vietnam", "australia", "new zealand", "beijing",
            "shanghai", "shenzhen", "tokyo", "bangalore", "bengaluru", "mumbai", "delhi", "seoul",
            "sydney", "melbourne",
        ],
    ),
];

const GLOBAL_MARKERS: &[&str] = &["global", "worldwide", "international", "anywhere"];

/// How two free-text locations relate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoMatch {
    ExactCity,
    Global,
    SameRegion(&'static str),
    Contains,
    Distant,
    Unknown,
}

impl GeoMatch {
    pub fn score(self) -> f64 {
        match self {
            GeoMatch::ExactCity | GeoMatch::Global | GeoMatch::Contains => 100.0,
            GeoMatch::SameRegion(_) => 90.0,
            GeoMatch::Distant => 30.0,
            GeoMatch::Unknown => 50.0,
        }
    }
}

#[inline]
fn has_term(padded: &str, term: &str) -> bool {
    padded.contains(&format!(" {} ", term))
}

/// Macro-region a location falls into, if any term matches on word boundaries
pub fn region_of(location: &str) -> Option<&'static str> {
    let padded = format!(" {} ", normalize(location));
    REGIONS
        .iter()
        .find(|(_, terms)| terms.iter().any(|term| has_term(&padded, term)))
        .map(|(name, _)| *name)
}

fn city_of(location: &str) -> String {
    normalize(location.split(',').next().unwrap_or_default())
}

/// Classify the seeker/provider location pair
///
/// Checks run in order: exact city, global provider, shared macro-region,
/// substring containment.
pub fn classify_locations(seeker: Option<&str>, provider: Option<&str>) -> GeoMatch {
    let (Some(seeker), Some(provider)) = (seeker, provider) else {
        return GeoMatch::Unknown;
    };
    let seeker_norm = normalize(seeker);
    let provider_norm = normalize(provider);
    if seeker_norm.is_empty() || provider_norm.is_empty() {
        return GeoMatch::Unknown;
    }

    let seeker_city = city_of(seeker);
    if !seeker_city.is_empty() && seeker_city == city_of(provider) {
        return GeoMatch::ExactCity;
    }

    let provider_padded = format!(" {} ", provider_norm);
    if GLOBAL_MARKERS.iter().any(|m| has_term(&provider_padded, m)) {
        return GeoMatch::Global;
    }

    if let (Some(a), Some(b)) = (region_of(seeker), region_of(provider)) {
        if a == b {
            return GeoMatch::SameRegion(a);
        }
    }

    if seeker_norm.contains(&provider_norm) || provider_norm.contains(&seeker_norm) {
        return GeoMatch::Contains;
    }

    GeoMatch::Distant
}

use crate::core::stages::normalize_stage;
use crate::core::text::KeywordText;
use crate::models::{ProviderProfile, Seeker};

pub const MAX_CONTEXT_MULTIPLIER: f64 = 1.5;
pub const MAX_ACTIVITY_MULTIPLIER: f64 = 1.3;

const EARLY_STAGE_LOCAL_BOOST: f64 = 0.10;
const FAMILY_OFFICE_BOOST: f64 = 0.05;
const SHARED_NICHE_BOOST: f64 = 0.15;
const ACTIVITY_SIGNAL_BOOST: f64 = 0.05;

/// Geographic practicality from which an early-stage pairing counts as local
const LOCAL_GEOGRAPHY: f64 = 90.0;
const RICH_DESCRIPTION_CHARS: usize = 150;

const NICHES: &[(&str, &[&str])] = &[
    ("film", &["film", "movie", "motion picture"]),
    ("real estate", &["real estate", "multifamily", "proptech"]),
    ("sports", &["sports", "athlete", "athletes"]),
    ("entertainment", &["entertainment", "music", "live events"]),
];

/// A multiplicative adjustment and the reasons it fired
#[derive(Debug, Clone, PartialEq)]
pub struct Multiplier {
    pub value: f64,
    pub reasons: Vec<String>,
}

/// Context multiplier, capped at 1.5
///
/// - +0.10 early-stage seeker with a local or global provider
/// - +0.05 family office provider
/// - +0.15 seeker and provider share a niche
pub fn context_multiplier(
    seeker: &Seeker,
    provider: &dyn ProviderProfile,
    geographic_practicality: f64,
) -> Multiplier {
    let mut value = 1.0;
    let mut reasons = Vec::new();

    let early = seeker
        .stage
        .as_deref()
        .and_then(normalize_stage)
        .is_some_and(|stage| stage.is_early());
    if early && geographic_practicality >= LOCAL_GEOGRAPHY {
        value += EARLY_STAGE_LOCAL_BOOST;
        reasons.push("Early-stage company with a geographically practical investor".to_string());
    }

    let family_office = provider
        .investor_type()
        .is_some_and(|kind| KeywordText::new(kind).contains("family office"));
    if family_office {
        value += FAMILY_OFFICE_BOOST;
        reasons.push("Family office with flexible mandate".to_string());
    }

    let seeker_text = KeywordText::new(&seeker.profile_text());
    let provider_text = KeywordText::new(&provider.profile_text());
    if let Some((niche, _)) = NICHES
        .iter()
        .find(|(_, keywords)| seeker_text.any(keywords) && provider_text.any(keywords))
    {
        value += SHARED_NICHE_BOOST;
        reasons.push(format!("Shared {} niche", niche));
    }

    Multiplier {
        value: f64::min(value, MAX_CONTEXT_MULTIPLIER),
        reasons,
    }
}

#[inline]
fn is_rich(description: Option<&str>) -> bool {
    description.is_some_and(|d| d.chars().count() >= RICH_DESCRIPTION_CHARS)
}

fn seeker_signals(seeker: &Seeker) -> usize {
    [
        seeker.website.is_some(),
        is_rich(seeker.description.as_deref()),
        !seeker.industries.is_empty(),
        seeker.linkedin_url.is_some(),
        seeker.contact_email.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}

fn provider_signals(provider: &dyn ProviderProfile) -> usize {
    [
        provider.website().is_some(),
        is_rich(provider.description()),
        !provider.sectors().is_empty(),
        provider.linkedin_url().is_some(),
        provider.email().is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}

/// Activity multiplier: +0.05 per completeness signal on either side, capped at 1.3
pub fn activity_multiplier(seeker: &Seeker, provider: &dyn ProviderProfile) -> Multiplier {
    let signals = seeker_signals(seeker) + provider_signals(provider);
    let value = f64::min(
        1.0 + ACTIVITY_SIGNAL_BOOST * signals as f64,
        MAX_ACTIVITY_MULTIPLIER,
    );
    let reasons = if signals > 0 {
        vec![format!(
            "Profile completeness boost ({} signals)",
            signals
        )]
    } else {
        Vec::new()
    };
    Multiplier { value, reasons }
}

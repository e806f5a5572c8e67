use chrono::{DateTime, Months, Utc};

use crate::core::{check_size::check_size_overlap, stages::stage_distance};
use crate::models::{ProviderProfile, Seeker};

/// Minimum share of the seeker's range a provider must cover
pub const MIN_CHECK_SIZE_OVERLAP: f64 = 0.10;

/// Largest tolerated gap between seeker stage and provider focus
pub const MAX_STAGE_DISTANCE: u32 = 1;

/// Firms not updated within this many months are treated as inactive
pub const INACTIVITY_MONTHS: u32 = 6;

/// Outcome of the hard-constraint gate
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GateOutcome {
    pub passed: bool,
    pub failures: Vec<String>,
}

/// Run every hard check and collect all failures
///
/// This is Stage 1 of the pipeline. Checks never short-circuit so the caller
/// can report every reason a pairing was refused.
pub fn check_constraints(
    seeker: &Seeker,
    provider: &dyn ProviderProfile,
    include_inactive: bool,
    as_of: DateTime<Utc>,
) -> GateOutcome {
    let failures: Vec<String> = [
        check_size_constraint(seeker, provider),
        stage_constraint(seeker, provider),
        inactivity_constraint(provider, include_inactive, as_of),
        geographic_constraint(seeker, provider),
    ]
    .into_iter()
    .flatten()
    .collect();

    GateOutcome {
        passed: failures.is_empty(),
        failures,
    }
}

fn check_size_constraint(seeker: &Seeker, provider: &dyn ProviderProfile) -> Option<String> {
    let overlap = check_size_overlap(seeker.target_amount, provider)?;
    if overlap < MIN_CHECK_SIZE_OVERLAP {
        return Some(format!(
            "Check size mismatch: {:.0}% overlap with the seeker's range (minimum {:.0}%)",
            overlap * 100.0,
            MIN_CHECK_SIZE_OVERLAP * 100.0
        ));
    }
    None
}

fn stage_constraint(seeker: &Seeker, provider: &dyn ProviderProfile) -> Option<String> {
    let distance = stage_distance(seeker.stage.as_deref(), provider.stages())?;
    if distance > MAX_STAGE_DISTANCE {
        return Some(format!(
            "Stage mismatch: provider focus is {} levels from {}",
            distance,
            seeker.stage.as_deref().unwrap_or_default()
        ));
    }
    None
}

#[inline]
fn inactivity_constraint(
    provider: &dyn ProviderProfile,
    include_inactive: bool,
    as_of: DateTime<Utc>,
) -> Option<String> {
    if include_inactive || !provider.is_firm() {
        return None;
    }
    let last_updated = provider.last_updated()?;
    let cutoff = as_of.checked_sub_months(Months::new(INACTIVITY_MONTHS))?;
    if last_updated < cutoff {
        return Some(format!(
            "Inactive provider: profile not updated since {}",
            last_updated.format("%Y-%m-%d")
        ));
    }
    None
}

/// No hard geographic exclusions; geography is scored softly
#[inline]
fn geographic_constraint(_seeker: &Seeker, _provider: &dyn ProviderProfile) -> Option<String> {
    None
}

use serde::{Deserialize, Serialize};

use crate::core::text::normalize;

/// Ordered funding-stage hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    Growth,
    LateStage,
}

impl Stage {
    pub fn level(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::PreSeed => "pre-seed",
            Stage::Seed => "seed",
            Stage::SeriesA => "series-a",
            Stage::SeriesB => "series-b",
            Stage::SeriesC => "series-c",
            Stage::Growth => "growth",
            Stage::LateStage => "late-stage",
        }
    }

    pub fn is_early(self) -> bool {
        matches!(self, Stage::PreSeed | Stage::Seed)
    }
}

/// Alias table, checked in order with normalized substring containment
///
/// `pre seed` precedes `seed` so the more specific alias wins.
const STAGE_ALIASES: &[(&str, Stage)] = &[
    ("pre seed", Stage::PreSeed),
    ("preseed", Stage::PreSeed),
    ("idea stage", Stage::PreSeed),
    ("friends and family", Stage::PreSeed),
    ("seed", Stage::Seed),
    ("series a", Stage::SeriesA),
    ("early stage", Stage::SeriesA),
    ("series b", Stage::SeriesB),
    ("series c", Stage::SeriesC),
    ("series d", Stage::SeriesC),
    ("series e", Stage::SeriesC),
    ("growth", Stage::Growth),
    ("expansion", Stage::Growth),
    ("late stage", Stage::LateStage),
    ("later stage", Stage::LateStage),
    ("pre ipo", Stage::LateStage),
    ("buyout", Stage::LateStage),
    ("mezzanine", Stage::LateStage),
];

/// Map free-text stage onto the hierarchy, `None` when no alias matches
pub fn normalize_stage(raw: &str) -> Option<Stage> {
    let text = normalize(raw);
    if text.is_empty() {
        return None;
    }
    STAGE_ALIASES
        .iter()
        .find(|(alias, _)| text.contains(alias))
        .map(|(_, stage)| *stage)
}

/// Minimum hierarchy distance between the seeker stage and any provider stage
///
/// `None` when there is nothing to compare (seeker stage missing or unmapped,
/// or an empty provider list). Provider entries that do not map contribute
/// distance 0.
pub fn stage_distance(seeker_stage: Option<&str>, provider_stages: &[String]) -> Option<u32> {
    let seeker = seeker_stage.and_then(normalize_stage)?;
    provider_stages
        .iter()
        .map(|raw| match normalize_stage(raw) {
            Some(stage) => stage.level().abs_diff(seeker.level()),
            None => 0,
        })
        .min()
}

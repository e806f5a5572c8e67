//! Weighted-category routine shared by the technology and consumer
//! verticals.
//!
//! A [`VerticalProfile`] is a static table of keyword groups and weights.
//! Each vertical module declares one and delegates to [`score_vertical`].

use crate::core::classifier::DomainTag;
use crate::core::domains::{check_size_points, matched_groups, DomainInput, DomainScore};
use crate::core::text::KeywordText;

/// Named keyword group
pub type KeywordGroup = (&'static str, &'static [&'static str]);

const MISMATCH_SCORE: f64 = 25.0;
const MISMATCH_MULTIPLIER: f64 = 0.5;
const SPECIALIST_SCORE: f64 = 95.0;

/// Category weights, expected to sum to 1.0
#[derive(Debug, Clone, Copy)]
pub struct VerticalWeights {
    pub technology: f64,
    pub development: f64,
    pub market: f64,
    pub check_size: f64,
    pub investor: f64,
}

impl VerticalWeights {
    pub fn sum(&self) -> f64 {
        self.technology + self.development + self.market + self.check_size + self.investor
    }
}

/// Domain-specific nudge applied after the weighted categories
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub points: f64,
    pub reason: String,
}

pub type AdjustmentFn = fn(&DomainInput<'_>, &VerticalProfile) -> Option<Adjustment>;

/// Static scoring table for one vertical
pub struct VerticalProfile {
    pub domain: DomainTag,
    pub technologies: &'static [KeywordGroup],
    /// Ordered from earliest to most mature
    pub development_stages: &'static [KeywordGroup],
    pub markets: &'static [KeywordGroup],
    pub specialist_keywords: &'static [&'static str],
    pub deal_structures: &'static [KeywordGroup],
    /// Overlap ratio below which the pairing is auto-rejected
    pub min_overlap: f64,
    pub weights: VerticalWeights,
    pub deal_bonus: f64,
    pub adjustment: AdjustmentFn,
}

impl VerticalProfile {
    /// Most mature development stage the text mentions
    pub fn development_index(&self, text: &KeywordText) -> Option<usize> {
        matched_groups(text, self.development_stages).into_iter().max()
    }

    pub fn development_indices(&self, text: &KeywordText) -> Vec<usize> {
        matched_groups(text, self.development_stages)
    }

    fn is_specialist(&self, input: &DomainInput<'_>) -> bool {
        input.provider_text.any(self.specialist_keywords)
    }
}

/// Fit over unordered keyword groups
///
/// Shared group → 100, seeker silent → 60, provider silent → 70 for an
/// in-domain provider and 50 otherwise, disjoint → 35.
fn category_fit(
    seeker: &[usize],
    provider: &[usize],
    provider_in_domain: bool,
) -> (f64, Option<usize>) {
    if let Some(shared) = seeker.iter().find(|index| provider.contains(index)) {
        return (100.0, Some(*shared));
    }
    let score = match (seeker.is_empty(), provider.is_empty()) {
        (true, _) => 60.0,
        (false, true) if provider_in_domain => 70.0,
        (false, true) => 50.0,
        (false, false) => 35.0,
    };
    (score, None)
}

/// Fit over the ordered development ladder
fn development_fit(seeker: Option<usize>, provider: &[usize]) -> f64 {
    let Some(seeker) = seeker else {
        return 60.0;
    };
    match provider.iter().map(|index| index.abs_diff(seeker)).min() {
        None => 60.0,
        Some(0) => 100.0,
        Some(1) => 75.0,
        Some(2) => 45.0,
        Some(_) => 20.0,
    }
}

/// Score a seeker against a provider with a vertical's table
pub fn score_vertical(input: &DomainInput<'_>, profile: &VerticalProfile) -> DomainScore {
    if let Some(overlap) = input.overlap.filter(|ratio| *ratio < profile.min_overlap) {
        return DomainScore::auto_reject(
            profile.domain,
            format!(
                "Check size covers {:.0}% of the raise; {} requires {:.0}%",
                overlap * 100.0,
                profile.domain,
                profile.min_overlap * 100.0
            ),
        );
    }
    if input.is_domain_mismatch() {
        return input.mismatch(MISMATCH_SCORE, MISMATCH_MULTIPLIER);
    }

    let mut reasons = Vec::new();
    let specialist = profile.is_specialist(input);
    let in_domain = specialist || input.provider_domain == profile.domain;

    let (technology, shared_tech) = category_fit(
        &matched_groups(&input.seeker_text, profile.technologies),
        &matched_groups(&input.provider_text, profile.technologies),
        in_domain,
    );
    if let Some(index) = shared_tech {
        reasons.push(format!("Shared focus on {}", profile.technologies[index].0));
    }

    let seeker_stage = profile.development_index(&input.seeker_text);
    let development =
        development_fit(seeker_stage, &profile.development_indices(&input.provider_text));
    if let (Some(index), true) = (seeker_stage, development >= 100.0) {
        reasons.push(format!(
            "Invests at the {} stage",
            profile.development_stages[index].0
        ));
    }

    let (market, shared_market) = category_fit(
        &matched_groups(&input.seeker_text, profile.markets),
        &matched_groups(&input.provider_text, profile.markets),
        in_domain,
    );
    if let Some(index) = shared_market {
        reasons.push(format!("Targets the {} market", profile.markets[index].0));
    }

    let investor = if specialist {
        reasons.push(format!("{} specialist investor", profile.domain));
        SPECIALIST_SCORE
    } else {
        input.breakdown.investor_type_logic
    };

    let weights = &profile.weights;
    let mut score = technology * weights.technology
        + development * weights.development
        + market * weights.market
        + check_size_points(input.overlap) * weights.check_size
        + investor * weights.investor;

    let seeker_deals = matched_groups(&input.seeker_text, profile.deal_structures);
    let provider_deals = matched_groups(&input.provider_text, profile.deal_structures);
    if let Some(shared) = seeker_deals.iter().find(|index| provider_deals.contains(index)) {
        score += profile.deal_bonus;
        reasons.push(format!("Offers {}", profile.deal_structures[*shared].0));
    }

    if let Some(adjustment) = (profile.adjustment)(input, profile) {
        score += adjustment.points;
        reasons.push(adjustment.reason);
    }

    DomainScore::new(profile.domain, score, 1.0, reasons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_fit_cases() {
        assert_eq!(category_fit(&[1, 2], &[2], false), (100.0, Some(2)));
        assert_eq!(category_fit(&[], &[2], false).0, 60.0);
        assert_eq!(category_fit(&[1], &[], true).0, 70.0);
        assert_eq!(category_fit(&[1], &[], false).0, 50.0);
        assert_eq!(category_fit(&[1], &[3], true).0, 35.0);
    }

    #[test]
    fn test_development_fit_ladder() {
        assert_eq!(development_fit(Some(2), &[2, 4]), 100.0);
        assert_eq!(development_fit(Some(2), &[3]), 75.0);
        assert_eq!(development_fit(Some(0), &[2]), 45.0);
        assert_eq!(development_fit(Some(0), &[5]), 20.0);
        assert_eq!(development_fit(None, &[1]), 60.0);
        assert_eq!(development_fit(Some(1), &[]), 60.0);
    }
}

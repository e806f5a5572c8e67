use regex::Regex;
use std::sync::LazyLock;

use crate::models::ProviderProfile;

/// One amount token: digits with optional separators, an optional magnitude
/// suffix and an optional trailing `+`
static AMOUNT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+(?:[.,]\d+)*)\s*(?:(thousand|million|billion|bn|mm|k|m|b)\b)?(?:\s*(\+))?",
    )
    .ok()
});

/// Unsuffixed numbers at or above this are read as absolute amounts
const ABSOLUTE_AMOUNT_FLOOR: f64 = 1_000.0;

/// Ceiling applied to open-ended ranges such as `"$2M+"` or a bare minimum
const OPEN_ENDED_FACTOR: f64 = 3.0;

/// Closed, validated check-size interval in currency units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckSizeRange {
    pub min: f64,
    pub max: f64,
}

impl CheckSizeRange {
    /// Build a range, swapping inverted bounds
    ///
    /// Returns `None` for non-finite values, negative bounds, or a zero upper
    /// bound, so implausible data is treated as absent.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        if min < 0.0 || max <= 0.0 {
            return None;
        }
        Some(Self { min, max })
    }

    /// Single stated amount expanded to ±50%
    pub fn around(amount: f64) -> Option<Self> {
        Self::new(amount * 0.5, amount * 1.5)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Overlap length divided by the shorter range's width, in [0, 1]
    ///
    /// A zero-width range lying inside the other counts as fully covered.
    pub fn overlap_ratio(&self, other: &CheckSizeRange) -> f64 {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        if hi < lo {
            return 0.0;
        }
        let shorter = self.width().min(other.width());
        if shorter <= 0.0 {
            return 1.0;
        }
        ((hi - lo) / shorter).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct AmountToken {
    value: f64,
    multiplier: Option<f64>,
    open_ended: bool,
}

fn suffix_multiplier(suffix: &str) -> f64 {
    match suffix.to_ascii_lowercase().as_str() {
        "k" | "thousand" => 1e3,
        "m" | "mm" | "million" => 1e6,
        "b" | "bn" | "billion" => 1e9,
        _ => 1.0,
    }
}

fn amount_tokens(text: &str) -> Vec<AmountToken> {
    let Some(pattern) = AMOUNT_PATTERN.as_ref() else {
        return Vec::new();
    };
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let digits = caps.get(1)?.as_str().replace(',', "");
            let value: f64 = digits.parse().ok()?;
            Some(AmountToken {
                value,
                multiplier: caps.get(2).map(|m| suffix_multiplier(m.as_str())),
                open_ended: caps.get(3).is_some(),
            })
        })
        .collect()
}

/// Resolve a bound that carries no suffix against its partner's suffix
///
/// Small unsuffixed numbers borrow the partner's magnitude when that keeps the
/// range ordered, otherwise one magnitude lower (`"500-2M"` reads as 500K).
fn resolve_unsuffixed(
    value: f64,
    partner_multiplier: f64,
    keeps_order: impl Fn(f64) -> bool,
) -> f64 {
    if value >= ABSOLUTE_AMOUNT_FLOOR {
        return value;
    }
    let borrowed = value * partner_multiplier;
    if keeps_order(borrowed) {
        return borrowed;
    }
    if partner_multiplier >= 1e6 {
        let stepped = value * partner_multiplier / 1e3;
        if keeps_order(stepped) {
            return stepped;
        }
    }
    value
}

/// Parse free-text check-size statements such as `"$500K-$2M"` or `"€1M"`
///
/// Unparsable text yields `None` and is treated as missing data.
pub fn parse_check_size(text: &str) -> Option<CheckSizeRange> {
    let tokens = amount_tokens(text);
    let lowered = text.to_lowercase();

    match tokens.as_slice() {
        [] => None,
        [single] => {
            let amount = single.value * single.multiplier.unwrap_or(1.0);
            let capped = ["up to", "under", "below", "max", "less than"]
                .iter()
                .any(|marker| lowered.contains(marker));
            let floored = single.open_ended
                || ["at least", "minimum", "from", "over", "above"]
                    .iter()
                    .any(|marker| lowered.contains(marker));
            if capped {
                CheckSizeRange::new(0.0, amount)
            } else if floored {
                CheckSizeRange::new(amount, amount * OPEN_ENDED_FACTOR)
            } else {
                CheckSizeRange::around(amount)
            }
        }
        [lower, upper, ..] => {
            let (low, high) = match (lower.multiplier, upper.multiplier) {
                (None, Some(mu)) => {
                    let high = upper.value * mu;
                    (resolve_unsuffixed(lower.value, mu, |v| v <= high), high)
                }
                (Some(ml), None) => {
                    let low = lower.value * ml;
                    (low, resolve_unsuffixed(upper.value, ml, |v| v >= low))
                }
                (ml, mu) => (
                    lower.value * ml.unwrap_or(1.0),
                    upper.value * mu.unwrap_or(1.0),
                ),
            };
            CheckSizeRange::new(low, high)
        }
    }
}

/// Seeker's acceptable range: 50% to 150% of the target raise
pub fn seeker_range(target: Option<f64>) -> Option<CheckSizeRange> {
    target
        .filter(|t| t.is_finite() && *t > 0.0)
        .and_then(|t| CheckSizeRange::new(t * 0.5, t * 1.5))
}

/// Provider's stated range: numeric bounds first, then the free-text field
pub fn provider_range(provider: &dyn ProviderProfile) -> Option<CheckSizeRange> {
    let numeric = match (provider.check_size_min(), provider.check_size_max()) {
        (Some(min), Some(max)) => CheckSizeRange::new(min, max),
        (Some(min), None) => CheckSizeRange::new(min, min * OPEN_ENDED_FACTOR),
        (None, Some(max)) => CheckSizeRange::new(0.0, max),
        (None, None) => None,
    };
    numeric.or_else(|| provider.check_size_text().and_then(parse_check_size))
}

/// Overlap between seeker and provider ranges
///
/// `None` when the seeker states no target; `Some(0.0)` when the provider
/// publishes no usable check-size data.
pub fn check_size_overlap(target: Option<f64>, provider: &dyn ProviderProfile) -> Option<f64> {
    let seeker = seeker_range(target)?;
    Some(
        provider_range(provider)
            .map(|range| seeker.overlap_ratio(&range))
            .unwrap_or(0.0),
    )
}

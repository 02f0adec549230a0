//! Credit-gated upgrade catalog.
//!
//! Three purchasable features and the focus-duration options. Only the Deep
//! Focus tier actually gates anything (the 25m/60m durations); Zen Audio and
//! Midnight Theme are declarative entries a renderer can show as locked or
//! unlocked.

use serde::Serialize;

/// A purchasable feature tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub icon: &'static str,
}

/// Upgrade tiers in ascending cost order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        id: "deep-focus",
        title: "Deep Focus Mode",
        description: "Unlock 25m & 60m Deep Focus sessions.",
        cost: 500,
        icon: "\u{23f1}\u{fe0f}",
    },
    Feature {
        id: "zen-audio",
        title: "Zen Audio",
        description: "Ambient background soundscapes while you code.",
        cost: 1000,
        icon: "\u{1f3a7}",
    },
    Feature {
        id: "dark-mode",
        title: "Midnight Theme",
        description: "Extra polished visual themes & layouts.",
        cost: 1500,
        icon: "\u{1f319}",
    },
];

/// Credits required for the Deep Focus duration unlock.
pub const DEEP_FOCUS_COST: u64 = 500;

/// A selectable sprint duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationOption {
    pub label: &'static str,
    pub seconds: u64,
    /// Effective lock state for the given credit balance.
    pub locked: bool,
}

const DURATION_CHOICES: [(&str, u64, bool); 3] = [
    ("10m", 600, false),
    ("25m", 1500, true),
    ("60m", 3600, true),
];

pub fn has_deep_focus(credits: u64) -> bool {
    credits >= DEEP_FOCUS_COST
}

/// The duration options with their lock state resolved against `credits`.
pub fn duration_options(credits: u64) -> Vec<DurationOption> {
    let unlocked = has_deep_focus(credits);
    DURATION_CHOICES
        .iter()
        .map(|&(label, seconds, gated)| DurationOption {
            label,
            seconds,
            locked: gated && !unlocked,
        })
        .collect()
}

/// Whether `seconds` is a known duration the given balance may select.
pub fn is_duration_unlocked(credits: u64, seconds: u64) -> bool {
    duration_options(credits)
        .iter()
        .any(|opt| opt.seconds == seconds && !opt.locked)
}

/// Credits still needed before the 25m/60m durations unlock.
pub fn credits_to_deep_focus(credits: u64) -> u64 {
    DEEP_FOCUS_COST.saturating_sub(credits)
}

/// The cheapest feature not yet unlocked.
pub fn next_unlock(credits: u64) -> Option<&'static Feature> {
    FEATURES.iter().find(|f| f.cost > credits)
}

/// Progress toward the next tier, 0.0 .. 100.0, with a 5% visual floor
/// between tiers; 100 once everything is unlocked.
pub fn progress_percent(credits: u64) -> f64 {
    let Some(next) = next_unlock(credits) else {
        return 100.0;
    };
    let prev_cap = FEATURES
        .iter()
        .filter(|f| f.cost <= credits)
        .map(|f| f.cost)
        .max()
        .unwrap_or(0);
    let span = (next.cost - prev_cap) as f64;
    (((credits - prev_cap) as f64 / span) * 100.0).max(5.0)
}

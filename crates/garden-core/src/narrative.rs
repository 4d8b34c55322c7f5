//! The human-readable story told about the lawn.

use crate::health::HealthState;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OVERGROWN_LINE: &str = "Your repo is overgrown. Consider mowing (aka triage).";
pub const BARREN_LINE: &str = "No seeds in sight. The lawn is barren.";

/// Weeds may outnumber seeds by this much before the lawn counts as overgrown.
pub const OVERGROWN_MARGIN: u32 = 3;

const FERTILIZER: &[&str] = &[
    "Needs more sunlight (a.k.a. documentation)",
    "Consider composting legacy code",
    "Water with tests twice daily",
    "Beware of aphids: flaky specs",
    "Mulch with design discussions",
];

const GROWTH: &[&str] = &[
    "photosynthesis throughput nominal",
    "rooting depth increasing",
    "waiting for bees (reviewers)",
    "may die in review drought",
];

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

/// Summary first, then warnings, then the recent-event sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub lines: Vec<String>,
}

impl Narrative {
    pub fn summary(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

pub fn build(health: &HealthState, recent: Option<&str>) -> Narrative {
    let weeds = health.weeds.count;
    let seeds = health.seeds.count;

    let mut lines = vec![format!(
        "Lawn Health Index {}/100, lushness {}%. Seeds: {}, Weeds: {}.",
        health.lawn_health_index, health.lushness_percent, seeds, weeds
    )];
    if weeds > seeds.saturating_add(OVERGROWN_MARGIN) {
        lines.push(OVERGROWN_LINE.to_string());
    }
    if seeds == 0 {
        lines.push(BARREN_LINE.to_string());
    }
    if let Some(recent) = recent.filter(|r| !r.is_empty()) {
        lines.push(recent.to_string());
    }
    Narrative { lines }
}

// ---------------------------------------------------------------------------
// Recent-event sentence
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sprout {
    Seed,
    Weed,
}

/// One whimsical sentence about what just landed in the garden.
pub fn recent_event<R: Rng + ?Sized>(kind: Sprout, id: Option<&str>, rng: &mut R) -> String {
    let prefix = match (kind, id) {
        (Sprout::Seed, Some(id)) => format!("🌱 A new seed has been planted: PR #{id}"),
        (Sprout::Seed, None) => "🌱 A new seed has been planted".to_string(),
        (Sprout::Weed, Some(id)) => format!("🌾 A new weed has appeared: Issue #{id}"),
        (Sprout::Weed, None) => "🌾 A new weed has appeared".to_string(),
    };
    let fertilizer = FERTILIZER.choose(rng).copied().unwrap_or_default();
    // Five growth notes; index 0 is the probability one.
    let growth = match rng.gen_range(0..=GROWTH.len()) {
        0 => format!("sprouting probability: {}%", rng.gen_range(5..=95)),
        n => GROWTH[n - 1].to_string(),
    };
    format!("{prefix}. {fertilizer}; {growth}.")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

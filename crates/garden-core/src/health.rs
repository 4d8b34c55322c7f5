use crate::error::Result;
use crate::event::EventKey;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const MAX_PERCENT: u32 = 100;

/// Probability that a closed PR counts as merged rather than declined.
pub const MERGE_CHANCE: f64 = 0.6;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weeds {
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seeds {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub sprouting: u32,
    #[serde(default)]
    pub failed: u32,
}

/// How a closed PR affects the lawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrOutcome {
    Merged,
    Declined,
}

impl PrOutcome {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(MERGE_CHANCE) {
            PrOutcome::Merged
        } else {
            PrOutcome::Declined
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrOutcome::Merged => "merged",
            PrOutcome::Declined => "declined",
        }
    }
}

impl fmt::Display for PrOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HealthState
// ---------------------------------------------------------------------------

/// The persisted lawn record, stored as `lawn-health.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthState {
    #[serde(default = "default_health_index")]
    pub lawn_health_index: u32,
    #[serde(default = "default_lushness")]
    pub lushness_percent: u32,
    #[serde(default)]
    pub weeds: Weeds,
    #[serde(default)]
    pub seeds: Seeds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Keys we don't own survive a rewrite untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_health_index() -> u32 {
    70
}

fn default_lushness() -> u32 {
    60
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            lawn_health_index: default_health_index(),
            lushness_percent: default_lushness(),
            weeds: Weeds::default(),
            seeds: Seeds::default(),
            last_updated: None,
            extra: serde_json::Map::new(),
        }
    }
}

impl HealthState {
    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Load the state file; a missing file is a fresh lawn.
    pub fn load(path: &Path) -> Result<Self> {
        let Some(data) = crate::io::read_if_exists(path)? else {
            tracing::debug!(path = %path.display(), "no lawn state yet, starting fresh");
            return Ok(Self::default());
        };
        let mut state: HealthState = serde_json::from_str(&data)?;
        state.normalize();
        Ok(state)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut data = serde_json::to_string_pretty(self)?;
        data.push('\n');
        crate::io::atomic_write(path, data.as_bytes())
    }

    /// Clamp percentages a human may have hand-edited out of range.
    pub fn normalize(&mut self) {
        if self.lawn_health_index > MAX_PERCENT || self.lushness_percent > MAX_PERCENT {
            tracing::warn!(
                index = self.lawn_health_index,
                lushness = self.lushness_percent,
                "lawn state out of range, clamping"
            );
        }
        self.lawn_health_index = self.lawn_health_index.min(MAX_PERCENT);
        self.lushness_percent = self.lushness_percent.min(MAX_PERCENT);
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Apply the update rule for `key`. Returns the drawn outcome for
    /// `pr-closed`, `None` for every other event.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        key: EventKey,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<PrOutcome> {
        let mut outcome = None;
        match key {
            EventKey::IssueOpened => {
                self.weeds.count = self.weeds.count.saturating_add(1);
                self.lushness_percent = nudge(self.lushness_percent, rng.gen_range(-5..=-1));
                self.lawn_health_index = nudge(self.lawn_health_index, rng.gen_range(-4..=-1));
            }
            EventKey::IssueClosed => {
                self.weeds.count = self.weeds.count.saturating_sub(1);
                self.lushness_percent = nudge(self.lushness_percent, rng.gen_range(1..=4));
                self.lawn_health_index = nudge(self.lawn_health_index, rng.gen_range(1..=3));
            }
            EventKey::PrOpened => {
                self.seeds.count = self.seeds.count.saturating_add(1);
                self.seeds.sprouting = self.seeds.sprouting.saturating_add(1);
                self.lawn_health_index = nudge(self.lawn_health_index, rng.gen_range(0..=2));
            }
            EventKey::PrClosed => {
                let drawn = PrOutcome::draw(rng);
                self.apply_pr_outcome(drawn, rng);
                outcome = Some(drawn);
            }
            EventKey::Schedule | EventKey::Push | EventKey::Manual => {
                self.lawn_health_index = nudge(self.lawn_health_index, rng.gen_range(-1..=1));
            }
        }
        self.last_updated = Some(now);
        tracing::debug!(
            event = %key,
            index = self.lawn_health_index,
            lushness = self.lushness_percent,
            weeds = self.weeds.count,
            seeds = self.seeds.count,
            "lawn updated"
        );
        outcome
    }

    /// The pr-closed rule with the merge draw already made.
    pub fn apply_pr_outcome<R: Rng + ?Sized>(&mut self, outcome: PrOutcome, rng: &mut R) {
        match outcome {
            PrOutcome::Merged => {
                self.lawn_health_index = nudge(self.lawn_health_index, rng.gen_range(2..=6));
                self.lushness_percent = nudge(self.lushness_percent, rng.gen_range(2..=5));
                self.seeds.sprouting = self.seeds.sprouting.saturating_sub(1);
            }
            PrOutcome::Declined => {
                self.seeds.failed = self.seeds.failed.saturating_add(1);
                self.seeds.sprouting = self.seeds.sprouting.saturating_sub(1);
                self.lawn_health_index = nudge(self.lawn_health_index, rng.gen_range(-3..=0));
            }
        }
    }
}

/// Shift a percentage by `delta`, keeping it in [0, 100].
fn nudge(value: u32, delta: i64) -> u32 {
    (i64::from(value) + delta).clamp(0, i64::from(MAX_PERCENT)) as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

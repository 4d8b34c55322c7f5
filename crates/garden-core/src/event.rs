use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";
pub const REF_NAME_VAR: &str = "GITHUB_REF_NAME";

pub const DEFAULT_EVENT: &str = "manual";
pub const DEFAULT_REF: &str = "local";

// ---------------------------------------------------------------------------
// EventKey
// ---------------------------------------------------------------------------

/// The normalized category that selects a health update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKey {
    IssueOpened,
    IssueClosed,
    PrOpened,
    PrClosed,
    Schedule,
    Push,
    Manual,
}

impl EventKey {
    pub fn all() -> &'static [EventKey] {
        &[
            EventKey::IssueOpened,
            EventKey::IssueClosed,
            EventKey::PrOpened,
            EventKey::PrClosed,
            EventKey::Schedule,
            EventKey::Push,
            EventKey::Manual,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKey::IssueOpened => "issue-opened",
            EventKey::IssueClosed => "issue-closed",
            EventKey::PrOpened => "pr-opened",
            EventKey::PrClosed => "pr-closed",
            EventKey::Schedule => "schedule",
            EventKey::Push => "push",
            EventKey::Manual => "manual",
        }
    }

    /// Map a raw event name onto a rule.
    ///
    /// Canonical keys pass through untouched. GitHub's `issues` and
    /// `pull_request` events carry no sub-action here, so both collapse to
    /// their "opened" variants. Anything unrecognized is a manual run.
    pub fn from_event_name(name: &str) -> EventKey {
        if let Ok(key) = name.parse() {
            return key;
        }
        match name {
            "issues" => EventKey::IssueOpened,
            "pull_request" => EventKey::PrOpened,
            _ => EventKey::Manual,
        }
    }

    pub fn is_pr(self) -> bool {
        matches!(self, EventKey::PrOpened | EventKey::PrClosed)
    }

    pub fn is_issue(self) -> bool {
        matches!(self, EventKey::IssueOpened | EventKey::IssueClosed)
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown event key: {s}"))
    }
}

// ---------------------------------------------------------------------------
// EventContext
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventContext {
    pub event: String,
    pub ref_name: String,
    pub id: Option<String>,
}

static REF_ID_RE: OnceLock<Regex> = OnceLock::new();

fn ref_id_re() -> &'static Regex {
    REF_ID_RE.get_or_init(|| Regex::new(r"(pull|PR)[^0-9]*([0-9]+)").unwrap())
}

/// Pull a PR/issue number out of refs like `refs/pull/123/merge` or `PR-123`.
pub fn extract_id(ref_name: &str) -> Option<String> {
    ref_id_re()
        .captures(ref_name)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string())
}

impl EventContext {
    /// Build a context from optional raw inputs. Absent or empty values fall
    /// back to a manual run on a local ref.
    pub fn resolve(event: Option<&str>, ref_name: Option<&str>) -> Self {
        let event = non_empty(event).unwrap_or(DEFAULT_EVENT).to_string();
        let ref_name = non_empty(ref_name).unwrap_or(DEFAULT_REF).to_string();
        let id = extract_id(&ref_name);
        Self {
            event,
            ref_name,
            id,
        }
    }

    pub fn from_env() -> Self {
        let event = std::env::var(EVENT_NAME_VAR).ok();
        let ref_name = std::env::var(REF_NAME_VAR).ok();
        Self::resolve(event.as_deref(), ref_name.as_deref())
    }

    pub fn key(&self) -> EventKey {
        EventKey::from_event_name(&self.event)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

pub mod markdown;
pub mod panel;
pub mod svg;

use crate::error::{GardenError, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Canvas layout
// ---------------------------------------------------------------------------

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 320;
/// Where the sky ends and the lawn begins.
pub const HORIZON: u32 = 200;

pub const PANEL_X: u32 = 160;
pub const PANEL_Y: u32 = 20;
pub const PANEL_WIDTH: u32 = 600;
pub const PANEL_HEIGHT: u32 = 160;
pub const PANEL_PADDING: u32 = 20;
pub const FONT_SIZE: u32 = 16;
pub const LINE_HEIGHT: u32 = 24;

/// Upper bound on flower and weed markers, whatever the counters say.
pub const MAX_MARKERS: u32 = 12;

// ---------------------------------------------------------------------------
// TimeOfDay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    /// Daytime runs from 06:00 through the 18:00 hour, UTC.
    pub fn from_hour(hour: u32) -> Result<Self> {
        match hour {
            6..=18 => Ok(TimeOfDay::Day),
            0..=23 => Ok(TimeOfDay::Night),
            _ => Err(GardenError::InvalidHour(hour)),
        }
    }
}

//! Player intents sampled by the movement scheduler.
//!
//! Intents are queued and consumed one per eligible player sub-tick, so
//! input arriving faster than the player cadence is never lost mid-frame.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// One sampled input: an optional movement direction plus the fire button.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerIntent {
    /// `None` means stand still.
    pub direction: Option<Direction>,
    pub firing: bool,
}

impl PlayerIntent {
    /// Movement without firing.
    pub fn movement(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            firing: false,
        }
    }

    /// Fire without moving.
    pub fn fire() -> Self {
        Self {
            direction: None,
            firing: true,
        }
    }
}

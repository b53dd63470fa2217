//! Feedback events drained into each tick's snapshot.
//!
//! Spawn and collision side effects surface here instead of through
//! callbacks; the engine collects events during a tick and hands the
//! whole batch to the renderer in the snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::TargetKind;
use crate::types::Cell;

/// One-shot feedback events for the frontend (sound, effects, log).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A bullet destroyed something.
    TargetDestroyed {
        target: TargetKind,
        cell: Cell,
        points: u32,
    },
    /// A flea dropped onto the field.
    FleaSpawned { column: i32 },
    /// A spider entered the player region.
    SpiderSpawned { cell: Cell },
    /// A snail entered the field.
    SnailSpawned { row: i32 },
    /// The lead chain reached a bottom corner and a new wave entered.
    CentipedeRegenerated,
    /// A chain broke apart around destroyed segments.
    CentipedeSplit { pieces: usize },
}

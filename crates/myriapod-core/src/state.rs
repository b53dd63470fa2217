//! Per-tick snapshot — the complete drawable state handed to the renderer.
//!
//! The core never draws; it computes what to draw and where. Sprite
//! animation frames are selected from the snapshot's `time.anim`.

use serde::{Deserialize, Serialize};

use crate::enums::{SpriteColor, SpriteKind, TileState};
use crate::events::GameEvent;
use crate::types::{Cell, TickClock};

/// Complete drawable state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: TickClock,
    pub score: ScoreView,
    /// Occupied board tiles (mushrooms and poisoned mushrooms).
    pub tiles: Vec<TileView>,
    /// One record per drawable entity cell.
    pub sprites: Vec<SpriteView>,
    /// Feedback events raised during this tick.
    pub events: Vec<GameEvent>,
}

/// An occupied board tile to draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TileView {
    pub cell: Cell,
    pub state: TileState,
}

/// One drawable entity cell. `text` is set only for score markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteView {
    pub cell: Cell,
    pub sprite: SpriteKind,
    pub color: Option<SpriteColor>,
    pub text: Option<String>,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub total: u32,
    pub mushrooms_destroyed: u32,
    pub fleas_killed: u32,
    pub spiders_killed: u32,
    pub snails_killed: u32,
    pub segments_destroyed: u32,
}

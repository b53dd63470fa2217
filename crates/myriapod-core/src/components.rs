//! Entity records owned by the engine's entity set.
//!
//! Records are plain data structs; movement and collision rules live in the
//! engine's systems.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, Lifecycle};
use crate::types::Cell;

/// The player ship, confined to the bottom band of the board.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player {
    pub cell: Cell,
}

/// A fired projectile travelling one cell up per tick until it hits
/// something or leaves the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub cell: Cell,
    pub state: Lifecycle,
}

/// One link of a centipede chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub cell: Cell,
    pub state: Lifecycle,
}

/// An ordered chain of segments moving in file.
///
/// `segments[0]` is the head. Followers step into the cell their leader
/// just vacated, so the chain snakes through the mushroom field intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Centipede {
    pub segments: Vec<Segment>,
    /// Current horizontal travel direction (`Left` or `Right`).
    pub horizontal: Direction,
    /// Row-change direction taken when travel is blocked: `Down` until the
    /// chain reaches the last row, then bouncing within the band.
    pub vertical: Direction,
    /// Top row of the bounce band (top of the player region).
    pub min_y: i32,
    /// Bottom row of the bounce band (last playable row).
    pub max_y: i32,
    /// Left edge of horizontal travel.
    pub min_x: i32,
    /// Right edge of horizontal travel.
    pub max_x: i32,
    /// The chain steps once every this many ticks.
    pub frames_per_move: u32,
}

impl Centipede {
    /// The lead segment, if any segment survives.
    pub fn head(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// True once every segment has been destroyed.
    pub fn is_dead(&self) -> bool {
        self.segments.iter().all(|s| s.state == Lifecycle::Dead)
    }
}

/// Drops from the top of the board, seeding mushrooms behind it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flea {
    pub cell: Cell,
}

/// Bounces diagonally through the player region, two cells wide, clearing
/// mushrooms as it goes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spider {
    /// Left cell of the two-cell body.
    pub cell: Cell,
    pub horizontal: Direction,
    pub vertical: Direction,
    /// Top row of the bounce band.
    pub min_y: i32,
    /// Bottom row of the bounce band.
    pub max_y: i32,
}

impl Spider {
    /// Both cells of the two-wide body.
    pub fn cells(&self) -> [Cell; 2] {
        [self.cell, self.cell + Cell::new(1, 0)]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells().contains(&cell)
    }
}

/// Crawls across the board left to right, poisoning mushrooms it touches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Snail {
    /// Left cell of the two-cell body.
    pub cell: Cell,
}

impl Snail {
    /// Both cells of the two-wide body.
    pub fn cells(&self) -> [Cell; 2] {
        [self.cell, self.cell + Cell::new(1, 0)]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells().contains(&cell)
    }
}

/// Transient on-screen score popup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreMarker {
    pub cell: Cell,
    /// Points awarded, shown as text.
    pub value: u32,
    /// Display ticks left; `Dead` once this reaches zero.
    pub remaining: u32,
    pub state: Lifecycle,
}

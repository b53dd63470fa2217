//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Cell;

/// Entity lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Alive,
    /// Terminal animation playing; the entity still occupies its cell.
    Dying,
    /// Removed at the start of the next sweep for its type.
    Dead,
}

/// A cardinal movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit cell offset for this direction. Row 0 is the top of the board,
    /// so `Down` increases `y`.
    pub fn delta(self) -> Cell {
        match self {
            Direction::Up => Cell::new(0, -1),
            Direction::Down => Cell::new(0, 1),
            Direction::Left => Cell::new(-1, 0),
            Direction::Right => Cell::new(1, 0),
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Contents of a single board tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Empty,
    Mushroom,
    /// Poisoned variant: scores higher and marks the snail's trail.
    PoisonMushroom,
}

/// What a bullet destroyed, for scoring and feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Mushroom,
    PoisonMushroom,
    Flea,
    Spider,
    Snail,
    CentipedeSegment,
}

/// Sprite selector for the rendering handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    Bullet,
    CentipedeHead,
    CentipedeBody,
    Flea,
    Spider,
    Snail,
    /// Transient score popup; the view carries the text to draw.
    ScoreText,
}

/// Optional tint for sprites and score text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteColor {
    White,
    Yellow,
    Green,
    Red,
    Magenta,
    Cyan,
}

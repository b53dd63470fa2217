//! Fundamental grid and timing types.

use serde::{Deserialize, Serialize};

/// A board cell position. `x` is the column (0 = left edge), `y` the row
/// (0 = top of the board).
pub type Cell = glam::IVec2;

/// Shorthand constructor for a cell.
pub fn cell(x: i32, y: i32) -> Cell {
    Cell::new(x, y)
}

/// Simulation clock: the monotonic tick counter plus the cyclic animation
/// sub-tick.
///
/// `anim` selects sprite animation frames and gates throttled movement
/// (player cadence, centipede steps, spawn checks). It never affects
/// collision results or movement legality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickClock {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Animation sub-tick, cycling `0..anim_cycle`.
    pub anim: u32,
}

impl TickClock {
    /// Advance by one tick, wrapping the animation counter.
    pub fn advance(&mut self, anim_cycle: u32) {
        self.tick += 1;
        self.anim = (self.anim + 1) % anim_cycle;
    }
}

//! The entity set: typed collections owned by the engine for the lifetime
//! of the session.
//!
//! There is no ECS here. The simulation sweeps each entity type exactly
//! once per tick in a fixed order, and the centipede chain needs exact
//! leader-follower propagation, so plain typed collections with match
//! dispatch are the better fit.

use myriapod_core::components::{Bullet, Centipede, Flea, Player, ScoreMarker, Snail, Spider};
use myriapod_core::enums::Lifecycle;
use myriapod_core::types::Cell;

/// Every live entity in the simulation.
///
/// Flea, spider, and snail are singletons: at most one of each exists at
/// a time, and "absent" is their only terminal state.
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub centipedes: Vec<Centipede>,
    pub flea: Option<Flea>,
    pub spider: Option<Spider>,
    pub snail: Option<Snail>,
    pub markers: Vec<ScoreMarker>,
}

impl EntitySet {
    /// Fire a bullet from `cell`, bounded by the simultaneous-bullet cap.
    /// Declines silently at the cap; firing itself never scores.
    pub fn fire(&mut self, cell: Cell, max_bullets: usize) -> bool {
        if self.bullets.len() >= max_bullets {
            return false;
        }
        self.bullets.push(Bullet {
            cell,
            state: Lifecycle::Alive,
        });
        true
    }

    /// Alive segments across all chains.
    pub fn live_segments(&self) -> usize {
        self.centipedes
            .iter()
            .flat_map(|c| c.segments.iter())
            .filter(|s| s.state == Lifecycle::Alive)
            .count()
    }
}

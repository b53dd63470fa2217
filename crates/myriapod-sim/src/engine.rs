//! Game engine — the core of the simulation.
//!
//! `GameEngine` owns the board and entity set, consumes queued player
//! intents, runs the per-tick systems in fixed order, and produces a
//! `GameSnapshot` after every tick. All randomness flows through one
//! seeded RNG stream: same seed, same simulation.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use myriapod_board::GameBoard;
use myriapod_core::commands::PlayerIntent;
use myriapod_core::config::{ConfigError, GameConfig};
use myriapod_core::events::GameEvent;
use myriapod_core::state::GameSnapshot;
use myriapod_core::types::TickClock;

use crate::entities::EntitySet;
use crate::systems;
use crate::systems::scoring::ScoreState;
use crate::world_setup;

/// The simulation engine. Owns all per-session state.
pub struct GameEngine {
    config: GameConfig,
    board: GameBoard,
    entities: EntitySet,
    clock: TickClock,
    rng: ChaCha8Rng,
    score: ScoreState,
    intents: VecDeque<PlayerIntent>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new engine for one session. Inconsistent configuration is
    /// rejected here; per-tick code never re-validates.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = world_setup::setup_board(&config, &mut rng);
        let entities = world_setup::setup_entities(&config);

        Ok(Self {
            config,
            board,
            entities,
            clock: TickClock::default(),
            rng,
            score: ScoreState::default(),
            intents: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player intent for the next eligible player sub-tick.
    pub fn queue_intent(&mut self, intent: PlayerIntent) {
        self.intents.push_back(intent);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    ///
    /// Movement of every entity type completes before spawn decisions are
    /// evaluated, so spawns always see post-movement occupancy. Spawn
    /// checks run only on sub-tick 0 of each frame.
    pub fn tick(&mut self) -> GameSnapshot {
        systems::movement::run(
            &mut self.entities,
            &mut self.board,
            &self.config,
            &mut self.rng,
            self.clock.anim,
            &mut self.intents,
            &mut self.score,
            &mut self.events,
        );

        if self.clock.anim == 0 {
            systems::spawner::run(
                &mut self.entities,
                &self.board,
                &self.config,
                &mut self.rng,
                &mut self.events,
            );
        }

        let events = std::mem::take(&mut self.events);
        let snapshot = systems::snapshot::build_snapshot(
            &self.entities,
            &self.board,
            &self.score,
            &self.clock,
            events,
        );

        self.clock.advance(self.config.anim_cycle);
        snapshot
    }

    /// Get the session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the current clock.
    pub fn clock(&self) -> TickClock {
        self.clock
    }

    /// Get a read-only reference to the board.
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Get a read-only reference to the entity set.
    pub fn entities(&self) -> &EntitySet {
        &self.entities
    }

    /// Get the running score.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Mutate the entity set directly (for tests that stage scenarios).
    #[cfg(test)]
    pub(crate) fn entities_mut(&mut self) -> &mut EntitySet {
        &mut self.entities
    }
}

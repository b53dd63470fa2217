//! Session configuration, validated once at engine construction.
//!
//! Every field has a default mirroring the classic tuning in `constants`,
//! so a config loaded from JSON only needs to name what it overrides.
//! Per-tick code never re-validates: an inconsistent config (a zero roll
//! denominator, a player band taller than the board) is rejected up front.

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

/// Configuration rejected at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroField { field: &'static str },

    #[error("player area of {player_area_height} rows does not fit a board {board_height} rows tall")]
    PlayerAreaTooTall {
        player_area_height: i32,
        board_height: i32,
    },
}

/// Static tunables for one session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    /// Rows at the bottom of the board where the player may move.
    pub player_area_height: i32,
    /// Maximum simultaneous player bullets.
    pub max_bullets: usize,
    /// Sub-ticks per animation cycle; spawn checks run on sub-tick 0.
    pub anim_cycle: u32,
    /// The player moves once every this many sub-ticks.
    pub player_move_interval: u32,
    /// The snail crawls once every this many sub-ticks.
    pub snail_move_interval: u32,
    /// Centipede chains step once every this many sub-ticks.
    pub frames_per_move: u32,
    /// Segments in a freshly spawned centipede.
    pub centipede_length: u32,
    /// Ticks a score marker stays on screen.
    pub score_marker_duration: u32,
    /// Mushrooms scattered across the field at setup.
    pub initial_mushrooms: u32,
    pub scores: ScoreTable,
    pub spawn: SpawnTuning,
}

/// Points per destroyed target.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub mushroom: u32,
    pub poison_mushroom: u32,
    pub flea: u32,
    pub spider: u32,
    pub snail: u32,
    pub centipede_segment: u32,
}

/// Spawn roll denominators and density thresholds.
///
/// A chance of N means a 1-in-N roll on each eligible frame.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub flea_chance: u32,
    pub spider_chance: u32,
    pub snail_chance: u32,
    /// Flea spawning is suppressed once the player-area mushroom count
    /// exceeds this AND the total count exceeds `min_mushrooms_total`.
    pub min_mushrooms_in_player_area: u32,
    pub min_mushrooms_total: u32,
    /// Denominator of the flea's mushroom-trail roll.
    pub flea_trail_chance: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            player_area_height: PLAYER_AREA_HEIGHT,
            max_bullets: MAX_BULLETS_ON_SCREEN,
            anim_cycle: ANIM_CYCLE,
            player_move_interval: PLAYER_MOVE_INTERVAL,
            snail_move_interval: SNAIL_MOVE_INTERVAL,
            frames_per_move: CENTIPEDE_FRAMES_PER_MOVE,
            centipede_length: CENTIPEDE_LENGTH,
            score_marker_duration: SCORE_MARKER_DURATION,
            initial_mushrooms: INITIAL_MUSHROOMS,
            scores: ScoreTable::default(),
            spawn: SpawnTuning::default(),
        }
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            mushroom: SCORE_HIT_MUSHROOM,
            poison_mushroom: SCORE_HIT_POISON_MUSHROOM,
            flea: SCORE_HIT_FLEA,
            spider: SCORE_HIT_SPIDER,
            snail: SCORE_HIT_SNAIL,
            centipede_segment: SCORE_HIT_CENTIPEDE,
        }
    }
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            flea_chance: FLEA_CREATION_CHANCE,
            spider_chance: SPIDER_CREATION_CHANCE,
            snail_chance: SNAIL_CREATION_CHANCE,
            min_mushrooms_in_player_area: MIN_MUSHROOMS_IN_PLAYER_AREA_BEFORE_FLEA,
            min_mushrooms_total: MIN_MUSHROOMS_BEFORE_FLEA,
            flea_trail_chance: FLEA_TRAIL_CHANCE,
        }
    }
}

impl GameConfig {
    /// Row index of the top of the player region.
    pub fn player_area_top(&self) -> i32 {
        self.board_height - self.player_area_height
    }

    /// Reject inconsistent values. Called once by the engine constructor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("board_width", self.board_width as i64),
            ("board_height", self.board_height as i64),
            ("player_area_height", self.player_area_height as i64),
            ("anim_cycle", self.anim_cycle as i64),
            ("player_move_interval", self.player_move_interval as i64),
            ("snail_move_interval", self.snail_move_interval as i64),
            ("frames_per_move", self.frames_per_move as i64),
            ("centipede_length", self.centipede_length as i64),
            ("score_marker_duration", self.score_marker_duration as i64),
            ("spawn.flea_chance", self.spawn.flea_chance as i64),
            ("spawn.spider_chance", self.spawn.spider_chance as i64),
            ("spawn.snail_chance", self.spawn.snail_chance as i64),
            ("spawn.flea_trail_chance", self.spawn.flea_trail_chance as i64),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::ZeroField { field });
            }
        }

        if self.player_area_height >= self.board_height {
            return Err(ConfigError::PlayerAreaTooTall {
                player_area_height: self.player_area_height,
                board_height: self.board_height,
            });
        }

        Ok(())
    }
}

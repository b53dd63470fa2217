//! Default tuning values for `GameConfig`.

/// Board width in cells.
pub const BOARD_WIDTH: i32 = 30;

/// Board height in cells.
pub const BOARD_HEIGHT: i32 = 30;

/// Rows at the bottom of the board where the player may move.
pub const PLAYER_AREA_HEIGHT: i32 = 5;

/// Maximum simultaneous player bullets.
pub const MAX_BULLETS_ON_SCREEN: usize = 3;

/// Length of the animation cycle (sub-ticks per frame).
pub const ANIM_CYCLE: u32 = 4;

/// The player moves once every this many sub-ticks.
pub const PLAYER_MOVE_INTERVAL: u32 = 2;

/// The snail crawls once every this many sub-ticks.
pub const SNAIL_MOVE_INTERVAL: u32 = 2;

/// Centipede chains step once every this many sub-ticks.
pub const CENTIPEDE_FRAMES_PER_MOVE: u32 = 2;

/// Segments in a freshly spawned centipede.
pub const CENTIPEDE_LENGTH: u32 = 10;

// --- Scoring ---

/// Points for destroying a plain mushroom.
pub const SCORE_HIT_MUSHROOM: u32 = 1;

/// Points for destroying a poisoned mushroom.
pub const SCORE_HIT_POISON_MUSHROOM: u32 = 5;

/// Points for shooting the flea.
pub const SCORE_HIT_FLEA: u32 = 200;

/// Points for shooting the spider.
pub const SCORE_HIT_SPIDER: u32 = 600;

/// Points for shooting the snail.
pub const SCORE_HIT_SNAIL: u32 = 1000;

/// Points per destroyed centipede segment.
pub const SCORE_HIT_CENTIPEDE: u32 = 10;

// --- Spawning ---

/// Denominator of the per-frame flea spawn roll (1 in N).
pub const FLEA_CREATION_CHANCE: u32 = 500;

/// Denominator of the per-frame spider spawn roll (1 in N).
pub const SPIDER_CREATION_CHANCE: u32 = 400;

/// Denominator of the per-frame snail spawn roll (1 in N).
pub const SNAIL_CREATION_CHANCE: u32 = 600;

/// Flea spawning is suppressed once the player-area mushroom count exceeds
/// this AND the total count exceeds `MIN_MUSHROOMS_BEFORE_FLEA`.
pub const MIN_MUSHROOMS_IN_PLAYER_AREA_BEFORE_FLEA: u32 = 2;

/// See `MIN_MUSHROOMS_IN_PLAYER_AREA_BEFORE_FLEA`.
pub const MIN_MUSHROOMS_BEFORE_FLEA: u32 = 20;

/// Denominator of the flea's mushroom-trail roll (1 in N per row left).
pub const FLEA_TRAIL_CHANCE: u32 = 3;

// --- Feedback ---

/// Ticks a score marker stays on screen.
pub const SCORE_MARKER_DURATION: u32 = 20;

/// Mushrooms scattered across the field at setup.
pub const INITIAL_MUSHROOMS: u32 = 30;

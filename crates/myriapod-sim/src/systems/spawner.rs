//! Spawn controller: frame-gated probabilistic creation of the transient
//! enemies.
//!
//! Runs once per frame (sub-tick 0), after movement, so eligibility always
//! sees post-movement occupancy. Singleton presence makes every check a
//! silent no-op; there is no error path.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use myriapod_board::GameBoard;
use myriapod_core::components::{Flea, Snail, Spider};
use myriapod_core::config::GameConfig;
use myriapod_core::enums::Direction;
use myriapod_core::events::GameEvent;
use myriapod_core::types::cell;

use crate::entities::EntitySet;

/// Run all spawn checks for this frame.
pub fn run(
    entities: &mut EntitySet,
    board: &GameBoard,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    check_flea(entities, board, config, rng, events);
    check_spider(entities, board, config, rng, events);
    check_snail(entities, board, config, rng, events);
}

/// A flea drops only while the field is thin: spawning is suppressed once
/// the board is dense both inside the player rows and overall.
fn check_flea(
    entities: &mut EntitySet,
    board: &GameBoard,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    if entities.flea.is_some() {
        return;
    }
    if board.mushrooms_in_player_area() > config.spawn.min_mushrooms_in_player_area
        && board.mushrooms_total() > config.spawn.min_mushrooms_total
    {
        return;
    }
    if rng.gen_range(0..config.spawn.flea_chance) != 0 {
        return;
    }

    let column = rng.gen_range(0..board.width());
    entities.flea = Some(Flea {
        cell: cell(column, 0),
    });
    events.push(GameEvent::FleaSpawned { column });
}

/// The spider enters from the edge opposite the player's half, at a random
/// row inside the player region, and bounces between the last row and the
/// top of that region.
fn check_spider(
    entities: &mut EntitySet,
    board: &GameBoard,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    if entities.spider.is_some() {
        return;
    }
    if rng.gen_range(0..config.spawn.spider_chance) != 0 {
        return;
    }

    let (x, horizontal) = if entities.player.cell.x > board.width() / 2 {
        (0, Direction::Right)
    } else {
        (board.width() - 1, Direction::Left)
    };
    let y = board.player_area_top() + rng.gen_range(0..board.player_area_height());

    let spawn_cell = cell(x, y);
    entities.spider = Some(Spider {
        cell: spawn_cell,
        horizontal,
        vertical: Direction::Down,
        min_y: board.player_area_top() + 1,
        max_y: board.height() - 1,
    });
    events.push(GameEvent::SpiderSpawned { cell: spawn_cell });
}

/// The snail enters from the left edge at a random row above the player
/// region.
fn check_snail(
    entities: &mut EntitySet,
    board: &GameBoard,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    if entities.snail.is_some() {
        return;
    }
    if rng.gen_range(0..config.spawn.snail_chance) != 0 {
        return;
    }

    let row = rng.gen_range(0..board.player_area_top());
    entities.snail = Some(Snail { cell: cell(0, row) });
    events.push(GameEvent::SnailSpawned { row });
}

//! Spawn factories for setting up and replenishing the simulation world.

use rand_chacha::ChaCha8Rng;

use myriapod_board::GameBoard;
use myriapod_core::components::{Centipede, Player, Segment};
use myriapod_core::config::GameConfig;
use myriapod_core::enums::{Direction, Lifecycle};
use myriapod_core::types::{cell, Cell};

use crate::entities::EntitySet;

/// Build the starting board with its scattered mushroom field.
pub fn setup_board(config: &GameConfig, rng: &mut ChaCha8Rng) -> GameBoard {
    let mut board = GameBoard::new(
        config.board_width,
        config.board_height,
        config.player_area_height,
    );
    board.scatter_mushrooms(rng, config.initial_mushrooms);
    board
}

/// Build the starting entity set: the player bottom-center and the first
/// centipede entering along the top row.
pub fn setup_entities(config: &GameConfig) -> EntitySet {
    EntitySet {
        player: Player {
            cell: cell(config.board_width / 2, config.board_height - 1),
        },
        centipedes: vec![spawn_centipede(cell(config.board_width / 2, 0), config)],
        ..EntitySet::default()
    }
}

/// A full-length chain led by `head`, its trailing segments streaming in
/// behind it (off-board cells simply have not entered yet).
pub fn spawn_centipede(head: Cell, config: &GameConfig) -> Centipede {
    let segments = (0..config.centipede_length as i32)
        .map(|i| Segment {
            cell: cell(head.x - i, head.y),
            state: Lifecycle::Alive,
        })
        .collect();

    Centipede {
        segments,
        horizontal: Direction::Right,
        vertical: Direction::Down,
        min_y: config.player_area_top() + 1,
        max_y: config.board_height - 1,
        min_x: 0,
        max_x: config.board_width - 1,
        frames_per_move: config.frames_per_move,
    }
}

/// The replacement wave pushed when the lead chain reaches a bottom
/// corner: enters at the left edge, at the top of the player region,
/// heading down on the same throttle as the original wave.
pub fn regenerated_centipede(config: &GameConfig) -> Centipede {
    spawn_centipede(cell(0, config.player_area_top() + 1), config)
}

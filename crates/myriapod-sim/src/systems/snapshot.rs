//! Snapshot builder: reads the entity set and board into a complete
//! `GameSnapshot`. This system never modifies the world.

use myriapod_board::GameBoard;
use myriapod_core::enums::{Lifecycle, SpriteColor, SpriteKind};
use myriapod_core::events::GameEvent;
use myriapod_core::state::{GameSnapshot, SpriteView, TileView};
use myriapod_core::types::{Cell, TickClock};

use crate::entities::EntitySet;
use crate::systems::scoring::ScoreState;

/// Build the drawable state for this tick, consuming the tick's events.
pub fn build_snapshot(
    entities: &EntitySet,
    board: &GameBoard,
    score: &ScoreState,
    clock: &TickClock,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *clock,
        score: score.view(),
        tiles: board
            .occupied_tiles()
            .map(|(cell, state)| TileView { cell, state })
            .collect(),
        sprites: build_sprites(entities),
        events,
    }
}

fn build_sprites(entities: &EntitySet) -> Vec<SpriteView> {
    let mut sprites = Vec::new();

    sprites.push(sprite(
        entities.player.cell,
        SpriteKind::Player,
        SpriteColor::White,
    ));

    for bullet in &entities.bullets {
        sprites.push(sprite(bullet.cell, SpriteKind::Bullet, SpriteColor::White));
    }

    if let Some(flea) = &entities.flea {
        sprites.push(sprite(flea.cell, SpriteKind::Flea, SpriteColor::Cyan));
    }
    if let Some(spider) = &entities.spider {
        for cell in spider.cells() {
            sprites.push(sprite(cell, SpriteKind::Spider, SpriteColor::Magenta));
        }
    }
    if let Some(snail) = &entities.snail {
        for cell in snail.cells() {
            sprites.push(sprite(cell, SpriteKind::Snail, SpriteColor::Yellow));
        }
    }

    for centipede in &entities.centipedes {
        for (i, segment) in centipede.segments.iter().enumerate() {
            if segment.state == Lifecycle::Dead {
                continue;
            }
            let (kind, color) = if i == 0 {
                (SpriteKind::CentipedeHead, SpriteColor::Red)
            } else {
                (SpriteKind::CentipedeBody, SpriteColor::Green)
            };
            sprites.push(sprite(segment.cell, kind, color));
        }
    }

    for marker in &entities.markers {
        if marker.state == Lifecycle::Dead {
            continue;
        }
        sprites.push(SpriteView {
            cell: marker.cell,
            sprite: SpriteKind::ScoreText,
            color: Some(SpriteColor::Yellow),
            text: Some(marker.value.to_string()),
        });
    }

    sprites
}

fn sprite(cell: Cell, kind: SpriteKind, color: SpriteColor) -> SpriteView {
    SpriteView {
        cell,
        sprite: kind,
        color: Some(color),
        text: None,
    }
}

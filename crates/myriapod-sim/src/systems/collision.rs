//! Collision resolver: fixed-priority target testing for bullet impacts.

use myriapod_board::GameBoard;
use myriapod_core::config::ScoreTable;
use myriapod_core::enums::{Lifecycle, TargetKind, TileState};
use myriapod_core::types::Cell;

use crate::entities::EntitySet;

/// A successful resolution: what was destroyed and what it scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub target: TargetKind,
    pub points: u32,
}

/// Resolve a bullet impact at `cell`, destroying at most one candidate.
///
/// Candidates are tested in strict priority: mushroom, flea, spider,
/// snail, centipede segments in iteration order. Mushrooms win ties so a
/// chain falling straight through an occupied cell still gets nearer the
/// bottom. Destroying a segment raises a mushroom in its place.
///
/// Returns `None` when nothing occupies the cell; nothing is created or
/// destroyed in that case.
pub fn resolve(
    cell: Cell,
    entities: &mut EntitySet,
    board: &mut GameBoard,
    scores: &ScoreTable,
) -> Option<Hit> {
    match board.check_collision(cell, true) {
        TileState::Mushroom => {
            return Some(Hit {
                target: TargetKind::Mushroom,
                points: scores.mushroom,
            });
        }
        TileState::PoisonMushroom => {
            return Some(Hit {
                target: TargetKind::PoisonMushroom,
                points: scores.poison_mushroom,
            });
        }
        TileState::Empty => {}
    }

    if entities.flea.as_ref().is_some_and(|f| f.cell == cell) {
        entities.flea = None;
        return Some(Hit {
            target: TargetKind::Flea,
            points: scores.flea,
        });
    }

    if entities.spider.as_ref().is_some_and(|s| s.occupies(cell)) {
        entities.spider = None;
        return Some(Hit {
            target: TargetKind::Spider,
            points: scores.spider,
        });
    }

    if entities.snail.as_ref().is_some_and(|s| s.occupies(cell)) {
        entities.snail = None;
        return Some(Hit {
            target: TargetKind::Snail,
            points: scores.snail,
        });
    }

    for centipede in &mut entities.centipedes {
        if let Some(segment) = centipede
            .segments
            .iter_mut()
            .find(|s| s.state == Lifecycle::Alive && s.cell == cell)
        {
            segment.state = Lifecycle::Dead;
            board.create_mushroom(cell);
            return Some(Hit {
                target: TargetKind::CentipedeSegment,
                points: scores.centipede_segment,
            });
        }
    }

    None
}

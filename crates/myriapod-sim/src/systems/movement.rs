//! Movement scheduler: advances every entity exactly once per tick, in a
//! fixed component order.
//!
//! Order matters: bullets strike before enemies step, each singleton enemy
//! is cleared on its exit test before the spawner can re-roll it, and
//! purge-then-advance keeps terminal entities from acting. Collision
//! testing runs inside each bullet's own move step, not as a separate
//! pass.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use myriapod_board::GameBoard;
use myriapod_core::commands::PlayerIntent;
use myriapod_core::components::{Centipede, Segment};
use myriapod_core::config::GameConfig;
use myriapod_core::enums::{Direction, Lifecycle, TileState};
use myriapod_core::events::GameEvent;
use myriapod_core::types::Cell;

use crate::entities::EntitySet;
use crate::systems::collision;
use crate::systems::scoring::{self, ScoreState};
use crate::world_setup;

/// Advance every entity for one tick. `anim` is the current sub-tick.
pub fn run(
    entities: &mut EntitySet,
    board: &mut GameBoard,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    anim: u32,
    intents: &mut VecDeque<PlayerIntent>,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    move_bullets(entities, board, config, score, events);
    move_flea(entities, board, config, rng);
    move_spider(entities, board);
    move_snail(entities, board, config, anim);
    move_centipedes(entities, board, config, anim, events);
    move_player(entities, board, config, anim, intents);
    move_markers(entities);
}

/// Bullets advance one cell up, resolve collisions at their new cell, and
/// are dropped from the set in the same sweep once dead.
fn move_bullets(
    entities: &mut EntitySet,
    board: &mut GameBoard,
    config: &GameConfig,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    // The bullets are swept outside the set so each impact can mutate the
    // other entity collections through the resolver.
    let mut bullets = std::mem::take(&mut entities.bullets);
    bullets.retain_mut(|bullet| {
        bullet.cell.y -= 1;
        if bullet.cell.y < 0 {
            bullet.state = Lifecycle::Dead;
            return false;
        }
        if let Some(hit) = collision::resolve(bullet.cell, entities, board, &config.scores) {
            scoring::award(
                score,
                &mut entities.markers,
                bullet.cell,
                hit,
                config.score_marker_duration,
                events,
            );
            bullet.state = Lifecycle::Dead;
            return false;
        }
        true
    });
    entities.bullets = bullets;
}

/// The flea falls one row per tick, sometimes seeding a mushroom in the
/// cell it left. Cleared once it drops past the bottom of the board.
fn move_flea(
    entities: &mut EntitySet,
    board: &mut GameBoard,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
) {
    let Some(flea) = entities.flea.as_mut() else {
        return;
    };
    if flea.cell.y >= board.height() {
        entities.flea = None;
        return;
    }
    let prev = flea.cell;
    flea.cell.y += 1;
    // Never a mushroom on the bottom row.
    if prev.y < board.height() - 1 && rng.gen_range(0..config.spawn.flea_trail_chance) == 0 {
        board.create_mushroom(prev);
    }
}

/// The spider bounces diagonally inside its band, clearing a two-wide
/// swath of mushrooms as it goes. Cleared once fully past either side.
fn move_spider(entities: &mut EntitySet, board: &mut GameBoard) {
    let Some(spider) = entities.spider.as_mut() else {
        return;
    };
    if spider.cell.x < -1 || spider.cell.x >= board.width() {
        entities.spider = None;
        return;
    }

    if spider.cell.y <= spider.min_y {
        spider.vertical = Direction::Down;
    } else if spider.cell.y >= spider.max_y {
        spider.vertical = Direction::Up;
    }
    spider.cell += spider.horizontal.delta() + spider.vertical.delta();

    if spider.cell.x >= 0 && spider.cell.x < board.width() {
        board.destroy_mushroom(spider.cell);
        if spider.cell.x < board.width() - 1 {
            board.destroy_mushroom(spider.cell + Cell::new(1, 0));
        }
    }
}

/// The snail crawls right on its own cadence, poisoning any mushroom it
/// crawls over. Cleared once it reaches the right edge.
fn move_snail(entities: &mut EntitySet, board: &mut GameBoard, config: &GameConfig, anim: u32) {
    let Some(snail) = entities.snail.as_mut() else {
        return;
    };
    if snail.cell.x >= board.width() {
        entities.snail = None;
        return;
    }
    if anim % config.snail_move_interval != 0 {
        return;
    }
    snail.cell.x += 1;
    if snail.cell.x < board.width() {
        board.poison_mushroom(snail.cell);
    }
}

/// Chains drop their dead segments (splitting around the gaps), step under
/// the shared throttle, and admit a replacement wave when the lead chain
/// reaches a bottom corner.
fn move_centipedes(
    entities: &mut EntitySet,
    board: &mut GameBoard,
    config: &GameConfig,
    anim: u32,
    events: &mut Vec<GameEvent>,
) {
    purge_dead_segments(&mut entities.centipedes, events);

    // The trigger reads the lead chain's pre-step position, and only on
    // its stepping ticks: the head bounces off the corner on this very
    // step, so one corner visit admits exactly one wave.
    let corner_reached = entities.centipedes.first().is_some_and(|first| {
        anim % first.frames_per_move == 0
            && first.head().is_some_and(|head| {
                head.cell.y == board.height() - 1
                    && (head.cell.x == 0 || head.cell.x == board.width() - 1)
            })
    });

    for centipede in &mut entities.centipedes {
        if anim % centipede.frames_per_move == 0 {
            step_chain(centipede, board);
        }
    }

    if corner_reached {
        entities
            .centipedes
            .push(world_setup::regenerated_centipede(config));
        events.push(GameEvent::CentipedeRegenerated);
    }
}

/// Remove dead segments, breaking each chain into runs of survivors. The
/// run behind a destroyed segment becomes its own chain, inheriting the
/// parent's travel state and throttle.
fn purge_dead_segments(centipedes: &mut Vec<Centipede>, events: &mut Vec<GameEvent>) {
    if centipedes
        .iter()
        .all(|c| c.segments.iter().all(|s| s.state == Lifecycle::Alive))
    {
        return;
    }

    let mut rebuilt = Vec::with_capacity(centipedes.len());
    for centipede in centipedes.drain(..) {
        let Centipede {
            segments,
            horizontal,
            vertical,
            min_y,
            max_y,
            min_x,
            max_x,
            frames_per_move,
        } = centipede;

        let mut runs: Vec<Vec<Segment>> = Vec::new();
        let mut current: Vec<Segment> = Vec::new();
        for segment in segments {
            if segment.state == Lifecycle::Alive {
                current.push(segment);
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        if runs.len() > 1 {
            events.push(GameEvent::CentipedeSplit { pieces: runs.len() });
        }
        for run in runs {
            rebuilt.push(Centipede {
                segments: run,
                horizontal,
                vertical,
                min_y,
                max_y,
                min_x,
                max_x,
                frames_per_move,
            });
        }
    }
    *centipedes = rebuilt;
}

/// One throttled step. The head tries its horizontal travel; a mushroom or
/// board edge makes it fall a row instead (climbing once it bounces at the
/// bottom) and reverse. Followers move in file, each into the cell its
/// leader just left.
fn step_chain(centipede: &mut Centipede, board: &mut GameBoard) {
    let Some(head) = centipede.head() else {
        return;
    };
    let head_cell = head.cell;

    let mut target = head_cell + centipede.horizontal.delta();
    let blocked = target.x < centipede.min_x
        || target.x > centipede.max_x
        || board.check_collision(target, false) != TileState::Empty;

    if blocked {
        centipede.horizontal = centipede.horizontal.reversed();
        if centipede.vertical == Direction::Down && head_cell.y >= centipede.max_y {
            centipede.vertical = Direction::Up;
        } else if centipede.vertical == Direction::Up && head_cell.y <= centipede.min_y {
            centipede.vertical = Direction::Down;
        }
        target = head_cell + centipede.vertical.delta();
    }

    // Each follower inherits its leader's previous cell.
    let mut carry = target;
    for segment in &mut centipede.segments {
        std::mem::swap(&mut segment.cell, &mut carry);
    }
}

/// The player moves at its own cadence, consuming one queued intent per
/// eligible sub-tick. A board-vetoed direction degrades to standing still;
/// firing still applies.
fn move_player(
    entities: &mut EntitySet,
    board: &mut GameBoard,
    config: &GameConfig,
    anim: u32,
    intents: &mut VecDeque<PlayerIntent>,
) {
    if anim % config.player_move_interval != 0 {
        return;
    }
    let Some(intent) = intents.pop_front() else {
        return;
    };

    if let Some(direction) = intent.direction {
        if board.player_allowed_to_move(entities.player.cell, direction) {
            entities.player.cell += direction.delta();
        }
    }
    if intent.firing {
        let muzzle = entities.player.cell;
        entities.fire(muzzle, config.max_bullets);
    }
}

/// Markers past their display lifetime are purged before the rest age.
fn move_markers(entities: &mut EntitySet) {
    entities.markers.retain(|m| m.state != Lifecycle::Dead);
    for marker in &mut entities.markers {
        marker.remaining = marker.remaining.saturating_sub(1);
        if marker.remaining == 0 {
            marker.state = Lifecycle::Dead;
        }
    }
}

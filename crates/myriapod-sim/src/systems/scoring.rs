//! Score accumulation and transient feedback markers.

use myriapod_core::components::ScoreMarker;
use myriapod_core::enums::{Lifecycle, TargetKind};
use myriapod_core::events::GameEvent;
use myriapod_core::state::ScoreView;
use myriapod_core::types::Cell;

use crate::systems::collision::Hit;

/// Cumulative score plus per-target kill counters.
/// Mutated only through [`award`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub total: u32,
    pub mushrooms_destroyed: u32,
    pub fleas_killed: u32,
    pub spiders_killed: u32,
    pub snails_killed: u32,
    pub segments_destroyed: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            total: self.total,
            mushrooms_destroyed: self.mushrooms_destroyed,
            fleas_killed: self.fleas_killed,
            spiders_killed: self.spiders_killed,
            snails_killed: self.snails_killed,
            segments_destroyed: self.segments_destroyed,
        }
    }
}

/// Add a hit's points to the running score, raise the on-screen marker at
/// the impact cell, and surface the destruction as a feedback event.
pub fn award(
    score: &mut ScoreState,
    markers: &mut Vec<ScoreMarker>,
    cell: Cell,
    hit: Hit,
    marker_duration: u32,
    events: &mut Vec<GameEvent>,
) {
    score.total += hit.points;
    match hit.target {
        TargetKind::Mushroom | TargetKind::PoisonMushroom => score.mushrooms_destroyed += 1,
        TargetKind::Flea => score.fleas_killed += 1,
        TargetKind::Spider => score.spiders_killed += 1,
        TargetKind::Snail => score.snails_killed += 1,
        TargetKind::CentipedeSegment => score.segments_destroyed += 1,
    }

    markers.push(ScoreMarker {
        cell,
        value: hit.points,
        remaining: marker_duration,
        state: Lifecycle::Alive,
    });

    events.push(GameEvent::TargetDestroyed {
        target: hit.target,
        cell,
        points: hit.points,
    });
}

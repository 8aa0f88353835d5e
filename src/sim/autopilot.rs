//! Demo mode: decides when to tap so the game can play itself

use super::snapshot::Snapshot;
use super::state::GamePhase;
use crate::consts::*;

/// Don't flap again while rising faster than this
const RISING_CUTOFF: f32 = -4.0;
/// A flap rises about 114 units before gravity wins; aim below the gap centre
/// by half of that
const AIM_OFFSET: f32 = 55.0;

/// Height the autopilot tries to hold: the gap of the first obstacle the
/// avatar has not fully cleared
pub fn target_height(snapshot: &Snapshot) -> f32 {
    snapshot
        .obstacles
        .iter()
        .find(|o| o.x + PIPE_WIDTH >= AVATAR_X - AVATAR_RADIUS)
        .map(|o| o.top_height + PIPE_GAP / 2.0)
        .unwrap_or(snapshot.playfield.height / 2.0)
        + AIM_OFFSET
}

/// Whether to `activate` this frame
pub fn should_flap(snapshot: &Snapshot) -> bool {
    match snapshot.phase {
        // Start (or restart) straight away
        GamePhase::Idle | GamePhase::Ended => true,
        GamePhase::Playing => {
            let avatar = &snapshot.avatar;
            avatar.position.y > target_height(snapshot) && avatar.velocity > RISING_CUTOFF
        }
    }
}

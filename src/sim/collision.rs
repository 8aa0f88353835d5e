//! Collision detection and scoring
//!
//! Run once per tick, after physics and obstacle scrolling. Obstacles are
//! scanned in order; the first termination wins and stops the scan, so a tick
//! can never both end the run and score afterwards.

use super::avatar::AvatarState;
use super::obstacle::Obstacle;
use super::state::{EndCause, GameEvent, GameState};
use crate::config::Playfield;
use crate::consts::*;

/// Outcome of one collision/scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    /// Obstacles passed this pass
    pub passed: u32,
    /// Set when the run must end
    pub terminated: Option<EndCause>,
}

/// Avatar's circle overlaps the obstacle's horizontal span
#[inline]
pub fn overlaps_horizontally(obstacle: &Obstacle) -> bool {
    AVATAR_X + AVATAR_RADIUS > obstacle.x && AVATAR_X - AVATAR_RADIUS < obstacle.trailing_edge()
}

/// Avatar's circle pokes outside the gap
#[inline]
pub fn outside_gap(avatar_y: f32, obstacle: &Obstacle, playfield: &Playfield) -> bool {
    avatar_y - AVATAR_RADIUS < obstacle.top_height
        || avatar_y + AVATAR_RADIUS > obstacle.gap_bottom(playfield)
}

/// Avatar hit an obstacle's barrier
pub fn avatar_obstacle_collision(
    avatar_y: f32,
    obstacle: &Obstacle,
    playfield: &Playfield,
) -> bool {
    overlaps_horizontally(obstacle) && outside_gap(avatar_y, obstacle, playfield)
}

/// Avatar left the playable band (ground or ceiling)
pub fn avatar_boundary_collision(avatar: &AvatarState, playfield: &Playfield) -> Option<EndCause> {
    if avatar.position > playfield.ground_y() {
        Some(EndCause::Ground)
    } else if avatar.position < CEILING_MARGIN {
        Some(EndCause::Ceiling)
    } else {
        None
    }
}

/// Evaluate collisions and passages, mark passed obstacles and bump the score.
///
/// Does not change the phase; the caller applies `terminated`.
pub fn resolve(state: &mut GameState) -> CollisionResult {
    let avatar_y = state.avatar.position;
    let playfield = state.playfield;
    let mut result = CollisionResult {
        passed: 0,
        terminated: None,
    };

    for obstacle in state.obstacles.iter_mut() {
        if avatar_obstacle_collision(avatar_y, obstacle, &playfield) {
            result.terminated = Some(EndCause::Obstacle);
            return result;
        }

        if !obstacle.passed && obstacle.trailing_edge() < AVATAR_X {
            obstacle.passed = true;
            state.score += 1;
            result.passed += 1;
            state.events.push(GameEvent::Passed { score: state.score });
            log::debug!("Passed obstacle, score {}", state.score);
        }
    }

    result.terminated = avatar_boundary_collision(&state.avatar, &playfield);
    result
}

//! Fixed timestep simulation tick
//!
//! The three inbound signals (tick, spawn, activate) applied to a `GameState`.
//! Within a tick the order is fixed: physics, obstacle scroll, collision and
//! scoring, then termination.

use rand::Rng;

use super::collision::resolve;
use super::state::{GameEvent, GamePhase, GameState};

/// Phase change caused by an `activate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Idle -> Playing
    Started,
    /// Ended -> Playing, after a reset
    Restarted,
    /// Already playing: impulse applied
    Flapped,
}

/// Advance the game state by one fixed timestep. Ignored unless playing.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // 1. Physics
    state.avatar.integrate();
    state.avatar.animate();

    // 2. Scroll and prune
    let pruned = state.obstacles.advance();
    if pruned > 0 {
        log::trace!("Pruned {} offscreen obstacle(s)", pruned);
    }

    // 3. Collisions and passages
    let result = resolve(state);

    // 4. Termination
    if let Some(cause) = result.terminated {
        state.end(cause);
    }
}

/// Periodic spawn signal. Ignored unless playing.
pub fn spawn_tick<R: Rng>(state: &mut GameState, rng: &mut R) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let playfield = state.playfield;
    let top_height = state.obstacles.spawn(rng, &playfield).top_height;
    state.events.push(GameEvent::Spawned { top_height });
    log::debug!(
        "Spawned obstacle (top {:.1}), {} live",
        top_height,
        state.obstacles.len()
    );
}

/// The player's tap. Meaning depends on the phase.
pub fn activate(state: &mut GameState) -> Activation {
    match state.phase {
        GamePhase::Idle => {
            state.reset();
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Started);
            log::info!("Game started");
            Activation::Started
        }
        GamePhase::Ended => {
            state.reset();
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Restarted);
            log::info!("Game restarted");
            Activation::Restarted
        }
        GamePhase::Playing => {
            state.avatar.apply_impulse();
            state.events.push(GameEvent::Flapped);
            Activation::Flapped
        }
    }
}

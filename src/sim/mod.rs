//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick signal
//! - Injected RNG only
//! - Stable obstacle order (oldest first)
//! - No rendering, timer or platform dependencies

pub mod autopilot;
pub mod avatar;
pub mod collision;
pub mod obstacle;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use avatar::{AvatarState, FlapTilt};
pub use collision::{
    CollisionResult, avatar_boundary_collision, avatar_obstacle_collision, resolve,
};
pub use obstacle::{Obstacle, ObstacleSet};
pub use snapshot::{AvatarView, ObstacleView, Snapshot};
pub use state::{EndCause, GameEvent, GamePhase, GameState};
pub use tick::{Activation, activate, spawn_tick, tick};

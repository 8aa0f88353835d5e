//! Flap Gates - a tap-to-flap arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `platform`: Host-driven tick/spawn scheduling
//! - `session`: Owns the state, the random source and the active schedule
//! - `config`: Playfield dimensions supplied by the host

pub mod config;
pub mod error;
pub mod platform;
pub mod session;
pub mod sim;

pub use config::Playfield;
pub use error::ConfigError;
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied every tick (units/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Velocity set on a flap (negative = up)
    pub const JUMP_HEIGHT: f32 = -12.0;

    /// Obstacle geometry
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 200.0;
    /// Horizontal distance obstacles travel per tick
    pub const PIPE_SPEED: f32 = 3.0;
    /// Minimum distance between the gap and the ceiling/floor
    pub const GAP_MIN_CLEARANCE: f32 = 100.0;

    /// Avatar sits at a fixed horizontal position
    pub const AVATAR_X: f32 = 100.0;
    pub const AVATAR_RADIUS: f32 = 20.0;

    /// Ground threshold is playfield height minus this
    pub const GROUND_CLEARANCE: f32 = 100.0;
    pub const CEILING_MARGIN: f32 = 0.0;

    /// Scheduler periods
    pub const TICK_INTERVAL_MS: u32 = 16;
    pub const SPAWN_INTERVAL_MS: u32 = 2000;
    /// Largest host frame delta honoured in one `advance` (prevents spiral of death)
    pub const MAX_CATCHUP_MS: u32 = 250;

    /// Velocity range mapped onto the rotation range (clamped at the edges)
    pub const ROTATION_VELOCITY_MIN: f32 = -10.0;
    pub const ROTATION_VELOCITY_MAX: f32 = 10.0;
    pub const ROTATION_ANGLE_MIN: f32 = -30.0;
    pub const ROTATION_ANGLE_MAX: f32 = 90.0;
    /// Fraction of the remaining distance to the target covered each tick
    pub const ROTATION_EASE: f32 = 0.2;

    /// Flap tilt: snap up to this angle, then ease back to level
    pub const FLAP_TILT_ANGLE: f32 = -20.0;
    pub const FLAP_TILT_IN_TICKS: u32 = 6;
    pub const FLAP_TILT_OUT_TICKS: u32 = 18;
}

/// Linear map of `value` from `[in_min, in_max]` to `[out_min, out_max]`, clamped
#[inline]
pub fn map_clamped(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let t = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

/// Quadratic ease-out on `t` in `[0, 1]`
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_clamped() {
        assert_eq!(map_clamped(0.0, -10.0, 10.0, -30.0, 90.0), 30.0);
        assert_eq!(map_clamped(-50.0, -10.0, 10.0, -30.0, 90.0), -30.0);
        assert_eq!(map_clamped(50.0, -10.0, 10.0, -30.0, 90.0), 90.0);
    }

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}

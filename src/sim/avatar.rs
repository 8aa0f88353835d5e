//! Avatar physics state
//!
//! Position and velocity are authoritative. Rotation is purely cosmetic and
//! never feeds back into physics or collision.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{ease_out, map_clamped};

/// Scripted tilt played after a flap, overriding the velocity-driven rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlapTilt {
    /// Snapping up towards `FLAP_TILT_ANGLE`
    Rising { tick: u32, from: f32 },
    /// Easing back to level
    Settling { tick: u32 },
}

/// The player-controlled avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarState {
    /// Vertical position (grows downward)
    pub position: f32,
    /// Vertical velocity (units/tick, negative = up)
    pub velocity: f32,
    /// Display rotation in degrees
    pub rotation: f32,
    /// Active flap tilt, if any
    #[serde(default)]
    pub tilt: Option<FlapTilt>,
}

impl AvatarState {
    /// Avatar at rest at the given height
    pub fn new(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            rotation: 0.0,
            tilt: None,
        }
    }

    /// One tick of gravity. No clamping: bounds are checked by the caller.
    pub fn integrate(&mut self) {
        self.velocity += GRAVITY;
        self.position += self.velocity;
    }

    /// Flap: velocity is overridden, not accumulated
    pub fn apply_impulse(&mut self) {
        self.velocity = JUMP_HEIGHT;
        self.tilt = Some(FlapTilt::Rising {
            tick: 0,
            from: self.rotation,
        });
    }

    /// Rotation the avatar eases towards when no tilt is playing
    pub fn target_rotation(&self) -> f32 {
        map_clamped(
            self.velocity,
            ROTATION_VELOCITY_MIN,
            ROTATION_VELOCITY_MAX,
            ROTATION_ANGLE_MIN,
            ROTATION_ANGLE_MAX,
        )
    }

    /// Advance the cosmetic rotation by one tick
    pub fn animate(&mut self) {
        self.tilt = match self.tilt {
            Some(FlapTilt::Rising { tick, from }) => {
                let tick = tick + 1;
                let t = tick as f32 / FLAP_TILT_IN_TICKS as f32;
                self.rotation = from + (FLAP_TILT_ANGLE - from) * ease_out(t);
                if tick >= FLAP_TILT_IN_TICKS {
                    Some(FlapTilt::Settling { tick: 0 })
                } else {
                    Some(FlapTilt::Rising { tick, from })
                }
            }
            Some(FlapTilt::Settling { tick }) => {
                let tick = tick + 1;
                let t = tick as f32 / FLAP_TILT_OUT_TICKS as f32;
                self.rotation = FLAP_TILT_ANGLE * (1.0 - ease_out(t));
                if tick >= FLAP_TILT_OUT_TICKS {
                    None
                } else {
                    Some(FlapTilt::Settling { tick })
                }
            }
            None => {
                let target = self.target_rotation();
                self.rotation += (target - self.rotation) * ROTATION_EASE;
                None
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_from_rest() {
        let mut avatar = AvatarState::new(400.0);
        avatar.integrate();
        assert!((avatar.velocity - 0.6).abs() < 1e-6);
        assert!((avatar.position - 400.6).abs() < 1e-4);

        avatar.integrate();
        assert!((avatar.velocity - 1.2).abs() < 1e-6);
        assert!((avatar.position - 401.8).abs() < 1e-4);
    }

    #[test]
    fn test_impulse_overrides_velocity() {
        for prior in [-30.0, -12.0, 0.0, 5.0, 40.0] {
            let mut avatar = AvatarState::new(400.0);
            avatar.velocity = prior;
            avatar.apply_impulse();
            assert_eq!(avatar.velocity, JUMP_HEIGHT);
            assert_eq!(avatar.position, 400.0);
        }
    }

    #[test]
    fn test_target_rotation_clamps() {
        let mut avatar = AvatarState::new(0.0);
        avatar.velocity = -50.0;
        assert_eq!(avatar.target_rotation(), ROTATION_ANGLE_MIN);
        avatar.velocity = 50.0;
        assert_eq!(avatar.target_rotation(), ROTATION_ANGLE_MAX);
    }

    #[test]
    fn test_flap_tilt_sequence() {
        let mut avatar = AvatarState::new(400.0);
        avatar.apply_impulse();

        for _ in 0..FLAP_TILT_IN_TICKS {
            avatar.animate();
        }
        assert!((avatar.rotation - FLAP_TILT_ANGLE).abs() < 1e-4);
        assert!(matches!(avatar.tilt, Some(FlapTilt::Settling { .. })));

        for _ in 0..FLAP_TILT_OUT_TICKS {
            avatar.animate();
        }
        assert!(avatar.rotation.abs() < 1e-4);
        assert!(avatar.tilt.is_none());
    }

    #[test]
    fn test_rotation_does_not_touch_physics() {
        let mut avatar = AvatarState::new(300.0);
        avatar.velocity = 7.0;
        let before = (avatar.position, avatar.velocity);
        for _ in 0..50 {
            avatar.animate();
        }
        assert_eq!((avatar.position, avatar.velocity), before);
        assert!(avatar.rotation > 0.0);
    }
}

//! Read-only view of the game for renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::config::Playfield;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarView {
    /// Centre of the avatar in playfield coordinates
    pub position: Vec2,
    pub velocity: f32,
    /// Degrees
    pub rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    pub passed: bool,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub avatar: AvatarView,
    pub obstacles: Vec<ObstacleView>,
    pub playfield: Playfield,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            avatar: AvatarView {
                position: Vec2::new(AVATAR_X, state.avatar.position),
                velocity: state.avatar.velocity,
                rotation: state.avatar.rotation,
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    top_height: o.top_height,
                    bottom_height: o.bottom_height,
                    passed: o.passed,
                })
                .collect(),
            playfield: state.playfield,
        }
    }
}

//! Obstacles (gates) and the ordered set of live obstacles

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Playfield;
use crate::consts::*;

/// A top/bottom barrier pair with a fixed-size gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Height of the top barrier, measured from the ceiling
    pub top_height: f32,
    /// Height of the bottom barrier, measured from the floor
    pub bottom_height: f32,
    /// Set once the avatar has cleared the trailing edge
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, top_height: f32, playfield: &Playfield) -> Self {
        Self {
            x,
            top_height,
            bottom_height: playfield.height - top_height - PIPE_GAP,
            passed: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Top of the bottom barrier
    #[inline]
    pub fn gap_bottom(&self, playfield: &Playfield) -> f32 {
        playfield.height - self.bottom_height
    }

    /// Entirely left of the playfield
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Live obstacles, oldest (leftmost) first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an obstacle at the right edge with a random gap and append it
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, playfield: &Playfield) -> &Obstacle {
        let (min, max) = playfield.gap_top_range();
        let top_height = rng.random_range(min..=max);
        self.push(Obstacle::new(playfield.width, top_height, playfield))
    }

    /// Append an already constructed obstacle
    pub fn push(&mut self, obstacle: Obstacle) -> &Obstacle {
        self.obstacles.push(obstacle);
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Scroll everything left by `PIPE_SPEED`, then drop what left the screen.
    /// Returns how many obstacles were removed.
    pub fn advance(&mut self) -> usize {
        for obstacle in &mut self.obstacles {
            obstacle.x -= PIPE_SPEED;
        }
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        before - self.obstacles.len()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::avatar::AvatarState;
use super::obstacle::ObstacleSet;
use crate::config::Playfield;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap, nothing simulated
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended, frozen until the next tap
    Ended,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    Ground,
    Ceiling,
    Obstacle,
}

/// Something the host may want to react to (sound, flash, haptics)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Idle -> Playing
    Started,
    /// Ended -> Playing
    Restarted,
    Flapped,
    Spawned { top_height: f32 },
    Passed { score: u32 },
    Ended { cause: EndCause, score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub playfield: Playfield,
    pub phase: GamePhase,
    pub score: u32,
    pub avatar: AvatarState,
    pub obstacles: ObstacleSet,
    /// Ticks simulated since the last (re)start
    pub time_ticks: u64,
    /// Events since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh Idle state. The playfield is assumed to be validated.
    pub fn new(playfield: Playfield, seed: u64) -> Self {
        Self {
            seed,
            playfield,
            phase: GamePhase::Idle,
            score: 0,
            avatar: AvatarState::new(playfield.center_y()),
            obstacles: ObstacleSet::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Put everything back to the starting position, keeping seed and playfield
    pub fn reset(&mut self) {
        self.score = 0;
        self.avatar = AvatarState::new(self.playfield.center_y());
        self.obstacles.clear();
        self.time_ticks = 0;
    }

    /// Terminal transition. Returns false if the game was not running.
    pub fn end(&mut self, cause: EndCause) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.phase = GamePhase::Ended;
        self.events.push(GameEvent::Ended {
            cause,
            score: self.score,
        });
        log::info!("Run ended ({:?}) with score {}", cause, self.score);
        true
    }
}

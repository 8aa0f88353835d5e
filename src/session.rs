//! A game session: state, random source and the active schedule
//!
//! The host either calls `advance` with its frame delta (the schedule decides
//! which ticks and spawns are due) or drives `tick`/`spawn_tick` from its own
//! timers. Either way the schedule only exists while the game is playing:
//! ending the run and tearing the session down both go through
//! `cancel_schedule`.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Playfield;
use crate::error::ConfigError;
use crate::platform::{Schedule, Signal};
use crate::sim::{self, Activation, GameEvent, GamePhase, GameState, Snapshot};

/// One player's game, from the first tap until the host drops it
pub struct Session<R: Rng = Pcg32> {
    state: GameState,
    rng: R,
    schedule: Option<Schedule>,
}

impl Session<Pcg32> {
    /// Session with a seeded PCG random source
    pub fn new(playfield: Playfield, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(playfield, seed, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Session with a caller-supplied random source (`seed` is only recorded)
    pub fn with_rng(playfield: Playfield, seed: u64, rng: R) -> Result<Self, ConfigError> {
        playfield.validate()?;
        log::info!(
            "New session: playfield {}x{}, seed {}",
            playfield.width,
            playfield.height,
            seed
        );
        Ok(Self {
            state: GameState::new(playfield, seed),
            rng,
            schedule: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Whether tick/spawn signals are currently being generated
    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_some()
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// The player's tap
    pub fn activate(&mut self) -> Activation {
        let activation = sim::activate(&mut self.state);
        match activation {
            Activation::Started | Activation::Restarted => self.start_schedule(),
            Activation::Flapped => {}
        }
        activation
    }

    /// One simulation step
    pub fn tick(&mut self) {
        sim::tick(&mut self.state);
        self.sync_schedule();
    }

    /// One spawn signal
    pub fn spawn_tick(&mut self) {
        sim::spawn_tick(&mut self.state, &mut self.rng);
        self.sync_schedule();
    }

    /// Feed a host frame delta through the schedule.
    ///
    /// Runs every due signal in order and stops as soon as one ends the run.
    /// Returns the number of ticks simulated.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let Some(schedule) = self.schedule.as_mut() else {
            return 0;
        };
        schedule.elapse(elapsed);

        let mut ticks = 0;
        while let Some(signal) = self.schedule.as_mut().and_then(Schedule::next_due) {
            match signal {
                Signal::Tick => {
                    self.tick();
                    ticks += 1;
                }
                Signal::Spawn => self.spawn_tick(),
            }
        }
        ticks
    }

    /// Stop both timers. Safe to call any number of times.
    pub fn cancel_schedule(&mut self) {
        if let Some(schedule) = self.schedule.take() {
            log::debug!(
                "Stopping schedule in phase {:?} after {}ms",
                self.state.phase,
                schedule.now_ms()
            );
        }
    }

    fn start_schedule(&mut self) {
        self.cancel_schedule();
        self.schedule = Some(Schedule::start());
    }

    /// Signals must not outlive the Playing phase
    fn sync_schedule(&mut self) {
        if self.state.phase != GamePhase::Playing {
            self.cancel_schedule();
        }
    }
}

impl<R: Rng> Drop for Session<R> {
    fn drop(&mut self) {
        self.cancel_schedule();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn session() -> Session {
        Session::new(Playfield::new(400.0, 800.0), 42).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_playfield() {
        assert!(matches!(
            Session::new(Playfield::new(400.0, 300.0), 1),
            Err(ConfigError::TooShort { .. })
        ));
    }

    #[test]
    fn test_idle_has_no_schedule() {
        let mut session = session();
        assert!(!session.is_scheduled());
        assert_eq!(session.advance(Duration::from_millis(100)), 0);
        assert_eq!(session.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_activate_starts_schedule() {
        let mut session = session();
        assert_eq!(session.activate(), Activation::Started);
        assert!(session.is_scheduled());
        assert_eq!(session.advance(Duration::from_millis(TICK_INTERVAL_MS as u64)), 1);
        assert!((session.state().avatar.velocity - GRAVITY).abs() < 1e-6);
    }

    #[test]
    fn test_termination_cancels_schedule() {
        let mut session = session();
        session.activate();
        // Free fall from the centre reaches the ground well within a second
        for _ in 0..10 {
            session.advance(Duration::from_millis(100));
        }
        assert_eq!(session.phase(), GamePhase::Ended);
        assert!(!session.is_scheduled());

        let frozen = session.snapshot();
        assert_eq!(session.advance(Duration::from_millis(100)), 0);
        assert_eq!(session.snapshot(), frozen);
    }

    #[test]
    fn test_advance_stops_at_termination() {
        let mut session = session();
        session.activate();
        session.state.avatar.position = 700.0;
        // Many ticks are due, but the first one ends the run
        assert_eq!(session.advance(Duration::from_millis(200)), 1);
        assert_eq!(session.phase(), GamePhase::Ended);
    }

    #[test]
    fn test_restart_restarts_schedule() {
        let mut session = session();
        session.activate();
        session.state.avatar.position = 750.0;
        session.tick();
        assert!(!session.is_scheduled());

        assert_eq!(session.activate(), Activation::Restarted);
        assert!(session.is_scheduled());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_events_drain() {
        let mut session = session();
        session.activate();
        session.activate();
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::Started, GameEvent::Flapped]
        );
        assert!(session.drain_events().is_empty());
    }
}

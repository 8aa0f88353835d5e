//! Fixed-rate tick and spawn timers driven by the host's frame clock
//!
//! A `Schedule` exists only while a run is active. Owning it is what keeps the
//! signals flowing; dropping it cancels both timers at once.

use std::time::Duration;

use crate::consts::*;

/// A periodic signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Obstacle spawn (every `SPAWN_INTERVAL_MS`)
    Spawn,
    /// Simulation step (every `TICK_INTERVAL_MS`)
    Tick,
}

/// One fixed-rate timer, in schedule milliseconds
#[derive(Debug, Clone, Copy)]
struct Timer {
    period_ms: u64,
    next_due_ms: u64,
}

impl Timer {
    fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms as u64,
            next_due_ms: period_ms as u64,
        }
    }

    fn fire(&mut self) {
        self.next_due_ms += self.period_ms;
    }
}

/// Active tick + spawn timers for one run
#[derive(Debug)]
pub struct Schedule {
    tick: Timer,
    spawn: Timer,
    /// Schedule clock: milliseconds since start
    now_ms: u64,
    /// Sub-millisecond remainder carried between frames
    carry: Duration,
}

impl Schedule {
    /// Both timers start at phase zero; the first tick is one period away
    pub fn start() -> Self {
        Self::with_periods(TICK_INTERVAL_MS, SPAWN_INTERVAL_MS)
    }

    pub fn with_periods(tick_ms: u32, spawn_ms: u32) -> Self {
        log::debug!("Schedule started (tick {}ms, spawn {}ms)", tick_ms, spawn_ms);
        Self {
            tick: Timer::new(tick_ms.max(1)),
            spawn: Timer::new(spawn_ms.max(1)),
            now_ms: 0,
            carry: Duration::ZERO,
        }
    }

    /// Milliseconds of schedule time elapsed
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the schedule clock forward. Host frame deltas larger than
    /// `MAX_CATCHUP_MS` are clamped.
    pub fn elapse(&mut self, elapsed: Duration) {
        let elapsed = elapsed.min(Duration::from_millis(MAX_CATCHUP_MS as u64)) + self.carry;
        let whole_ms = elapsed.as_millis() as u64;
        self.carry = elapsed - Duration::from_millis(whole_ms);
        self.now_ms += whole_ms;
    }

    /// Pop the next signal due at or before the schedule clock.
    ///
    /// Signals come out in chronological order; when a spawn and a tick fall
    /// on the same instant the spawn comes first.
    pub fn next_due(&mut self) -> Option<Signal> {
        let spawn_due = self.spawn.next_due_ms <= self.now_ms;
        let tick_due = self.tick.next_due_ms <= self.now_ms;

        match (spawn_due, tick_due) {
            (true, true) if self.spawn.next_due_ms <= self.tick.next_due_ms => {
                self.spawn.fire();
                Some(Signal::Spawn)
            }
            (_, true) => {
                self.tick.fire();
                Some(Signal::Tick)
            }
            (true, false) => {
                self.spawn.fire();
                Some(Signal::Spawn)
            }
            (false, false) => None,
        }
    }
}

impl Drop for Schedule {
    fn drop(&mut self) {
        log::debug!("Schedule cancelled at {}ms", self.now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(schedule: &mut Schedule) -> Vec<Signal> {
        std::iter::from_fn(|| schedule.next_due()).collect()
    }

    #[test]
    fn test_nothing_due_at_start() {
        let mut schedule = Schedule::start();
        assert_eq!(schedule.next_due(), None);
        schedule.elapse(Duration::from_millis(15));
        assert_eq!(schedule.next_due(), None);
    }

    #[test]
    fn test_tick_rate() {
        let mut schedule = Schedule::start();
        schedule.elapse(Duration::from_millis(160));
        assert_eq!(drain(&mut schedule), vec![Signal::Tick; 10]);
    }

    #[test]
    fn test_sub_millisecond_carry() {
        let mut schedule = Schedule::start();
        for _ in 0..4 {
            schedule.elapse(Duration::from_micros(4_100));
        }
        // 16.4ms total: 16ms reach the clock, 0.4ms carried
        assert_eq!(schedule.now_ms(), 16);
        assert_eq!(drain(&mut schedule), vec![Signal::Tick]);
    }

    #[test]
    fn test_spawn_before_simultaneous_tick() {
        let mut schedule = Schedule::with_periods(10, 20);
        schedule.elapse(Duration::from_millis(20));
        assert_eq!(
            drain(&mut schedule),
            vec![Signal::Tick, Signal::Spawn, Signal::Tick]
        );
    }

    #[test]
    fn test_spawn_interval() {
        let mut schedule = Schedule::start();
        let mut spawns = 0;
        // 4 seconds of 16ms frames
        for _ in 0..250 {
            schedule.elapse(Duration::from_millis(16));
            spawns += drain(&mut schedule)
                .into_iter()
                .filter(|s| *s == Signal::Spawn)
                .count();
        }
        assert_eq!(spawns, 2);
    }

    #[test]
    fn test_large_frame_is_clamped() {
        let mut schedule = Schedule::start();
        schedule.elapse(Duration::from_secs(10));
        assert_eq!(schedule.now_ms(), MAX_CATCHUP_MS as u64);
    }
}

//! Platform abstraction layer
//!
//! The simulation never owns a real timer. The host feeds frame deltas in and
//! the schedule turns them into fixed-rate tick and spawn signals.

pub mod schedule;

pub use schedule::{Schedule, Signal};

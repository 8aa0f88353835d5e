//! Flap Gates headless runner
//!
//! Plays the game with the autopilot at 60 fps of simulated frames and prints
//! the final snapshot as JSON. Rendering and real input live in the host.
//!
//! Usage: `flap-gates [playfield.json] [seed] [seconds]`

use std::process::ExitCode;
use std::time::Duration;

use flap_gates::sim::{GameEvent, autopilot};
use flap_gates::{ConfigError, Playfield, Session};

const FRAME: Duration = Duration::from_micros(16_667);

fn load_playfield(path: Option<&str>) -> Result<Playfield, ConfigError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| ConfigError::Parse(format!("{}: {}", path, e)))?;
            Playfield::from_json(&json)
        }
        None => Ok(Playfield::default()),
    }
}

/// Simulated frames in `seconds`; saturates instead of overflowing on huge inputs
fn frame_count(seconds: u64) -> u64 {
    seconds.saturating_mul(1_000_000) / FRAME.as_micros() as u64
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(12345);
    let seconds: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(30);

    let playfield = match load_playfield(args.first().map(String::as_str)) {
        Ok(playfield) => playfield,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = match Session::new(playfield, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Flap Gates (headless) running {}s with seed {}", seconds, seed);

    let frames = frame_count(seconds);
    let mut runs = 0u32;
    let mut best = 0u32;

    for _ in 0..frames {
        if autopilot::should_flap(&session.snapshot()) {
            session.activate();
        }
        session.advance(FRAME);

        for event in session.drain_events() {
            match event {
                GameEvent::Ended { cause, score } => {
                    runs += 1;
                    best = best.max(score);
                    log::info!("Run {} over: {:?}, score {}", runs, cause, score);
                }
                GameEvent::Passed { score } => log::debug!("Score {}", score),
                _ => {}
            }
        }
    }

    log::info!("{} finished run(s), best score {}", runs, best.max(session.score()));

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}

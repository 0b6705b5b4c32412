//! Ship Chase entry point
//!
//! Headless driver: runs the chase at a steady 60 fps frame rate and prints
//! the final state as JSON.
//!
//! Usage: `ship-chase [settings.json] [seconds]`

use ship_chase::sim::{ChaseState, FixedStepper, SimEvent};
use ship_chase::{Settings, SettingsError};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 10.0;

fn main() {
    env_logger::init();
    log::info!("Ship Chase (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("ship-chase: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SettingsError> {
    let mut args = std::env::args().skip(1);

    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let seconds = match args.next() {
        Some(s) => s
            .parse::<f32>()
            .ok()
            .filter(|s| *s >= 0.0)
            .ok_or_else(|| SettingsError::Invalid(format!("bad duration '{s}'")))?,
        None => DEFAULT_SECONDS,
    };

    let mut state = ChaseState::new(settings.seed, &settings);
    let mut stepper = FixedStepper::new();
    log::info!("Chase initialized with seed: {}", state.seed);

    let frames = (seconds / FRAME_DT).round() as u64;
    for frame in 0..frames {
        stepper.advance(&mut state, FRAME_DT);

        for event in state.drain_events() {
            match event {
                SimEvent::Caught { hunter, prey, at } => {
                    // Audio cue hook: a front end would play its catch sound here
                    log::info!("Frame {frame}: {hunter} caught {prey} at ({:.1}, {:.1})", at.x, at.y);
                }
            }
        }
    }

    log::info!(
        "Finished {} ticks ({} frames), {} catches",
        state.time_ticks,
        frames,
        state.catches
    );
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

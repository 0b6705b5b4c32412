//! Deterministic chase simulation
//!
//! Drives the steering core for a hunter and its prey:
//! - Fixed timestep only
//! - Seeded RNG only (wander jitter, respawn points)
//! - Stable iteration order (by ship ID)
//! - No rendering, audio or platform dependencies; catches surface as events

pub mod arena;
pub mod state;
pub mod stepper;
pub mod tick;

pub use arena::{Arena, within_catch};
pub use state::{Behavior, ChaseState, HUNTER_ID, PREY_ID, Ship, ShipId, SimEvent};
pub use stepper::FixedStepper;
pub use tick::tick;

//! Ship Chase - steering-driven pursuit on a wrap-around plane
//!
//! Core modules:
//! - `steering`: Vector math, kinematic integration, Seek and Wander behaviours
//! - `sim`: Deterministic two-ship driver (wrap-around, catch detection)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod settings;
pub mod sim;
pub mod steering;

pub use settings::{Settings, SettingsError};
pub use steering::{Kinematic, Seek, SteeringOutput, Vector2D, Wander};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the original frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame time fed to the stepper (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1024.0;
    pub const ARENA_HEIGHT: f32 = 768.0;
    /// Inset used when teleporting across an arena edge
    pub const WRAP_INSET: f32 = 0.01;

    /// Hunter (seek) tuning
    pub const HUNTER_MAX_ACCELERATION: f32 = 500.0;
    pub const HUNTER_MAX_SPEED: f32 = 220.0;

    /// Prey (wander) tuning - prey is 60 units/s slower than the hunter
    pub const PREY_MAX_ACCELERATION: f32 = 500.0;
    pub const PREY_MAX_ANGLE: f32 = 200.0;
    pub const PREY_MAX_SPEED: f32 = HUNTER_MAX_SPEED - 60.0;

    /// Velocity/rotation decay per second
    pub const DRAG: f32 = 0.5;

    /// Per-axis distance at which the hunter catches the prey
    pub const CATCH_DISTANCE: f32 = 10.0;
}

/// Reduce an orientation with a sign-preserving modulo, keeping it in (-2π, 2π).
///
/// Negative angles are never shifted into the positive range.
#[inline]
pub fn wrap_orientation(orientation: f32) -> f32 {
    orientation % std::f32::consts::TAU
}

/// Unit facing vector for an orientation. Orientation 0 faces +y.
#[inline]
pub fn as_vector(orientation: f32) -> Vec2 {
    Vec2::new(-orientation.sin(), orientation.cos())
}

/// Orientation that faces along `v`. Inverse of [`as_vector`] for nonzero `v`.
#[inline]
pub fn vector_orientation(v: Vec2) -> f32 {
    (-v.x).atan2(v.y)
}

//! Simulation settings
//!
//! Persisted as JSON. Missing fields fall back to the defaults, so a file only
//! needs the values it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading, saving or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Tuning for one ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipTuning {
    /// Speed cap after drag (units/s)
    pub max_speed: f32,
    /// Linear acceleration requested by the behaviour
    pub max_acceleration: f32,
    /// Wander only: largest angular acceleration per call
    #[serde(default)]
    pub max_angle: f32,
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for wander and respawn positions
    pub seed: u64,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ships ===
    /// The seeking ship
    pub hunter: ShipTuning,
    /// The wandering ship
    pub prey: ShipTuning,
    /// Velocity/rotation decay per second, shared by both ships
    pub drag: f32,

    // === Rules ===
    /// Per-axis distance at which the prey counts as caught
    pub catch_distance: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            hunter: ShipTuning {
                max_speed: HUNTER_MAX_SPEED,
                max_acceleration: HUNTER_MAX_ACCELERATION,
                max_angle: 0.0,
            },
            prey: ShipTuning {
                max_speed: PREY_MAX_SPEED,
                max_acceleration: PREY_MAX_ACCELERATION,
                max_angle: PREY_MAX_ANGLE,
            },
            drag: DRAG,

            catch_distance: CATCH_DISTANCE,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "arena must be positive, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if !(self.drag >= 0.0) {
            return Err(SettingsError::Invalid(format!("drag must be >= 0, got {}", self.drag)));
        }
        if !(self.catch_distance >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "catch distance must be >= 0, got {}",
                self.catch_distance
            )));
        }
        for (name, tuning) in [("hunter", &self.hunter), ("prey", &self.prey)] {
            if !(tuning.max_speed > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} max_speed must be positive, got {}",
                    tuning.max_speed
                )));
            }
            if !(tuning.max_acceleration >= 0.0 && tuning.max_angle >= 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} accelerations must be >= 0"
                )));
            }
        }
        Ok(())
    }
}

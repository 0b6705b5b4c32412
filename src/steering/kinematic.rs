//! Kinematic state and its integrator
//!
//! Semi-implicit Euler: velocity first, then position from the new velocity.
//! Post-processing (facing lock, drag, speed clamp) runs after the position
//! step but *before* orientation integrates, so the angular acceleration a
//! wandering ship requests still nudges its facing within the tick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Normalise, SteeringOutput, Vector2D, random_binomial};
use crate::{vector_orientation, wrap_orientation};

/// Largest per-tick drag fraction; `drag * dt` is clamped below 1 so drag can
/// never reverse the velocity.
const MAX_DAMPING: f32 = 1.0 - f32::EPSILON;

/// Full motion state of a ship
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kinematic {
    pub position: Vector2D,
    /// Facing angle (radians), kept in (-2π, 2π)
    pub orientation: f32,
    pub velocity: Vector2D,
    /// Angular velocity (radians/s)
    pub rotation: f32,
}

impl Kinematic {
    /// A stationary kinematic at `position` facing `orientation`
    pub fn new(position: Vector2D, orientation: f32) -> Self {
        Self {
            position,
            orientation,
            velocity: Vector2D::ZERO,
            rotation: 0.0,
        }
    }

    /// A kinematic with every component drawn from [`random_binomial`].
    ///
    /// Sampling helper for tests and scattered spawns; components lie in
    /// (-1, 1), so callers scale the position into their own space. The chase
    /// driver spawns from fixed marks and does not use it.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let position = Vector2D::new(random_binomial(rng), random_binomial(rng));
        let orientation = random_binomial(rng);
        let velocity = Vector2D::new(random_binomial(rng), random_binomial(rng));
        let rotation = random_binomial(rng);
        Self {
            position,
            orientation,
            velocity,
            rotation,
        }
    }

    /// Teleport to `position` and stop. Facing is kept.
    pub fn reset(&mut self, position: Vector2D) {
        self.position = position;
        self.velocity = Vector2D::ZERO;
        self.rotation = 0.0;
    }

    /// Integrate the steering accelerations over `dt` seconds.
    ///
    /// Negative `dt` is treated as zero.
    pub fn update(&mut self, steering: &SteeringOutput, max_speed: f32, drag: f32, dt: f32) {
        let dt = dt.max(0.0);

        self.velocity += steering.linear * dt;
        self.rotation += steering.angular * dt;

        self.position += self.velocity * dt;

        // Must precede the orientation step, see module docs
        self.post_process(drag, max_speed, dt);

        self.orientation += self.rotation * dt;
        self.orientation = wrap_orientation(self.orientation);
    }

    /// Facing lock, drag and speed clamp
    pub fn post_process(&mut self, drag: f32, max_speed: f32, dt: f32) {
        if self.velocity.length() > 0.0 {
            self.orientation = vector_orientation(self.velocity);
        }

        let damping = 1.0 - (drag * dt).clamp(0.0, MAX_DAMPING);
        self.velocity *= damping;
        self.rotation *= damping;

        if self.velocity.length() > max_speed {
            self.velocity.normalise();
            self.velocity *= max_speed;
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

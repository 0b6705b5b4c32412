//! Wander: thrust along the current facing while jittering the turn rate

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Kinematic, SteeringOutput};
use crate::as_vector;

/// Difference of two uniform samples in [0, 1).
///
/// Triangular on (-1, 1) and peaked at 0, so small turns are far more likely
/// than sharp ones.
#[inline]
pub fn random_binomial<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>() - rng.random::<f32>()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wander {
    /// Largest angular acceleration a single call can request
    pub max_angle: f32,
    pub max_acceleration: f32,
}

impl Wander {
    pub fn new(max_angle: f32, max_acceleration: f32) -> Self {
        Self {
            max_angle,
            max_acceleration,
        }
    }

    /// Full acceleration straight ahead plus a random angular kick.
    ///
    /// Draws two samples from `rng` per call.
    pub fn get_steering<R: Rng + ?Sized>(&self, character: &Kinematic, rng: &mut R) -> SteeringOutput {
        SteeringOutput {
            linear: as_vector(character.orientation) * self.max_acceleration,
            angular: random_binomial(rng) * self.max_angle,
        }
    }
}

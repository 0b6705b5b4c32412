//! Dynamic seek: full acceleration straight at the target's current position

use serde::{Deserialize, Serialize};

use super::{Kinematic, Normalise, SteeringOutput};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Seek {
    pub max_acceleration: f32,
}

impl Seek {
    pub fn new(max_acceleration: f32) -> Self {
        Self { max_acceleration }
    }

    /// Accelerate from `character` toward `target`.
    ///
    /// Coincident positions have no direction and produce zero steering.
    pub fn get_steering(&self, character: &Kinematic, target: &Kinematic) -> SteeringOutput {
        let mut linear = target.position - character.position;
        if !linear.normalise() {
            return SteeringOutput::ZERO;
        }

        SteeringOutput {
            linear: linear * self.max_acceleration,
            angular: 0.0,
        }
    }
}

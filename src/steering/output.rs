//! Steering output: the accelerations a behaviour requests for one tick

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

use super::Vector2D;

/// Linear and angular acceleration produced by a behaviour.
///
/// Always a rate of change of velocity/rotation, never a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SteeringOutput {
    /// Linear acceleration
    pub linear: Vector2D,
    /// Angular acceleration (radians/s²)
    pub angular: f32,
}

impl SteeringOutput {
    pub const ZERO: Self = Self {
        linear: Vector2D::ZERO,
        angular: 0.0,
    };

    pub fn new(linear: Vector2D, angular: f32) -> Self {
        Self { linear, angular }
    }

    pub fn is_zero(&self) -> bool {
        self.linear == Vector2D::ZERO && self.angular == 0.0
    }
}

impl AddAssign for SteeringOutput {
    fn add_assign(&mut self, rhs: Self) {
        self.linear += rhs.linear;
        self.angular += rhs.angular;
    }
}

impl Add for SteeringOutput {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Mul<SteeringOutput> for f32 {
    type Output = SteeringOutput;

    fn mul(self, rhs: SteeringOutput) -> SteeringOutput {
        SteeringOutput {
            linear: self * rhs.linear,
            angular: self * rhs.angular,
        }
    }
}

impl Mul<f32> for SteeringOutput {
    type Output = SteeringOutput;

    fn mul(self, rhs: f32) -> SteeringOutput {
        rhs * self
    }
}

impl Sum for SteeringOutput {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let s = SteeringOutput::default();
        assert!(s.is_zero());
        assert_eq!(s, SteeringOutput::ZERO);
    }

    #[test]
    fn test_accumulate_componentwise() {
        let mut s = SteeringOutput::new(Vector2D::new(1.0, 2.0), 0.5);
        s += SteeringOutput::new(Vector2D::new(-3.0, 1.0), 0.25);
        assert_eq!(s.linear, Vector2D::new(-2.0, 3.0));
        assert_eq!(s.angular, 0.75);
    }

    #[test]
    fn test_weighted_blend() {
        let seek = SteeringOutput::new(Vector2D::new(10.0, 0.0), 0.0);
        let wander = SteeringOutput::new(Vector2D::new(0.0, 4.0), 2.0);
        let blended: SteeringOutput = [0.5 * seek, wander * 0.25].into_iter().sum();
        assert_eq!(blended.linear, Vector2D::new(5.0, 1.0));
        assert_eq!(blended.angular, 0.5);
    }
}

//! Steering core
//!
//! Pure functions from kinematic state to accelerations, plus the integrator
//! that applies them. Behaviours hold only their tuning; the kinematics they
//! read are passed in on every call, and randomness comes from a caller-owned
//! RNG so runs can be seeded.

pub mod kinematic;
pub mod output;
pub mod seek;
pub mod vector;
pub mod wander;

pub use kinematic::Kinematic;
pub use output::SteeringOutput;
pub use seek::Seek;
pub use vector::{Normalise, Vector2D};
pub use wander::{Wander, random_binomial};

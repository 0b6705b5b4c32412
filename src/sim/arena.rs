//! Arena bounds: wrap-around and catch proximity

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::WRAP_INSET;

/// Rectangular arena spanning (0, 0) to (width, height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Teleport a position that touched an edge to just inside the opposite one.
    ///
    /// Returns true if either axis wrapped.
    pub fn wrap(&self, pos: &mut Vec2) -> bool {
        let wrapped_x = wrap_axis(&mut pos.x, self.width);
        let wrapped_y = wrap_axis(&mut pos.y, self.height);
        wrapped_x || wrapped_y
    }

    /// Random whole-unit point in [0, width] x [0, height]
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let x = rng.random_range(0..=self.width as u32);
        let y = rng.random_range(0..=self.height as u32);
        Vec2::new(x as f32, y as f32)
    }
}

/// Both edges are checked in turn, matching the low edge first
fn wrap_axis(value: &mut f32, max: f32) -> bool {
    let mut wrapped = false;
    if *value <= 0.0 {
        *value = max - WRAP_INSET;
        wrapped = true;
    }
    if *value >= max {
        *value = WRAP_INSET;
        wrapped = true;
    }
    wrapped
}

/// True when `a` and `b` are within `distance` on both axes (inclusive)
pub fn within_catch(a: Vec2, b: Vec2, distance: f32) -> bool {
    let d = a - b;
    d.x.abs() <= distance && d.y.abs() <= distance
}

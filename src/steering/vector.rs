//! 2D vector math for the steering core
//!
//! `Vector2D` is glam's `Vec2`; this module adds the guarded in-place
//! normalisation the integrator and behaviours rely on.

use glam::Vec2;

/// Ground-plane vector (value type, copied on every operation)
pub type Vector2D = Vec2;

/// In-place normalisation that refuses to divide by zero
pub trait Normalise {
    /// Scale to unit length. Returns `false` and leaves the vector untouched
    /// when its length is zero or not finite.
    fn normalise(&mut self) -> bool;
}

impl Normalise for Vec2 {
    #[inline]
    fn normalise(&mut self) -> bool {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            *self /= len;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_unit_length() {
        let mut v = Vector2D::new(3.0, 4.0);
        assert!(v.normalise());
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalise_zero_is_guarded() {
        let mut v = Vector2D::ZERO;
        assert!(!v.normalise());
        assert_eq!(v, Vector2D::ZERO);
    }

    #[test]
    fn test_scalar_multiply_commutes() {
        let v = Vector2D::new(1.5, -2.0);
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v - v, Vector2D::ZERO);
    }
}

//! Vector and point types for the intersection core.
//!
//! Arithmetic (addition, scaling, dot and cross products, lengths, component-wise
//! products) comes straight from [`glam::DVec3`]; this module only names the
//! types and adds the few helpers glam does not spell the way callers expect.

use glam::DVec3;

/// Double precision 3-vector used for directions and offsets.
pub type Vec3 = DVec3;

/// A position in world space. Same representation as [`Vec3`].
pub type Point3 = DVec3;

/// Threshold under which a component counts as zero in [`near_zero`].
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Normalize vector to unit length.
///
/// The input must have non-zero length. This is a caller precondition and is
/// only checked in debug builds.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    debug_assert!(v.length_squared() > 0.0, "zero-length vector");
    v / v.length()
}

/// True when every component is within [`NEAR_ZERO_EPSILON`] of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_vector_has_length_one() {
        let v = unit_vector(Vec3::new(3.0, 4.0, 12.0));
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.x - 3.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn arithmetic_matches_hand_computation() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);

        assert_eq!(a + b, Vec3::new(-1.0, 2.5, 7.0));
        assert_eq!(a - b, Vec3::new(3.0, 1.5, -1.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(a * b, Vec3::new(-2.0, 1.0, 12.0));
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.cross(b), Vec3::new(6.5, -10.0, 4.5));
        assert_eq!(a.length_squared(), 14.0);
    }

    #[test]
    fn near_zero_threshold() {
        assert!(near_zero(Vec3::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(Vec3::new(0.0, 1e-3, 0.0)));
    }
}

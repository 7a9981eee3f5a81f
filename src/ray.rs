//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction and carries the time
//! sample that moving primitives are evaluated at.

use crate::vec3::{Point3, Vec3};

/// Ray in 3D space defined by origin, direction and time.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized, but must not be the zero vector when the
    /// ray is used for intersection.
    pub direction: Vec3,

    /// Time sample of the ray, conventionally in `[0, 1]`.
    ///
    /// Moving primitives evaluate their position at this time, which is what
    /// produces motion blur when the caller jitters it per sample.
    pub time: f64,
}

impl Ray {
    /// Create a new ray at time 0.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self::with_time(origin, direction, 0.0)
    }

    /// Create a new ray with an explicit time sample.
    pub fn with_time(origin: Point3, direction: Vec3, time: f64) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_time_is_zero() {
        let r = Ray::new(Point3::ZERO, Vec3::X);
        assert_eq!(r.time, 0.0);
        assert_eq!(Ray::with_time(Point3::ZERO, Vec3::X, 0.75).time, 0.75);
    }

    #[test]
    fn at_evaluates_parametric_point() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, -2.0, 0.5));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(2.0), Point3::new(1.0, -2.0, 4.0));
        assert_eq!(r.at(-1.0), Point3::new(1.0, 4.0, 2.5));
    }
}

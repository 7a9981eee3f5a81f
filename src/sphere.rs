//! Sphere primitive for ray tracing.
//!
//! Stationary and moving spheres share one representation: the center is a
//! [`CenterPath`] evaluated at the ray's time, and a stationary sphere simply
//! has zero velocity.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::MaterialId;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Linear path followed by a sphere center over the shutter interval.
///
/// `position(0) == origin` and `position(1) == origin + velocity`, so a moving
/// sphere built from `center1` and `center2` sweeps from one to the other as
/// time goes from 0 to 1. Times outside `[0, 1]` extrapolate along the same line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterPath {
    /// Center at time 0.
    pub origin: Point3,
    /// Displacement over one unit of time.
    pub velocity: Vec3,
}

impl CenterPath {
    /// A center that never moves.
    pub fn stationary(center: Point3) -> Self {
        Self {
            origin: center,
            velocity: Vec3::ZERO,
        }
    }

    /// A center moving from `center1` at time 0 to `center2` at time 1.
    pub fn linear(center1: Point3, center2: Point3) -> Self {
        Self {
            origin: center1,
            velocity: center2 - center1,
        }
    }

    /// Center position at `time`.
    #[inline]
    pub fn position(&self, time: f64) -> Point3 {
        self.origin + time * self.velocity
    }
}

/// Sphere primitive defined by center path, radius, and material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: CenterPath,
    radius: f64,
    material: MaterialId,
}

impl Sphere {
    /// Create a stationary sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Point3, radius: f64, material: MaterialId) -> Self {
        Self::along(CenterPath::stationary(center), radius, material)
    }

    /// Create a sphere moving from `center1` (time 0) to `center2` (time 1).
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn moving(center1: Point3, center2: Point3, radius: f64, material: MaterialId) -> Self {
        Self::along(CenterPath::linear(center1, center2), radius, material)
    }

    /// Create a sphere following an arbitrary linear center path.
    pub fn along(center: CenterPath, radius: f64, material: MaterialId) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Center of the sphere at the given time.
    pub fn center_at(&self, time: f64) -> Point3 {
        self.center.position(time)
    }

    /// Path followed by the center.
    pub fn center_path(&self) -> CenterPath {
        self.center
    }

    /// Radius of the sphere (never negative).
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Material handle attached to every hit on this sphere.
    pub fn material(&self) -> MaterialId {
        self.material
    }

    /// True if the center moves over time.
    pub fn is_moving(&self) -> bool {
        self.center.velocity != Vec3::ZERO
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        debug_assert!(r.direction != Vec3::ZERO, "zero-direction ray");

        // A degenerate sphere has no surface to shade
        if self.radius == 0.0 {
            return None;
        }

        let current_center = self.center.position(r.time);
        let oc = current_center - r.origin;

        // Half-coefficient form of the quadratic
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        let mut rec = HitRecord {
            p,
            normal: Vec3::ZERO,
            t: root,
            front_face: false,
            material: self.material,
        };
        let outward_normal = (p - current_center) / self.radius;
        rec.set_face_normal(r, outward_normal);

        Some(rec)
    }
}

//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] trait implemented by every primitive, the
//! [`HitRecord`] it produces, and [`HittableList`], the aggregate that keeps
//! the nearest hit across its children.

use std::sync::Arc;

use crate::interval::Interval;
use crate::material::MaterialId;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, and the material
/// handle needed for shading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Point3,
    /// Surface normal at the intersection point (unit vector, facing the ray)
    pub normal: Vec3,
    /// Ray parameter of the intersection point
    pub t: f64,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: MaterialId,
}

impl HitRecord {
    /// Set surface normal and determine front/back face.
    ///
    /// `outward_normal` must be unit length. The stored normal always points
    /// against the incident ray.
    #[inline]
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so a read-only scene can be queried
/// from many threads at once.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection strictly inside `ray_t`.
    ///
    /// Returns `None` when there is no intersection in range; a miss is not an
    /// error.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Children are shared, so the
/// same primitive may be placed in several lists.
#[derive(Clone, Default)]
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Create a new list with a single hittable object
    pub fn with_object(object: Arc<dyn Hittable>) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the list has no children.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Direct children in insertion order.
    pub fn objects(&self) -> &[Arc<dyn Hittable>] {
        &self.objects
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut nearest = None;

        // Every child is tested; the upper bound shrinks to the best t so far
        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                nearest = Some(rec);
            }
        }

        nearest
    }
}

impl FromIterator<Arc<dyn Hittable>> for HittableList {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Hittable>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Extend<Arc<dyn Hittable>> for HittableList {
    fn extend<I: IntoIterator<Item = Arc<dyn Hittable>>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}

impl std::fmt::Debug for HittableList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HittableList")
            .field("objects", &self.objects.len())
            .finish()
    }
}

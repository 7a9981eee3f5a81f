//! Demo scene used by the probe binary.
//!
//! A ground sphere, a jittered 22x22 grid of small spheres and three large
//! feature spheres. With motion enabled the small diffuse spheres bounce
//! upward over the shutter interval.

use std::sync::Arc;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::hittable::HittableList;
use crate::material::Materials;
use crate::random;
use crate::sphere::Sphere;
use crate::vec3::{Point3, Vec3};

/// RGB color stored as a vector.
pub type Color = Vec3;

/// Surface description attached to demo spheres.
///
/// The intersection core only carries handles to these; they are kept here so
/// a shading stage has something to resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Matte surface.
    Diffuse {
        /// Surface color/reflectance.
        albedo: Color,
    },
    /// Specular surface.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness (0.0 = mirror, 1.0 = rough).
        fuzz: f64,
    },
    /// Transparent surface.
    Glass {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f64,
    },
}

impl Surface {
    /// Short name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Surface::Diffuse { .. } => "diffuse",
            Surface::Metal { .. } => "metal",
            Surface::Glass { .. } => "glass",
        }
    }
}

/// Geometry plus the materials its handles point into.
#[derive(Debug)]
pub struct Scene {
    /// Root aggregate queried by the camera.
    pub world: HittableList,
    /// Arena resolving the material handles stored in `world`.
    pub materials: Materials<Surface>,
    /// Number of spheres whose center moves over time.
    pub moving_spheres: usize,
}

/// Build the book cover scene with random spheres.
///
/// The layout only depends on `seed` and `motion`. The generator is local to
/// this call, so the thread-local sampling stream in [`random`] is untouched.
pub fn book_cover(seed: u64, motion: bool) -> Scene {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let mut world = HittableList::new();
    let mut materials = Materials::new();
    let mut moving_spheres = 0;

    // Ground sphere
    let ground = materials.add(Surface::Diffuse {
        albedo: Color::new(0.5, 0.5, 0.5),
    });
    let ground_sphere = Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground);
    world.add(Arc::new(ground_sphere));

    // Generate 22x22 grid of small spheres
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat: f64 = rng.random();
            let center = Point3::new(
                a as f64 + 0.9 * rng.random::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.random::<f64>(),
            );

            // Don't place spheres too close to the large feature spheres
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                let tint = random::random_vec3_with(&mut rng);
                let albedo = tint * random::random_vec3_with(&mut rng);
                let material = materials.add(Surface::Diffuse { albedo });
                let sphere = if motion {
                    moving_spheres += 1;
                    let center2 = center + Vec3::new(0.0, rng.random_range(0.0..0.5), 0.0);
                    Sphere::moving(center, center2, 0.2, material)
                } else {
                    Sphere::new(center, 0.2, material)
                };
                world.add(Arc::new(sphere));
            } else if choose_mat < 0.95 {
                let albedo = random::random_vec3_range_with(&mut rng, 0.5, 1.0);
                let fuzz = rng.random_range(0.0..0.5);
                let material = materials.add(Surface::Metal { albedo, fuzz });
                world.add(Arc::new(Sphere::new(center, 0.2, material)));
            } else {
                let material = materials.add(Surface::Glass {
                    refraction_index: 1.5,
                });
                world.add(Arc::new(Sphere::new(center, 0.2, material)));
            }
        }
    }

    // Three large feature spheres
    let glass = materials.add(Surface::Glass {
        refraction_index: 1.5,
    });
    let glass_sphere = Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass);
    world.add(Arc::new(glass_sphere));

    let matte = materials.add(Surface::Diffuse {
        albedo: Color::new(0.4, 0.2, 0.1),
    });
    let matte_sphere = Sphere::new(Point3::new(-4.0, 1.0, 0.0), 1.0, matte);
    world.add(Arc::new(matte_sphere));

    let mirror = materials.add(Surface::Metal {
        albedo: Color::new(0.7, 0.6, 0.5),
        fuzz: 0.0,
    });
    let mirror_sphere = Sphere::new(Point3::new(4.0, 1.0, 0.0), 1.0, mirror);
    world.add(Arc::new(mirror_sphere));

    debug!(
        "Scene built: {} spheres ({} moving), {} materials",
        world.len(),
        moving_spheres,
        materials.len()
    );

    Scene {
        world,
        materials,
        moving_spheres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::Hittable;
    use crate::interval::Interval;
    use crate::ray::Ray;

    fn search() -> Interval {
        Interval::new(0.001, f64::INFINITY)
    }

    #[test]
    fn every_sphere_has_a_resolvable_material() {
        let scene = book_cover(3, true);
        // Ground + 3 feature spheres + one material per small sphere
        assert_eq!(scene.materials.len(), scene.world.len());
        assert!(scene.world.len() > 4);
        assert!(scene.moving_spheres > 0);
    }

    #[test]
    fn static_scene_has_no_moving_spheres() {
        let scene = book_cover(3, false);
        assert_eq!(scene.moving_spheres, 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let first = book_cover(11, true);
        let second = book_cover(11, true);
        assert_eq!(first.world.len(), second.world.len());

        let origin = Point3::new(13.0, 2.0, 3.0);
        let r = Ray::with_time(origin, Vec3::new(-13.0, -1.8, -3.0), 0.5);
        let expected = first.world.hit(&r, search());
        assert!(expected.is_some());
        assert_eq!(second.world.hit(&r, search()), expected);
    }

    #[test]
    fn building_a_scene_leaves_thread_sampling_alone() {
        book_cover(17, true);
        let after_first = random::random_f64();
        book_cover(17, true);
        let after_second = random::random_f64();

        // A reset thread stream would hand out the same value twice
        assert_ne!(after_first, after_second);
    }

    #[test]
    fn straight_down_hits_the_ground() {
        let scene = book_cover(5, false);
        // Outside the sphere grid; the ground curves away below y = 0 here
        let r = Ray::new(Point3::new(30.0, 10.0, 30.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = scene.world.hit(&r, search()).unwrap();

        let ground_y = (1000.0f64 * 1000.0 - 30.0 * 30.0 * 2.0).sqrt() - 1000.0;
        assert!((rec.t - (10.0 - ground_y)).abs() < 1e-6);
        assert!(rec.front_face);
        let surface = scene.materials.get(rec.material).unwrap();
        assert_eq!(surface.label(), "diffuse");
    }
}

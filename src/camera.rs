//! Pinhole probe camera.
//!
//! Casts one ray through the center of every cell of a `image_width` x
//! `image_height` grid and tallies what the scene reports. It exercises the
//! intersection core the way a renderer would, without shading.

use std::collections::BTreeMap;
use std::error::Error;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::material::MaterialId;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{unit_vector, Point3, Vec3};

const PROGRESS_TEMPLATE: &str = "{bar:40} {pos}/{len} ETA: {eta}";

/// Camera for ray generation and scene probing.
///
/// The public fields may be changed between calls to [`Camera::probe`]; the
/// viewport is derived from them again at the start of every pass.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Grid width in cells
    pub image_width: u32,
    /// Grid height in cells
    pub image_height: u32,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Point camera is looking from (camera position)
    pub lookfrom: Point3,
    /// Point camera is looking at (look target)
    pub lookat: Point3,
    /// Camera-relative "up" direction vector
    pub vup: Vec3,
    /// Shutter open time
    pub time0: f64,
    /// Shutter close time
    pub time1: f64,
    /// Accepted range of ray parameters
    pub ray_t: Interval,

    /// Camera position in world space (same as lookfrom)
    center: Point3,
    /// World position of the top-left cell center
    pixel00_loc: Point3,
    /// Offset vector from cell to cell horizontally
    pixel_delta_u: Vec3,
    /// Offset vector from cell to cell vertically
    pixel_delta_v: Vec3,
}

/// Summary of one probe pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeReport {
    /// Rays cast
    pub rays: u64,
    /// Rays that hit something
    pub hits: u64,
    /// Hits on the inside of a surface
    pub back_faces: u64,
    /// Smallest hit distance seen
    pub nearest_t: Option<f64>,
    /// Largest hit distance seen
    pub farthest_t: Option<f64>,
    /// Sum of hit distances, for the mean
    pub t_sum: f64,
    /// Hits per material handle
    pub per_material: BTreeMap<MaterialId, u64>,
}

impl ProbeReport {
    /// Rays that hit nothing.
    pub fn misses(&self) -> u64 {
        self.rays - self.hits
    }

    /// Mean hit distance, if anything was hit.
    pub fn mean_t(&self) -> Option<f64> {
        (self.hits > 0).then(|| self.t_sum / self.hits as f64)
    }

    fn record(&mut self, r: &Ray, world: &dyn Hittable, ray_t: Interval) {
        self.rays += 1;
        let Some(rec) = world.hit(r, ray_t) else {
            return;
        };

        self.hits += 1;
        if !rec.front_face {
            self.back_faces += 1;
        }
        self.nearest_t = Some(self.nearest_t.map_or(rec.t, |t| t.min(rec.t)));
        self.farthest_t = Some(self.farthest_t.map_or(rec.t, |t| t.max(rec.t)));
        self.t_sum += rec.t;
        *self.per_material.entry(rec.material).or_insert(0) += 1;
    }

    /// Combine two partial reports.
    pub fn merge(mut self, other: ProbeReport) -> ProbeReport {
        self.rays += other.rays;
        self.hits += other.hits;
        self.back_faces += other.back_faces;
        self.nearest_t = match (self.nearest_t, other.nearest_t) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.farthest_t = match (self.farthest_t, other.farthest_t) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.t_sum += other.t_sum;
        for (material, count) in other.per_material {
            *self.per_material.entry(material).or_insert(0) += count;
        }
        self
    }
}

impl Camera {
    /// Creates a new camera with default settings.
    ///
    /// Default: 100x100 grid, 90 degree FOV, instantaneous shutter at time 0.
    pub fn new() -> Self {
        Self {
            image_width: 100,
            image_height: 100,
            vfov: 90.0,
            lookfrom: Point3::new(0.0, 0.0, 0.0),
            lookat: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            time0: 0.0,
            time1: 0.0,
            ray_t: Interval::new(0.001, f64::INFINITY),
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
        }
    }

    /// Probe the scene with one ray per grid cell.
    ///
    /// Rows are traced in parallel; the scene is only read.
    pub fn probe(&mut self, world: &dyn Hittable) -> Result<ProbeReport, Box<dyn Error>> {
        self.initialize();

        info!(
            "Probing scene using {} CPU cores...",
            rayon::current_num_threads()
        );
        let probe_start = std::time::Instant::now();
        let pb = ProgressBar::new(u64::from(self.image_width) * u64::from(self.image_height));
        let style = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE)?;
        pb.set_style(style);

        let camera = &*self;
        let report = (0..camera.image_height)
            .into_par_iter()
            .map(|j| {
                let mut row = ProbeReport::default();
                for i in 0..camera.image_width {
                    let r = camera.get_ray(i, j);
                    row.record(&r, world, camera.ray_t);
                }
                pb.inc(u64::from(camera.image_width));
                row
            })
            .reduce(ProbeReport::default, ProbeReport::merge);

        pb.finish();
        info!("Probe finished in {:.2?}", probe_start.elapsed());

        Ok(report)
    }

    /// Derive the viewport from the current public settings.
    fn initialize(&mut self) {
        self.image_width = self.image_width.max(1);
        self.image_height = self.image_height.max(1);
        self.center = self.lookfrom;

        // Viewport on the plane one unit in front of the camera
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * (self.image_width as f64 / self.image_height as f64);

        // Calculate the u,v,w unit basis vectors for the camera coordinate frame
        let w = unit_vector(self.lookfrom - self.lookat);
        let u = unit_vector(self.vup.cross(w));
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;

        self.pixel_delta_u = viewport_u / self.image_width as f64;
        self.pixel_delta_v = viewport_v / self.image_height as f64;

        let viewport_upper_left = self.center - w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Ray through the center of cell (i, j) with a time sample from the shutter.
    fn get_ray(&self, i: u32, j: u32) -> Ray {
        let pixel_center = self.pixel00_loc
            + (i as f64 * self.pixel_delta_u)
            + (j as f64 * self.pixel_delta_v);
        let ray_time = if self.time1 > self.time0 {
            random::random_f64_range(self.time0, self.time1)
        } else {
            self.time0
        };

        Ray::with_time(self.center, pixel_center - self.center, ray_time)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::hittable::HittableList;
    use crate::material::Materials;
    use crate::sphere::Sphere;

    fn small_camera() -> Camera {
        let mut camera = Camera::new();
        camera.image_width = 16;
        camera.image_height = 9;
        camera
    }

    #[test]
    fn center_ray_looks_at_target() {
        let mut camera = Camera::new();
        camera.image_width = 3;
        camera.image_height = 3;
        camera.initialize();

        let r = camera.get_ray(1, 1);
        assert_eq!(r.origin, camera.lookfrom);
        let dir = unit_vector(r.direction);
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
        assert_eq!(r.time, 0.0);
    }

    #[test]
    fn every_grid_cell_casts_one_ray() {
        let mut materials = Materials::new();
        let target = materials.add("target");
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, target);
        let world = HittableList::with_object(Arc::new(sphere));

        let mut camera = small_camera();
        let report = camera.probe(&world).unwrap();

        assert_eq!(report.rays, 16 * 9);
        assert!(report.hits > 0);
        assert!(report.misses() > 0);
        assert_eq!(report.back_faces, 0);
        assert_eq!(report.per_material.get(&target), Some(&report.hits));

        let nearest = report.nearest_t.unwrap();
        let farthest = report.farthest_t.unwrap();
        let mean = report.mean_t().unwrap();
        assert!(nearest > 0.0);
        assert!(mean >= nearest && mean <= farthest);
    }

    #[test]
    fn settings_changed_between_passes_take_effect() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, MaterialId::default());
        let world = HittableList::with_object(Arc::new(sphere));

        let mut camera = small_camera();
        let facing = camera.probe(&world).unwrap();
        assert!(facing.hits > 0);

        // Turn around: the sphere is now behind the camera
        camera.lookat = Point3::new(0.0, 0.0, 1.0);
        camera.image_width = 8;
        let away = camera.probe(&world).unwrap();
        assert_eq!(away.rays, 8 * 9);
        assert_eq!(away.hits, 0);
    }

    #[test]
    fn shutter_samples_stay_in_range() {
        let mut camera = Camera::new();
        camera.time0 = 0.25;
        camera.time1 = 0.75;
        camera.initialize();

        for _ in 0..200 {
            let t = camera.get_ray(10, 20).time;
            assert!((0.25..=0.75).contains(&t));
        }
    }

    #[test]
    fn merge_combines_extremes() {
        let a = ProbeReport {
            rays: 2,
            hits: 1,
            nearest_t: Some(4.0),
            farthest_t: Some(4.0),
            t_sum: 4.0,
            ..ProbeReport::default()
        };
        let b = ProbeReport {
            rays: 3,
            hits: 2,
            back_faces: 1,
            nearest_t: Some(1.0),
            farthest_t: Some(9.0),
            t_sum: 10.0,
            ..ProbeReport::default()
        };

        let merged = a.merge(b).merge(ProbeReport::default());
        assert_eq!(merged.rays, 5);
        assert_eq!(merged.misses(), 2);
        assert_eq!(merged.back_faces, 1);
        assert_eq!(merged.nearest_t, Some(1.0));
        assert_eq!(merged.farthest_t, Some(9.0));
        assert_eq!(merged.mean_t(), Some(14.0 / 3.0));
    }
}

use std::collections::BTreeMap;

use clap::Parser;
use log::{debug, error, info};

mod cli;
mod logger;

use chromacore::camera::{Camera, ProbeReport};
use chromacore::interval::Interval;
use chromacore::scene::{self, Scene};
use chromacore::vec3::{Point3, Vec3};
use cli::Args;
use logger::init_logger;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_DATE: &str = env!("GIT_DATE");

/// Create camera for the book cover shot
fn create_camera(args: &Args) -> Camera {
    let mut camera = Camera::new();
    camera.image_width = args.width;
    camera.image_height = args.height;
    camera.vfov = 20.0;
    camera.lookfrom = Point3::new(13.0, 2.0, 3.0);
    camera.lookat = Point3::new(0.0, 0.0, 0.0);
    camera.vup = Vec3::new(0.0, 1.0, 0.0);
    camera.time0 = args.time0;
    camera.time1 = args.time1;
    camera.ray_t = Interval::new(args.t_min, args.t_max);
    camera
}

/// Log the probe summary, resolving material handles through the scene.
fn log_report(report: &ProbeReport, scene: &Scene) {
    let (rays, hits, misses) = (report.rays, report.hits, report.misses());
    info!("Rays: {rays}, hits: {hits}, misses: {misses}");
    info!("Back-face hits: {}", report.back_faces);

    let extremes = report.nearest_t.zip(report.farthest_t);
    if let (Some((nearest, farthest)), Some(mean)) = (extremes, report.mean_t()) {
        info!("Hit distance: nearest {nearest:.4}, mean {mean:.4}, farthest {farthest:.4}");
    }

    let mut per_label = BTreeMap::<&str, u64>::new();
    for (&material, &count) in &report.per_material {
        match scene.materials.get(material) {
            Some(surface) => *per_label.entry(surface.label()).or_insert(0) += count,
            None => debug!("Hit on unknown material {:?}", material),
        }
    }
    for (label, count) in per_label {
        info!("  {:<8} {:>8}", label, count);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    args.validate()?;

    info!(
        "Probe grid: {}x{}, shutter [{}, {}], hit range ({}, {})",
        args.width, args.height, args.time0, args.time1, args.t_min, args.t_max
    );

    let scene = scene::book_cover(args.seed, !args.static_scene);
    info!(
        "Scene: {} spheres, {} moving, {} materials",
        scene.world.len(),
        scene.moving_spheres,
        scene.materials.len()
    );

    let mut camera = create_camera(args);
    let report = camera.probe(&scene.world)?;
    log_report(&report, &scene);

    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("ChromaCore - Git Version {GIT_HASH} ({GIT_DATE})");

    if let Err(e) = run(&args) {
        error!("Probe failed: {}", e);
        std::process::exit(1);
    }
}

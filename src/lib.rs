//! ChromaCore ray intersection engine
//!
//! Rays, intervals and the [`Hittable`](hittable::Hittable) capability, with a
//! sphere primitive that supports linear motion for motion blur. The demo scene
//! and probe camera used by the `chromacore` binary live here too.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod random;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod vec3;

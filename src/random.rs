//! Random number generation for scene setup and ray sampling.
//!
//! Provides a thread-local ChaCha20 PRNG for per-ray sampling. Code that needs
//! a reproducible stream (the demo scene generator) owns its own seeded
//! generator and uses the `*_with` helpers instead.

use std::cell::RefCell;

use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::vec3::Vec3;

thread_local! {
    /// Thread-local ChaCha20 PRNG for quality random numbers.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range(min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64()
}

/// Generate random vector with components in [0.0, 1.0) from `rng`.
pub fn random_vec3_with<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.random(), rng.random(), rng.random())
}

/// Generate random vector with components in [min, max) from `rng`.
pub fn random_vec3_range_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Vec3 {
    Vec3::splat(min) + Vec3::splat(max - min) * random_vec3_with(rng)
}

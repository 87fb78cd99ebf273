//! Random sampling helpers for seeding particles and bodies.
//!
//! Every simulation owns one [`Sampler`]. Seed it explicitly for reproducible
//! runs; otherwise a seed is taken from the clock.

use glam::{DVec2, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Seeded random source with the disk/annulus sampling the simulations need.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    /// Create a sampler with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a sampler seeded from the clock, or from `seed` if given.
    pub fn new(seed: Option<u64>) -> Self {
        Self::seeded(seed.unwrap_or_else(clock_seed))
    }

    /// Random f64 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Random f64 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..max)
    }

    /// Random angle in `[0, 2π)`.
    #[inline]
    pub fn random_angle(&mut self) -> f64 {
        self.random() * TAU
    }

    /// Random point inside a disk, uniform over its area.
    pub fn random_in_disk(&mut self, center: Vec2, radius: f32) -> Vec2 {
        let theta = self.random_angle() as f32;
        // sqrt for uniform disk
        let r = (self.random() as f32).sqrt() * radius;
        center + Vec2::new(r * theta.cos(), r * theta.sin())
    }

    /// Random polar position between `min_radius` and `max_radius`.
    ///
    /// The radius is `sqrt(u) * (max - min) + min`. Returns the angle together
    /// with the position so callers can build the tangent direction.
    pub fn random_in_annulus(&mut self, min_radius: f64, max_radius: f64) -> (f64, DVec2) {
        let theta = self.random_angle();
        let r = self.random().sqrt() * (max_radius - min_radius) + min_radius;
        (theta, DVec2::new(r * theta.cos(), r * theta.sin()))
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

//! Field-line tracing: particles advected along a static field grid.

use glam::Vec2;
use rayon::prelude::*;

use crate::error::ConfigError;
use crate::field::{FieldConfig, FieldGrid};
use crate::spawn::Sampler;

/// Parameters for a [`FieldTracer`].
#[derive(Clone, Debug, PartialEq)]
pub struct TracerConfig {
    /// Field the particles follow.
    pub field: FieldConfig,
    /// Number of traced particles.
    pub particle_count: usize,
    /// Time step per advection.
    pub dt: f32,
    /// Multiplier on `dt`; the distance moved per step is `dt * speed_scale`.
    pub speed_scale: f32,
    /// Seed disk radius as a fraction of the grid resolution.
    pub seed_radius_fraction: f32,
    /// RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl TracerConfig {
    /// Defaults: 512 grid, 1000 particles, `dt = 0.003`, `speed_scale = 100`,
    /// seed disk radius `0.4 * resolution`.
    pub fn new() -> Self {
        Self {
            field: FieldConfig::new(512),
            particle_count: 1000,
            dt: 0.003,
            speed_scale: 100.0,
            seed_radius_fraction: 0.4,
            seed: None,
        }
    }

    pub fn with_field(mut self, field: FieldConfig) -> Self {
        self.field = field;
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_speed_scale(mut self, speed_scale: f32) -> Self {
        self.speed_scale = speed_scale;
        self
    }

    pub fn with_seed_radius_fraction(mut self, fraction: f32) -> Self {
        self.seed_radius_fraction = fraction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Distance a particle moves in one advection step.
    #[inline]
    pub fn step_length(&self) -> f32 {
        self.dt * self.speed_scale
    }

    /// Centre of the seed disk (the grid centre).
    #[inline]
    pub fn seed_center(&self) -> Vec2 {
        Vec2::splat(self.field.resolution as f32 / 2.0)
    }

    #[inline]
    pub fn seed_radius(&self) -> f32 {
        self.seed_radius_fraction * self.field.resolution as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()?;
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.dt <= 0.0 {
            return Err(ConfigError::NotPositive { name: "dt", value: self.dt as f64 });
        }
        if self.speed_scale <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "speed_scale",
                value: self.speed_scale as f64,
            });
        }
        // A seed disk reaching the grid edge could spawn particles out of bounds.
        if self.seed_radius_fraction <= 0.0 || self.seed_radius_fraction >= 0.5 {
            return Err(ConfigError::EmptyRange {
                name: "seed_radius_fraction",
                min: 0.0,
                max: 0.5,
            });
        }
        Ok(())
    }
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned state of a field-line tracing run.
pub struct FieldTracer {
    config: TracerConfig,
    grid: FieldGrid,
    particles: Vec<Vec2>,
    sampler: Sampler,
    respawned: Vec<usize>,
    respawn_count: u64,
}

impl FieldTracer {
    /// Compute the field and seed every particle in the disk.
    pub fn new(config: TracerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = FieldGrid::from_line_current(&config.field);
        let mut sampler = Sampler::new(config.seed);
        let center = config.seed_center();
        let radius = config.seed_radius();
        let particles = (0..config.particle_count)
            .map(|_| sampler.random_in_disk(center, radius))
            .collect();

        log::info!(
            "field tracer: {} particles on a {}x{} grid",
            config.particle_count,
            grid.width(),
            grid.height()
        );

        Ok(Self {
            config,
            grid,
            particles,
            sampler,
            respawned: Vec::new(),
            respawn_count: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &FieldGrid {
        &self.grid
    }

    #[inline]
    pub fn particles(&self) -> &[Vec2] {
        &self.particles
    }

    /// Replace particle positions, e.g. to place tracers by hand.
    ///
    /// The population is fixed for the life of the tracer, so `particles`
    /// must have exactly `particle_count` entries.
    pub fn set_particles(&mut self, particles: Vec<Vec2>) -> Result<(), ConfigError> {
        if particles.len() != self.particles.len() {
            return Err(ConfigError::PopulationMismatch {
                expected: self.particles.len(),
                actual: particles.len(),
            });
        }
        self.particles = particles;
        Ok(())
    }

    /// Total respawns since construction.
    #[inline]
    pub fn respawn_count(&self) -> u64 {
        self.respawn_count
    }

    /// Advance every particle one step along the normalized field.
    ///
    /// Particles that end up outside the grid are moved to a fresh random
    /// point in the seed disk. Returns how many were respawned.
    pub fn step(&mut self) -> usize {
        let grid = &self.grid;
        let step_length = self.config.step_length();

        self.respawned.clear();
        self.respawned.par_extend(
            self.particles
                .par_iter_mut()
                .enumerate()
                .filter_map(|(i, pos)| {
                    if let Some(b) = grid.sample(*pos) {
                        if b != Vec2::ZERO {
                            *pos += b.normalize() * step_length;
                        }
                    }
                    (!grid.contains(*pos)).then_some(i)
                }),
        );

        // Respawn on one thread so seeded runs stay reproducible.
        let center = self.config.seed_center();
        let radius = self.config.seed_radius();
        for &i in &self.respawned {
            self.particles[i] = self.sampler.random_in_disk(center, radius);
        }

        let n = self.respawned.len();
        if n > 0 {
            log::trace!("respawned {} particles", n);
        }
        self.respawn_count += n as u64;
        n
    }
}

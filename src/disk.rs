//! Gravitational N-body disks.
//!
//! Bodies start on circular orbits in an annulus around the origin, either
//! self-gravitating only or around a dominant central body at index 0.
//!
//! ```ignore
//! let mut disk = DiskSystem::new(DiskConfig::new().with_central_body(CentralBody::new(1e30)))?;
//! loop {
//!     disk.advance_frame();
//! }
//! ```

use glam::DVec2;

use crate::body::{circular_orbit_speed, Body, G};
use crate::diagnostics::Diagnostics;
use crate::error::ConfigError;
use crate::gravity::{accumulate_accelerations, GravityParams};
use crate::integrator::symplectic_euler;
use crate::spawn::Sampler;

/// The dominant mass at the centre of a disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    pub mass: f64,
    /// Held at the origin with zero velocity instead of being integrated.
    pub pinned: bool,
}

impl CentralBody {
    /// A pinned central body of the given mass.
    pub fn new(mass: f64) -> Self {
        Self { mass, pinned: true }
    }

    /// Let the central body move under the same update as everything else.
    pub fn free(mut self) -> Self {
        self.pinned = false;
        self
    }
}

/// Parameters for a [`DiskSystem`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiskConfig {
    /// Orbiting bodies, not counting the central body.
    pub body_count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Mass used for orbital speeds when there is no central body.
    pub reference_mass: f64,
    /// Orbiting masses are drawn uniformly from `[min, max)`.
    pub mass_range: (f64, f64),
    pub central_body: Option<CentralBody>,
    pub gravity: GravityParams,
    pub dt: f64,
    /// Integration steps per rendered frame.
    pub substeps: u32,
    /// RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl DiskConfig {
    /// Defaults: 1000 bodies between `1e10` and `5e10`, reference mass `1e24`,
    /// masses in `[1e22, 1.1e23)`, softening `1e3`, `dt = 1e4`, 5 sub-steps.
    pub fn new() -> Self {
        Self {
            body_count: 1000,
            min_radius: 1e10,
            max_radius: 5e10,
            reference_mass: 1e24,
            mass_range: (1e22, 1e22 + 1e23),
            central_body: None,
            gravity: GravityParams::new(G, 1e3),
            dt: 1e4,
            substeps: 5,
            seed: None,
        }
    }

    pub fn with_body_count(mut self, count: usize) -> Self {
        self.body_count = count;
        self
    }

    pub fn with_radii(mut self, min_radius: f64, max_radius: f64) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    pub fn with_reference_mass(mut self, mass: f64) -> Self {
        self.reference_mass = mass;
        self
    }

    pub fn with_mass_range(mut self, min: f64, max: f64) -> Self {
        self.mass_range = (min, max);
        self
    }

    pub fn with_central_body(mut self, central: CentralBody) -> Self {
        self.central_body = Some(central);
        self
    }

    pub fn with_softening(mut self, softening: f64) -> Self {
        self.gravity.softening = softening;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mass the orbital speeds are computed against.
    pub fn orbit_mass(&self) -> f64 {
        self.central_body.map_or(self.reference_mass, |c| c.mass)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.body_count == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.min_radius <= 0.0 {
            return Err(ConfigError::NotPositive { name: "min_radius", value: self.min_radius });
        }
        if self.min_radius >= self.max_radius {
            return Err(ConfigError::EmptyRange {
                name: "radius",
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        let (min_mass, max_mass) = self.mass_range;
        if min_mass <= 0.0 {
            return Err(ConfigError::NotPositive { name: "mass", value: min_mass });
        }
        if min_mass >= max_mass {
            return Err(ConfigError::EmptyRange { name: "mass", min: min_mass, max: max_mass });
        }
        if self.orbit_mass() <= 0.0 {
            return Err(ConfigError::NotPositive { name: "orbit_mass", value: self.orbit_mass() });
        }
        validate_stepping(&self.gravity, self.dt, self.substeps)
    }
}

/// Checks shared by configs and explicitly built systems.
fn validate_stepping(gravity: &GravityParams, dt: f64, substeps: u32) -> Result<(), ConfigError> {
    if gravity.softening < 0.0 {
        return Err(ConfigError::Negative { name: "softening", value: gravity.softening });
    }
    if dt <= 0.0 {
        return Err(ConfigError::NotPositive { name: "dt", value: dt });
    }
    if substeps == 0 {
        return Err(ConfigError::NoSubsteps);
    }
    Ok(())
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the initial bodies for a disk.
///
/// The central body, if any, is at index 0.
pub fn initial_bodies(config: &DiskConfig, sampler: &mut Sampler) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(config.body_count + 1);

    if let Some(central) = config.central_body {
        bodies.push(Body::at_rest(central.mass, DVec2::ZERO));
    }

    let orbit_mass = config.orbit_mass();
    let (min_mass, max_mass) = config.mass_range;
    for _ in 0..config.body_count {
        let (theta, position) = sampler.random_in_annulus(config.min_radius, config.max_radius);
        let speed = circular_orbit_speed(config.gravity.g, orbit_mass, position.length());
        let velocity = DVec2::new(-theta.sin(), theta.cos()) * speed;
        let mass = sampler.random_range(min_mass, max_mass);
        bodies.push(Body::new(mass, position, velocity));
    }

    bodies
}

/// Owned state of an N-body run.
pub struct DiskSystem {
    bodies: Vec<Body>,
    accelerations: Vec<DVec2>,
    gravity: GravityParams,
    dt: f64,
    substeps: u32,
    // Bodies before this index are not integrated.
    first_free: usize,
    steps: u64,
}

impl DiskSystem {
    /// Draw a disk from `config`.
    pub fn new(config: DiskConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut sampler = Sampler::new(config.seed);
        let bodies = initial_bodies(&config, &mut sampler);
        let pinned = config.central_body.is_some_and(|c| c.pinned);

        log::info!(
            "disk: {} bodies, radii [{:e}, {:e}], central body: {}",
            bodies.len(),
            config.min_radius,
            config.max_radius,
            match config.central_body {
                Some(c) if c.pinned => format!("{:e} kg (pinned)", c.mass),
                Some(c) => format!("{:e} kg (free)", c.mass),
                None => "none".to_string(),
            }
        );

        Self::from_bodies(bodies, config.gravity, config.dt, config.substeps, pinned)
    }

    /// Build a system from explicit bodies. With `pin_first`, `bodies[0]` is
    /// held fixed.
    pub fn from_bodies(
        bodies: Vec<Body>,
        gravity: GravityParams,
        dt: f64,
        substeps: u32,
        pin_first: bool,
    ) -> Result<Self, ConfigError> {
        if bodies.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }
        validate_stepping(&gravity, dt, substeps)?;

        let accelerations = vec![DVec2::ZERO; bodies.len()];
        let first_free = if pin_first { 1 } else { 0 };
        Ok(Self {
            bodies,
            accelerations,
            gravity,
            dt,
            substeps,
            first_free,
            steps: 0,
        })
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Accelerations from the most recent force evaluation.
    #[inline]
    pub fn accelerations(&self) -> &[DVec2] {
        &self.accelerations
    }

    #[inline]
    pub fn gravity(&self) -> &GravityParams {
        &self.gravity
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[inline]
    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    /// Integration steps taken so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds so far.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.dt
    }

    #[inline]
    pub fn is_center_pinned(&self) -> bool {
        self.first_free > 0
    }

    /// Recompute every body's acceleration from the current positions.
    pub fn compute_accelerations(&mut self) {
        accumulate_accelerations(&self.bodies, &mut self.accelerations, &self.gravity);
    }

    /// Apply the current accelerations for one `dt`.
    pub fn integrate(&mut self) {
        let free = self.first_free;
        symplectic_euler(&mut self.bodies[free..], &self.accelerations[free..], self.dt);
    }

    /// One force evaluation followed by one integration step.
    pub fn step(&mut self) {
        self.compute_accelerations();
        self.integrate();
        self.steps += 1;
    }

    /// All sub-steps of one rendered frame.
    pub fn advance_frame(&mut self) {
        for _ in 0..self.substeps {
            self.step();
        }
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::measure(&self.bodies, &self.gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> DiskConfig {
        DiskConfig::new().with_body_count(64).with_seed(17)
    }

    #[test]
    fn test_disk_defaults() {
        let config = DiskConfig::default();
        assert_eq!(config.body_count, 1000);
        assert_eq!(config.substeps, 5);
        assert_eq!(config.dt, 1e4);
        assert_eq!(config.gravity.softening, 1e3);
        assert_eq!(config.orbit_mass(), 1e24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_disk_config_validation() {
        assert_eq!(small_config().with_body_count(0).validate(), Err(ConfigError::EmptyPopulation));
        assert!(small_config().with_radii(5e10, 1e10).validate().is_err());
        assert!(small_config().with_mass_range(1e23, 1e22).validate().is_err());
        assert!(small_config().with_softening(-1.0).validate().is_err());
        assert_eq!(small_config().with_substeps(0).validate(), Err(ConfigError::NoSubsteps));
        assert!(small_config().with_dt(0.0).validate().is_err());
    }

    #[test]
    fn test_from_bodies_validates_stepping() {
        let bodies = vec![Body::at_rest(1e24, DVec2::ZERO), Body::at_rest(1e24, DVec2::X * 1e10)];
        let gravity = GravityParams::default();

        assert!(DiskSystem::from_bodies(bodies.clone(), gravity, 1e4, 5, false).is_ok());
        assert_eq!(
            DiskSystem::from_bodies(Vec::new(), gravity, 1e4, 5, false).err(),
            Some(ConfigError::EmptyPopulation)
        );
        assert_eq!(
            DiskSystem::from_bodies(bodies.clone(), GravityParams::new(G, -1.0), 1e4, 5, false).err(),
            Some(ConfigError::Negative { name: "softening", value: -1.0 })
        );
        assert_eq!(
            DiskSystem::from_bodies(bodies.clone(), gravity, 0.0, 5, false).err(),
            Some(ConfigError::NotPositive { name: "dt", value: 0.0 })
        );
        assert_eq!(
            DiskSystem::from_bodies(bodies, gravity, 1e4, 0, true).err(),
            Some(ConfigError::NoSubsteps)
        );
    }

    #[test]
    fn test_initial_orbits_are_circular_and_in_range() {
        let config = small_config();
        let disk = DiskSystem::new(config.clone()).unwrap();
        assert_eq!(disk.bodies().len(), 64);

        for body in disk.bodies() {
            let r = body.position.length();
            assert!(r >= config.min_radius * (1.0 - 1e-12));
            assert!(r <= config.max_radius * (1.0 + 1e-12));

            let expected = circular_orbit_speed(G, config.reference_mass, r);
            assert!((body.velocity.length() - expected).abs() < expected * 1e-9);
            // Tangential and counter-clockwise
            assert!(body.position.dot(body.velocity).abs() < r * expected * 1e-9);
            assert!(body.position.perp_dot(body.velocity) > 0.0);

            assert!(body.mass >= config.mass_range.0 && body.mass < config.mass_range.1);
        }
    }

    #[test]
    fn test_central_body_at_index_zero() {
        let config = small_config().with_central_body(CentralBody::new(1e30));
        let disk = DiskSystem::new(config).unwrap();
        assert_eq!(disk.bodies().len(), 65);
        assert_eq!(disk.bodies()[0], Body::at_rest(1e30, DVec2::ZERO));
        assert!(disk.is_center_pinned());

        let orbiter = disk.bodies()[1];
        let expected = circular_orbit_speed(G, 1e30, orbiter.position.length());
        assert!((orbiter.velocity.length() - expected).abs() < expected * 1e-9);
    }

    #[test]
    fn test_pinned_center_does_not_move() {
        let config = small_config()
            .with_body_count(16)
            .with_central_body(CentralBody::new(1e30));
        let mut disk = DiskSystem::new(config).unwrap();
        for _ in 0..20 {
            disk.advance_frame();
        }
        assert_eq!(disk.bodies()[0].position, DVec2::ZERO);
        assert_eq!(disk.bodies()[0].velocity, DVec2::ZERO);
        // It still feels the disk; it just is not integrated.
        assert!(disk.accelerations()[0].length() > 0.0);
    }

    #[test]
    fn test_free_center_moves() {
        let config = small_config()
            .with_body_count(16)
            .with_central_body(CentralBody::new(1e30).free());
        let mut disk = DiskSystem::new(config).unwrap();
        assert!(!disk.is_center_pinned());
        disk.advance_frame();
        assert_ne!(disk.bodies()[0].velocity, DVec2::ZERO);
    }

    #[test]
    fn test_advance_frame_runs_substeps() {
        let mut disk = DiskSystem::new(small_config().with_substeps(3)).unwrap();
        disk.advance_frame();
        disk.advance_frame();
        assert_eq!(disk.steps(), 6);
        assert_eq!(disk.elapsed(), 6.0 * 1e4);
    }

    #[test]
    fn test_seeded_disks_are_identical() {
        let a = DiskSystem::new(small_config()).unwrap();
        let b = DiskSystem::new(small_config()).unwrap();
        assert_eq!(a.bodies(), b.bodies());

        let c = DiskSystem::new(small_config().with_seed(18)).unwrap();
        assert_ne!(a.bodies(), c.bodies());
    }
}

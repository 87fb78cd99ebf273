//! Conserved quantities of an N-body state.
//!
//! Used to watch integrator drift: with a symplectic step the total energy
//! oscillates but does not trend.

use glam::DVec2;

use crate::body::Body;
use crate::gravity::{pair_potential, GravityParams};

/// Snapshot of global quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    pub kinetic: f64,
    pub potential: f64,
    pub momentum: DVec2,
    pub center_of_mass: DVec2,
}

impl Diagnostics {
    pub fn measure(bodies: &[Body], params: &GravityParams) -> Self {
        Self {
            kinetic: kinetic_energy(bodies),
            potential: potential_energy(bodies, params),
            momentum: momentum(bodies),
            center_of_mass: center_of_mass(bodies),
        }
    }

    #[inline]
    pub fn total_energy(&self) -> f64 {
        self.kinetic + self.potential
    }
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Sum over unordered pairs.
pub fn potential_energy(bodies: &[Body], params: &GravityParams) -> f64 {
    let mut total = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            total += pair_potential(a, b, params);
        }
    }
    total
}

pub fn momentum(bodies: &[Body]) -> DVec2 {
    bodies.iter().map(Body::momentum).sum()
}

pub fn center_of_mass(bodies: &[Body]) -> DVec2 {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if total_mass <= 0.0 {
        return DVec2::ZERO;
    }
    bodies.iter().map(|b| b.position * b.mass).sum::<DVec2>() / total_mass
}

//! Semi-implicit (symplectic) Euler integration.
//!
//! Velocity is updated first and the position uses the updated velocity.
//! Swapping the two updates turns this into explicit Euler, which steadily
//! pumps energy into orbits.

use glam::DVec2;
use rayon::prelude::*;

use crate::body::Body;

/// Advance every body by `dt` using precomputed accelerations.
pub fn symplectic_euler(bodies: &mut [Body], accelerations: &[DVec2], dt: f64) {
    assert_eq!(bodies.len(), accelerations.len(), "acceleration buffer must match body count");

    bodies
        .par_iter_mut()
        .zip(accelerations.par_iter())
        .for_each(|(body, acc)| {
            body.velocity += *acc * dt;
            body.position += body.velocity * dt;
        });
}

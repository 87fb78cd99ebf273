//! Direct-summation gravity.
//!
//! Every body feels every other body: O(n²) per evaluation, parallel over the
//! receiving body. The distance is softened additively, `d = |r| + softening`,
//! so close encounters stay finite.

use glam::DVec2;
use rayon::prelude::*;

use crate::body::{Body, G};

/// Constants of the force law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityParams {
    /// Gravitational constant.
    pub g: f64,
    /// Added to every pairwise distance.
    pub softening: f64,
}

impl GravityParams {
    pub fn new(g: f64, softening: f64) -> Self {
        Self { g, softening }
    }
}

impl Default for GravityParams {
    fn default() -> Self {
        Self { g: G, softening: 1e3 }
    }
}

/// Acceleration on a body at `at` due to `source_mass` located at `source`.
///
/// Coincident positions with zero softening contribute nothing.
#[inline]
pub fn pairwise_acceleration(at: DVec2, source: DVec2, source_mass: f64, params: &GravityParams) -> DVec2 {
    let r = source - at;
    let d = r.length() + params.softening;
    if d <= 0.0 {
        return DVec2::ZERO;
    }
    r * (params.g * source_mass / (d * d * d))
}

/// Overwrite `out[i]` with the total acceleration on `bodies[i]`.
///
/// `bodies` is read as an immutable snapshot; only `out` is written.
pub fn accumulate_accelerations(bodies: &[Body], out: &mut [DVec2], params: &GravityParams) {
    assert_eq!(bodies.len(), out.len(), "acceleration buffer must match body count");

    out.par_iter_mut().enumerate().for_each(|(i, acc)| {
        let at = bodies[i].position;
        *acc = bodies
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(DVec2::ZERO, |sum, (_, other)| {
                sum + pairwise_acceleration(at, other.position, other.mass, params)
            });
    });
}

/// Potential energy of the pair under the softened force law.
///
/// `U(r) = -G m_a m_b (2r + s) / (2 (r + s)²)`, so that `-dU/dr` is exactly
/// the pairwise force `G m_a m_b r / (r + s)³`. Reduces to `-G m_a m_b / r`
/// without softening.
#[inline]
pub fn pair_potential(a: &Body, b: &Body, params: &GravityParams) -> f64 {
    let r = a.distance(b);
    let d = r + params.softening;
    if d <= 0.0 {
        return 0.0;
    }
    -params.g * a.mass * b.mass * (2.0 * r + params.softening) / (2.0 * d * d)
}

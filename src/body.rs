use glam::DVec2;

/// Newtonian gravitational constant in SI units.
pub const G: f64 = 6.67430e-11;

/// A point mass in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f64,
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Body {
    pub fn new(mass: f64, position: DVec2, velocity: DVec2) -> Self {
        Body {
            mass,
            position,
            velocity,
        }
    }

    /// A body at rest.
    pub fn at_rest(mass: f64, position: DVec2) -> Self {
        Self::new(mass, position, DVec2::ZERO)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        self.position.distance(other.position)
    }

    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// Speed of a circular orbit of radius `radius` around mass `central_mass`.
#[inline]
pub fn circular_orbit_speed(g: f64, central_mass: f64, radius: f64) -> f64 {
    (g * central_mass / radius).sqrt()
}

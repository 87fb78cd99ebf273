//! Scenes pair a simulation with how it is drawn.
//!
//! A scene's `step` is pure simulation; `draw` only reads state into a
//! [`Canvas`]. Neither touches the window, so both run headless in tests.

use glam::{DVec2, Vec2};

use crate::canvas::{Canvas, Color};
use crate::disk::{DiskConfig, DiskSystem};
use crate::error::ConfigError;
use crate::tracer::{FieldTracer, TracerConfig};

/// A simulation the window runner can drive.
pub trait Scene {
    fn title(&self) -> &str;

    /// Initial window size in logical pixels.
    fn window_size(&self) -> (u32, u32);

    /// Advance the simulation by one rendered frame.
    fn step(&mut self);

    /// Fill `canvas` with the current state.
    fn draw(&self, canvas: &mut Canvas);

    /// Log a status line. Called periodically by the runner.
    fn report(&self) {}
}

/// Field-line tracer around a single wire.
pub struct FieldScene {
    tracer: FieldTracer,
}

impl FieldScene {
    pub const BACKGROUND: Color = Color::BLACK;
    pub const PARTICLE_RADIUS: f32 = 1.0;
    pub const WIRE_RADIUS: f32 = 5.0;

    pub fn new(config: TracerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            tracer: FieldTracer::new(config)?,
        })
    }

    pub fn tracer(&self) -> &FieldTracer {
        &self.tracer
    }
}

impl Scene for FieldScene {
    fn title(&self) -> &str {
        "Electromagnetic Field"
    }

    fn window_size(&self) -> (u32, u32) {
        let n = self.tracer.config().field.resolution;
        (n, n)
    }

    fn step(&mut self) {
        self.tracer.step();
    }

    fn draw(&self, canvas: &mut Canvas) {
        let n = self.tracer.grid().width() as f32;
        canvas.clear(Self::BACKGROUND);
        canvas.circles(
            self.tracer.particles().iter().map(|p| *p / n),
            Self::PARTICLE_RADIUS,
            Color::WHITE,
        );
        canvas.circle(self.tracer.config().field.source / n, Self::WIRE_RADIUS, Color::RED);
    }

    fn report(&self) {
        log::debug!("field tracer: {} respawns so far", self.tracer.respawn_count());
    }
}

/// Map a disk-space position into normalized screen space.
///
/// The origin lands at the centre; `view_radius` lands half a screen away.
#[inline]
pub fn disk_to_screen(position: DVec2, view_radius: f64) -> Vec2 {
    (position / (view_radius * 2.0) + DVec2::splat(0.5)).as_vec2()
}

/// N-body disk, with or without a central body.
pub struct DiskScene {
    system: DiskSystem,
    view_radius: f64,
    title: String,
}

impl DiskScene {
    pub const BACKGROUND: u32 = 0x112F41;
    pub const BODY_RADIUS: f32 = 2.0;
    pub const WINDOW_SIZE: u32 = 800;

    pub fn new(config: DiskConfig) -> Result<Self, ConfigError> {
        // Screen edges sit 0.75 disk radii from the centre.
        let view_radius = config.max_radius * 0.75;
        let title = if config.central_body.is_some() {
            "2D Disk N-body Simulation (central body)".to_string()
        } else {
            "2D Disk N-body Simulation".to_string()
        };
        Ok(Self {
            system: DiskSystem::new(config)?,
            view_radius,
            title,
        })
    }

    pub fn system(&self) -> &DiskSystem {
        &self.system
    }

    pub fn view_radius(&self) -> f64 {
        self.view_radius
    }
}

impl Scene for DiskScene {
    fn title(&self) -> &str {
        &self.title
    }

    fn window_size(&self) -> (u32, u32) {
        (Self::WINDOW_SIZE, Self::WINDOW_SIZE)
    }

    fn step(&mut self) {
        self.system.advance_frame();
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(Color::from_hex(Self::BACKGROUND));
        canvas.circles(
            self.system
                .bodies()
                .iter()
                .map(|b| disk_to_screen(b.position, self.view_radius)),
            Self::BODY_RADIUS,
            Color::WHITE,
        );
    }

    fn report(&self) {
        let d = self.system.diagnostics();
        log::debug!(
            "t = {:.3e} s, E = {:.6e} J (K {:.4e}, U {:.4e}), |p| = {:.3e}",
            self.system.elapsed(),
            d.total_energy(),
            d.kinetic,
            d.potential,
            d.momentum.length()
        );
    }
}

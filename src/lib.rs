//! # psim - particle simulations
//!
//! Two small physical simulations with headless numeric cores and a wgpu
//! point renderer:
//!
//! - **Field tracer**: particles follow the normalized magnetic field of a
//!   wire seen end-on, sampled from a precomputed grid.
//! - **N-body disks**: bodies on circular orbits, direct-summation softened
//!   gravity, semi-implicit Euler integration. Optionally around a dominant
//!   central body.
//!
//! ## Quick Start
//!
//! ```ignore
//! use psim::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     let scene = DiskScene::new(DiskConfig::new().with_seed(7))?;
//!     psim::run(scene)
//! }
//! ```
//!
//! ## Headless use
//!
//! The simulation state types own everything they need and never touch the
//! window:
//!
//! ```ignore
//! let mut disk = DiskSystem::new(DiskConfig::new().with_body_count(100))?;
//! for _ in 0..1000 {
//!     disk.advance_frame();
//! }
//! println!("E = {}", disk.diagnostics().total_energy());
//! ```
//!
//! ## Parallelism
//!
//! Per-particle and per-body kernels use rayon. Each writes only its own slot
//! and reads an immutable snapshot (the field grid, or the body positions at
//! the start of the force evaluation).

pub mod body;
pub mod canvas;
pub mod diagnostics;
pub mod disk;
pub mod error;
pub mod field;
mod gpu;
pub mod gravity;
pub mod integrator;
pub mod scene;
mod shader;
pub mod spawn;
pub mod time;
pub mod tracer;
mod window;

pub use body::{Body, G};
pub use canvas::{Canvas, Circle, Color};
pub use diagnostics::Diagnostics;
pub use disk::{CentralBody, DiskConfig, DiskSystem};
pub use error::{ConfigError, GpuError, SimulationError};
pub use field::{FieldConfig, FieldGrid};
pub use glam::{DVec2, Vec2};
pub use gravity::GravityParams;
pub use scene::{DiskScene, FieldScene, Scene};
pub use spawn::Sampler;
pub use tracer::{FieldTracer, TracerConfig};
pub use window::{run, RunState};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use psim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, Color};
    pub use crate::disk::{CentralBody, DiskConfig, DiskSystem};
    pub use crate::error::{ConfigError, SimulationError};
    pub use crate::field::{FieldConfig, FieldGrid};
    pub use crate::scene::{DiskScene, FieldScene, Scene};
    pub use crate::tracer::{FieldTracer, TracerConfig};
    pub use crate::window::run;
    pub use crate::{Body, DVec2, Vec2};
}

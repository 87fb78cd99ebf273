//! # Field Lines
//!
//! 1000 tracers following the magnetic field of a straight wire seen end-on.
//! The wire is the red dot; the field circles it counter-clockwise.
//!
//! Run with: `cargo run --example field_lines --release [particle_count]`

use psim::prelude::*;

fn main() -> Result<(), SimulationError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000);

    let config = TracerConfig::new()
        .with_field(FieldConfig::new(512).with_current(1000.0))
        .with_particle_count(count);

    run(FieldScene::new(config)?)
}

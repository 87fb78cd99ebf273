//! # Disk Around a Central Body
//!
//! A light disk orbiting a dominant mass at the origin. Orbital speeds are
//! computed against the central mass, so the disk starts close to Keplerian.
//!
//! Run with: `cargo run --example central_disk --release [free]`
//!
//! Pass `free` to let the central body move instead of pinning it.

use psim::prelude::*;

fn main() -> Result<(), SimulationError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let free = std::env::args().nth(1).is_some_and(|a| a == "free");

    let mut central = CentralBody::new(1e30);
    if free {
        central = central.free();
    }

    let config = DiskConfig::new()
        .with_body_count(1000)
        .with_central_body(central);

    run(DiskScene::new(config)?)
}

//! # Self-gravitating Disk
//!
//! 1000 bodies on initially circular orbits, attracting each other with
//! softened direct-summation gravity. Five integration steps per frame.
//!
//! Run with: `cargo run --example disk --release [body_count]`
//! Set `RUST_LOG=debug` to print energy and momentum every 120 frames.

use psim::prelude::*;

fn main() -> Result<(), SimulationError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let count: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000);

    let config = DiskConfig::new()
        .with_body_count(count)
        .with_radii(1e10, 5e10)
        .with_softening(1e3);

    run(DiskScene::new(config)?)
}

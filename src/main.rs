use psim::prelude::*;

const USAGE: &str = "usage: psim [field|disk|central]";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let which = std::env::args().nth(1).unwrap_or_else(|| "field".to_string());

    let result = match which.as_str() {
        "field" => FieldScene::new(TracerConfig::new())
            .map_err(SimulationError::from)
            .and_then(run),
        "disk" => DiskScene::new(DiskConfig::new())
            .map_err(SimulationError::from)
            .and_then(run),
        "central" => DiskScene::new(DiskConfig::new().with_central_body(CentralBody::new(1e30)))
            .map_err(SimulationError::from)
            .and_then(run),
        other => {
            eprintln!("unknown scene `{}`\n{}", other, USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

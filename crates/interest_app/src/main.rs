mod app;
mod effects;
mod input;
mod render;

use anyhow::Context;
use log::LevelFilter;
use suggestion_engine::ClientSettings;
use suggestion_logging::{suggest_info, LogDestination};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let destination = match std::env::var("SUGGEST_LOG") {
        Ok(raw) => raw.parse().unwrap_or_else(|err| {
            eprintln!("Warning: {err}; logging to file");
            LogDestination::File
        }),
        Err(_) => LogDestination::default(),
    };
    suggestion_logging::initialize(destination, LevelFilter::Info);

    let settings = ClientSettings::from_env().context("reading configuration")?;
    suggest_info!("Starting interest explorer with {:?}", settings);

    app::run(settings)
}

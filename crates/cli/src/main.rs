//! NixGelato point of sale CLI

use std::process;

mod commands;
mod config;
mod errors;
mod item;
mod logging;
mod render;

use config::CliConfig;

#[tokio::main]
async fn main() {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = logging::init_subscriber(&config.logging) {
        eprintln!("failed to initialise logging: {error}");
    }

    if let Err(error) = config.command.run(&config.api).await {
        tracing::error!(%error, "command failed");
        eprintln!("{error}");
        process::exit(1);
    }
}

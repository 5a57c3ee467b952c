use anyhow::Context;
use clap::Parser;

use glium_cubes::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let default_filter = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    config.validate().context("invalid configuration")?;
    log::info!("opening a {}x{} window, redrawing every {} ms",
               config.width, config.height, config.frame_interval_ms);

    glium_cubes::window::run(config)
}

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};

use snake::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_file.as_deref())?;
    log::info!("starting with tick interval {:?}", config.tick_interval());

    // The game loop returns on quit; the terminal is restored when the game is dropped.
    snake::game::run(&config)
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}

mod animator;
mod camera;
mod color;
mod config;
mod content;
mod error;
mod geometry;
mod graphics;
mod input;
mod logging;
mod math;
mod scene;
mod screen;
mod scroll;
mod state;
mod terminal;
mod theme;
mod vertex;
mod view;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::Cli;

/// Main function
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref()).context("failed to set up logging")?;
    let config = cli.validate()?;

    info!(
        fps = cli.fps,
        stars = config.starfield.count,
        pages = config.animator.pages,
        snapshot = config.snapshot.is_some(),
        "configuration loaded"
    );

    match &config.snapshot {
        Some(snapshot) => terminal::snapshot(&config, snapshot).context("failed to render snapshot"),
        None => terminal::run(&config).context("terminal session failed"),
    }
}

//! tictac - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{Cli, Config, Font, logging, tui};
use tracing::error;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_file)?;

    let result = start(&cli);
    if let Err(e) = &result {
        error!(error = ?e, "tictac exited with an error");
    }
    result
}

fn start(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli).context("Failed to load configuration")?;
    let font = Font::load(config.font_path().as_deref()).context("Failed to load font")?;
    tui::run(config, font)
}

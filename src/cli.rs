//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal. Click a cell to place a mark.
#[derive(Parser, Debug, Clone)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe played with the mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board width in terminal columns
    #[arg(long)]
    pub width: Option<u16>,

    /// Board height in terminal rows
    #[arg(long)]
    pub height: Option<u16>,

    /// Milliseconds the result stays on screen before the board resets
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Glyph font file (TOML) used to draw marks
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Log file; the terminal is owned by the game so logs go here
    #[arg(long, default_value = "tictac.log")]
    pub log_file: PathBuf,
}

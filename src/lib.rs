//! tictac - two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`tictac_core`]; this crate is the plumbing around
//! them.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Font**: block glyphs for the marks, loaded once at startup
//! - **Scene**: one rasterized glyph per occupied cell
//! - **TUI**: terminal session, input translation, rendering and the event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod font;
pub mod logging;
pub mod scene;
pub mod tui;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use font::{Font, FontError, Glyph};
pub use scene::{Scene, SceneCell};

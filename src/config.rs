//! Game configuration.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Smallest viewport that still gives every cell at least one column and row.
pub const MIN_BOARD_SIZE: u16 = 3;

/// Configuration for the game window and round timing.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Title shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Board viewport width in terminal columns.
    #[serde(default = "default_board_width")]
    board_width: u16,

    /// Board viewport height in terminal rows.
    #[serde(default = "default_board_height")]
    board_height: u16,

    /// How long the result banner stays up before the board resets.
    #[serde(default = "default_result_delay_ms")]
    result_delay_ms: u64,

    /// Glyph font to load instead of the bundled one.
    ///
    /// A relative path in a config file is taken relative to that file's
    /// directory. One given with `--font` is relative to the working
    /// directory.
    #[serde(default)]
    font_path: Option<PathBuf>,
}

fn default_title() -> String {
    "TicTacToe".to_string()
}

fn default_board_width() -> u16 {
    60
}

fn default_board_height() -> u16 {
    30
}

fn default_result_delay_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            board_width: default_board_width(),
            board_height: default_board_height(),
            result_delay_ms: default_result_delay_ms(),
            font_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_toml(&content)?;
        // Joining keeps absolute font paths as they are.
        if let Some(dir) = path.as_ref().parent() {
            config.font_path = config.font_path.take().map(|font| dir.join(font));
        }
        info!(
            board_width = config.board_width,
            board_height = config.board_height,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the effective configuration: defaults, then the config file
    /// named on the command line, then individual command-line overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(width) = cli.width {
            config.board_width = width;
        }
        if let Some(height) = cli.height {
            config.board_height = height;
        }
        if let Some(delay) = cli.delay_ms {
            config.result_delay_ms = delay;
        }
        if let Some(font) = &cli.font {
            config.font_path = Some(font.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Display pause after a win or tie.
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < MIN_BOARD_SIZE || self.board_height < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board must be at least {min}x{min}, got {}x{}",
                self.board_width,
                self.board_height,
                min = MIN_BOARD_SIZE,
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

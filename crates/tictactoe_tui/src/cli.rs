//! Command-line interface for the terminal game.

use crate::config::{ConfigError, TuiConfig};
use crate::intent::KeyLayout;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Config file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Hot-seat tic-tac-toe for two players at one keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Digit keys used to select cells (overrides the config file)
    #[arg(short, long, value_enum)]
    pub layout: Option<KeyLayout>,

    /// File receiving log output (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Hide the key label drawn in each cell
    #[arg(long)]
    pub no_labels: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = TuiConfig::load(self.config.as_deref(), Path::new(DEFAULT_CONFIG_PATH))?;

        if let Some(layout) = self.layout {
            config = config.with_key_layout(layout);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.no_labels {
            config = config.with_show_labels(false);
        }
        Ok(config)
    }
}

//! Two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, init_tracing, run};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config)?;

    info!(?config, "Starting tictactoe");
    if let Err(e) = run(&config) {
        error!(error = ?e, "Game loop error");
        return Err(e);
    }
    Ok(())
}

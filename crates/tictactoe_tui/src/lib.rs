//! Hot-seat tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Intent**: key presses mapped to abstract player intents
//! - **Session**: drives a [`tictactoe_engine::GameEngine`] from intents
//! - **UI**: stateless ratatui rendering of a session
//! - **Terminal**: raw-mode guard and the blocking event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod intent;
mod logging;
mod session;
mod terminal;
pub mod ui;

pub use cli::{Cli, DEFAULT_CONFIG_PATH};
pub use config::{ConfigError, TuiConfig};
pub use intent::{Direction, Intent, KeyLayout, intent_from_key, move_cursor};
pub use logging::init_tracing;
pub use session::{Flow, Phase, Scoreboard, Session};
pub use terminal::{TerminalGuard, run};

//! Tic-tac-toe game-state engine.
//!
//! The engine owns a 3x3 board stored as two disjoint 9-bit sets, one per
//! player, together with the active-turn marker and the round status.
//! It performs no I/O; a caller feeds it cell indices and reads back
//! the outcome.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for (x, o) in [(0, 3), (1, 4)] {
//!     assert!(engine.place(x));
//!     engine.end_turn();
//!     assert!(engine.place(o));
//!     engine.end_turn();
//! }
//! assert!(engine.place(2));
//! assert_eq!(engine.evaluate(), GameStatus::Won(Player::X));
//! assert!(!engine.place(8));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod engine;
mod error;
mod lines;
mod types;

pub use cell::{Cell, CellSet};
pub use engine::GameEngine;
pub use error::PlaceError;
pub use lines::{LINES, Line};
pub use types::{GameStatus, Player};

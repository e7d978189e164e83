//! Move rejection reasons.

use crate::cell::Cell;

/// Reason a placement was rejected.
///
/// Guards are checked in declaration order, so a move on a finished board
/// reports `GameOver` even if the index is also invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The round already ended in a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// The index is outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    InvalidCell(usize),

    /// The cell is already taken by either player.
    #[display("{} is already occupied", _0)]
    CellOccupied(Cell),
}

impl std::error::Error for PlaceError {}

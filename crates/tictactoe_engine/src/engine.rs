//! The game-state engine.

use crate::cell::{Cell, CellSet};
use crate::error::PlaceError;
use crate::lines::{LINES, Line};
use crate::types::{GameStatus, Player};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Moves, win checks, draw checks and turn changes are separate calls so
/// that a caller can render a move before learning its outcome. A round
/// proceeds as:
///
/// 1. [`place`](Self::place) a mark for the active player,
/// 2. [`check_win`](Self::check_win), then [`check_draw`](Self::check_draw)
///    (or both at once through [`evaluate`](Self::evaluate)),
/// 3. [`end_turn`](Self::end_turn) if the round goes on.
///
/// Once the round is won or drawn every placement is rejected until
/// [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    x_cells: CellSet,
    o_cells: CellSet,
    turn: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the active player's mark at `index` (0-8).
    ///
    /// Returns `false` without touching the board if the round is over,
    /// the index is out of range, or the cell is taken.
    pub fn place(&mut self, index: usize) -> bool {
        self.try_place(index).is_ok()
    }

    /// Places the active player's mark at `index`, reporting why a move
    /// was rejected.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_place(&mut self, index: usize) -> Result<Cell, PlaceError> {
        if self.status.is_over() {
            return Err(PlaceError::GameOver);
        }
        let cell = Cell::from_index(index).ok_or(PlaceError::InvalidCell(index))?;
        self.place_cell(cell)?;
        Ok(cell)
    }

    /// Places the active player's mark on `cell`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_cell(&mut self, cell: Cell) -> Result<(), PlaceError> {
        if self.status.is_over() {
            return Err(PlaceError::GameOver);
        }
        if self.occupied().contains(cell) {
            return Err(PlaceError::CellOccupied(cell));
        }

        let turn = self.turn;
        self.cells_mut(turn).insert(cell);
        debug!(%cell, player = %turn, "Mark placed");
        Ok(())
    }

    /// Checks whether the active player has completed a line.
    ///
    /// A match moves the round into the won state, after which
    /// [`place`](Self::place) rejects every move.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn check_win(&mut self) -> bool {
        let completed = Self::completed_line(self.cells(self.turn)).is_some();
        if completed && !self.status.is_over() {
            self.status = GameStatus::Won(self.turn);
            debug!(winner = %self.turn, "Round won");
        }
        completed
    }

    /// Checks whether the board is full with no completed line.
    ///
    /// A won round never reports a draw, and neither does a full board
    /// whose winning line has not been checked yet.
    #[instrument(skip(self))]
    pub fn check_draw(&mut self) -> bool {
        match self.status {
            GameStatus::Won(_) => return false,
            GameStatus::Draw => return true,
            GameStatus::InProgress => {}
        }

        let full = self.occupied() == CellSet::FULL;
        let unchecked_win = Self::completed_line(self.x_cells).is_some()
            || Self::completed_line(self.o_cells).is_some();
        if full && !unchecked_win {
            self.status = GameStatus::Draw;
            debug!("Round drawn");
            return true;
        }
        false
    }

    /// Runs the win check, then the draw check, and returns the status.
    ///
    /// A final move that both completes a line and fills the board is a
    /// win.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> GameStatus {
        if !self.status.is_over() && !self.check_win() {
            self.check_draw();
        }
        self.status
    }

    /// Passes the move to the other player.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Clears the board and returns to X's turn with the round in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("Engine reset");
    }

    /// Returns the player whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once a player has won.
    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }

    /// Returns true once the round is drawn.
    pub fn is_draw(&self) -> bool {
        self.status.is_draw()
    }

    /// Returns true once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Cells held by `player`.
    pub fn cells(&self, player: Player) -> CellSet {
        match player {
            Player::X => self.x_cells,
            Player::O => self.o_cells,
        }
    }

    /// Cells held by either player.
    pub fn occupied(&self) -> CellSet {
        self.x_cells | self.o_cells
    }

    /// Player holding `cell`, if any.
    pub fn owner(&self, cell: Cell) -> Option<Player> {
        if self.x_cells.contains(cell) {
            Some(Player::X)
        } else if self.o_cells.contains(cell) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Line completed by the winner, once the round is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.status
            .winner()
            .and_then(|winner| Self::completed_line(self.cells(winner)))
    }

    fn cells_mut(&mut self, player: Player) -> &mut CellSet {
        match player {
            Player::X => &mut self.x_cells,
            Player::O => &mut self.o_cells,
        }
    }

    fn completed_line(set: CellSet) -> Option<Line> {
        LINES.iter().find(|line| line.is_completed_by(set)).copied()
    }
}

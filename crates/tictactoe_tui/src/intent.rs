//! Key-to-intent mapping.
//!
//! The session never sees raw key codes: each key press is first
//! translated into an [`Intent`] according to the configured
//! [`KeyLayout`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use tictactoe_engine::Cell;
use tracing::instrument;

/// Abstract input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place a mark on the given cell.
    SelectCell(Cell),
    /// Move the keyboard cursor one cell.
    MoveCursor(Direction),
    /// Place at the cursor, or accept a rematch.
    Confirm,
    /// Refuse a rematch.
    Decline,
    /// Leave the game.
    Quit,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Which digit key selects which cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum KeyLayout {
    /// `8 7 6 / 5 4 3 / 2 1 0`, top-left to bottom-right.
    #[default]
    Descending,
    /// `0 1 2 / 3 4 5 / 6 7 8`, matching cell indices.
    Ascending,
    /// `7 8 9 / 4 5 6 / 1 2 3`, like a numeric keypad.
    Numpad,
}

impl KeyLayout {
    /// Cell selected by `digit`, if the layout binds it.
    pub fn cell_for_digit(self, digit: u32) -> Option<Cell> {
        let digit = digit as usize;
        let index = match self {
            KeyLayout::Descending => 8usize.checked_sub(digit)?,
            KeyLayout::Ascending => digit,
            KeyLayout::Numpad => {
                if !(1..=9).contains(&digit) {
                    return None;
                }
                let row = 2 - (digit - 1) / 3;
                let column = (digit - 1) % 3;
                row * 3 + column
            }
        };
        Cell::from_index(index)
    }

    /// Key that selects `cell`.
    pub fn label(self, cell: Cell) -> char {
        let digit = match self {
            KeyLayout::Descending => 8 - cell.index(),
            KeyLayout::Ascending => cell.index(),
            KeyLayout::Numpad => (2 - cell.row()) * 3 + cell.column() + 1,
        };
        char::from_digit(digit as u32, 10).unwrap_or('?')
    }
}

/// Translates a key press into an intent.
#[instrument]
pub fn intent_from_key(key: KeyEvent, layout: KeyLayout) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Intent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => c
            .to_digit(10)
            .and_then(|digit| layout.cell_for_digit(digit))
            .map(Intent::SelectCell),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('y') | KeyCode::Char('Y') => {
            Some(Intent::Confirm)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Intent::Decline),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
        KeyCode::Up => Some(Intent::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Intent::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Intent::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Intent::MoveCursor(Direction::Right)),
        _ => None,
    }
}

/// Moves the cursor, stopping at the board edges.
pub fn move_cursor(cursor: Cell, direction: Direction) -> Cell {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => ((row + 1).min(2), column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, (column + 1).min(2)),
    };
    Cell::from_row_column(row, column).unwrap_or(cursor)
}

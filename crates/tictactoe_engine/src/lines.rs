//! The eight winning lines.

use crate::cell::{Cell, CellSet};

/// Three cells in a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    cells: [Cell; 3],
    mask: CellSet,
}

impl Line {
    const fn new(cells: [Cell; 3]) -> Self {
        Self {
            cells,
            mask: CellSet::from_cells(&cells),
        }
    }

    /// The three cells of the line.
    pub fn cells(&self) -> [Cell; 3] {
        self.cells
    }

    /// The line as a cell set.
    pub fn mask(&self) -> CellSet {
        self.mask
    }

    /// Returns true if `set` holds every cell of the line.
    pub fn is_completed_by(&self, set: CellSet) -> bool {
        set.contains_all(self.mask)
    }
}

/// Rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new([Cell::TopLeft, Cell::TopCenter, Cell::TopRight]),
    Line::new([Cell::MiddleLeft, Cell::Center, Cell::MiddleRight]),
    Line::new([Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight]),
    // Columns
    Line::new([Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft]),
    Line::new([Cell::TopCenter, Cell::Center, Cell::BottomCenter]),
    Line::new([Cell::TopRight, Cell::MiddleRight, Cell::BottomRight]),
    // Diagonals
    Line::new([Cell::TopLeft, Cell::Center, Cell::BottomRight]),
    Line::new([Cell::TopRight, Cell::Center, Cell::BottomLeft]),
];

//! Board cells and the 9-bit cell set.

use tracing::instrument;

/// A cell on the tic-tac-toe board, numbered 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Cell {
    /// Top-left (cell 0)
    TopLeft = 0,
    /// Top-center (cell 1)
    TopCenter = 1,
    /// Top-right (cell 2)
    TopRight = 2,
    /// Middle-left (cell 3)
    MiddleLeft = 3,
    /// Center (cell 4)
    Center = 4,
    /// Middle-right (cell 5)
    MiddleRight = 5,
    /// Bottom-left (cell 6)
    BottomLeft = 6,
    /// Bottom-center (cell 7)
    BottomCenter = 7,
    /// Bottom-right (cell 8)
    BottomRight = 8,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Creates a cell from its board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a cell from its row and column (both 0-2).
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row >= 3 || column >= 3 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }

    /// Converts the cell to its board index (0-8).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row of the cell (0 = top).
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of the cell (0 = left).
    pub const fn column(self) -> usize {
        self.index() % 3
    }

    /// Bit of this cell inside a [`CellSet`].
    pub(crate) const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Get label for this cell (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A set of cells packed into the low 9 bits of a `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u16);

impl CellSet {
    /// The set with no cells.
    pub const EMPTY: CellSet = CellSet(0);

    /// The set with every cell: a full board.
    pub const FULL: CellSet = CellSet((1 << 9) - 1);

    /// Builds a set from a list of cells.
    pub const fn from_cells(cells: &[Cell]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < cells.len() {
            bits |= cells[i].bit();
            i += 1;
        }
        CellSet(bits)
    }

    /// Returns true if the cell is in the set.
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & cell.bit() != 0
    }

    /// Adds a cell to the set.
    pub fn insert(&mut self, cell: Cell) {
        self.0 |= cell.bit();
    }

    /// Cells in either set.
    pub const fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    /// Returns true if every cell of `other` is in this set.
    pub const fn contains_all(self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if the sets share no cell.
    pub const fn is_disjoint(self, other: CellSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of cells in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set has no cells.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bit pattern, bit `i` standing for cell `i`.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Iterates over the cells in the set in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Cell> {
        Cell::ALL.into_iter().filter(move |cell| self.contains(*cell))
    }
}

impl std::ops::BitOr for CellSet {
    type Output = CellSet;

    fn bitor(self, rhs: CellSet) -> CellSet {
        self.union(rhs)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

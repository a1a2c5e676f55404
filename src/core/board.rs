//! The 4×4 grid: coordinates, cells, and 2×2 regions.
//!
//! Cells are addressed by `Position` (row-major, `(0, 0)` top-left).
//! Once a cell is occupied it stays occupied: there are no captures.

use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// Side length of the board.
pub const BOARD_SIZE: usize = 4;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A board coordinate with both components in `0..BOARD_SIZE`.
///
/// Serialized as a `[row, col]` pair; out-of-range pairs fail to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position, or `None` if either component is off the board.
    #[must_use]
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a position.
    ///
    /// Panics if either component is off the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self::try_new(row, col)
            .unwrap_or_else(|| panic!("Position ({}, {}) is off the board", row, col))
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The 2×2 region containing this cell.
    #[must_use]
    pub const fn region(self) -> Region {
        Region::containing(self.row(), self.col())
    }

    /// Iterate over all 16 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position {
            row: (i / BOARD_SIZE) as u8,
            col: (i % BOARD_SIZE) as u8,
        })
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = String;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::try_new(row, col).ok_or_else(|| format!("position ({}, {}) is off the board", row, col))
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row(), pos.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four non-overlapping 2×2 sub-grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Region {
    /// All regions, in reading order.
    pub const ALL: [Region; 4] = [Region::TopLeft, Region::TopRight, Region::BottomLeft, Region::BottomRight];

    /// Region for a cell, determined by `(row / 2, col / 2)`.
    #[must_use]
    pub const fn containing(row: usize, col: usize) -> Region {
        match (row / 2, col / 2) {
            (0, 0) => Region::TopLeft,
            (0, _) => Region::TopRight,
            (_, 0) => Region::BottomLeft,
            _ => Region::BottomRight,
        }
    }

    /// Top-left corner of the region.
    #[must_use]
    pub const fn origin(self) -> (usize, usize) {
        match self {
            Region::TopLeft => (0, 0),
            Region::TopRight => (0, 2),
            Region::BottomLeft => (2, 0),
            Region::BottomRight => (2, 2),
        }
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The piece in this cell, if any.
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }
}

/// The 4×4 playing grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the contents of a cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Get the piece at a cell, if any.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.get(pos).piece()
    }

    /// Put a piece on an empty cell.
    ///
    /// Panics if the cell is already occupied. Pieces are never moved or
    /// removed, so overwriting a cell means a legality check was skipped.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        let cell = &mut self.cells[pos.row()][pos.col()];
        assert!(cell.is_empty(), "Cell {} is already occupied", pos);
        *cell = Cell::Occupied(piece);
    }

    /// Row-major view of the grid.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterate over all (Position, Piece) pairs for occupied cells.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|p| (pos, p)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_empty())
    }
}

impl std::fmt::Display for Board {
    /// One line per row, two characters per cell (`..` for empty).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Cell::Empty => f.write_str("..")?,
                    Cell::Occupied(piece) => write!(f, "{}", piece)?,
                }
            }
        }
        Ok(())
    }
}

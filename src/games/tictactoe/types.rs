//! Core domain types for tic-tac-toe.

use crate::InvalidInput;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Three board indices that win when owned by one side.
pub type Line = [usize; 3];

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied.
    #[default]
    #[serde(rename = " ")]
    Empty,
    /// Human player's mark (X).
    #[serde(rename = "X")]
    Player,
    /// Automated player's mark (O).
    #[serde(rename = "O")]
    Agent,
}

impl Cell {
    /// Maps a wire symbol to a cell. Anything but `X` or `O` is empty.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "X" => Cell::Player,
            "O" => Cell::Agent,
            _ => Cell::Empty,
        }
    }

    /// Sanitizes an arbitrary JSON value into a cell.
    pub fn sanitize(value: &serde_json::Value) -> Self {
        value.as_str().map(Self::from_symbol).unwrap_or_default()
    }

    /// Wire symbol for this cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Player => "X",
            Cell::Agent => "O",
        }
    }

    /// The other side's mark. Empty has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Cell::Player => Cell::Agent,
            Cell::Agent => Cell::Player,
            Cell::Empty => Cell::Empty,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 3x3 tic-tac-toe board, cells in row-major order (0-8).
///
/// The board is `Copy`; the engine always searches on its own copy and
/// never holds on to the caller's board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from exactly 9 cells.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Parses the 9-character text form: `X`, `O`, anything else empty.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, InvalidInput> {
        let cells = text
            .chars()
            .map(|c| match c {
                'X' => Cell::Player,
                'O' => Cell::Agent,
                _ => Cell::Empty,
            })
            .collect::<Vec<_>>();
        Self::try_from(cells)
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), InvalidInput> {
        let slot = self.cells.get_mut(index).ok_or_else(|| {
            InvalidInput::new(format!("cell index {} is outside 0-8", index))
        })?;
        *slot = cell;
        Ok(())
    }

    /// Checks if a cell is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Board with Player and Agent marks swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            cells: self.cells.map(Cell::opponent),
        }
    }

    /// Wire form: one symbol per cell.
    pub fn symbols(&self) -> [&'static str; CELLS] {
        self.cells.map(Cell::symbol)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell; CELLS] {
        &mut self.cells
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = InvalidInput;

    #[track_caller]
    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; CELLS] = cells
            .try_into()
            .map_err(|_| InvalidInput::board_length(cells.len()))?;
        Ok(Self { cells })
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = InvalidInput;

    #[track_caller]
    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Self::try_from(cells.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos)?,
                    cell => write!(f, "{}", cell)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

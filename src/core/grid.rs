//! The playing field: a square matrix of empty/filled cells.
//!
//! `Grid` is a plain value. Every rule takes `&Grid` and hands back a new
//! one, so lookahead can simulate placements without touching the board the
//! caller owns.
//!
//! On the wire a grid is a row-major list of rows of `0`/`1`:
//!
//! ```
//! use block_blast::core::Grid;
//!
//! let grid: Grid = serde_json::from_str("[[1,0],[0,0]]").unwrap();
//! assert_eq!(grid.size(), 2);
//! assert!(grid.is_filled(0, 0));
//! assert_eq!(grid.empty_count(), 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// Side length of the standard board.
pub const DEFAULT_GRID_SIZE: usize = 8;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Filled = 1,
}

impl Cell {
    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }

    /// Wire value (`0` or `1`).
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Filled),
            other => Err(other),
        }
    }
}

/// Square board of cells, row-major.
///
/// The size is fixed at construction and never changes.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid must have at least one cell");

        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Create an empty grid of the standard size.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }

    /// Decode a row-major 0/1 matrix.
    ///
    /// Rejects empty, ragged, non-square input and values other than 0/1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }

        let width = rows[0].as_ref().len();
        let mut cells = Vec::with_capacity(size * width);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|value| GridError::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }

        if width != size {
            return Err(GridError::NotSquare {
                rows: size,
                columns: width,
            });
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (`row`, `col`). Panics when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_filled()
    }

    /// Overwrite one cell. Panics when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Cells of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).iter().all(|c| c.is_filled())
    }

    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        (0..self.size).all(|row| self.is_filled(row, col))
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_filled()).count()
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// True when no cell is filled.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| !c.is_filled())
    }

    /// Encode as a row-major 0/1 matrix.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.bit()).collect())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                f.write_str(if cell.is_filled() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({0}x{0})", self.size)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_clear() {
        let grid = Grid::standard();
        assert_eq!(grid.size(), 8);
        assert!(grid.is_clear());
        assert_eq!(grid.empty_count(), 64);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    #[should_panic(expected = "Grid must have at least one cell")]
    fn test_zero_size_grid() {
        let _ = Grid::new(0);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[[1u8, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
        assert!(grid.is_filled(0, 0));
        assert!(grid.is_filled(1, 1));
        assert!(!grid.is_filled(0, 1));
        assert_eq!(grid.filled_count(), 3);
        assert_eq!(grid.to_rows(), vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn test_from_rows_rejects_malformed() {
        let empty: [Vec<u8>; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::EmptyGrid));

        let ragged = vec![vec![0u8, 0], vec![0]];
        assert_eq!(
            Grid::from_rows(&ragged),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        let wide = vec![vec![0u8, 0, 0], vec![0, 0, 0]];
        assert_eq!(
            Grid::from_rows(&wide),
            Err(GridError::NotSquare { rows: 2, columns: 3 })
        );

        let bad = vec![vec![0u8, 2], vec![0, 0]];
        assert_eq!(
            Grid::from_rows(&bad),
            Err(GridError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_full_lines() {
        let mut grid = Grid::new(3);
        for col in 0..3 {
            grid.set(1, col, Cell::Filled);
        }
        assert!(grid.is_row_full(1));
        assert!(!grid.is_row_full(0));
        assert!(!grid.is_column_full(0));

        grid.set(0, 0, Cell::Filled);
        grid.set(2, 0, Cell::Filled);
        assert!(grid.is_column_full(0));
    }

    #[test]
    fn test_serde_wire_form() {
        let mut grid = Grid::new(2);
        grid.set(1, 0, Cell::Filled);

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0,0],[1,0]]");

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        assert!(serde_json::from_str::<Grid>("[[0,0],[1]]").is_err());
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
        assert_eq!(grid.to_string(), "#.\n.#\n");
    }
}

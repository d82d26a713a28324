//! Committing placements and clearing full lines.
//!
//! Clearing is a single pass: full rows and full columns are both found on
//! the grid as it stands, then every cell on any of them is emptied. There
//! is no gravity and nothing cascades.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::placement::can_place;
use crate::core::{Cell, Grid, Shape};

/// Indices of full rows and full columns on one grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullLines {
    pub rows: SmallVec<[usize; 8]>,
    pub columns: SmallVec<[usize; 8]>,
}

impl FullLines {
    /// Lines cleared: rows plus columns.
    ///
    /// A cell on both a full row and a full column counts toward both.
    #[must_use]
    pub fn count(&self) -> usize {
        self.rows.len() + self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

/// A grid after clearing, with the lines that were removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineClear {
    pub grid: Grid,
    pub lines: FullLines,
}

impl LineClear {
    /// Number of lines cleared.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.count()
    }
}

/// Copy `grid` with `shape` stamped at column `x`, row `y`.
///
/// Returns `None` when [`can_place`] is false. The input is never modified.
#[must_use]
pub fn place(grid: &Grid, shape: &Shape, x: i32, y: i32) -> Option<Grid> {
    if !can_place(grid, shape, x, y) {
        return None;
    }

    // can_place guarantees non-negative in-bounds offsets
    let (col, row) = (x as usize, y as usize);
    let mut placed = grid.clone();
    for (dr, dc) in shape.filled_cells() {
        placed.set(row + dr, col + dc, Cell::Filled);
    }
    Some(placed)
}

/// Full rows and columns of `grid`, without clearing them.
#[must_use]
pub fn full_lines(grid: &Grid) -> FullLines {
    let size = grid.size();
    FullLines {
        rows: (0..size).filter(|&r| grid.is_row_full(r)).collect(),
        columns: (0..size).filter(|&c| grid.is_column_full(c)).collect(),
    }
}

/// Copy `grid` with every full row and column emptied.
#[must_use]
pub fn clear_lines(grid: &Grid) -> LineClear {
    let lines = full_lines(grid);
    let mut cleared = grid.clone();

    for &row in &lines.rows {
        for col in 0..cleared.size() {
            cleared.set(row, col, Cell::Empty);
        }
    }
    for &col in &lines.columns {
        for row in 0..cleared.size() {
            cleared.set(row, col, Cell::Empty);
        }
    }

    LineClear {
        grid: cleared,
        lines,
    }
}

/// [`place`] followed by [`clear_lines`].
#[must_use]
pub fn apply_and_clear(grid: &Grid, shape: &Shape, x: i32, y: i32) -> Option<LineClear> {
    place(grid, shape, x, y).map(|placed| clear_lines(&placed))
}

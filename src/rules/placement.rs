//! Placement validation.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, Shape};

/// Anchor of a shape's bounding box: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A candidate shape position on some grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub shape: Shape,
    pub position: Position,
}

impl Placement {
    #[must_use]
    pub const fn new(shape: Shape, x: i32, y: i32) -> Self {
        Self {
            shape,
            position: Position::new(x, y),
        }
    }

    /// See [`can_place`].
    #[must_use]
    pub fn is_legal(&self, grid: &Grid) -> bool {
        can_place(grid, &self.shape, self.position.x, self.position.y)
    }
}

/// Whether `shape` fits with its top-left corner at column `x`, row `y`.
///
/// False when any part of the bounding box leaves the grid or any filled
/// shape cell lands on a filled grid cell. Never mutates `grid`.
#[must_use]
pub fn can_place(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    let Some((col, row)) = anchor(grid, shape, x, y) else {
        return false;
    };

    shape
        .filled_cells()
        .all(|(dr, dc)| !grid.is_filled(row + dr, col + dc))
}

/// Every anchor that keeps the bounding box inside the grid, row-major.
pub fn candidate_positions(grid: &Grid, shape: &Shape) -> impl Iterator<Item = Position> {
    let max_x = grid.size().saturating_sub(shape.width()) as i32;
    let max_y = grid.size().saturating_sub(shape.height()) as i32;
    let fits = shape.width() <= grid.size() && shape.height() <= grid.size();
    let rows = if fits { 0..=max_y } else { 1..=0 };

    rows.flat_map(move |y| (0..=max_x).map(move |x| Position::new(x, y)))
}

/// Anchors where [`can_place`] holds, row-major.
pub fn legal_positions<'a>(
    grid: &'a Grid,
    shape: &'a Shape,
) -> impl Iterator<Item = Position> + 'a {
    candidate_positions(grid, shape).filter(move |p| can_place(grid, shape, p.x, p.y))
}

/// Bounds check. Returns the anchor as `(col, row)` indices.
pub(crate) fn anchor(grid: &Grid, shape: &Shape, x: i32, y: i32) -> Option<(usize, usize)> {
    let col = usize::try_from(x).ok()?;
    let row = usize::try_from(y).ok()?;

    if col + shape.width() > grid.size() || row + shape.height() > grid.size() {
        return None;
    }
    Some((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, CATALOG};

    #[test]
    fn test_empty_grid_accepts_in_bounds() {
        let grid = Grid::standard();
        let line = CATALOG[3]; // [[1,1,1]]
        assert!(can_place(&grid, &line, 0, 0));
        assert!(can_place(&grid, &line, 5, 7));
        assert!(!can_place(&grid, &line, 6, 0));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::standard();
        let single = CATALOG[0];
        assert!(!can_place(&grid, &single, -1, 0));
        assert!(!can_place(&grid, &single, 0, -1));
        assert!(!can_place(&grid, &single, 8, 0));
        assert!(!can_place(&grid, &single, 0, 8));
        assert!(!can_place(&grid, &single, i32::MAX, 0));
    }

    #[test]
    fn test_collision() {
        let mut grid = Grid::standard();
        grid.set(1, 1, Cell::Filled);
        let square = CATALOG[5];
        assert!(!can_place(&grid, &square, 0, 0));
        assert!(!can_place(&grid, &square, 1, 1));
        assert!(can_place(&grid, &square, 2, 2));
    }

    #[test]
    fn test_holes_may_cover_filled_cells() {
        let mut grid = Grid::standard();
        grid.set(0, 1, Cell::Filled);
        let corner = CATALOG[6]; // [[1,0],[1,1]]
        assert!(can_place(&grid, &corner, 0, 0));
    }

    #[test]
    fn test_candidate_positions() {
        let grid = Grid::new(3);
        let vertical = CATALOG[4]; // 3 tall
        let all: Vec<_> = candidate_positions(&grid, &vertical).collect();
        assert_eq!(all, vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]);

        let tiny = Grid::new(1);
        assert_eq!(candidate_positions(&tiny, &vertical).count(), 0);
    }

    #[test]
    fn test_legal_positions() {
        let mut grid = Grid::new(2);
        grid.set(0, 0, Cell::Filled);
        let single = CATALOG[0];
        let legal: Vec<_> = legal_positions(&grid, &single).collect();
        assert_eq!(legal, vec![Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]);
    }

    #[test]
    fn test_placement_is_legal() {
        let grid = Grid::standard();
        assert!(Placement::new(CATALOG[5], 6, 6).is_legal(&grid));
        assert!(!Placement::new(CATALOG[5], 7, 6).is_legal(&grid));
    }
}

//! Piece shapes and the fixed catalog.
//!
//! Shapes are never rotated or mirrored: orientation is part of identity,
//! so `[[1,1],[0,1]]` and `[[1,1],[1,0]]` are distinct catalog entries.
//!
//! A shape is a small bit mask inside its bounding box. The box may have
//! holes but always holds at least one filled cell.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// Largest bounding-box side a shape may have.
pub const MAX_SHAPE_SIDE: usize = 5;

/// Immutable piece mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Shape {
    height: u8,
    width: u8,
    /// Bit `row * MAX_SHAPE_SIDE + col` is set for filled cells.
    mask: u32,
}

impl Shape {
    /// Build a shape at compile time. Panics on malformed masks.
    #[must_use]
    pub const fn parse(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(height > 0 && height <= MAX_SHAPE_SIDE, "bad shape height");
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_SIDE, "bad shape width");

        let mut mask = 0u32;
        let mut r = 0;
        while r < height {
            assert!(rows[r].len() == width, "ragged shape");
            let mut c = 0;
            while c < width {
                if rows[r][c] == 1 {
                    mask |= 1 << (r * MAX_SHAPE_SIDE + c);
                }
                c += 1;
            }
            r += 1;
        }
        assert!(mask != 0, "shape without cells");

        Self {
            height: height as u8,
            width: width as u8,
            mask,
        }
    }

    /// Decode a row-major 0/1 mask received at runtime.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(GridError::EmptyShape);
        }
        if height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return Err(GridError::ShapeTooLarge { height, width });
        }

        let mut mask = 0u32;
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
                match value {
                    0 => {}
                    1 => mask |= 1 << (row * MAX_SHAPE_SIDE + col),
                    value => return Err(GridError::InvalidCell { row, col, value }),
                }
            }
        }

        if mask == 0 {
            return Err(GridError::ShapeWithoutCells);
        }

        Ok(Self {
            height: height as u8,
            width: width as u8,
            mask,
        })
    }

    /// Bounding-box rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Bounding-box columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Whether the box cell at (`row`, `col`) is part of the piece.
    #[must_use]
    pub const fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height()
            && col < self.width()
            && self.mask & (1 << (row * MAX_SHAPE_SIDE + col)) != 0
    }

    /// Number of filled cells (the blocks this piece places).
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Filled cells as `(row, col)` offsets, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height())
            .flat_map(move |row| (0..self.width()).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_filled(row, col))
    }

    /// Position of this shape in [`CATALOG`], if it is a catalog shape.
    #[must_use]
    pub fn catalog_index(&self) -> Option<usize> {
        CATALOG.iter().position(|s| s == self)
    }

    /// Encode as a row-major 0/1 matrix.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| u8::from(self.is_filled(row, col)))
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Shape {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Shape> for Vec<Vec<u8>> {
    fn from(shape: Shape) -> Self {
        shape.to_rows()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape{:?}", self.to_rows())
    }
}

/// Every shape the trio generator can offer, in a fixed order.
pub static CATALOG: [Shape; 12] = [
    // single
    Shape::parse(&[&[1]]),
    // pairs
    Shape::parse(&[&[1, 1]]),
    Shape::parse(&[&[1], &[1]]),
    // lines of three
    Shape::parse(&[&[1, 1, 1]]),
    Shape::parse(&[&[1], &[1], &[1]]),
    // square
    Shape::parse(&[&[1, 1], &[1, 1]]),
    // corners
    Shape::parse(&[&[1, 0], &[1, 1]]),
    Shape::parse(&[&[1, 1], &[0, 1]]),
    Shape::parse(&[&[1, 1], &[1, 0]]),
    Shape::parse(&[&[0, 1], &[1, 1]]),
    // skews
    Shape::parse(&[&[1, 1, 0], &[0, 1, 1]]),
    Shape::parse(&[&[0, 1, 1], &[1, 1, 0]]),
];

/// The shape catalog.
#[must_use]
pub fn catalog() -> &'static [Shape] {
    &CATALOG
}

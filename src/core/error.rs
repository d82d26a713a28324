//! Error types for malformed input and session misuse.
//!
//! Illegal placements are not errors: the rules report them as `false` or
//! `None`. These enums cover contract violations only.

use thiserror::Error;

/// Rejected grid or shape input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    EmptyGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid must be square, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },
    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("shape has no rows")]
    EmptyShape,
    #[error("shape has no filled cells")]
    ShapeWithoutCells,
    #[error("shape {height}x{width} exceeds the maximum side")]
    ShapeTooLarge { height: usize, width: usize },
    #[error("grid is {found}x{found}, expected {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
}

impl GridError {
    /// True for input that is empty rather than malformed.
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        matches!(self, GridError::EmptyGrid | GridError::EmptyShape)
    }
}

/// Session state machine misuse.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("game is over")]
    GameOver,
    #[error("current trio still has shapes to place")]
    TrioPending,
    #[error("no trio has been dealt")]
    NoTrio,
    #[error("slot {0} is out of range")]
    InvalidSlot(usize),
    #[error("slot {0} was already placed")]
    SlotUsed(usize),
    #[error("shape in slot {slot} cannot be placed at ({x}, {y})")]
    IllegalPlacement { slot: usize, x: i32, y: i32 },
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for SessionError {
    fn from(err: bincode::Error) -> Self {
        SessionError::Snapshot(err.to_string())
    }
}

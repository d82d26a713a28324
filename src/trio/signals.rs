//! Board measurements that drive the trio weights.

use serde::{Deserialize, Serialize};

use crate::core::Grid;

/// Side of the central window measured for density.
const CENTER_SIDE: usize = 4;

/// Smallest grid with a measured center.
const MIN_CENTER_GRID: usize = 8;

/// How crowded a board is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultySignals {
    /// Empty cells on the whole grid.
    pub empty_cells: usize,

    /// Filled fraction of the central 4x4 window, in `[0, 1]`.
    pub center_density: f64,
}

impl DifficultySignals {
    /// Measure `grid`.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            empty_cells: grid.empty_count(),
            center_density: center_density(grid),
        }
    }
}

/// Filled fraction of the central 4x4 window.
///
/// Zero for grids smaller than 8x8. On an 8x8 grid the window is rows and
/// columns 2..6; larger grids use the window around their midpoint.
fn center_density(grid: &Grid) -> f64 {
    let size = grid.size();
    if size < MIN_CENTER_GRID {
        return 0.0;
    }

    let start = size / 2 - CENTER_SIDE / 2;
    let window = start..start + CENTER_SIDE;
    let filled = window
        .clone()
        .flat_map(|row| window.clone().map(move |col| (row, col)))
        .filter(|&(row, col)| grid.is_filled(row, col))
        .count();

    filled as f64 / (CENTER_SIDE * CENTER_SIDE) as f64
}

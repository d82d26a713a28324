//! Game rules: placement, line clearing, scoring and the game-over oracle.
//!
//! All functions are pure. They take a grid snapshot and return a new value,
//! so hypothetical placements can be evaluated without touching the real
//! board:
//!
//! ```
//! use block_blast::core::{Grid, CATALOG};
//! use block_blast::rules::{apply_and_clear, can_place};
//!
//! let grid = Grid::standard();
//! let line = CATALOG[3];
//! assert!(can_place(&grid, &line, 0, 0));
//!
//! let result = apply_and_clear(&grid, &line, 0, 0).unwrap();
//! assert_eq!(result.count(), 0);
//! assert_eq!(result.grid.filled_count(), 3);
//! assert!(grid.is_clear());
//! ```

mod clear;
mod placement;
mod scoring;

pub use clear::{apply_and_clear, clear_lines, full_lines, place, FullLines, LineClear};
pub use placement::{can_place, candidate_positions, legal_positions, Placement, Position};
pub use scoring::{find_best_placement, is_game_over, score, score_with, BestPlacement, TurnOutcome};

//! Scoring, the game-over oracle and best-placement search.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::clear::{clear_lines, place};
use super::placement::{candidate_positions, legal_positions, Position};
use crate::core::{Grid, ScoringConfig, Shape};

/// Result of a single placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub blocks_placed: usize,
    pub lines_cleared: usize,
    pub combo_multiplier: u32,
    pub score_delta: u64,
}

/// Points for one placement under the default point values.
///
/// `base + lines + combo bonus`, where the combo bonus is the line score
/// times `combo_multiplier - 1` (nothing below a multiplier of 2).
///
/// ```
/// use block_blast::rules::score;
///
/// assert_eq!(score(5, 2, 3), 650);
/// ```
#[must_use]
pub fn score(blocks_placed: usize, lines_cleared: usize, combo_multiplier: u32) -> u64 {
    score_with(&ScoringConfig::default(), blocks_placed, lines_cleared, combo_multiplier)
}

/// [`score`] with explicit point values.
#[must_use]
pub fn score_with(
    config: &ScoringConfig,
    blocks_placed: usize,
    lines_cleared: usize,
    combo_multiplier: u32,
) -> u64 {
    let base = blocks_placed as u64 * config.block_points;
    let line_score = lines_cleared as u64 * config.line_points;
    let combo_bonus = if combo_multiplier > 1 {
        line_score * u64::from(combo_multiplier - 1)
    } else {
        0
    };
    base + line_score + combo_bonus
}

/// True when none of `shapes` fits anywhere on `grid`.
///
/// Stops at the first legal position found. An empty `shapes` slice is
/// game over.
#[must_use]
pub fn is_game_over(grid: &Grid, shapes: &[Shape]) -> bool {
    !shapes
        .iter()
        .any(|shape| legal_positions(grid, shape).next().is_some())
}

/// Highest-clearing position for a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPlacement {
    pub position: Position,
    pub lines_cleared: usize,
}

/// Position where `shape` clears the most lines.
///
/// Scans rows top to bottom and columns left to right; ties go to the
/// first position found. Returns `None` when the shape fits nowhere.
#[must_use]
pub fn find_best_placement(grid: &Grid, shape: &Shape) -> Option<BestPlacement> {
    let mut best: Option<BestPlacement> = None;

    for position in candidate_positions(grid, shape) {
        let Some(placed) = place(grid, shape, position.x, position.y) else {
            continue;
        };
        let lines_cleared = clear_lines(&placed).count();
        trace!(x = position.x, y = position.y, lines_cleared, "simulated placement");

        if best.map_or(true, |b| lines_cleared > b.lines_cleared) {
            best = Some(BestPlacement {
                position,
                lines_cleared,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, CATALOG};
    use crate::rules::can_place;

    #[test]
    fn test_score_formula() {
        assert_eq!(score(5, 2, 3), 50 + 200 + 400);
        assert_eq!(score(3, 0, 1), 30);
        assert_eq!(score(3, 0, 5), 30);
        assert_eq!(score(1, 1, 1), 110);
        assert_eq!(score(1, 1, 0), 110);
        assert_eq!(score(0, 0, 0), 0);
    }

    #[test]
    fn test_score_with_custom_points() {
        let config = ScoringConfig {
            block_points: 1,
            line_points: 10,
            level_points: 100,
            ..ScoringConfig::default()
        };
        assert_eq!(score_with(&config, 4, 2, 2), 4 + 20 + 20);
    }

    #[test]
    fn test_game_over_on_full_board() {
        let grid = Grid::from_rows(&vec![vec![1u8; 8]; 8]).unwrap();
        assert!(is_game_over(&grid, &CATALOG));
    }

    #[test]
    fn test_not_game_over_with_one_hole() {
        let mut grid = Grid::from_rows(&vec![vec![1u8; 8]; 8]).unwrap();
        grid.set(4, 4, Cell::Empty);
        assert!(!is_game_over(&grid, &[CATALOG[0]]));
        assert!(is_game_over(&grid, &[CATALOG[1], CATALOG[5]]));
        assert!(!is_game_over(&grid, &[CATALOG[1], CATALOG[0]]));
    }

    #[test]
    fn test_game_over_with_no_shapes() {
        assert!(is_game_over(&Grid::standard(), &[]));
    }

    #[test]
    fn test_best_placement_prefers_clears() {
        let mut grid = Grid::standard();
        for col in 0..7 {
            grid.set(5, col, Cell::Filled);
        }
        let best = find_best_placement(&grid, &CATALOG[0]).unwrap();
        assert_eq!(best.position, Position::new(7, 5));
        assert_eq!(best.lines_cleared, 1);
    }

    #[test]
    fn test_best_placement_tie_goes_to_first() {
        let grid = Grid::standard();
        let best = find_best_placement(&grid, &CATALOG[5]).unwrap();
        assert_eq!(best.position, Position::new(0, 0));
        assert_eq!(best.lines_cleared, 0);
    }

    #[test]
    fn test_best_placement_counts_cross() {
        // Row 0 and column 0 each miss only the corner.
        let mut grid = Grid::standard();
        for i in 1..8 {
            grid.set(0, i, Cell::Filled);
            grid.set(i, 0, Cell::Filled);
        }
        let best = find_best_placement(&grid, &CATALOG[0]).unwrap();
        assert_eq!(best.position, Position::new(0, 0));
        assert_eq!(best.lines_cleared, 2);
    }

    #[test]
    fn test_best_placement_none_when_blocked() {
        let grid = Grid::from_rows(&vec![vec![1u8; 8]; 8]).unwrap();
        assert_eq!(find_best_placement(&grid, &CATALOG[0]), None);
    }

    #[test]
    fn test_best_placement_is_legal() {
        let mut grid = Grid::standard();
        grid.set(0, 0, Cell::Filled);
        grid.set(3, 3, Cell::Filled);
        for shape in CATALOG.iter() {
            let best = find_best_placement(&grid, shape).unwrap();
            assert!(can_place(&grid, shape, best.position.x, best.position.y));
        }
    }
}

//! Property tests for the rules.
//!
//! Invariants covered:
//! - `can_place` agrees with a cell-by-cell reference check.
//! - Clearing twice changes nothing after the first clear.
//! - A committed placement cannot be placed again at the same spot.
//! - `place` never mutates its input and adds exactly the shape's cells.
//! - The game-over oracle agrees with an exhaustive scan.
//! - `find_best_placement` only returns legal positions and is maximal.

use block_blast::core::{Cell, GameRng, Grid, Shape, CATALOG};
use block_blast::rules::{
    can_place, candidate_positions, clear_lines, find_best_placement, is_game_over, place,
};
use block_blast::trio::generate_trio;
use proptest::prelude::*;

const SIZE: usize = 8;

fn arb_grid() -> impl Strategy<Value = Grid> {
    // Bias toward filled cells so collisions and clears are common.
    prop::collection::vec(prop::bool::weighted(0.6), SIZE * SIZE).prop_map(|bits| {
        let mut grid = Grid::new(SIZE);
        for (i, filled) in bits.into_iter().enumerate() {
            if filled {
                grid.set(i / SIZE, i % SIZE, Cell::Filled);
            }
        }
        grid
    })
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    (0..CATALOG.len()).prop_map(|i| CATALOG[i])
}

fn reference_can_place(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    for row in 0..shape.height() {
        for col in 0..shape.width() {
            let gx = x + col as i32;
            let gy = y + row as i32;
            if gx < 0 || gy < 0 || gx >= grid.size() as i32 || gy >= grid.size() as i32 {
                return false;
            }
            if shape.is_filled(row, col) && grid.is_filled(gy as usize, gx as usize) {
                return false;
            }
        }
    }
    true
}

proptest! {
    #[test]
    fn can_place_matches_reference(
        grid in arb_grid(),
        shape in arb_shape(),
        x in -3i32..11,
        y in -3i32..11,
    ) {
        prop_assert_eq!(can_place(&grid, &shape, x, y), reference_can_place(&grid, &shape, x, y));
    }

    #[test]
    fn clearing_is_idempotent(grid in arb_grid()) {
        let once = clear_lines(&grid);
        let twice = clear_lines(&once.grid);
        prop_assert_eq!(twice.count(), 0);
        prop_assert_eq!(&twice.grid, &once.grid);
    }

    #[test]
    fn clear_count_is_rows_plus_columns(grid in arb_grid()) {
        let rows = (0..SIZE).filter(|&r| grid.is_row_full(r)).count();
        let cols = (0..SIZE).filter(|&c| grid.is_column_full(c)).count();
        prop_assert_eq!(clear_lines(&grid).count(), rows + cols);
    }

    #[test]
    fn placed_cells_become_occupied(
        grid in arb_grid(),
        shape in arb_shape(),
        x in 0i32..8,
        y in 0i32..8,
    ) {
        let before = grid.clone();
        match place(&grid, &shape, x, y) {
            Some(placed) => {
                prop_assert!(!can_place(&placed, &shape, x, y));
                prop_assert_eq!(placed.filled_count(), grid.filled_count() + shape.cell_count());
            }
            None => prop_assert!(!can_place(&grid, &shape, x, y)),
        }
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn game_over_matches_exhaustive_scan(
        grid in arb_grid(),
        shapes in prop::collection::vec(arb_shape(), 0..4),
    ) {
        let any_fits = shapes.iter().any(|shape| {
            (-2..10).any(|y| (-2..10).any(|x| reference_can_place(&grid, shape, x, y)))
        });
        prop_assert_eq!(is_game_over(&grid, &shapes), !any_fits);
    }

    #[test]
    fn best_placement_is_legal_and_maximal(grid in arb_grid(), shape in arb_shape()) {
        let best = find_best_placement(&grid, &shape);
        let legal: Vec<_> = candidate_positions(&grid, &shape)
            .filter(|p| can_place(&grid, &shape, p.x, p.y))
            .collect();

        match best {
            None => prop_assert!(legal.is_empty()),
            Some(best) => {
                prop_assert!(can_place(&grid, &shape, best.position.x, best.position.y));
                for p in legal {
                    let placed = place(&grid, &shape, p.x, p.y).unwrap();
                    prop_assert!(clear_lines(&placed).count() <= best.lines_cleared);
                }
            }
        }
    }

    #[test]
    fn trios_come_from_catalog(grid in arb_grid(), seed in any::<u64>()) {
        let trio = generate_trio(&grid, &mut GameRng::new(seed));
        for shape in trio {
            prop_assert!(shape.catalog_index().is_some());
        }
    }
}

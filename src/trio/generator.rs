//! Weighted trio draws.

use tracing::debug;

use super::signals::DifficultySignals;
use crate::core::{catalog, DifficultyConfig, GameRng, Grid, Shape};

/// Three shapes offered for one turn.
pub type Trio = [Shape; 3];

/// Normalized draw weight for every catalog shape, in catalog order.
///
/// Every shape starts at 1.0. On a crowded board large shapes are damped and
/// small ones boosted; with a blocked center every multi-cell shape is
/// damped. If every weight ends at zero they are returned unnormalized.
#[must_use]
pub fn shape_weights(signals: &DifficultySignals, config: &DifficultyConfig) -> Vec<f64> {
    let crowded = signals.empty_cells < config.sparse_threshold;
    let blocked_center = signals.center_density > config.center_threshold;

    let mut weights: Vec<f64> = catalog()
        .iter()
        .map(|shape| {
            let cells = shape.cell_count();
            let mut weight = 1.0;
            if crowded {
                weight *= if cells > config.large_shape_cells {
                    config.large_shape_factor
                } else {
                    config.small_shape_factor
                };
            }
            if blocked_center && cells > config.dense_shape_cells {
                weight *= config.dense_center_factor;
            }
            weight
        })
        .collect();

    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for weight in &mut weights {
            *weight /= total;
        }
    }
    weights
}

/// Draw a trio for `grid` with the default difficulty tuning.
pub fn generate_trio(grid: &Grid, rng: &mut GameRng) -> Trio {
    generate_trio_with(grid, &DifficultyConfig::default(), rng)
}

/// Draw a trio for `grid`.
///
/// Each slot is an independent draw with replacement, so a trio may repeat
/// a shape.
pub fn generate_trio_with(grid: &Grid, config: &DifficultyConfig, rng: &mut GameRng) -> Trio {
    let signals = DifficultySignals::from_grid(grid);
    let weights = shape_weights(&signals, config);
    let shapes = catalog();

    let trio: Trio = std::array::from_fn(|_| {
        let index = rng
            .choose_weighted(&weights)
            .unwrap_or_else(|| rng.gen_range_usize(0..shapes.len()));
        shapes[index]
    });

    debug!(
        empty_cells = signals.empty_cells,
        center_density = signals.center_density,
        trio = ?trio.map(|s| s.catalog_index()),
        "generated trio"
    );
    trio
}

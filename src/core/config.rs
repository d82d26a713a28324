//! Engine configuration.
//!
//! Callers configure the engine once per game by providing:
//! - `DifficultyConfig`: how trio weights react to a crowded board
//! - `ScoringConfig`: points per block, per line and per level
//! - `EngineConfig`: grid size, the two above, and an optional RNG seed
//!
//! Defaults reproduce the standard 8x8 game.

use serde::{Deserialize, Serialize};

use super::grid::DEFAULT_GRID_SIZE;
use super::rng::GameRng;

/// Tuning for the adaptive trio weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Below this many empty cells the board counts as crowded.
    pub sparse_threshold: usize,

    /// Shapes with more cells than this are "large" on a crowded board.
    pub large_shape_cells: usize,

    /// Weight factor for large shapes on a crowded board.
    pub large_shape_factor: f64,

    /// Weight factor for the remaining shapes on a crowded board.
    pub small_shape_factor: f64,

    /// Center density above which the center counts as blocked.
    pub center_threshold: f64,

    /// Shapes with more cells than this are damped when the center is blocked.
    pub dense_shape_cells: usize,

    /// Weight factor for those shapes.
    pub dense_center_factor: f64,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            sparse_threshold: 20,
            large_shape_cells: 2,
            large_shape_factor: 0.3,
            small_shape_factor: 1.5,
            center_threshold: 0.7,
            dense_shape_cells: 1,
            dense_center_factor: 0.5,
        }
    }
}

impl DifficultyConfig {
    /// Set the crowded-board threshold.
    #[must_use]
    pub fn with_sparse_threshold(mut self, cells: usize) -> Self {
        self.sparse_threshold = cells;
        self
    }

    /// Set the blocked-center threshold.
    #[must_use]
    pub fn with_center_threshold(mut self, density: f64) -> Self {
        self.center_threshold = density;
        self
    }

    /// Disable all weighting; every catalog shape is equally likely.
    #[must_use]
    pub fn uniform() -> Self {
        Self {
            large_shape_factor: 1.0,
            small_shape_factor: 1.0,
            dense_center_factor: 1.0,
            ..Self::default()
        }
    }
}

/// Point values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points per placed block.
    pub block_points: u64,

    /// Points per cleared line, before the combo bonus.
    pub line_points: u64,

    /// Score needed per level.
    pub level_points: u64,

    /// Highest reachable level.
    #[serde(default = "default_max_level")]
    pub max_level: u64,
}

fn default_max_level() -> u64 {
    50
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            block_points: 10,
            line_points: 100,
            level_points: 1000,
            max_level: default_max_level(),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Trio weighting.
    pub difficulty: DifficultyConfig,

    /// Point values.
    pub scoring: ScoringConfig,

    /// Fixed RNG seed for reproducible games; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            difficulty: DifficultyConfig::default(),
            scoring: ScoringConfig::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a configuration for a `grid_size`×`grid_size` board.
    #[must_use]
    pub fn new(grid_size: usize) -> Self {
        assert!(grid_size > 0, "Grid must have at least one cell");

        Self {
            grid_size,
            ..Self::default()
        }
    }

    /// Replace the difficulty tuning.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: DifficultyConfig) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replace the point values.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// RNG for a new game: seeded if a seed is set, from entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}

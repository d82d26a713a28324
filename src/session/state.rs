//! Per-game state machine.
//!
//! ```text
//! AwaitingTrio --deal--> Placing --last shape placed--> AwaitingTrio
//!                           |
//!                           +--no remaining shape fits--> GameOver
//! ```
//!
//! The rules stay pure; `Session` is the single owner of one game's grid
//! and applies their results. Methods take `&mut self`, so one session is
//! never driven from two places at once.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::achievements::{unlocked_by, Achievement};
use crate::core::{EngineConfig, GameRng, Grid, GridError, SessionError, Shape};
use crate::rules::{apply_and_clear, find_best_placement, is_game_over, score_with};
use crate::rules::{BestPlacement, TurnOutcome};
use crate::trio::{generate_trio_with, Trio};

/// Where a session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the next trio to be dealt.
    AwaitingTrio,
    /// A trio is on offer and at least one shape is unplaced.
    Placing,
    /// No offered shape fits. Terminal.
    GameOver,
}

/// Running totals for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: u64,
    pub lines_cleared: usize,
    pub blocks_placed: usize,
    /// Current multiplier: 1, plus one per consecutive clearing placement.
    pub combo: u32,
    pub max_combo: u32,
    pub trios_dealt: u32,
    pub placements: u32,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            score: 0,
            lines_cleared: 0,
            blocks_placed: 0,
            combo: 1,
            max_combo: 1,
            trios_dealt: 0,
            placements: 0,
        }
    }
}

/// Totals a caller reports when a game ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u64,
    pub lines_cleared: usize,
    pub blocks_placed: usize,
    pub max_combo: u32,
}

/// One game in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    config: EngineConfig,
    grid: Grid,
    trio: [Option<Shape>; 3],
    phase: Phase,
    stats: SessionStats,
    announced: FxHashSet<Achievement>,
}

impl Session {
    /// Start a game on an empty board.
    ///
    /// Fails with [`GridError::EmptyGrid`] when `config.grid_size` is 0.
    pub fn new(config: EngineConfig) -> Result<Self, GridError> {
        if config.grid_size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let grid = Grid::new(config.grid_size);
        Ok(Self::start(config, grid))
    }

    /// Start a game on an existing board.
    pub fn with_grid(config: EngineConfig, grid: Grid) -> Result<Self, GridError> {
        if grid.size() != config.grid_size {
            return Err(GridError::SizeMismatch {
                expected: config.grid_size,
                found: grid.size(),
            });
        }
        Ok(Self::start(config, grid))
    }

    fn start(config: EngineConfig, grid: Grid) -> Self {
        Self {
            config,
            grid,
            trio: [None; 3],
            phase: Phase::AwaitingTrio,
            stats: SessionStats::default(),
            announced: FxHashSet::default(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Trio slots; `None` once a slot has been placed.
    #[must_use]
    pub fn trio(&self) -> &[Option<Shape>; 3] {
        &self.trio
    }

    /// Unplaced shapes of the current trio, in slot order.
    #[must_use]
    pub fn remaining(&self) -> SmallVec<[Shape; 3]> {
        self.trio.iter().flatten().copied().collect()
    }

    /// Level, starting at 1 and rising every `level_points` up to `max_level`.
    #[must_use]
    pub fn level(&self) -> u64 {
        let scoring = &self.config.scoring;
        (self.stats.score / scoring.level_points.max(1) + 1).min(scoring.max_level.max(1))
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.stats.score,
            lines_cleared: self.stats.lines_cleared,
            blocks_placed: self.stats.blocks_placed,
            max_combo: self.stats.max_combo,
        }
    }

    // === Turn cycle ===

    /// Offer the next trio.
    ///
    /// If none of the three shapes fits, the session ends immediately; the
    /// trio is still returned so it can be shown.
    pub fn deal(&mut self, rng: &mut GameRng) -> Result<Trio, SessionError> {
        match self.phase {
            Phase::GameOver => return Err(SessionError::GameOver),
            Phase::Placing => return Err(SessionError::TrioPending),
            Phase::AwaitingTrio => {}
        }

        let trio = generate_trio_with(&self.grid, &self.config.difficulty, rng);
        self.trio = trio.map(Some);
        self.stats.trios_dealt += 1;
        self.phase = Phase::Placing;

        if is_game_over(&self.grid, &trio) {
            debug!(trios = self.stats.trios_dealt, "dealt trio fits nowhere");
            self.end();
        }
        Ok(trio)
    }

    /// Place the shape in `slot` at column `x`, row `y`.
    pub fn place(&mut self, slot: usize, x: i32, y: i32) -> Result<TurnOutcome, SessionError> {
        match self.phase {
            Phase::GameOver => return Err(SessionError::GameOver),
            Phase::AwaitingTrio => return Err(SessionError::NoTrio),
            Phase::Placing => {}
        }

        let shape = self
            .trio
            .get(slot)
            .copied()
            .ok_or(SessionError::InvalidSlot(slot))?
            .ok_or(SessionError::SlotUsed(slot))?;

        let cleared = apply_and_clear(&self.grid, &shape, x, y)
            .ok_or(SessionError::IllegalPlacement { slot, x, y })?;

        let blocks_placed = shape.cell_count();
        let lines_cleared = cleared.count();
        if lines_cleared > 0 {
            self.stats.combo += 1;
            self.stats.max_combo = self.stats.max_combo.max(self.stats.combo);
        } else {
            self.stats.combo = 1;
        }
        let combo_multiplier = self.stats.combo;
        let score_delta = score_with(
            &self.config.scoring,
            blocks_placed,
            lines_cleared,
            combo_multiplier,
        );

        self.grid = cleared.grid;
        self.trio[slot] = None;
        self.stats.score += score_delta;
        self.stats.lines_cleared += lines_cleared;
        self.stats.blocks_placed += blocks_placed;
        self.stats.placements += 1;

        debug!(
            slot,
            x,
            y,
            lines_cleared,
            combo = combo_multiplier,
            score = self.stats.score,
            "placed shape"
        );

        let remaining = self.remaining();
        if remaining.is_empty() {
            self.phase = Phase::AwaitingTrio;
        } else if is_game_over(&self.grid, &remaining) {
            self.end();
        }

        Ok(TurnOutcome {
            blocks_placed,
            lines_cleared,
            combo_multiplier,
            score_delta,
        })
    }

    /// Best position for the shape in `slot`, if it fits anywhere.
    #[must_use]
    pub fn hint(&self, slot: usize) -> Option<BestPlacement> {
        let shape = self.trio.get(slot).copied().flatten()?;
        find_best_placement(&self.grid, &shape)
    }

    /// Achievements reached since the last call.
    pub fn newly_unlocked(&mut self) -> Vec<Achievement> {
        let fresh: Vec<_> = unlocked_by(&self.summary())
            .into_iter()
            .filter(|a| !self.announced.contains(a))
            .collect();
        self.announced.extend(fresh.iter().copied());
        fresh
    }

    fn end(&mut self) {
        self.phase = Phase::GameOver;
        debug!(
            score = self.stats.score,
            lines = self.stats.lines_cleared,
            blocks = self.stats.blocks_placed,
            max_combo = self.stats.max_combo,
            "game over"
        );
    }

    // === Snapshots ===

    /// Compact binary encoding, for parking a session between requests.
    pub fn to_snapshot_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`Session::to_snapshot_bytes`].
    pub fn from_snapshot_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

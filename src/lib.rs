//! # block-blast
//!
//! A deterministic engine for the 8x8 block-placement puzzle: place
//! three offered shapes per turn, clear full rows and columns, chain combos,
//! and lose when nothing fits.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Every rule takes a grid snapshot and returns a new
//!    value. Nothing holds on to a grid between calls, so lookahead never
//!    corrupts the real board.
//!
//! 2. **Explicit Randomness**: Trio draws take a seeded `GameRng`. The same
//!    seed replays the same game.
//!
//! 3. **No Rotation**: Shapes come from a fixed catalog and are placed as-is.
//!
//! ## Modules
//!
//! - `core`: Grid, shapes, RNG, configuration, errors
//! - `rules`: Placement validation, line clearing, scoring, game-over oracle
//! - `trio`: Difficulty-weighted trio generation
//! - `session`: Per-game state machine, combo tracking, achievements
//! - `api`: Request/response bodies for the service endpoints

pub mod api;
pub mod core;
pub mod rules;
pub mod session;
pub mod trio;

// Re-export commonly used types
pub use crate::core::{
    catalog, Cell, DifficultyConfig, EngineConfig, GameRng, GameRngState, Grid, GridError,
    ScoringConfig, SessionError, Shape, CATALOG,
};

pub use crate::rules::{
    apply_and_clear, can_place, clear_lines, find_best_placement, is_game_over, place, score,
    BestPlacement, LineClear, Placement, Position, TurnOutcome,
};

pub use crate::trio::{generate_trio, DifficultySignals, Trio};

pub use crate::session::{Achievement, Phase, Session, SessionStats, SessionSummary};

pub use crate::api::{ApiError, Endpoints};

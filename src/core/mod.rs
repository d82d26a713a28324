//! Core engine types: grid, shapes, RNG, configuration, errors.
//!
//! Everything here is a plain value. The rules in [`crate::rules`] consume
//! these types and never keep a reference to them between calls.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod shape;

pub use config::{DifficultyConfig, EngineConfig, ScoringConfig};
pub use error::{GridError, SessionError};
pub use grid::{Cell, Grid, DEFAULT_GRID_SIZE};
pub use rng::{GameRng, GameRngState};
pub use shape::{catalog, Shape, CATALOG, MAX_SHAPE_SIDE};

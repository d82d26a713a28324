//! Trio generation.
//!
//! Each turn offers three shapes drawn independently, with replacement, from
//! the catalog. Weights start equal and shift toward small shapes as the
//! board fills up or the center clogs. This is a bias, not a guarantee: a
//! trio can still be impossible to place, which is how games end.
//!
//! ```
//! use block_blast::core::{GameRng, Grid};
//! use block_blast::trio::generate_trio;
//!
//! let mut rng = GameRng::new(42);
//! let trio = generate_trio(&Grid::standard(), &mut rng);
//! assert_eq!(trio.len(), 3);
//! ```

mod generator;
mod signals;

pub use generator::{generate_trio, generate_trio_with, shape_weights, Trio};
pub use signals::DifficultySignals;

//! Game sessions and achievements.
//!
//! A [`Session`] drives the rules through one game: it deals trios, applies
//! placements, tracks the combo multiplier and totals, and detects game
//! over. Storing sessions, users and leaderboards is left to the caller;
//! [`Session::to_snapshot_bytes`] gives it something compact to store.

mod achievements;
mod state;

pub use achievements::{unlocked_by, Achievement, Metric};
pub use state::{Phase, Session, SessionStats, SessionSummary};

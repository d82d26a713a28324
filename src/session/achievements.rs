//! Fixed end-of-game milestones.
//!
//! The service decides where unlocked achievements are stored; this module
//! only answers which milestones a set of totals has reached.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::SessionSummary;

/// Which total a milestone is measured on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Score,
    Lines,
    Blocks,
    Combo,
}

impl Metric {
    fn read(self, summary: &SessionSummary) -> u64 {
        match self {
            Metric::Score => summary.score,
            Metric::Lines => summary.lines_cleared as u64,
            Metric::Blocks => summary.blocks_placed as u64,
            Metric::Combo => u64::from(summary.max_combo),
        }
    }
}

/// One of the eight milestones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Achievement {
    #[serde(rename = "score_100")]
    Score100,
    #[serde(rename = "score_500")]
    Score500,
    #[serde(rename = "score_1000")]
    Score1000,
    #[serde(rename = "lines_10")]
    Lines10,
    #[serde(rename = "lines_20")]
    Lines20,
    #[serde(rename = "blocks_50")]
    Blocks50,
    #[serde(rename = "combo_5")]
    Combo5,
    #[serde(rename = "combo_10")]
    Combo10,
}

impl Achievement {
    pub const ALL: [Achievement; 8] = [
        Achievement::Score100,
        Achievement::Score500,
        Achievement::Score1000,
        Achievement::Lines10,
        Achievement::Lines20,
        Achievement::Blocks50,
        Achievement::Combo5,
        Achievement::Combo10,
    ];

    /// Stable storage key, e.g. `"score_100"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Achievement::Score100 => "score_100",
            Achievement::Score500 => "score_500",
            Achievement::Score1000 => "score_1000",
            Achievement::Lines10 => "lines_10",
            Achievement::Lines20 => "lines_20",
            Achievement::Blocks50 => "blocks_50",
            Achievement::Combo5 => "combo_5",
            Achievement::Combo10 => "combo_10",
        }
    }

    /// The measured total and the value it must reach.
    #[must_use]
    pub const fn requirement(self) -> (Metric, u64) {
        match self {
            Achievement::Score100 => (Metric::Score, 100),
            Achievement::Score500 => (Metric::Score, 500),
            Achievement::Score1000 => (Metric::Score, 1000),
            Achievement::Lines10 => (Metric::Lines, 10),
            Achievement::Lines20 => (Metric::Lines, 20),
            Achievement::Blocks50 => (Metric::Blocks, 50),
            Achievement::Combo5 => (Metric::Combo, 5),
            Achievement::Combo10 => (Metric::Combo, 10),
        }
    }

    #[must_use]
    pub fn title(self) -> String {
        let (metric, value) = self.requirement();
        match metric {
            Metric::Score => format!("{value} points"),
            Metric::Lines => format!("{value} lines"),
            Metric::Blocks => format!("{value} blocks"),
            Metric::Combo => format!("Combo x{value}"),
        }
    }

    #[must_use]
    pub fn description(self) -> String {
        let (metric, value) = self.requirement();
        match metric {
            Metric::Score => format!("Score {value} points in one game"),
            Metric::Lines => format!("Clear {value} lines in one game"),
            Metric::Blocks => format!("Place {value} blocks in one game"),
            Metric::Combo => format!("Reach a x{value} combo multiplier"),
        }
    }

    /// Whether `summary` reaches this milestone.
    #[must_use]
    pub fn is_met(self, summary: &SessionSummary) -> bool {
        let (metric, value) = self.requirement();
        metric.read(summary) >= value
    }

    /// Look up a milestone by its storage key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Every milestone `summary` reaches, in [`Achievement::ALL`] order.
#[must_use]
pub fn unlocked_by(summary: &SessionSummary) -> Vec<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|a| a.is_met(summary))
        .collect()
}

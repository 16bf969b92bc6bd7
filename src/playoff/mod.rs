pub mod brackets;
pub mod strokes;

pub use brackets::*;
pub use strokes::*;

use serde::{Deserialize, Serialize};

/// Bracket sizes and stroke spread for the season's playoffs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayoffConfig {
    pub gold_cut: usize,
    pub silver_cut: usize,
    /// Zero-based index of the card whose points set the silver floor.
    pub silver_floor_index: usize,
    pub max_strokes: f64,
}

impl Default for PlayoffConfig {
    fn default() -> Self {
        Self {
            gold_cut: 15,
            silver_cut: 35,
            silver_floor_index: 35,
            max_strokes: 10.0,
        }
    }
}

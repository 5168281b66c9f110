//! Strength tiers for the automated player.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Full-depth search limit. A 3x3 game never lasts more than 9 plies.
pub const FULL_DEPTH: usize = 9;

/// Default depth limit for [`Difficulty::Medium`].
pub const MEDIUM_DEPTH: usize = 3;

/// How hard the automated player tries.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal move, no look-ahead.
    Easy,
    /// Minimax cut off after a few plies, scored by a line heuristic.
    Medium,
    /// Exhaustive minimax. Never loses.
    #[default]
    Hard,
}

impl Difficulty {
    /// Parses a difficulty name, falling back to [`Difficulty::Hard`].
    ///
    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_str(name.trim()).unwrap_or_else(|_| {
            debug!(name, "Unrecognized difficulty, using hard");
            Self::Hard
        })
    }

    /// Parses an optional difficulty name; `None` means hard.
    pub fn from_option(name: Option<&str>) -> Self {
        name.map(Self::parse_lenient).unwrap_or_default()
    }
}

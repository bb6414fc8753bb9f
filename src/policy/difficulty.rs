//! Difficulty levels.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Strength of the computer opponent.
///
/// Each level maps to the probability that a move is picked uniformly at
/// random instead of by search. The table is fixed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DifficultyLevel {
    /// Random 70% of the time.
    Easy,
    /// Random 40% of the time.
    Medium,
    /// Random 10% of the time.
    Hard,
}

impl DifficultyLevel {
    /// Probability in `[0, 1]` that a move is random.
    #[must_use]
    pub const fn random_probability(self) -> f64 {
        match self {
            DifficultyLevel::Easy => 0.7,
            DifficultyLevel::Medium => 0.4,
            DifficultyLevel::Hard => 0.1,
        }
    }
}

//! Game configuration.
//!
//! The UI layer hands the core a handful of simple selections:
//! - which mark the human plays,
//! - whether the other seat is a human or the computer,
//! - how strong the computer is,
//! - the seed for the computer's random source.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::mark::Mark;
use crate::policy::DifficultyLevel;

/// Who occupies the second seat.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    HumanVsHuman,
    /// The computer plays the mark the human does not.
    #[default]
    HumanVsComputer,
}

/// Configuration for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark controlled by the (first) human. Also the mark that moves first.
    pub human_mark: Mark,

    /// Human-vs-human or human-vs-computer.
    pub mode: Mode,

    /// Strength of the computer opponent.
    pub difficulty: DifficultyLevel,

    /// Seed for the computer's random source.
    /// Same seed produces the same sequence of computer moves.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::First,
            mode: Mode::HumanVsComputer,
            difficulty: DifficultyLevel::Medium,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the human's mark.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self
    }

    /// Set the seat mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the computer difficulty.
    pub fn with_difficulty(mut self, difficulty: DifficultyLevel) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Mark played by the computer (always the human's opponent).
    #[must_use]
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.human_mark, Mark::First);
        assert_eq!(config.computer_mark(), Mark::Second);
        assert_eq!(config.mode, Mode::HumanVsComputer);
        assert_eq!(config.difficulty, DifficultyLevel::Medium);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_human_mark(Mark::Second)
            .with_mode(Mode::HumanVsHuman)
            .with_difficulty(DifficultyLevel::Hard)
            .with_seed(7);

        assert_eq!(config.human_mark, Mark::Second);
        assert_eq!(config.computer_mark(), Mark::First);
        assert_eq!(config.mode, Mode::HumanVsHuman);
        assert_eq!(config.difficulty, DifficultyLevel::Hard);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("human-vs-human".parse::<Mode>().unwrap(), Mode::HumanVsHuman);
        assert_eq!("Human-Vs-Computer".parse::<Mode>().unwrap(), Mode::HumanVsComputer);
        assert_eq!(Mode::HumanVsComputer.to_string(), "human-vs-computer");
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_difficulty(DifficultyLevel::Easy);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

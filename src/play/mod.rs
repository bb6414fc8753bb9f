//! Self-play between computer policies.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{GameRng, Mark};
//! use rust_ttt::play::{SelfPlayConfig, SelfPlayWorker};
//! use rust_ttt::policy::{DifficultyLevel, DifficultyPolicy, OptimalPolicy};
//!
//! let easy = DifficultyPolicy::new(DifficultyLevel::Easy, GameRng::new(1));
//! let mut worker = SelfPlayWorker::new(easy, OptimalPolicy::new(), SelfPlayConfig::default());
//!
//! let stats = worker.play_games(10).unwrap();
//! assert_eq!(stats.games, 10);
//! ```

pub mod self_play;

pub use self_play::{GameRecord, SelfPlayConfig, SelfPlayError, SelfPlayStats, SelfPlayWorker};

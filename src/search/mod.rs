//! Adversarial search for the computer opponent.
//!
//! ## Overview
//!
//! `Minimax` solves the game exactly from any position. It is deterministic:
//! the same board and mark always give the same move, and ties between
//! equally good moves go to the lowest cell index.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, Mark};
//! use rust_ttt::search::Minimax;
//!
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! let mut engine = Minimax::new();
//!
//! assert_eq!(engine.best_move(&board, Mark::First), Some(2));
//! println!("searched {} positions", engine.stats().nodes_visited);
//! ```

pub mod minimax;
pub mod stats;

pub use minimax::{best_move, score, Minimax, ScoredMove, ScoredMoves, WIN_SCORE};
pub use stats::SearchStats;

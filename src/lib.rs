//! # rust-ttt
//!
//! Tic-tac-toe game core: rules, a turn-by-turn state machine, and a
//! computer opponent whose strength is set by a difficulty level.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: Every game is a `GameState` value. There is no global
//!    board; two games never observe each other.
//!
//! 2. **All-or-Nothing Moves**: `GameState::apply_move` either commits the
//!    whole transition or rejects the move and changes nothing.
//!
//! 3. **Injected Randomness**: The difficulty policy is the only
//!    non-deterministic component, and it draws from a `RandomSource`
//!    supplied by the caller.
//!
//! ## Architecture
//!
//! - **Exhaustive Minimax**: The full game tree is small enough to solve on
//!   every move. Scores carry a depth term so the engine wins fast and loses
//!   slow.
//!
//! - **Copy Boards**: `Board` is `Copy`; the search recurses on copies
//!   instead of mutating and undoing a shared array.
//!
//! Rendering, input handling and move pacing belong to the caller.
//!
//! ## Modules
//!
//! - `core`: Marks, cells, board, win lines, RNG, configuration
//! - `rules`: Legal moves, win-line and full-board detection
//! - `game`: The game state machine and move errors
//! - `search`: Minimax solver and search statistics
//! - `policy`: Difficulty levels and computer move policies
//! - `play`: Computer-vs-computer self-play

pub mod core;
pub mod game;
pub mod play;
pub mod policy;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardParseError, Cell, GameConfig, GameRng, GameRngState, InvalidWinLine, Mark, MarkMap,
    Mode, WinLine, CELL_COUNT, WIN_LINES,
};

pub use crate::rules::{evaluate, is_full, is_legal, legal_moves, winning_line, GameResult, MoveList};

pub use crate::game::{
    GameState, IllegalMove, MoveOutcome, MoveRecord, MoveRequest, SnapshotError, Status, Transition,
};

pub use crate::search::{best_move, Minimax, ScoredMove, SearchStats};

pub use crate::policy::{
    choose_move, Decision, DecisionKind, DifficultyLevel, DifficultyPolicy, MovePolicy,
    OptimalPolicy, RandomSource, UniformRandomPolicy,
};

pub use crate::play::{GameRecord, SelfPlayConfig, SelfPlayError, SelfPlayStats, SelfPlayWorker};

//! Rules for the 3x3 game.
//!
//! Pure functions over a `Board`:
//! - Legal moves
//! - Win-line detection
//! - Full-board (draw) detection
//!
//! The state machine in `game` and the search in `search` both call into
//! these; neither re-implements a rule.

pub mod engine;

pub use engine::{evaluate, is_full, is_legal, legal_moves, winning_line, GameResult, MoveList};

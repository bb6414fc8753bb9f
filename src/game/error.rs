//! Rejected-move errors.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// Why a move was rejected.
///
/// A rejected move never changes the game state; callers re-prompt or
/// ignore the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Error)]
pub enum IllegalMove {
    /// The game is already won or drawn.
    #[display("game is over")]
    GameOver,
    /// The requesting mark is not the mark to move.
    #[display("not {attempted}'s turn, {expected} to move")]
    NotYourTurn { expected: Mark, attempted: Mark },
    /// Index is not a board cell.
    #[display("cell {index} is off the board (0..=8)")]
    OutOfRange { index: usize },
    /// The cell already holds a mark.
    #[display("cell {index} is already taken by {owner}")]
    Occupied { index: usize, owner: Mark },
}

/// Why a serialized `GameState` was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// A history entry is not a legal move in sequence.
    #[display("history move at ply {ply} is illegal: {source}")]
    IllegalHistory { ply: u32, source: IllegalMove },
    /// A stored field disagrees with the replayed history.
    #[display("snapshot {field} does not match its history")]
    Mismatch { field: &'static str },
}

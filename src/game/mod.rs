//! Game state machine.
//!
//! `GameState` owns the board, the side to move, the human/computer mark
//! assignment and the status. Moves go through `GameState::apply_move`,
//! which returns a `MoveOutcome`: a `Transition` when accepted, an
//! `IllegalMove` when rejected.

pub mod error;
pub mod state;

pub use error::{IllegalMove, SnapshotError};
pub use state::{GameState, MoveOutcome, MoveRecord, MoveRequest, Status, Transition};

//! Core types: marks, cells, the board, RNG, configuration.
//!
//! Everything here is plain data. Rules live in `rules`, the state machine
//! in `game`.

pub mod board;
pub mod config;
pub mod mark;
pub mod rng;

pub use board::{Board, BoardParseError, InvalidWinLine, WinLine, CELL_COUNT, WIN_LINES};
pub use config::{GameConfig, Mode};
pub use mark::{Cell, Mark, MarkMap};
pub use rng::{GameRng, GameRngState};

//! Rules evaluation for the 3x3 board.
//!
//! All functions are pure and total over any `Board`:
//! - What moves are legal
//! - Whether a mark has completed a line
//! - Whether the board is full
//!
//! `winning_line` is only contractually meaningful on boards reachable
//! through legal play. On such boards at most one mark can hold a line,
//! so the fixed scan order never changes which mark is reported.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Mark, WinLine, CELL_COUNT, WIN_LINES};

/// Legal move list. Never more than nine entries, so it stays on the stack.
pub type MoveList = SmallVec<[usize; CELL_COUNT]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Mark),
    /// Draw (full board, no line).
    Draw,
}

impl GameResult {
    /// Check if a mark won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        matches!(self, GameResult::Winner(m) if *m == mark)
    }
}

/// First line, in `WIN_LINES` order, whose three cells all hold `mark`.
#[must_use]
pub fn winning_line(mark: Mark, board: &Board) -> Option<WinLine> {
    let target = Cell::Taken(mark);
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.cells().iter().all(|&i| board.get(i) == target))
}

/// True iff no cell is empty.
#[must_use]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// Indices of all empty cells, ascending.
#[must_use]
pub fn legal_moves(board: &Board) -> MoveList {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// `index` is on the board and the cell there is empty.
#[must_use]
pub fn is_legal(board: &Board, index: usize) -> bool {
    matches!(board.cell(index), Some(Cell::Empty))
}

/// Check if the game on `board` is over.
///
/// Returns `Some(result)` if a mark holds a line or the board is full,
/// `None` if play continues. `First` is checked before `Second`.
#[must_use]
pub fn evaluate(board: &Board) -> Option<GameResult> {
    for mark in Mark::ALL {
        if winning_line(mark, board).is_some() {
            return Some(GameResult::Winner(mark));
        }
    }
    if is_full(board) {
        Some(GameResult::Draw)
    } else {
        None
    }
}

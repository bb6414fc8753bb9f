//! The game state machine.
//!
//! ## States
//!
//! - `Running`: marks alternate, starting with the human's mark
//! - `Won { mark, line }`: terminal
//! - `Drawn`: terminal
//!
//! `apply_move` is the only mutating operation. It either commits the whole
//! transition (cell, status, side to move, history) or rejects the move and
//! leaves the state untouched.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::{IllegalMove, SnapshotError};
use crate::core::{Board, Cell, GameConfig, Mark, Mode, WinLine};
use crate::rules::{self, MoveList};

/// A single requested placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Cell index, 0-8 row-major.
    pub index: usize,
    /// Mark attempting to play.
    pub mark: Mark,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(index: usize, mark: Mark) -> Self {
        Self { index, mark }
    }
}

/// Game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Play continues.
    Running,
    /// `mark` completed `line`.
    Won { mark: Mark, line: WinLine },
    /// Full board, no line.
    Drawn,
}

impl Status {
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Status::Running)
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !self.is_running()
    }

    /// The winning mark, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Mark> {
        match self {
            Status::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// What an accepted move did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Game continues; `next` is to move.
    StillRunning { next: Mark },
    /// The move completed `line` for `mark`.
    Won { mark: Mark, line: WinLine },
    /// The move filled the board without a line.
    Drawn,
}

/// Result of `GameState::apply_move`: `Err` is a rejected move.
pub type MoveOutcome = Result<Transition, IllegalMove>;

/// A move that was accepted, for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Cell index played.
    pub index: usize,
    /// Mark placed.
    pub mark: Mark,
    /// Half-move number, starting at 1.
    pub ply: u32,
}

/// Complete state of one game.
///
/// Each game owns its state; there is no shared board between games.
/// Not internally synchronized: callers sharing a `GameState` across
/// threads must serialize calls to `apply_move`.
///
/// Deserialization replays the stored history on a fresh game and rejects
/// any snapshot whose board, status or side to move disagrees with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct GameState {
    board: Board,
    to_move: Mark,
    human_mark: Mark,
    mode: Mode,
    status: Status,
    /// Accepted moves in order. `im::Vector` keeps clones O(1).
    history: Vector<MoveRecord>,
}

impl GameState {
    /// New human-vs-computer game with the human playing `human_mark`.
    ///
    /// The human's mark moves first.
    #[must_use]
    pub fn new(human_mark: Mark) -> Self {
        Self::with_mode(human_mark, Mode::HumanVsComputer)
    }

    /// New game with an explicit seat mode.
    #[must_use]
    pub fn with_mode(human_mark: Mark, mode: Mode) -> Self {
        Self {
            board: Board::new(),
            to_move: human_mark,
            human_mark,
            mode,
            status: Status::Running,
            history: Vector::new(),
        }
    }

    /// New game from a configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::with_mode(config.human_mark, config.mode)
    }

    // === Accessors ===

    /// Current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    #[must_use]
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Always the complement of `human_mark`.
    #[must_use]
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }

    /// Legal moves for the side to move. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.is_running() {
            rules::legal_moves(&self.board)
        } else {
            MoveList::new()
        }
    }

    /// True when the controller should ask the computer for a move.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.mode == Mode::HumanVsComputer
            && self.is_running()
            && self.to_move == self.computer_mark()
    }

    // === Transitions ===

    /// Check a request against the current state without applying it.
    ///
    /// Checks run in order: game over, turn, range, occupancy.
    pub fn validate(&self, request: MoveRequest) -> Result<(), IllegalMove> {
        if !self.status.is_running() {
            return Err(IllegalMove::GameOver);
        }
        if request.mark != self.to_move {
            return Err(IllegalMove::NotYourTurn {
                expected: self.to_move,
                attempted: request.mark,
            });
        }
        match self.board.cell(request.index) {
            None => Err(IllegalMove::OutOfRange {
                index: request.index,
            }),
            Some(Cell::Taken(owner)) => Err(IllegalMove::Occupied {
                index: request.index,
                owner,
            }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Apply a move.
    ///
    /// On success the cell is filled and the status advanced; on rejection
    /// nothing changes.
    #[instrument(level = "debug", skip(self), fields(ply = self.ply()))]
    pub fn apply_move(&mut self, request: MoveRequest) -> MoveOutcome {
        if let Err(err) = self.validate(request) {
            debug!(%err, "move rejected");
            return Err(err);
        }
        debug_assert!(rules::is_legal(&self.board, request.index));

        let MoveRequest { index, mark } = request;
        self.board.place(index, mark);
        self.history.push_back(MoveRecord {
            index,
            mark,
            ply: self.history.len() as u32 + 1,
        });

        let transition = if let Some(line) = rules::winning_line(mark, &self.board) {
            self.status = Status::Won { mark, line };
            Transition::Won { mark, line }
        } else if rules::is_full(&self.board) {
            self.status = Status::Drawn;
            Transition::Drawn
        } else {
            self.to_move = mark.opponent();
            Transition::StillRunning { next: self.to_move }
        };

        debug!(?transition, "move accepted");
        Ok(transition)
    }

    /// Apply a move for whichever mark is to move.
    pub fn play(&mut self, index: usize) -> MoveOutcome {
        self.apply_move(MoveRequest::new(index, self.to_move))
    }

    /// Replace this game with a fresh one of the same configuration.
    pub fn reset(&mut self) {
        *self = Self::with_mode(self.human_mark, self.mode);
    }

    /// Switch the human's mark. Implemented as a reset: the board is
    /// cleared and the new human mark moves first.
    pub fn set_human_mark(&mut self, mark: Mark) {
        debug!(from = %self.human_mark, to = %mark, "role swap");
        *self = Self::with_mode(mark, self.mode);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mark::First)
    }
}

/// Raw serialized form of a `GameState`, before replay validation.
#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    to_move: Mark,
    human_mark: Mark,
    mode: Mode,
    status: Status,
    history: Vector<MoveRecord>,
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let mut replayed = GameState::with_mode(snapshot.human_mark, snapshot.mode);
        for record in &snapshot.history {
            replayed
                .apply_move(MoveRequest::new(record.index, record.mark))
                .map_err(|source| SnapshotError::IllegalHistory {
                    ply: record.ply,
                    source,
                })?;
        }

        if replayed.history != snapshot.history {
            return Err(SnapshotError::Mismatch { field: "history" });
        }
        if replayed.board != snapshot.board {
            return Err(SnapshotError::Mismatch { field: "board" });
        }
        if replayed.status != snapshot.status {
            return Err(SnapshotError::Mismatch { field: "status" });
        }
        if replayed.to_move != snapshot.to_move {
            return Err(SnapshotError::Mismatch { field: "to_move" });
        }
        Ok(replayed)
    }
}

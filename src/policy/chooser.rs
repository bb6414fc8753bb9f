//! Move policies for computer players.
//!
//! Policies are trait-based so the self-play runner can pit any two of
//! them against each other:
//! - `OptimalPolicy`: always the minimax best move
//! - `UniformRandomPolicy`: any legal move, uniformly
//! - `DifficultyPolicy`: random with the level's probability, optimal otherwise

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::difficulty::DifficultyLevel;
use super::random::RandomSource;
use crate::core::{Board, GameConfig, GameRng, Mark};
use crate::rules::legal_moves;
use crate::search::Minimax;

/// Policy that picks a move for `mark` on `board`.
pub trait MovePolicy {
    /// Choose a move.
    ///
    /// Returns `None` if no legal moves exist.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Option<usize>;
}

/// Which branch produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// Uniform pick among legal moves.
    Random,
    /// Minimax best move.
    Optimal,
}

/// A chosen move and how it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    pub index: usize,
    pub kind: DecisionKind,
}

/// One draw against `random_probability`, then a random or optimal move.
fn decide<R: RandomSource + ?Sized>(
    search: &mut Minimax,
    rng: &mut R,
    board: &Board,
    mark: Mark,
    random_probability: f64,
) -> Option<Decision> {
    let moves = legal_moves(board);
    if moves.is_empty() {
        return None;
    }

    let roll = rng.next_unit();
    if roll < random_probability {
        let index = moves[rng.next_index(moves.len())];
        Some(Decision {
            index,
            kind: DecisionKind::Random,
        })
    } else {
        search.best_move(board, mark).map(|index| Decision {
            index,
            kind: DecisionKind::Optimal,
        })
    }
}

/// Choose a move for `mark` at `level`, drawing from `rng`.
///
/// Uses a fresh unmemoized search; hold a `DifficultyPolicy` to reuse one.
pub fn choose_move<R: RandomSource + ?Sized>(
    board: &Board,
    mark: Mark,
    level: DifficultyLevel,
    rng: &mut R,
) -> Option<usize> {
    decide(&mut Minimax::new(), rng, board, mark, level.random_probability()).map(|d| d.index)
}

/// Difficulty-weighted computer opponent.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Board, GameRng, Mark};
/// use rust_ttt::policy::{DifficultyLevel, DifficultyPolicy, MovePolicy};
///
/// let mut policy = DifficultyPolicy::new(DifficultyLevel::Hard, GameRng::new(7));
/// let board: Board = "XX. OO. ...".parse().unwrap();
///
/// let index = policy.choose_move(&board, Mark::Second).unwrap();
/// assert!(board.get(index).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct DifficultyPolicy<R: RandomSource = GameRng> {
    level: DifficultyLevel,
    rng: R,
    search: Minimax,
}

impl<R: RandomSource> DifficultyPolicy<R> {
    /// Create a policy drawing from `rng`.
    pub fn new(level: DifficultyLevel, rng: R) -> Self {
        Self {
            level,
            rng,
            search: Minimax::with_memoization(),
        }
    }

    #[must_use]
    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    /// Change the level. Takes effect on the next move.
    pub fn set_level(&mut self, level: DifficultyLevel) {
        self.level = level;
    }

    /// The underlying random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Choose a move and report which branch produced it.
    #[instrument(level = "debug", skip(self, board), fields(level = %self.level))]
    pub fn decide(&mut self, board: &Board, mark: Mark) -> Option<Decision> {
        let decision = decide(
            &mut self.search,
            &mut self.rng,
            board,
            mark,
            self.level.random_probability(),
        );
        debug!(?decision, "computer move");
        decision
    }
}

impl DifficultyPolicy<GameRng> {
    /// Policy seeded from a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.difficulty, GameRng::new(config.seed))
    }
}

impl<R: RandomSource> MovePolicy for DifficultyPolicy<R> {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        self.decide(board, mark).map(|d| d.index)
    }
}

/// Always plays the minimax best move.
#[derive(Clone, Debug)]
pub struct OptimalPolicy {
    search: Minimax,
}

impl OptimalPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: Minimax::with_memoization(),
        }
    }
}

impl Default for OptimalPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for OptimalPolicy {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        self.search.best_move(board, mark)
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct UniformRandomPolicy<R: RandomSource = GameRng> {
    rng: R,
}

impl<R: RandomSource> UniformRandomPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> MovePolicy for UniformRandomPolicy<R> {
    fn choose_move(&mut self, board: &Board, _mark: Mark) -> Option<usize> {
        let moves = legal_moves(board);
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.next_index(moves.len())])
    }
}

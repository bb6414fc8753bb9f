//! Exhaustive minimax over the 3x3 game tree.
//!
//! Scores are from the point of view of a fixed *perspective* mark:
//! - perspective holds a line: `10 - depth`
//! - the other mark holds a line: `depth - 10`
//! - full board: `0`
//!
//! The depth term makes the search prefer the fastest win and the slowest
//! loss among otherwise equal lines. Every recursive call receives its own
//! `Board` copy, so there is no undo step to get wrong.
//!
//! The whole tree is under 550k positions, so no pruning is needed. An
//! optional memo table (`Minimax::with_memoization`) caches scores per
//! (board, depth, perspective, side to move) and never changes results.

use std::time::Instant;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{instrument, trace};

use super::stats::SearchStats;
use crate::core::{Board, Mark, CELL_COUNT};
use crate::rules::{is_full, legal_moves, winning_line};

/// Score of an immediate win for the perspective mark.
pub const WIN_SCORE: i32 = 10;

/// A legal move together with its minimax score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index.
    pub index: usize,
    /// Score for the moving mark after this move, with best replies.
    pub score: i32,
}

/// Scores for every legal move, ascending by index.
pub type ScoredMoves = SmallVec<[ScoredMove; CELL_COUNT]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct MemoKey {
    board: Board,
    depth: i32,
    perspective: Mark,
    to_move: Mark,
}

/// Minimax search context.
///
/// Owns its statistics and optional memo table; two searches never share
/// state unless they share a `Minimax`.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    memo: Option<FxHashMap<MemoKey, i32>>,
    stats: SearchStats,
}

impl Minimax {
    /// Plain exhaustive search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search with a memo table that persists across calls.
    #[must_use]
    pub fn with_memoization() -> Self {
        Self {
            memo: Some(FxHashMap::default()),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn is_memoized(&self) -> bool {
        self.memo.is_some()
    }

    /// Number of cached positions.
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.as_ref().map_or(0, FxHashMap::len)
    }

    /// Drop all cached positions.
    pub fn clear_memo(&mut self) {
        if let Some(memo) = self.memo.as_mut() {
            memo.clear();
        }
    }

    /// Statistics from the most recent `best_move` / `evaluate_moves` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Fully solved score of `board` for `perspective`, with `to_move` to play
    /// and `depth` plies already made below the root move.
    pub fn score(&mut self, board: &Board, depth: i32, perspective: Mark, to_move: Mark) -> i32 {
        self.search(*board, depth, perspective, to_move)
    }

    fn search(&mut self, board: Board, depth: i32, perspective: Mark, to_move: Mark) -> i32 {
        let key = MemoKey {
            board,
            depth,
            perspective,
            to_move,
        };
        if let Some(&cached) = self.memo.as_ref().and_then(|memo| memo.get(&key)) {
            self.stats.cache_hits += 1;
            return cached;
        }

        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth.clamp(0, u8::MAX as i32) as u8);

        let score = if winning_line(perspective, &board).is_some() {
            WIN_SCORE - depth
        } else if winning_line(perspective.opponent(), &board).is_some() {
            depth - WIN_SCORE
        } else if is_full(&board) {
            0
        } else {
            let maximizing = to_move == perspective;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for index in legal_moves(&board) {
                let child = board.with_mark(index, to_move);
                let value = self.search(child, depth + 1, perspective, to_move.opponent());
                best = if maximizing { best.max(value) } else { best.min(value) };
            }
            best
        };

        if let Some(memo) = self.memo.as_mut() {
            memo.insert(key, score);
        }
        score
    }

    /// Score every legal move for `mark`, ascending by index.
    ///
    /// Each move is scored with the opponent to reply, from `mark`'s side.
    pub fn evaluate_moves(&mut self, board: &Board, mark: Mark) -> ScoredMoves {
        let start = Instant::now();
        self.stats.reset();

        let scored = legal_moves(board)
            .into_iter()
            .map(|index| ScoredMove {
                index,
                score: self.search(board.with_mark(index, mark), 0, mark, mark.opponent()),
            })
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        scored
    }

    /// Best move for `mark`: strictly greatest score, lowest index on ties.
    ///
    /// Returns `None` only when the board has no empty cell. Callers should
    /// not ask for a move on a finished game.
    #[instrument(level = "debug", skip(self, board), fields(empty = board.empty_count()))]
    pub fn best_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        let mut best: Option<ScoredMove> = None;
        for candidate in self.evaluate_moves(board, mark) {
            if best.map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        trace!(
            nodes = self.stats.nodes_visited,
            cache_hits = self.stats.cache_hits,
            time_us = self.stats.time_us,
            chosen = ?best,
            "search complete"
        );
        best.map(|b| b.index)
    }
}

/// Score of `board` for `perspective` with a fresh, unmemoized search.
#[must_use]
pub fn score(board: &Board, depth: i32, perspective: Mark, to_move: Mark) -> i32 {
    Minimax::new().score(board, depth, perspective, to_move)
}

/// Best move for `mark` with a fresh, unmemoized search.
#[must_use]
pub fn best_move(board: &Board, mark: Mark) -> Option<usize> {
    Minimax::new().best_move(board, mark)
}

//! Computer-vs-computer games.
//!
//! Plays two `MovePolicy` implementations against each other through the
//! real `GameState`, so every move goes through the same legality checks a
//! human move does. Used to measure difficulty levels against each other.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, Mark, MarkMap, Mode};
use crate::game::{GameState, IllegalMove, MoveRecord, MoveRequest, Status};
use crate::policy::MovePolicy;
use crate::rules::GameResult;

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Mark that moves first in game 0.
    pub starting_mark: Mark,

    /// Alternate the starting mark from one game to the next.
    pub alternate_start: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            starting_mark: Mark::First,
            alternate_start: false,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mark that opens game 0.
    pub fn with_starting_mark(mut self, mark: Mark) -> Self {
        self.starting_mark = mark;
        self
    }

    /// Alternate the opening mark between games.
    pub fn with_alternate_start(mut self, alternate: bool) -> Self {
        self.alternate_start = alternate;
        self
    }

    /// Opening mark for game number `game`.
    #[must_use]
    pub fn starting_mark_for(&self, game: usize) -> Mark {
        if self.alternate_start && game % 2 == 1 {
            self.starting_mark.opponent()
        } else {
            self.starting_mark
        }
    }
}

/// Failure while running a self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SelfPlayError {
    /// A policy returned a move the game rejected.
    #[display("policy for {mark} played an illegal move: {source}")]
    Illegal { mark: Mark, source: IllegalMove },
    /// A policy returned no move on a running game.
    #[display("policy for {mark} returned no move")]
    NoMove { mark: Mark },
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Mark that opened the game.
    pub starting_mark: Mark,
    /// Accepted moves in order.
    pub moves: Vec<MoveRecord>,
    /// Final board.
    pub board: Board,
    /// Final status (never `Running`).
    pub status: Status,
}

impl GameRecord {
    /// Winner or draw.
    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.status.winner() {
            Some(mark) => GameResult::Winner(mark),
            None => GameResult::Draw,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Aggregate results over many games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayStats {
    /// Games played.
    pub games: u32,
    /// Wins per mark.
    pub wins: MarkMap<u32>,
    /// Drawn games.
    pub draws: u32,
    /// Total moves over all games.
    pub total_moves: u32,
}

impl SelfPlayStats {
    /// Add one finished game.
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.total_moves += game.len() as u32;
        match game.result() {
            GameResult::Winner(mark) => self.wins[mark] += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Fraction of games won by `mark`.
    #[must_use]
    pub fn win_rate(&self, mark: Mark) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[mark] as f64 / self.games as f64
        }
    }

    /// Fraction of games drawn.
    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.draws as f64 / self.games as f64
        }
    }

    /// Average moves per game.
    #[must_use]
    pub fn avg_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

/// Worker that plays `first` (as `Mark::First`) against `second`
/// (as `Mark::Second`).
pub struct SelfPlayWorker<A: MovePolicy, B: MovePolicy> {
    first: A,
    second: B,
    config: SelfPlayConfig,
}

impl<A: MovePolicy, B: MovePolicy> SelfPlayWorker<A, B> {
    /// Create a new self-play worker.
    pub fn new(first: A, second: B, config: SelfPlayConfig) -> Self {
        Self {
            first,
            second,
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play a single game to completion with `starting_mark` moving first.
    #[instrument(level = "debug", skip(self))]
    pub fn play_game(&mut self, starting_mark: Mark) -> Result<GameRecord, SelfPlayError> {
        let mut state = GameState::with_mode(starting_mark, Mode::HumanVsHuman);

        while state.is_running() {
            let mark = state.to_move();
            let board = *state.board();
            let choice = match mark {
                Mark::First => self.first.choose_move(&board, mark),
                Mark::Second => self.second.choose_move(&board, mark),
            };
            let index = choice.ok_or(SelfPlayError::NoMove { mark })?;
            state
                .apply_move(MoveRequest::new(index, mark))
                .map_err(|source| SelfPlayError::Illegal { mark, source })?;
        }

        debug!(status = ?state.status(), plies = state.ply(), "game finished");
        Ok(GameRecord {
            starting_mark,
            moves: state.history().iter().copied().collect(),
            board: *state.board(),
            status: state.status(),
        })
    }

    /// Play `count` games and aggregate the results.
    pub fn play_games(&mut self, count: usize) -> Result<SelfPlayStats, SelfPlayError> {
        let mut stats = SelfPlayStats::default();
        for game in 0..count {
            let starting_mark = self.config.starting_mark_for(game);
            let record = self.play_game(starting_mark)?;
            stats.record(&record);
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::policy::{OptimalPolicy, UniformRandomPolicy};

    /// Always answers with cell 0, legal or not.
    struct Stubborn;

    impl MovePolicy for Stubborn {
        fn choose_move(&mut self, _board: &Board, _mark: Mark) -> Option<usize> {
            Some(0)
        }
    }

    /// Never answers.
    struct Silent;

    impl MovePolicy for Silent {
        fn choose_move(&mut self, _board: &Board, _mark: Mark) -> Option<usize> {
            None
        }
    }

    #[test]
    fn test_self_play_config_default() {
        let config = SelfPlayConfig::default();
        assert_eq!(config.starting_mark, Mark::First);
        assert!(!config.alternate_start);
        assert_eq!(config.starting_mark_for(1), Mark::First);
    }

    #[test]
    fn test_alternating_start() {
        let config = SelfPlayConfig::new()
            .with_starting_mark(Mark::Second)
            .with_alternate_start(true);

        assert_eq!(config.starting_mark_for(0), Mark::Second);
        assert_eq!(config.starting_mark_for(1), Mark::First);
        assert_eq!(config.starting_mark_for(2), Mark::Second);
    }

    #[test]
    fn test_optimal_self_play_draws() {
        let mut worker =
            SelfPlayWorker::new(OptimalPolicy::new(), OptimalPolicy::new(), SelfPlayConfig::default());
        let record = worker.play_game(Mark::First).unwrap();

        assert_eq!(record.status, Status::Drawn);
        assert_eq!(record.result(), GameResult::Draw);
        assert_eq!(record.len(), 9);
        assert_eq!(record.moves[0].mark, Mark::First);
    }

    #[test]
    fn test_record_matches_board() {
        let mut worker = SelfPlayWorker::new(
            UniformRandomPolicy::new(GameRng::new(1)),
            UniformRandomPolicy::new(GameRng::new(2)),
            SelfPlayConfig::default(),
        );
        let record = worker.play_game(Mark::Second).unwrap();

        assert!(record.status.is_terminal());
        assert_eq!(record.moves[0].mark, Mark::Second);
        for mv in &record.moves {
            assert_eq!(record.board.get(mv.index).mark(), Some(mv.mark));
        }
    }

    #[test]
    fn test_illegal_policy_move_is_reported() {
        let mut worker = SelfPlayWorker::new(Stubborn, Stubborn, SelfPlayConfig::default());
        let err = worker.play_game(Mark::First).unwrap_err();

        assert_eq!(
            err,
            SelfPlayError::Illegal {
                mark: Mark::Second,
                source: IllegalMove::Occupied {
                    index: 0,
                    owner: Mark::First
                }
            }
        );
    }

    #[test]
    fn test_silent_policy_is_reported() {
        let mut worker = SelfPlayWorker::new(Silent, Silent, SelfPlayConfig::default());
        assert_eq!(
            worker.play_game(Mark::First),
            Err(SelfPlayError::NoMove { mark: Mark::First })
        );
    }

    #[test]
    fn test_stats() {
        let mut worker = SelfPlayWorker::new(
            UniformRandomPolicy::new(GameRng::new(10)),
            UniformRandomPolicy::new(GameRng::new(20)),
            SelfPlayConfig::default().with_alternate_start(true),
        );
        let stats = worker.play_games(20).unwrap();

        assert_eq!(stats.games, 20);
        assert_eq!(stats.wins[Mark::First] + stats.wins[Mark::Second] + stats.draws, 20);
        assert!(stats.avg_moves() >= 5.0 && stats.avg_moves() <= 9.0);
        let total = stats.win_rate(Mark::First) + stats.win_rate(Mark::Second) + stats.draw_rate();
        assert!((total - 1.0).abs() < 1e-9);
    }
}

//! Computer move selection.
//!
//! `DifficultyPolicy` wraps the minimax search with one random draw per
//! move: below the level's probability it plays a uniformly random legal
//! move, otherwise the optimal one. This is the only source of
//! non-determinism in the crate, and it is injected through `RandomSource`.

pub mod chooser;
pub mod difficulty;
pub mod random;

pub use chooser::{
    choose_move, Decision, DecisionKind, DifficultyPolicy, MovePolicy, OptimalPolicy,
    UniformRandomPolicy,
};
pub use difficulty::DifficultyLevel;
pub use random::RandomSource;

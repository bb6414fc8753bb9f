//! Player marks and per-mark data storage.
//!
//! ## Mark
//!
//! The two player marks, `First` and `Second`, displayed as `X` and `O`.
//! Which mark is "human" and which is "computer" is decided by the game
//! configuration, not by the mark itself.
//!
//! ## Cell
//!
//! The contents of one board square: `Empty` or `Taken(mark)`.
//!
//! ## MarkMap
//!
//! Fixed two-slot storage indexed by `Mark`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::{Display, EnumIter, EnumString};

/// A player's mark.
///
/// `First` is conventionally `X` and `Second` is `O`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Conventionally `X`.
    #[strum(to_string = "X", serialize = "first")]
    First,
    /// Conventionally `O`.
    #[strum(to_string = "O", serialize = "second")]
    Second,
}

impl Mark {
    /// Both marks, in `First`, `Second` order.
    pub const ALL: [Mark; 2] = [Mark::First, Mark::Second];

    /// The other mark.
    ///
    /// ```
    /// use rust_ttt::core::Mark;
    ///
    /// assert_eq!(Mark::First.opponent(), Mark::Second);
    /// assert_eq!(Mark::Second.opponent(), Mark::First);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Slot index (0 for `First`, 1 for `Second`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Mark::First => 0,
            Mark::Second => 1,
        }
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied.
    #[default]
    Empty,
    /// Occupied by a player's mark.
    Taken(Mark),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Taken(mark)
    }
}

/// Per-mark data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Mark, MarkMap};
///
/// let mut wins: MarkMap<u32> = MarkMap::with_value(0);
/// wins[Mark::Second] += 1;
///
/// assert_eq!(wins[Mark::First], 0);
/// assert_eq!(wins[Mark::Second], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    data: [T; 2],
}

impl<T> MarkMap<T> {
    /// Create a new MarkMap with values from a factory function.
    pub fn new(factory: impl Fn(Mark) -> T) -> Self {
        Self {
            data: [factory(Mark::First), factory(Mark::Second)],
        }
    }

    /// Create a new MarkMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Mark, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        Mark::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &Self::Output {
        &self.data[mark.index()]
    }
}

impl<T> IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut Self::Output {
        &mut self.data[mark.index()]
    }
}

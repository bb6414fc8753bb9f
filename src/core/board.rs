//! The 3x3 board and its fixed win lines.
//!
//! A `Board` is nine `Cell`s in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```
//!
//! Boards are `Copy`. Search code works on copies, so a board seen by one
//! recursive call is never mutated by another.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};

use super::mark::{Cell, Mark};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One of the eight index-triples that wins the game.
///
/// Only the lines in `WIN_LINES` exist; there is no way to build another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The table line with exactly these cells, in table order.
    ///
    /// ```
    /// use rust_ttt::core::{WinLine, WIN_LINES};
    ///
    /// assert_eq!(WinLine::from_cells([2, 4, 6]), Some(WIN_LINES[7]));
    /// assert_eq!(WinLine::from_cells([9, 9, 9]), None);
    /// ```
    #[must_use]
    pub fn from_cells(cells: [usize; 3]) -> Option<Self> {
        WIN_LINES.iter().copied().find(|line| line.0 == cells)
    }

    /// The three cell indices of this line.
    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Check whether `index` lies on this line.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Cells that do not form a line of `WIN_LINES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{cells:?} is not a win line")]
pub struct InvalidWinLine {
    pub cells: [usize; 3],
}

impl TryFrom<[usize; 3]> for WinLine {
    type Error = InvalidWinLine;

    fn try_from(cells: [usize; 3]) -> Result<Self, Self::Error> {
        Self::from_cells(cells).ok_or(InvalidWinLine { cells })
    }
}

impl From<WinLine> for [usize; 3] {
    fn from(line: WinLine) -> Self {
        line.0
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// All win lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// 3x3 board in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from a full cell array.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Create a board from a slice snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the slice does not hold exactly 9 cells.
    #[must_use]
    pub fn from_slice(cells: &[Cell]) -> Self {
        let cells: [Cell; CELL_COUNT] = cells.try_into().unwrap_or_else(|_| {
            panic!("Board snapshot must have exactly {CELL_COUNT} cells, got {}", cells.len())
        });
        Self { cells }
    }

    /// Get the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Get the cell at `index`, or `None` when out of range.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Taken(mark)).count()
    }

    /// Number of unoccupied cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Return a copy of this board with `mark` placed at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of range or already taken.
    #[must_use]
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.place(index, mark);
        self
    }

    /// Place `mark` at `index`. Cells only ever go from Empty to a mark.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        assert!(
            self.cells[index].is_empty(),
            "cell {index} is already taken by {:?}",
            self.cells[index]
        );
        self.cells[index] = Cell::Taken(mark);
    }
}

impl fmt::Display for Board {
    /// Three rows of ` | `-separated cells, blank when empty, with a
    /// `---------` rule between rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("\n---------\n")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    f.write_str(" | ")?;
                }
                match cell {
                    Cell::Empty => f.write_str(" ")?,
                    Cell::Taken(mark) => write!(f, "{}", mark.symbol())?,
                }
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Text did not contain exactly nine cell characters.
    #[display("expected 9 cells, found {found}")]
    WrongLength { found: usize },
    /// A character was not `X`, `O` or an empty marker.
    #[display("invalid cell character {symbol:?} at position {position}")]
    InvalidCell { symbol: char, position: usize },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse nine cell characters, ignoring whitespace between rows.
    ///
    /// `X`/`x` is `First`, `O`/`o` is `Second`, and `.`, `_` or `-` is empty.
    ///
    /// ```
    /// use rust_ttt::core::{Board, Cell, Mark};
    ///
    /// let board: Board = "XXX OO. ...".parse().unwrap();
    /// assert_eq!(board.get(0), Cell::Taken(Mark::First));
    /// assert_eq!(board.get(4), Cell::Taken(Mark::Second));
    /// assert_eq!(board.get(5), Cell::Empty);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, ch) in symbols.into_iter().enumerate() {
            cells[i] = match ch {
                'X' | 'x' => Cell::Taken(Mark::First),
                'O' | 'o' => Cell::Taken(Mark::Second),
                '.' | '_' | '-' => Cell::Empty,
                symbol => return Err(BoardParseError::InvalidCell { symbol, position: i }),
            };
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::First);

        assert_eq!(board.get(4), Cell::Empty);
        assert_eq!(next.get(4), Cell::Taken(Mark::First));
        assert_eq!(next.count(Mark::First), 1);
        assert_eq!(next.empty_count(), 8);
    }

    #[test]
    #[should_panic(expected = "already taken")]
    fn test_place_on_taken_cell_panics() {
        let board = Board::new().with_mark(0, Mark::First);
        let _ = board.with_mark(0, Mark::Second);
    }

    #[test]
    #[should_panic(expected = "exactly 9 cells")]
    fn test_from_slice_wrong_length_panics() {
        let _ = Board::from_slice(&[Cell::Empty; 8]);
    }

    #[test]
    fn test_from_slice() {
        let mut cells = vec![Cell::Empty; 9];
        cells[8] = Cell::Taken(Mark::Second);
        let board = Board::from_slice(&cells);
        assert_eq!(board.get(8), Cell::Taken(Mark::Second));
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell(8), Some(Cell::Empty));
        assert_eq!(board.cell(9), None);
    }

    #[test]
    fn test_parse() {
        let board: Board = "XO. ... ..X".parse().unwrap();
        assert_eq!(board.count(Mark::First), 2);
        assert_eq!(board.count(Mark::Second), 1);
        assert_eq!(board.get(1), Cell::Taken(Mark::Second));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength { found: 2 })
        );
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(BoardParseError::InvalidCell {
                symbol: 'Z',
                position: 3
            })
        );
    }

    #[test]
    fn test_display() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(
            board.to_string(),
            "X |   |  \n---------\n  | O |  \n---------\n  |   |  "
        );
    }

    #[test]
    fn test_win_lines_cover_every_cell() {
        for index in 0..CELL_COUNT {
            assert!(WIN_LINES.iter().any(|line| line.contains(index)));
        }
        // Center sits on 4 lines: middle row, middle column, both diagonals.
        assert_eq!(WIN_LINES.iter().filter(|l| l.contains(4)).count(), 4);
    }

    #[test]
    fn test_win_line_from_cells() {
        for line in WIN_LINES {
            assert_eq!(WinLine::from_cells(line.cells()), Some(line));
        }
        assert_eq!(WinLine::from_cells([2, 1, 0]), None);
        assert_eq!(WinLine::from_cells([9, 9, 9]), None);
        assert_eq!(
            WinLine::try_from([0, 1, 3]),
            Err(InvalidWinLine { cells: [0, 1, 3] })
        );
    }

    #[test]
    fn test_win_line_deserialize_rejects_unknown_line() {
        let line: WinLine = serde_json::from_str("[6,7,8]").unwrap();
        assert_eq!(line, WIN_LINES[2]);
        assert_eq!(serde_json::to_string(&line).unwrap(), "[6,7,8]");

        assert!(serde_json::from_str::<WinLine>("[9,9,9]").is_err());
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::new().with_mark(2, Mark::Second);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}

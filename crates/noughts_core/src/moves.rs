//! Move types for tic-tac-toe.
//!
//! A [`Move`] is an immutable coordinate that is range-checked on creation,
//! so every board operation taking a `Move` is in bounds. Scores produced by
//! advisory evaluation travel separately in [`ScoredMove`].

use super::error::BoardError;
use serde::Serialize;
use tracing::instrument;

/// A grid coordinate (row, column), both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    row: usize,
    column: usize,
}

impl Move {
    /// Number of rows on the grid.
    pub const ROWS: usize = 3;
    /// Number of columns on the grid.
    pub const COLUMNS: usize = 3;

    /// All 9 coordinates in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates a move, rejecting coordinates outside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCoordinate`] if `row` or `column` is 3 or more.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, BoardError> {
        if row >= Self::ROWS || column >= Self::COLUMNS {
            return Err(BoardError::InvalidCoordinate { row, column });
        }
        Ok(Self::at(row, column))
    }

    /// Row of this move.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this move.
    pub fn column(self) -> usize {
        self.column
    }

    /// Row-major cell index (0-8).
    pub fn index(self) -> usize {
        self.row * Self::COLUMNS + self.column
    }

    /// Creates a move from a row-major cell index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Numeric keypad digit for this cell: 7-8-9 on the top row, 1-2-3 on the bottom.
    pub fn keypad(self) -> usize {
        (Self::ROWS - 1 - self.row) * Self::COLUMNS + self.column + 1
    }

    /// Creates a move from a numeric keypad digit.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidKey`] unless `key` is in `1..=9`.
    #[instrument]
    pub fn from_keypad(key: usize) -> Result<Self, BoardError> {
        if !(1..=9).contains(&key) {
            return Err(BoardError::InvalidKey { key });
        }
        let offset = key - 1;
        Ok(Self::at(
            Self::ROWS - 1 - offset / Self::COLUMNS,
            offset % Self::COLUMNS,
        ))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// A legal move annotated with its minimax score.
///
/// Scores are exactly -1 (loss), 0 (draw or unresolved) or +1 (win) for the
/// mark that was evaluated. Magnitude says nothing about distance to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    /// The evaluated move.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Minimax score for the evaluated mark.
    pub score: i32,
}

impl std::fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with score {}", self.mv, self.score)
    }
}

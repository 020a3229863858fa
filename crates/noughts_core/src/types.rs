//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark a player places on the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Circle (always the first-listed player, moves first).
    #[strum(serialize = "circle", serialize = "o")]
    Circle,
    /// Cross (moves second).
    #[strum(serialize = "cross", serialize = "x")]
    Cross,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Circle => Mark::Cross,
            Mark::Cross => Mark::Circle,
        }
    }

    /// Single-character symbol used in board layouts.
    pub fn symbol(self) -> char {
        match self {
            Mark::Circle => 'O',
            Mark::Cross => 'X',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// True if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

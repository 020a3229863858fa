//! Board error types.

use derive_more::{Display, Error};

/// Errors raised at the boundary where raw coordinates or layouts enter the core.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside the 3x3 grid.
    #[display("Coordinate ({row}, {column}) is outside the 3x3 grid")]
    InvalidCoordinate {
        /// Offending row.
        row: usize,
        /// Offending column.
        column: usize,
    },

    /// Keypad key outside 1-9.
    #[display("Key {key} is not a keypad digit (1-9)")]
    InvalidKey {
        /// Offending key.
        key: usize,
    },

    /// Board layout with the wrong number of cells.
    #[display("Board layout must have 9 cells, found {found}")]
    InvalidLength {
        /// Number of cells found.
        found: usize,
    },

    /// Board layout containing an unknown symbol.
    #[display("Unrecognized cell symbol {symbol:?}")]
    InvalidSymbol {
        /// Offending character.
        symbol: char,
    },
}

//! Draw detection logic for tic-tac-toe.

use crate::Board;

/// Checks if the board is full (no empty cells).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

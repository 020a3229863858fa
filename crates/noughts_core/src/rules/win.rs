//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Move};

/// Lines checked for three in a row: both diagonals, then each row followed
/// by the column with the same index.
const LINES: [[usize; 3]; 8] = [
    // Diagonal \
    [0, 4, 8],
    // Diagonal /
    [2, 4, 6],
    // Row 0, column 0
    [0, 1, 2],
    [0, 3, 6],
    // Row 1, column 1
    [3, 4, 5],
    [1, 4, 7],
    // Row 2, column 2
    [6, 7, 8],
    [2, 5, 8],
];

/// Mark owning all three cells of `line`, if any.
fn line_owner(cells: &[Cell; 9], [a, b, c]: [usize; 3]) -> Option<Mark> {
    let mark = cells[a].mark()?;
    (cells[b] == cells[a] && cells[c] == cells[a]).then_some(mark)
}

/// Checks if there is a winner on the board.
///
/// Returns the mark owning the first completed line, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES
        .iter()
        .find_map(|&line| line_owner(board.cells(), line))
}

/// Completed line owned by the winner, as row-major moves.
pub fn winning_line(board: &Board) -> Option<[Move; 3]> {
    LINES
        .iter()
        .find(|&&line| line_owner(board.cells(), line).is_some())
        .map(|&line| line.map(|index| Move::ALL[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("OOO X.X ...")), Some(Mark::Circle));
    }

    #[test]
    fn test_winner_right_column() {
        assert_eq!(check_winner(&board("O.X O.X ..X")), Some(Mark::Cross));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&board("X.O XO. O..")), Some(Mark::Circle));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("OO. ... ...")), None);
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let line = winning_line(&board("X.. .X. ..X")).unwrap();
        assert_eq!(line, [Move::ALL[0], Move::ALL[4], Move::ALL[8]]);
        assert_eq!(winning_line(&Board::new()), None);
    }
}

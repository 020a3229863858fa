//! The 3x3 board and its terminal-state queries.

use super::error::BoardError;
use super::moves::Move;
use super::rules;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Status of a board: still being played, won, or drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameState {
    /// No winner and at least one empty cell.
    Ongoing,
    /// One mark owns three in a line.
    Win,
    /// Board is full with no winner.
    Draw,
}

impl GameState {
    /// True for `Win` and `Draw`.
    pub fn is_over(self) -> bool {
        self != GameState::Ongoing
    }
}

/// 3x3 tic-tac-toe board.
///
/// Every cell is always exactly one [`Cell`] value. Cells only go back to
/// empty through [`Board::retract`] or [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at the given coordinate.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Checks if the cell at the given coordinate is empty.
    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Places `mark` at `mv`.
    ///
    /// Returns `false` and leaves the board untouched if the cell is occupied.
    pub fn place(&mut self, mv: Move, mark: Mark) -> bool {
        let cell = &mut self.cells[mv.index()];
        if !cell.is_empty() {
            return false;
        }
        *cell = Cell::Occupied(mark);
        true
    }

    /// Empties the cell at `mv` unconditionally.
    ///
    /// Only meant to undo a placement made while exploring; prefer
    /// [`Board::place_scoped`], which pairs the two automatically.
    pub fn retract(&mut self, mv: Move) {
        self.cells[mv.index()] = Cell::Empty;
    }

    /// Places `mark` at `mv` for as long as the returned guard lives.
    ///
    /// The guard derefs to the board, so it can be searched further, and
    /// retracts the mark when dropped. Returns `None` if the cell is occupied.
    pub fn place_scoped(&mut self, mv: Move, mark: Mark) -> Option<Placement<'_>> {
        if !self.place(mv, mark) {
            return None;
        }
        Some(Placement { board: self, mv })
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.is_empty_at(mv))
            .collect()
    }

    /// Mark owning a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Current status. A full board with a winner is a win, not a draw.
    pub fn state(&self) -> GameState {
        if self.winner().is_some() {
            GameState::Win
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Ongoing
        }
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Mark expected to move next, assuming Circle opened.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::Circle) > self.count(Mark::Cross) {
            Mark::Cross
        } else {
            Mark::Circle
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with keypad digits in empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Move::ROWS {
            for column in 0..Move::COLUMNS {
                let mv = Move::ALL[row * Move::COLUMNS + column];
                match self.get(mv) {
                    Cell::Empty => write!(f, "{}", mv.keypad())?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if column < Move::COLUMNS - 1 {
                    f.write_str("|")?;
                }
            }
            if row < Move::ROWS - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses a row-major layout such as `"OX. .O. ..X"`.
    ///
    /// `O`/`X` (any case) are marks, `.`, `-` and `_` are empty cells.
    /// Whitespace, `/` and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .map(|symbol| match symbol {
                'O' | 'o' => Ok(Cell::Occupied(Mark::Circle)),
                'X' | 'x' => Ok(Cell::Occupied(Mark::Cross)),
                '.' | '-' | '_' => Ok(Cell::Empty),
                _ => Err(BoardError::InvalidSymbol { symbol }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let found = cells.len();
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| BoardError::InvalidLength { found })?;
        Ok(Self { cells })
    }
}

/// A mark placed on a borrowed board, retracted when the guard is dropped.
///
/// Created by [`Board::place_scoped`]. Every exit path, including early
/// returns and unwinding, empties the cell again.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Placement<'_> {
    /// The move this guard placed.
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.retract(self.mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, column: usize) -> Move {
        Move::new(row, column).unwrap()
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        assert!(board.place(mv(1, 1), Mark::Circle));
        assert!(!board.place(mv(1, 1), Mark::Cross));
        assert_eq!(board.get(mv(1, 1)), Cell::Occupied(Mark::Circle));
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_retract_restores_cell() {
        let mut board: Board = "OX. ... ...".parse().unwrap();
        let before = board.clone();
        assert!(board.place(mv(2, 2), Mark::Cross));
        board.retract(mv(2, 2));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_scoped_retracts_on_drop() {
        let mut board = Board::new();
        {
            let mut outer = board.place_scoped(mv(0, 0), Mark::Circle).unwrap();
            assert_eq!(outer.mark_count(), 1);
            {
                let inner = outer.place_scoped(mv(0, 1), Mark::Cross).unwrap();
                assert_eq!(inner.mark_count(), 2);
                assert_eq!(inner.mv(), mv(0, 1));
            }
            assert_eq!(outer.mark_count(), 1);
            assert!(outer.place_scoped(mv(0, 0), Mark::Cross).is_none());
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::new();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9);
        assert_eq!(&moves[..4], &[mv(0, 0), mv(0, 1), mv(0, 2), mv(1, 0)]);

        let board: Board = "O.. .X. ..O".parse().unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], mv(0, 1));
        assert!(!moves.contains(&mv(1, 1)));
    }

    #[test]
    fn test_state_precedence() {
        assert_eq!(Board::new().state(), GameState::Ongoing);
        assert_eq!("OOO XX. ...".parse::<Board>().unwrap().state(), GameState::Win);
        assert_eq!("OXO OXX XOO".parse::<Board>().unwrap().state(), GameState::Draw);
        // Full and won at the same time.
        assert_eq!("OXO XOX XOO".parse::<Board>().unwrap().state(), GameState::Win);
    }

    #[test]
    fn test_clear() {
        let mut board: Board = "OXO XOX XO.".parse().unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_next_mark() {
        assert_eq!(Board::new().next_mark(), Mark::Circle);
        assert_eq!("O.. ... ...".parse::<Board>().unwrap().next_mark(), Mark::Cross);
        assert_eq!("OX. ... ...".parse::<Board>().unwrap().next_mark(), Mark::Circle);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "OX".parse::<Board>(),
            Err(BoardError::InvalidLength { found: 2 })
        );
        assert_eq!(
            "OX. ... ..Z".parse::<Board>(),
            Err(BoardError::InvalidSymbol { symbol: 'Z' })
        );
        assert!("OX. ... .... .".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_uses_keypad_digits() {
        let board: Board = "O.. .X. ...".parse().unwrap();
        assert_eq!(board.to_string(), "O|8|9\n-+-+-\n4|X|6\n-+-+-\n1|2|3");
    }
}

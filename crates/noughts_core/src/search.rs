//! Depth-bounded alpha-beta minimax over a shared board.
//!
//! The engine never copies the board. Each candidate is placed with
//! [`Board::place_scoped`], searched, and retracted when the guard drops, so
//! the board is identical before and after every top-level call.
//!
//! Leaves score +1 when the engine's mark has won, -1 when the opponent has,
//! and 0 otherwise. There is no depth decay: a win in one ply and a win in
//! five both score +1.

use super::board::Board;
use super::level::Level;
use super::moves::{Move, ScoredMove};
use super::types::Mark;
use tracing::{debug, instrument, trace};

/// Ply budget deep enough to solve the 3x3 board from any position.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Alpha-beta minimax engine playing one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    mark: Mark,
    opponent: Mark,
    max_depth: usize,
}

impl Engine {
    /// Creates an engine for `mark` searching [`DEFAULT_MAX_DEPTH`] plies.
    pub fn new(mark: Mark) -> Self {
        Self::with_depth(mark, DEFAULT_MAX_DEPTH)
    }

    /// Creates an engine with an explicit ply budget.
    pub fn with_depth(mark: Mark, max_depth: usize) -> Self {
        Self {
            mark,
            opponent: mark.opponent(),
            max_depth,
        }
    }

    /// Creates an engine whose ply budget comes from a difficulty level.
    pub fn with_level(mark: Mark, level: Level) -> Self {
        Self::with_depth(mark, level.depth())
    }

    /// Mark this engine maximizes for.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Mark this engine minimizes for.
    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    /// Current ply budget.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Changes the ply budget to the level's depth.
    pub fn set_level(&mut self, level: Level) {
        self.max_depth = level.depth();
    }

    /// Picks the highest scoring legal move, first in row-major order on ties.
    ///
    /// A move that completes a line right away is taken over any other +1
    /// move, since scores do not tell a win now from a fork that wins later.
    /// Returns `None` only when the board has no empty cell.
    #[instrument(skip(self, board), fields(mark = %self.mark, max_depth = self.max_depth))]
    pub fn best_move(&self, board: &mut Board) -> Option<Move> {
        let mut best: Option<ScoredMove> = None;
        for mv in Move::ALL {
            let Some(mut child) = board.place_scoped(mv, self.mark) else {
                continue;
            };
            if child.winner() == Some(self.mark) {
                debug!(%mv, "Engine takes immediate win");
                return Some(mv);
            }
            let score = self.search(&mut child, 0, false, i32::MIN, i32::MAX);
            if best.is_none_or(|current| score > current.score) {
                best = Some(ScoredMove { mv, score });
            }
        }

        match best {
            Some(chosen) => debug!(%chosen, "Engine selected move"),
            None => debug!("No legal moves to choose from"),
        }
        best.map(|chosen| chosen.mv)
    }

    /// Scores every legal move in row-major order.
    #[instrument(skip(self, board), fields(mark = %self.mark, max_depth = self.max_depth))]
    pub fn score_all_moves(&self, board: &mut Board) -> Vec<ScoredMove> {
        let mut scored = Vec::new();
        for mv in Move::ALL {
            if let Some(score) = self.score_root(board, mv) {
                scored.push(ScoredMove { mv, score });
            }
        }
        debug!(count = scored.len(), "Scored legal moves");
        scored
    }

    /// Static score of a board: +1 own win, -1 opponent win, 0 otherwise.
    pub fn evaluate(&self, board: &Board) -> i32 {
        match board.winner() {
            Some(mark) if mark == self.mark => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    /// Recursive alpha-beta search.
    ///
    /// `depth` counts plies below the root move, `maximizing` says whether
    /// the engine's mark is to move. Stops at a decided board, at
    /// `max_depth`, or when the board is full.
    pub fn search(
        &self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let eval = self.evaluate(board);
        if eval != 0 || depth == self.max_depth || board.is_full() {
            return eval;
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in Move::ALL {
                let Some(mut child) = board.place_scoped(mv, self.mark) else {
                    continue;
                };
                best = best.max(self.search(&mut child, depth + 1, false, alpha, beta));
                alpha = alpha.max(best);
                if alpha >= beta {
                    trace!(depth, alpha, beta, "Beta cutoff");
                    break;
                }
            }
            best
        } else {
            let mut worst = i32::MAX;
            for mv in Move::ALL {
                let Some(mut child) = board.place_scoped(mv, self.opponent) else {
                    continue;
                };
                worst = worst.min(self.search(&mut child, depth + 1, true, alpha, beta));
                beta = beta.min(worst);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "Alpha cutoff");
                    break;
                }
            }
            worst
        }
    }

    /// Places the engine's mark at `mv` and scores the reply position.
    fn score_root(&self, board: &mut Board, mv: Move) -> Option<i32> {
        let mut child = board.place_scoped(mv, self.mark)?;
        Some(self.search(&mut child, 0, false, i32::MIN, i32::MAX))
    }
}

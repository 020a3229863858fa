//! Position analysis and engine self-play.

use crate::render::render_advice;
use anyhow::{Context, Result};
use noughts_core::{Board, Engine, GameState, Level, Mark, ScoredMove};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// Scores of every legal move in one position.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Mark the scores are computed for.
    pub to_move: Mark,
    /// Ply budget used.
    pub depth: usize,
    /// State of the analysed board.
    pub state: GameState,
    /// Legal moves in row-major order with their scores.
    pub moves: Vec<ScoredMove>,
}

/// Scores every legal move of `board` and writes a report to `out`.
///
/// When `to_move` is `None` the mark is inferred from the mark counts.
#[instrument(skip(board, out))]
pub fn evaluate<W: Write>(
    board: &Board,
    to_move: Option<Mark>,
    depth: usize,
    json: bool,
    mut out: W,
) -> Result<EvaluationReport> {
    let to_move = to_move.unwrap_or_else(|| board.next_mark());
    let mut scratch = board.clone();
    let moves = Engine::with_depth(to_move, depth).score_all_moves(&mut scratch);
    let report = EvaluationReport {
        to_move,
        depth,
        state: board.state(),
        moves,
    };

    if json {
        serde_json::to_writer_pretty(&mut out, &report)
            .context("Failed to write JSON report")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{board}\n")?;
        writeln!(out, "{to_move} to move, {depth} plies, board {}\n", report.state)?;
        writeln!(out, "{}\n", render_advice(board, &report.moves))?;
        for scored in &report.moves {
            writeln!(out, "{}: {scored}", scored.mv.keypad())?;
        }
    }
    Ok(report)
}

/// Plays two engines against each other from an empty board.
///
/// The engine at `first` plays Circle and opens. Returns the final board.
#[instrument(skip(out))]
pub fn self_play<W: Write>(first: Level, second: Level, mut out: W) -> Result<Board> {
    let engines = [
        Engine::with_level(Mark::Circle, first),
        Engine::with_level(Mark::Cross, second),
    ];
    let levels = [first, second];
    let mut board = Board::new();
    let mut turn = 0;

    while board.state() == GameState::Ongoing {
        let engine = &engines[turn];
        let mv = engine
            .best_move(&mut board)
            .context("Engine found no move on an ongoing board")?;
        board.place(mv, engine.mark());
        writeln!(out, "{} ({}) plays {}", engine.mark(), levels[turn], mv.keypad())?;
        turn = 1 - turn;
    }

    writeln!(out, "\n{board}\n")?;
    match board.winner() {
        Some(mark) => writeln!(out, "{mark} wins")?,
        None => writeln!(out, "Draw")?,
    }
    info!(state = %board.state(), winner = ?board.winner(), "Self-play finished");
    Ok(board)
}

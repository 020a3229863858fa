//! Line-oriented terminal front end.
//!
//! Empty cells are numbered like a numeric keypad (7-8-9 on top). Besides a
//! digit, a human may type `h` for advice, `r` to restart, `level <name>` to
//! change the engine level, or `q` to quit.

use crate::render::{render_advice, render_outcome};
use anyhow::{Context, Result, bail};
use noughts_core::{Board, Game, GameState, Level, Move};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// What a line of human input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Place(Move),
    Hint,
    Restart,
    ChangeLevel(Level),
    Quit,
}

fn parse_action(line: &str, board: &Board) -> Result<Action, String> {
    let line = line.trim();
    let lowered = line.to_ascii_lowercase();
    match lowered.as_str() {
        "q" | "quit" => return Ok(Action::Quit),
        "h" | "hint" => return Ok(Action::Hint),
        "r" | "restart" => return Ok(Action::Restart),
        _ => {}
    }

    if let Some(name) = lowered.strip_prefix("level ") {
        let name = name.trim();
        return name
            .parse()
            .map(Action::ChangeLevel)
            .map_err(|_| format!("Unknown level {name:?} (shallow, medium, deep)"));
    }

    let key: usize = line
        .parse()
        .map_err(|_| format!("Unrecognized input {line:?}"))?;
    let mv = Move::from_keypad(key).map_err(|e| e.to_string())?;
    if !board.is_empty_at(mv) {
        return Err(format!("Cell {key} is taken"));
    }
    Ok(Action::Place(mv))
}

/// Runs `game` until it ends or the human quits, returning the final state.
///
/// Engine turns are played automatically. Human moves are read one per line
/// from `input` and only legal cells are submitted to the game.
///
/// # Errors
///
/// Fails if `input` closes before the game is over or `out` cannot be written.
#[instrument(skip_all, fields(mode = %game.mode(), level = %game.level()))]
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut out: W,
    hints: bool,
) -> Result<GameState> {
    info!("Starting terminal game");
    writeln!(out, "{} ({})", game.mode().name(), game.level())?;

    loop {
        writeln!(out, "\n{}\n", game.board())?;
        let state = game.state();
        if state.is_over() {
            writeln!(out, "{}", render_outcome(game))?;
            return Ok(state);
        }

        if game.is_engine_turn() {
            let mv = game
                .request_engine_move()
                .context("Engine found no move on an ongoing board")?;
            writeln!(out, "{} plays {}", game.current_player().name(), mv.keypad())?;
            game.submit_move(mv);
            continue;
        }

        if hints {
            let advice = game.score_all_moves();
            writeln!(out, "{}\n", render_advice(game.board(), &advice))?;
        }

        write!(out, "{} [1-9, h, r, q]: ", render_outcome(game))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            bail!("Input closed before the game finished");
        }

        match parse_action(&line, game.board()) {
            Ok(Action::Place(mv)) => {
                debug!(%mv, "Human move");
                game.submit_move(mv);
            }
            Ok(Action::Hint) => {
                let advice = game.score_all_moves();
                writeln!(out, "\n{}", render_advice(game.board(), &advice))?;
            }
            Ok(Action::Restart) => {
                game.restart(game.mode(), game.level());
                writeln!(out, "Restarted")?;
            }
            Ok(Action::ChangeLevel(level)) => {
                game.change_engine_level(level);
                writeln!(out, "Engine level set to {level}")?;
            }
            Ok(Action::Quit) => {
                info!("Human quit");
                return Ok(game.state());
            }
            Err(message) => writeln!(out, "{message}")?,
        }
    }
}

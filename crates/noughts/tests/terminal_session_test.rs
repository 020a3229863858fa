//! Scripted terminal sessions over in-memory input and output.

use noughts::play;
use noughts_core::{Board, Game, GameMode, GameState, Level, Mark};

fn run(game: &mut Game, script: &str, hints: bool) -> (anyhow::Result<GameState>, String) {
    let mut out = Vec::new();
    let result = play(game, script.as_bytes(), &mut out, hints);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_two_humans_play_to_a_win() {
    let mut game = Game::new(GameMode::PlayerVsPlayer, Level::Deep);
    let (result, output) = run(&mut game, "7\n4\n8\n5\n9\n", false);
    assert_eq!(result.unwrap(), GameState::Win);
    assert!(output.contains("Player 1 (O) wins!"));
    assert_eq!(game.board().winner(), Some(Mark::Circle));
}

#[test]
fn test_bad_input_is_reported_and_retried() {
    let mut game = Game::new(GameMode::PlayerVsPlayer, Level::Deep);
    let (result, output) = run(&mut game, "5\n5\n0\nfoo\n1\nq\n", false);
    assert_eq!(result.unwrap(), GameState::Ongoing);
    assert!(output.contains("Cell 5 is taken"));
    assert!(output.contains("Key 0 is not a keypad digit (1-9)"));
    assert!(output.contains("Unrecognized input \"foo\""));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_engine_opens_when_moving_first() {
    let mut game = Game::new(GameMode::EngineVsPlayer, Level::Deep);
    let (result, output) = run(&mut game, "q\n", false);
    assert_eq!(result.unwrap(), GameState::Ongoing);
    assert!(output.contains("AI plays 7"));
    assert_eq!(game.board().mark_count(), 1);
    assert_eq!(game.current_mark(), Mark::Cross);
}

#[test]
fn test_engine_answers_human_move() {
    let mut game = Game::new(GameMode::PlayerVsEngine, Level::Deep);
    let (result, output) = run(&mut game, "5\nq\n", false);
    assert_eq!(result.unwrap(), GameState::Ongoing);
    assert!(output.contains("AI plays"));
    assert_eq!(game.board().mark_count(), 2);
}

#[test]
fn test_hints_and_level_commands() {
    let mut game = Game::new(GameMode::PlayerVsEngine, Level::Deep);
    let (result, output) = run(&mut game, "h\nlevel easy\nq\n", false);
    assert_eq!(result.unwrap(), GameState::Ongoing);
    assert!(output.contains(" 0| 0| 0\n--+--+--\n"));
    assert!(output.contains("Engine level set to shallow"));
    assert_eq!(game.level(), Level::Shallow);
}

#[test]
fn test_restart_clears_board() {
    let mut game = Game::new(GameMode::PlayerVsPlayer, Level::Deep);
    let (result, output) = run(&mut game, "5\n1\nr\nq\n", true);
    assert_eq!(result.unwrap(), GameState::Ongoing);
    assert!(output.contains("Restarted"));
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_closed_input_is_an_error() {
    let mut game = Game::new(GameMode::PlayerVsPlayer, Level::Deep);
    let (result, _) = run(&mut game, "5\n", false);
    assert!(result.is_err());
}

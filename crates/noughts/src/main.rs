//! Noughts - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Command, NoughtsConfig, evaluate, play, self_play};
use noughts_core::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => NoughtsConfig::from_file(path)?,
        None => NoughtsConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { mode, level, hints } => {
            let config = config.with_overrides(mode, level, hints);
            run_play(&config)
        }
        Command::Evaluate {
            board,
            to_move,
            depth,
            json,
        } => {
            evaluate(&board, to_move, depth, json, std::io::stdout().lock())?;
            Ok(())
        }
        Command::Selfplay {
            level,
            opponent_level,
        } => {
            let first = level.unwrap_or(*config.level());
            let second = opponent_level.unwrap_or(first);
            self_play(first, second, std::io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
fn run_play(config: &NoughtsConfig) -> Result<()> {
    info!(mode = %config.mode(), level = %config.level(), "Starting noughts");
    let mut game = Game::new(*config.mode(), *config.level());
    let state = play(
        &mut game,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        *config.hints(),
    )?;
    info!(%state, "Game finished");
    Ok(())
}

//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::{Board, GameMode, Level, Mark};

/// Noughts - tic-tac-toe against an alpha-beta minimax engine
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against an alpha-beta minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Game mode: pvp, pve (you move first) or evp (engine moves first)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Engine level: shallow, medium or deep
        #[arg(short, long)]
        level: Option<Level>,

        /// Show advisory scores before each human move
        #[arg(long)]
        hints: bool,
    },

    /// Score every legal move of a position
    Evaluate {
        /// Row-major layout, e.g. "OX. .O. ..."
        board: Board,

        /// Mark to evaluate for (inferred from mark counts if omitted)
        #[arg(long)]
        to_move: Option<Mark>,

        /// Search depth in plies
        #[arg(long, default_value_t = noughts_core::DEFAULT_MAX_DEPTH)]
        depth: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let two engines play each other
    Selfplay {
        /// Level of the engine moving first
        #[arg(long)]
        level: Option<Level>,

        /// Level of the engine moving second (defaults to --level)
        #[arg(long)]
        opponent_level: Option<Level>,
    },
}

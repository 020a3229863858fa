//! Noughts - terminal tic-tac-toe against an alpha-beta minimax engine.
//!
//! This crate is the presentation side of [`noughts_core`]: it reads moves
//! from a line-oriented terminal, renders boards and advisory scores, and
//! wires configuration and logging around the core game.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod config;
mod render;
mod terminal;

pub use analysis::{EvaluationReport, evaluate, self_play};
pub use cli::{Cli, Command};
pub use config::{ConfigError, NoughtsConfig};
pub use render::{render_advice, render_outcome};
pub use terminal::play;

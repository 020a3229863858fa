//! Noughts core - tic-tac-toe state model and adversarial search.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of cells with place/retract and terminal detection
//! - **Rules**: pure win and draw checks over a board
//! - **Engine**: depth-bounded alpha-beta minimax that mutates the board in
//!   place and restores it before returning
//! - **Game**: turn orchestration between two players, human or engine
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, GameMode, GameState, Level, Move};
//!
//! # fn example() -> Result<(), noughts_core::BoardError> {
//! let mut game = Game::new(GameMode::PlayerVsEngine, Level::Deep);
//! assert_eq!(game.submit_move(Move::new(1, 1)?), GameState::Ongoing);
//!
//! let reply = game.request_engine_move().expect("engine to move");
//! game.submit_move(reply);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod level;
mod mode;
mod moves;
mod player;
pub mod rules;
mod search;
mod types;

pub use board::{Board, GameState, Placement};
pub use error::BoardError;
pub use game::Game;
pub use level::Level;
pub use mode::GameMode;
pub use moves::{Move, ScoredMove};
pub use player::Player;
pub use search::{DEFAULT_MAX_DEPTH, Engine};
pub use types::{Cell, Mark};

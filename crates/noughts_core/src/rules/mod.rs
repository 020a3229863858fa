//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the engine and the orchestrator share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

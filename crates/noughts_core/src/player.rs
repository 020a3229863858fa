//! Players: human-controlled or engine-controlled.

use super::board::Board;
use super::level::Level;
use super::moves::Move;
use super::search::Engine;
use super::types::Mark;

/// One side of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Player {
    /// Moves are supplied from outside.
    Human {
        /// Display name.
        name: String,
        /// Mark this player places.
        mark: Mark,
    },
    /// Moves come from an alpha-beta search.
    Engine {
        /// Display name.
        name: String,
        /// Search engine bound to this player's mark.
        engine: Engine,
    },
}

impl Player {
    /// Creates a human player.
    pub fn human(name: impl Into<String>, mark: Mark) -> Self {
        Player::Human {
            name: name.into(),
            mark,
        }
    }

    /// Creates an engine player searching at the level's depth.
    pub fn engine(name: impl Into<String>, mark: Mark, level: Level) -> Self {
        Player::Engine {
            name: name.into(),
            engine: Engine::with_level(mark, level),
        }
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        match self {
            Player::Human { name, .. } | Player::Engine { name, .. } => name,
        }
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        match self {
            Player::Human { mark, .. } => *mark,
            Player::Engine { engine, .. } => engine.mark(),
        }
    }

    /// True for engine-controlled players.
    pub fn is_engine(&self) -> bool {
        matches!(self, Player::Engine { .. })
    }

    /// The engine behind this player, if any.
    pub fn engine_ref(&self) -> Option<&Engine> {
        match self {
            Player::Human { .. } => None,
            Player::Engine { engine, .. } => Some(engine),
        }
    }

    /// Computes a move for engine players; humans always yield `None`.
    ///
    /// The board is explored in place and restored before returning.
    pub fn maybe_compute_move(&self, board: &mut Board) -> Option<Move> {
        match self {
            Player::Human { .. } => None,
            Player::Engine { engine, .. } => engine.best_move(board),
        }
    }

    /// Updates the search depth of engine players. Humans are unaffected.
    pub(crate) fn set_level(&mut self, level: Level) {
        if let Player::Engine { engine, .. } = self {
            engine.set_level(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_never_computes() {
        let player = Player::human("Player", Mark::Circle);
        let mut board = Board::new();
        assert_eq!(player.maybe_compute_move(&mut board), None);
        assert!(!player.is_engine());
        assert_eq!(player.engine_ref(), None);
    }

    #[test]
    fn test_engine_computes_and_restores_board() {
        let player = Player::engine("AI", Mark::Cross, Level::Deep);
        let mut board: Board = "O.. ... ...".parse().unwrap();
        let before = board.clone();
        let mv = player.maybe_compute_move(&mut board).unwrap();
        assert!(before.is_empty_at(mv));
        assert_eq!(board, before);
        assert_eq!(player.mark(), Mark::Cross);
        assert_eq!(player.name(), "AI");
    }

    #[test]
    fn test_set_level_only_touches_engines() {
        let mut engine = Player::engine("AI", Mark::Circle, Level::Deep);
        engine.set_level(Level::Shallow);
        assert_eq!(engine.engine_ref().map(Engine::max_depth), Some(3));

        let mut human = Player::human("Player", Mark::Cross);
        human.set_level(Level::Shallow);
        assert_eq!(human, Player::human("Player", Mark::Cross));
    }
}

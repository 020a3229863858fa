//! Turn orchestration for a two-player game.

use super::board::{Board, GameState};
use super::level::Level;
use super::mode::GameMode;
use super::moves::{Move, ScoredMove};
use super::player::Player;
use super::search::Engine;
use super::types::Mark;
use tracing::{debug, info, instrument};

/// A game session: the authoritative board, two players, and whose turn it is.
///
/// The player at index 0 always plays [`Mark::Circle`] and moves first. The
/// turn index alternates after each accepted move and freezes once the board
/// is won or drawn.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    mode: GameMode,
    level: Level,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new(mode: GameMode, level: Level) -> Self {
        info!(mode = %mode, level = %level, "Creating new game");
        Self {
            board: Board::new(),
            players: Self::make_players(mode, level),
            current: 0,
            mode,
            level,
            history: Vec::new(),
        }
    }

    fn make_players(mode: GameMode, level: Level) -> [Player; 2] {
        match mode {
            GameMode::PlayerVsPlayer => [
                Player::human("Player 1", Mark::Circle),
                Player::human("Player 2", Mark::Cross),
            ],
            GameMode::PlayerVsEngine => [
                Player::human("Player", Mark::Circle),
                Player::engine("AI", Mark::Cross, level),
            ],
            GameMode::EngineVsPlayer => [
                Player::engine("AI", Mark::Circle, level),
                Player::human("Player", Mark::Cross),
            ],
        }
    }

    /// Replaces both players for `mode` and hands the turn to the first one.
    ///
    /// The board is left as it is; see [`Game::restart`] to clear it too.
    #[instrument(skip(self))]
    pub fn init_players(&mut self, mode: GameMode, level: Level) {
        self.players = Self::make_players(mode, level);
        self.current = 0;
        self.mode = mode;
        self.level = level;
    }

    /// Places the current player's mark at `mv` and returns the resulting state.
    ///
    /// Occupied cells and moves after the game has ended are ignored: the
    /// board and the turn stay as they were and the current state is returned.
    #[instrument(skip(self), fields(mark = %self.current_mark()))]
    pub fn submit_move(&mut self, mv: Move) -> GameState {
        let state = self.board.state();
        if state.is_over() {
            debug!(%state, "Game already finished, ignoring move");
            return state;
        }

        if !self.board.place(mv, self.current_mark()) {
            debug!("Cell occupied, ignoring move");
            return state;
        }
        self.history.push(mv);

        let state = self.board.state();
        if state == GameState::Ongoing {
            self.current = 1 - self.current;
        } else {
            info!(%state, winner = ?self.board.winner(), "Game over");
        }
        state
    }

    /// Asks the current player's engine for a move.
    ///
    /// Returns `None` when a human is to move or the game is over. The board
    /// is explored in place and is unchanged afterwards.
    #[instrument(skip(self))]
    pub fn request_engine_move(&mut self) -> Option<Move> {
        if self.board.state().is_over() {
            return None;
        }
        self.players[self.current].maybe_compute_move(&mut self.board)
    }

    /// Starts over: new players for `mode` and an empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self, mode: GameMode, level: Level) {
        info!(mode = %mode, level = %level, "Restarting game");
        self.init_players(mode, level);
        self.board.clear();
        self.history.clear();
    }

    /// Changes the search depth of engine players without touching the game.
    #[instrument(skip(self))]
    pub fn change_engine_level(&mut self, level: Level) {
        self.level = level;
        for player in &mut self.players {
            player.set_level(level);
        }
    }

    /// Scores every legal move for the player to move, for display only.
    ///
    /// Scoring always searches the full [`crate::DEFAULT_MAX_DEPTH`],
    /// regardless of the engine level. Empty once the game is over.
    #[instrument(skip(self))]
    pub fn score_all_moves(&mut self) -> Vec<ScoredMove> {
        if self.board.state().is_over() {
            return Vec::new();
        }
        Engine::new(self.current_mark()).score_all_moves(&mut self.board)
    }

    /// The authoritative board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current state of the board.
    pub fn state(&self) -> GameState {
        self.board.state()
    }

    /// Both players, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose turn it is (or who made the final move).
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Mark expected for the next placement.
    pub fn current_mark(&self) -> Mark {
        self.current_player().mark()
    }

    /// True if the engine should move next.
    pub fn is_engine_turn(&self) -> bool {
        !self.state().is_over() && self.current_player().is_engine()
    }

    /// Mode the players were created for.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Level engine players search at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Accepted moves since the last restart, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default(), Level::default())
    }
}

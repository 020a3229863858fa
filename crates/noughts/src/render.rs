//! Text rendering of advisory scores and game outcomes.

use noughts_core::rules::win::winning_line;
use noughts_core::{Board, Cell, Game, GameState, Move, ScoredMove};

/// Lays out advisory scores on the grid.
///
/// Occupied cells show their mark, scored cells show `+1`, ` 0` or `-1`.
pub fn render_advice(board: &Board, scored: &[ScoredMove]) -> String {
    let mut grid: [[String; 3]; 3] = Default::default();
    for mv in Move::ALL {
        let text = match board.get(mv) {
            Cell::Occupied(mark) => format!(" {mark}"),
            Cell::Empty => scored
                .iter()
                .find(|s| s.mv == mv)
                .map(|s| match s.score {
                    0 => " 0".to_string(),
                    score => format!("{score:+}"),
                })
                .unwrap_or_else(|| "  ".to_string()),
        };
        grid[mv.row()][mv.column()] = text;
    }
    grid.iter()
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join("\n--+--+--\n")
}

/// One-line status for the game: whose turn, who won, or a draw.
pub fn render_outcome(game: &Game) -> String {
    let player = game.current_player();
    match game.state() {
        GameState::Ongoing => format!("{} ({}) to move", player.name(), player.mark()),
        GameState::Win => {
            let line = winning_line(game.board())
                .map(|cells| {
                    let keys: Vec<String> =
                        cells.iter().map(|mv| mv.keypad().to_string()).collect();
                    format!(" ({})", keys.join("-"))
                })
                .unwrap_or_default();
            format!("{} ({}) wins!{line}", player.name(), player.mark())
        }
        GameState::Draw => "Draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Engine, GameMode, Level, Mark};

    #[test]
    fn test_render_advice_grid() {
        let mut board: Board = "OX. .O. ...".parse().unwrap();
        let scored = Engine::with_depth(Mark::Cross, 1).score_all_moves(&mut board);
        let text = render_advice(&board, &scored);
        assert_eq!(text, " O| X|-1\n--+--+--\n-1| O|-1\n--+--+--\n-1|-1| 0");
    }

    #[test]
    fn test_render_outcome() {
        let mut game = Game::new(GameMode::PlayerVsPlayer, Level::Deep);
        assert_eq!(render_outcome(&game), "Player 1 (O) to move");
        for key in [7, 4, 8, 5, 9] {
            game.submit_move(Move::from_keypad(key).unwrap());
        }
        assert_eq!(render_outcome(&game), "Player 1 (O) wins! (7-8-9)");
    }
}

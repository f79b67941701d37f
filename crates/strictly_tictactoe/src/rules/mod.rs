//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! board storage so the history and contract layers can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, LINES};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
#[instrument(skip(board))]
pub fn detect_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(detect_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn win_on_last_square_beats_draw() {
        // X O X / O X O / O X X: the final square fills the board and
        // completes the main diagonal.
        let board = [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ]
        .into_iter()
        .fold(Board::new(), |board, (pos, player)| board.placed(pos, player));

        assert_eq!(detect_outcome(&board), Outcome::Win(Player::X));
    }
}

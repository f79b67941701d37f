//! Outcomes of a board and the status shown for a history position.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the terminal verdict, or `None` while the game is in progress.
    pub fn verdict(self) -> Option<Verdict> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(player) => Some(Verdict::Win(player)),
            Outcome::Draw => Some(Verdict::Draw),
        }
    }

    /// Returns true if no further moves are allowed.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player won the game.
    Win(Player),
    /// Game ended in a draw.
    Draw,
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Verdict::Win(player) => Some(player),
            Verdict::Draw => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Win(player) => write!(f, "Winner: {player}"),
            Verdict::Draw => f.write_str("Draw"),
        }
    }
}

/// Status line for the position under the history cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The game continues and this player moves next.
    NextPlayer(Player),
    /// The game has ended.
    GameOver(Verdict),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
            Status::GameOver(verdict) => write!(f, "{verdict}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_matches_board_caption() {
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
        assert_eq!(
            Status::GameOver(Verdict::Win(Player::X)).to_string(),
            "Winner: X"
        );
        assert_eq!(Status::GameOver(Verdict::Draw).to_string(), "Draw");
    }

    #[test]
    fn only_finished_outcomes_have_a_verdict() {
        assert_eq!(Outcome::InProgress.verdict(), None);
        assert_eq!(Outcome::Draw.verdict(), Some(Verdict::Draw));
        assert_eq!(
            Outcome::Win(Player::O).verdict().and_then(Verdict::winner),
            Some(Player::O)
        );
    }
}

//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::rules::detect_outcome;
use super::super::{GameHistory, Player, Position, Square};
use super::Invariant;

/// Invariant: the k-th move (0-based) places X when k is even and O when
/// k is odd, and no move follows a won or drawn position.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let placed = Position::ALL
                    .into_iter()
                    .find(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                    .map(|pos| pair[1].get(pos));

                placed == Some(Square::Occupied(Player::for_move(k)))
                    && !detect_outcome(&pair[0]).is_over()
            })
    }

    fn description() -> &'static str {
        "Players alternate starting with X and stop once the game is decided"
    }
}

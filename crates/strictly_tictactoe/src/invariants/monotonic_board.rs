//! Monotonic board invariant: each move fills exactly one empty square.

use super::super::{GameHistory, Position, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which
/// goes from empty to occupied.
///
/// Marks are never removed or overwritten along a stored line.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let mut changed = Position::ALL
                .into_iter()
                .filter(|pos| pair[0].get(*pos) != pair[1].get(*pos));

            match (changed.next(), changed.next()) {
                (Some(pos), None) => {
                    pair[0].get(pos) == Square::Empty && pair[1].get(pos) != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_line_holds() {
        let history = GameHistory::replay(&[4, 0, 8, 2]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let empty = r#"{"squares":["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]}"#;
        let json = format!(r#"{{"snapshots":[{empty},{empty}],"current_move":0}}"#);
        let corrupt: Result<GameHistory, _> = serde_json::from_str(&json);

        let err = corrupt.unwrap_err().to_string();
        assert!(err.contains(MonotonicBoardInvariant::description()));
    }
}

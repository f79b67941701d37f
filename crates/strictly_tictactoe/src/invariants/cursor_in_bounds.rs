//! Cursor invariant: the history starts empty and the cursor points at a snapshot.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: snapshot 0 is the empty board and `current_move < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new())
            && history.current_move() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "History starts from the empty board and the cursor is in bounds"
    }
}

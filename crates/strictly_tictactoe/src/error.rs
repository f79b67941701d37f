//! Errors reported when a move or jump is rejected.

use super::{Position, Verdict};

/// Error that can occur when applying a move or moving the history cursor.
///
/// Rejections never modify the history they were issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not in `0..9`.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The position under the cursor is already decided.
    #[display("Game is already over ({})", _0)]
    GameAlreadyOver(Verdict),

    /// The jump target is not a stored move.
    #[display("Move #{} does not exist (history has {} positions)", target, len)]
    InvalidMoveIndex {
        /// Requested cursor position.
        target: usize,
        /// Number of stored snapshots.
        len: usize,
    },
}

impl std::error::Error for MoveError {}

//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: `{P} action {Q}`. Preconditions always run and produce the
//! [`MoveError`] reported to the caller; postconditions are checked in
//! debug builds.

use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::{GameHistory, MoveError, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names a square.
pub struct CellInRange;

impl CellInRange {
    /// Resolves `cell` to a position.
    #[instrument]
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::try_from(cell)
    }
}

/// Precondition: the square under the cursor is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if `position` is taken.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory, position: Position) -> Result<(), MoveError> {
        if history.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Precondition: the position under the cursor is undecided.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameAlreadyOver`] on a won or drawn board.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveError> {
        match history.outcome().verdict() {
            Some(verdict) => Err(MoveError::GameAlreadyOver(verdict)),
            None => Ok(()),
        }
    }
}

/// Composite precondition: range, then occupancy, then game over.
pub struct LegalMove;

impl LegalMove {
    /// Validates all move preconditions in order, returning the target position.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory, cell: usize) -> Result<Position, MoveError> {
        let position = CellInRange::check(cell)?;
        CellIsEmpty::check(history, position)?;
        GameNotOver::check(history)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Postconditions:
/// - history invariants hold
/// - the snapshots up to the old cursor are kept, then exactly one is added
/// - the cursor sits on the new last snapshot
pub struct MoveContract;

impl Contract<GameHistory, usize> for MoveContract {
    fn pre(history: &GameHistory, cell: &usize) -> Result<(), MoveError> {
        LegalMove::check(history, *cell).map(|_| ())
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        let kept = before.current_move() + 1;
        if after.len() != kept + 1 || after.snapshots()[..kept] != before.snapshots()[..kept] {
            violations.push(InvariantViolation::new(
                "Move keeps the line up to the cursor and appends one snapshot",
            ));
        }

        if !after.is_at_latest() {
            violations.push(InvariantViolation::new("Cursor follows the newest move"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition violated");
            Err(violations)
        }
    }
}

/// Contract for moving the history cursor.
///
/// Postcondition: the snapshots are unchanged.
pub struct JumpContract;

impl Contract<GameHistory, usize> for JumpContract {
    fn pre(history: &GameHistory, target: &usize) -> Result<(), MoveError> {
        if *target < history.len() {
            Ok(())
        } else {
            Err(MoveError::InvalidMoveIndex {
                target: *target,
                len: history.len(),
            })
        }
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        if before.snapshots() != after.snapshots() {
            violations.push(InvariantViolation::new("Jumping leaves the snapshots unchanged"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Jump postcondition violated");
            Err(violations)
        }
    }
}

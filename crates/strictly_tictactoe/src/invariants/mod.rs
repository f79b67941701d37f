//! First-class invariants for game histories.
//!
//! Invariants are logical properties that every history produced by the
//! engine satisfies. They back the debug-build postconditions on moves and
//! jumps, and are always checked when a history is deserialized.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Folds several violations into one, joining their descriptions.
    pub fn merge(violations: Vec<InvariantViolation>) -> Self {
        let joined = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(joined)
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without allocation at the
/// type level.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = <(I1, I2) as InvariantSet<S>>::check_all(state)
            .err()
            .unwrap_or_default();

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod cursor_in_bounds;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    CursorInBoundsInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameHistory;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let history = GameHistory::replay(&[0, 4, 2])
            .and_then(|h| h.jump_to(1))
            .and_then(|h| h.apply_move(8))
            .unwrap();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CursorInBoundsInvariant, MonotonicBoardInvariant);
        let history = GameHistory::replay(&[4]).unwrap();
        assert!(TwoInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_merge_joins_descriptions() {
        let merged = InvariantViolation::merge(vec![
            InvariantViolation::new("first"),
            InvariantViolation::new("second"),
        ]);
        assert_eq!(merged.description, "first; second");
        assert_eq!(merged.to_string(), "Invariant violated: first; second");
    }
}

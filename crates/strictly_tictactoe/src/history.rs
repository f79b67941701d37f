//! Move history with a time-travel cursor.
//!
//! A [`GameHistory`] stores one [`Board`] snapshot per position reached,
//! starting from the empty board, together with a cursor selecting the
//! position currently in view. The player to move is never stored: it is
//! derived from the cursor, so jumping back in time can never leave the
//! turn out of step with the board.
//!
//! Histories are values. [`GameHistory::apply_move`] and
//! [`GameHistory::jump_to`] return a new history and leave the receiver
//! untouched, so a caller can keep or drop old histories freely.

use super::contracts::{Contract, JumpContract, LegalMove, MoveContract};
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules::detect_outcome;
use super::{Board, MoveError, Outcome, Player, Position, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshots of every position reached plus the cursor into them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current_move: usize,
}

impl GameHistory {
    /// Starts a new game: one empty snapshot, cursor at the start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Replays `cells` from a new game, stopping at the first rejected move.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        cells
            .iter()
            .try_fold(Self::new(), |history, &cell| history.apply_move(cell))
    }

    /// Places the current player's mark at `cell` (0-8).
    ///
    /// Any snapshots after the cursor are discarded before the new one is
    /// appended, so moving from an earlier position replaces the old
    /// continuation. The cursor ends on the new snapshot.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`MoveError::OutOfRange`] if `cell` is not in `0..9`
    /// - [`MoveError::CellOccupied`] if the square is taken
    /// - [`MoveError::GameAlreadyOver`] if the position is won or drawn
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.snapshots.len()))]
    pub fn apply_move(&self, cell: usize) -> Result<Self, MoveError> {
        let position = LegalMove::check(self, cell)?;
        let player = self.to_move();
        let board = self.current_board().placed(position, player);

        let mut snapshots = Vec::with_capacity(self.current_move + 2);
        snapshots.extend_from_slice(&self.snapshots[..=self.current_move]);
        snapshots.push(board);

        let next = Self {
            current_move: snapshots.len() - 1,
            snapshots,
        };

        debug_assert_eq!(
            MoveContract::post(self, &next),
            Ok(()),
            "move postcondition failed"
        );

        debug!(
            %position,
            %player,
            discarded = self.snapshots.len() - self.current_move - 1,
            "Move applied"
        );
        Ok(next)
    }

    /// Moves the cursor to `target` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMoveIndex`] if `target` is not a stored move.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.snapshots.len()))]
    pub fn jump_to(&self, target: usize) -> Result<Self, MoveError> {
        JumpContract::pre(self, &target)?;

        let next = Self {
            snapshots: self.snapshots.clone(),
            current_move: target,
        };

        debug_assert_eq!(
            JumpContract::post(self, &next),
            Ok(()),
            "jump postcondition failed"
        );

        debug!(target, "Cursor moved");
        Ok(next)
    }

    /// Status of the position under the cursor.
    pub fn status(&self) -> Status {
        match self.outcome().verdict() {
            Some(verdict) => Status::GameOver(verdict),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Outcome of the board under the cursor.
    pub fn outcome(&self) -> Outcome {
        detect_outcome(self.current_board())
    }

    /// Player whose turn it is at the cursor: X on even moves, O on odd.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Labels for every stored position, from the game start onwards.
    pub fn move_labels(&self) -> MoveLabels {
        MoveLabels {
            next: 0,
            len: self.snapshots.len(),
        }
    }

    /// Cells played along the stored line, oldest first.
    pub fn moves(&self) -> Vec<Position> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| {
                Position::ALL
                    .into_iter()
                    .find(|pos| pair[0].get(*pos) != pair[1].get(*pos))
            })
            .collect()
    }

    /// Index of the position under the cursor.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Board under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current_move]
    }

    /// All stored snapshots; index 0 is the empty board.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of stored snapshots (moves played along this line plus one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the starting position.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns true if the cursor is on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.snapshots.len()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form of a [`GameHistory`].
#[derive(Deserialize)]
struct HistoryRecord {
    snapshots: Vec<Board>,
    current_move: usize,
}

impl TryFrom<HistoryRecord> for GameHistory {
    type Error = InvariantViolation;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: record.snapshots,
            current_move: record.current_move,
        };
        HistoryInvariants::check_all(&history).map_err(InvariantViolation::merge)?;
        Ok(history)
    }
}

/// Caption for one entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveLabel {
    /// The empty starting board.
    GameStart,
    /// The position after move `n` (1-based).
    Move(usize),
}

impl MoveLabel {
    /// Label for the snapshot at `index`.
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => MoveLabel::GameStart,
            n => MoveLabel::Move(n),
        }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::GameStart => f.write_str("Go to game start"),
            MoveLabel::Move(n) => write!(f, "Go to move #{n}"),
        }
    }
}

/// Iterator over `(index, label)` for each stored snapshot.
///
/// Only the snapshot count is captured, so the iterator does not borrow
/// the history. Call [`GameHistory::move_labels`] again, or clone the
/// iterator, to start over.
#[derive(Debug, Clone)]
pub struct MoveLabels {
    next: usize,
    len: usize,
}

impl Iterator for MoveLabels {
    type Item = (usize, MoveLabel);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some((index, MoveLabel::for_index(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveLabels {}

impl std::iter::FusedIterator for MoveLabels {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_one_empty_snapshot() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn labels_cover_every_snapshot() {
        let history = GameHistory::replay(&[4, 0]).unwrap();
        let labels: Vec<_> = history
            .move_labels()
            .map(|(index, label)| (index, label.to_string()))
            .collect();

        assert_eq!(
            labels,
            vec![
                (0, "Go to game start".to_string()),
                (1, "Go to move #1".to_string()),
                (2, "Go to move #2".to_string()),
            ]
        );
    }

    #[test]
    fn labels_restart_and_report_length() {
        let history = GameHistory::replay(&[4, 0, 8]).unwrap();
        let mut labels = history.move_labels();
        let fresh = labels.clone();

        assert_eq!(labels.len(), 4);
        labels.next();
        assert_eq!(labels.len(), 3);
        assert_eq!(fresh.count(), 4);
        assert_eq!(history.move_labels().count(), 4);
    }

    #[test]
    fn moves_are_recovered_from_snapshots() {
        let history = GameHistory::replay(&[4, 0, 8]).unwrap();
        assert_eq!(
            history.moves(),
            vec![Position::Center, Position::TopLeft, Position::BottomRight]
        );
    }

    #[test]
    fn is_at_latest_tracks_cursor() {
        let history = GameHistory::replay(&[4, 0]).unwrap();
        assert!(history.is_at_latest());
        assert!(!history.jump_to(1).unwrap().is_at_latest());
    }
}

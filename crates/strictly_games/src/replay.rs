//! Running scripted steps against a game history.

use crate::step::Step;
use derive_more::{Display, Error};
use std::fmt::Write;
use strictly_tictactoe::{GameHistory, MoveError};
use tracing::{info, instrument, warn};

/// A step the engine refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} (#{}) rejected: {}", step, index, error)]
pub struct RejectedStep {
    /// Position of the step in the run, 0-based.
    pub index: usize,
    /// The step as given.
    pub step: Step,
    /// Why it was refused.
    #[error(source)]
    pub error: MoveError,
}

/// Final state of a replay run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    /// History after the last accepted step.
    pub history: GameHistory,
    /// Steps that were skipped, in order.
    pub rejected: Vec<RejectedStep>,
}

impl Replay {
    /// Applies `steps` to a new game.
    ///
    /// Rejected steps are skipped and recorded, the way a board ignores an
    /// illegal click. With `strict`, the first rejection ends the run.
    #[instrument(skip(steps), fields(count = steps.len()))]
    pub fn run(steps: &[Step], strict: bool) -> Result<Self, RejectedStep> {
        let mut history = GameHistory::new();
        let mut rejected = Vec::new();

        for (index, step) in steps.iter().copied().enumerate() {
            match step.apply(&history) {
                Ok(next) => history = next,
                Err(error) => {
                    let skipped = RejectedStep { index, step, error };
                    if strict {
                        return Err(skipped);
                    }
                    warn!(%skipped, "Skipping step");
                    rejected.push(skipped);
                }
            }
        }

        info!(
            current_move = history.current_move(),
            rejected = rejected.len(),
            status = %history.status(),
            "Replay finished"
        );
        Ok(Self { history, rejected })
    }

    /// Plain-text report: status, optional board, then the move list.
    ///
    /// The entry under the cursor is marked with `>`.
    pub fn report(&self, show_board: bool) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", self.history.status());
        if show_board {
            let _ = writeln!(out, "\n{}\n", self.history.current_board());
        }
        out.push_str(&move_list(&self.history));
        out
    }
}

/// One line per stored position, cursor entry marked with `>`.
pub fn move_list(history: &GameHistory) -> String {
    history
        .move_labels()
        .map(|(index, label)| {
            let marker = if index == history.current_move() { '>' } else { ' ' };
            format!("{marker} {index}. {label}\n")
        })
        .collect()
}

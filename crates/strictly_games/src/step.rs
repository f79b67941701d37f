//! Steps of a replay script.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use strictly_tictactoe::{GameHistory, MoveError};
use tracing::{debug, instrument};

/// One scripted action against a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Step {
    /// Place the current player's mark on a cell (0-8).
    #[display("{}", _0)]
    Move(usize),
    /// Move the cursor to a stored position.
    #[display("@{}", _0)]
    Jump(usize),
    /// Start over with an empty board.
    #[display("new")]
    Restart,
}

impl Step {
    /// Applies the step, returning the new history.
    #[instrument(skip(history), fields(step = %self))]
    pub fn apply(self, history: &GameHistory) -> Result<GameHistory, MoveError> {
        let next = match self {
            Step::Move(cell) => history.apply_move(cell)?,
            Step::Jump(target) => history.jump_to(target)?,
            Step::Restart => GameHistory::new(),
        };
        debug!(current_move = next.current_move(), "Step applied");
        Ok(next)
    }
}

/// A step string that is neither a cell, `@N` nor `new`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid step {:?}: expected a cell number, @N or new", input)]
pub struct StepParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || StepParseError {
            input: s.to_string(),
        };

        if s.eq_ignore_ascii_case("new") {
            Ok(Step::Restart)
        } else if let Some(target) = s.strip_prefix('@') {
            target.parse().map(Step::Jump).map_err(|_| invalid())
        } else {
            s.parse().map(Step::Move).map_err(|_| invalid())
        }
    }
}

/// A replay script file: `steps = ["4", "0", "@1", "8"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Step strings in order.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Script {
    /// Loads and parses a script file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Vec<Step>> {
        use anyhow::Context;

        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading script {}", path.as_ref().display()))?;
        let script: Script = toml::from_str(&content).context("parsing script")?;

        let steps = script
            .steps
            .iter()
            .map(|s| s.parse::<Step>())
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = steps.len(), "Script loaded");
        Ok(steps)
    }
}

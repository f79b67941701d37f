//! Strictly Tic-Tac-Toe - pure game logic with move history
//!
//! The engine models one fixed 3x3 ruleset as immutable values:
//!
//! - **Board**: a `Copy` snapshot of nine squares
//! - **Rules**: win/draw detection over the eight fixed lines
//! - **GameHistory**: every snapshot reached plus a time-travel cursor;
//!   the player to move is derived from the cursor
//! - **Contracts/Invariants**: preconditions that produce [`MoveError`]s and
//!   postconditions checked in debug builds
//! - **Sessions**: isolated histories keyed by session id
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameHistory, Player, Status};
//!
//! let history = GameHistory::new()
//!     .apply_move(0)?
//!     .apply_move(4)?
//!     .apply_move(1)?;
//! assert_eq!(history.status(), Status::NextPlayer(Player::O));
//!
//! // Go back to the first move and play a different line.
//! let history = history.jump_to(1)?.apply_move(8)?;
//! assert_eq!(history.len(), 3);
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod history;
mod invariants;
mod outcome;
mod position;
mod rules;
mod session;
mod types;

pub use contracts::{
    CellInRange, CellIsEmpty, Contract, GameNotOver, JumpContract, LegalMove, MoveContract,
};
pub use error::MoveError;
pub use history::{GameHistory, MoveLabel, MoveLabels};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, HistoryInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant,
};
pub use outcome::{Outcome, Status, Verdict};
pub use position::Position;
pub use rules::{check_winner, detect_outcome, is_draw, is_full, winning_line, LINES};
pub use session::{SessionError, SessionId, SessionManager};
pub use types::{Board, Player, Square};

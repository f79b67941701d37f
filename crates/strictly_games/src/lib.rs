//! Strictly Games - headless driver for the tic-tac-toe history engine
//!
//! Feeds moves, jumps and restarts into [`strictly_tictactoe::GameHistory`]
//! and reports the resulting status and move list as plain text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod step;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ReplayConfig};
pub use replay::{move_list, RejectedStep, Replay};
pub use step::{Script, Step, StepParseError};

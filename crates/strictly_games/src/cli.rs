//! Command-line interface for strictly_games.

use crate::step::Step;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Games - replay tic-tac-toe moves and time travel from the shell
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Headless tic-tac-toe history replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply steps to a new game and print the status, board and move list
    Replay {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// TOML script whose steps run before the positional ones
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Stop at the first rejected step
        #[arg(long)]
        strict: bool,

        /// Steps: a cell number (0-8), @N to jump to move N, or `new`
        steps: Vec<Step>,
    },

    /// Apply steps and print only the move list
    Labels {
        /// Steps: a cell number (0-8), @N to jump to move N, or `new`
        steps: Vec<Step>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "strictly_games",
            "replay",
            "--strict",
            "--script",
            "game.toml",
            "4",
            "@0",
            "new",
        ])
        .unwrap();

        match cli.command {
            Command::Replay {
                config,
                script,
                strict,
                steps,
            } => {
                assert!(config.is_none());
                assert_eq!(script, Some(PathBuf::from("game.toml")));
                assert!(strict);
                assert_eq!(steps, vec![Step::Move(4), Step::Jump(0), Step::Restart]);
            }
            Command::Labels { .. } => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_bad_step_is_a_usage_error() {
        assert!(Cli::try_parse_from(["strictly_games", "labels", "centre"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

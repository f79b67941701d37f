//! Strictly Games - Unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_games::{move_list, Cli, Command, Replay, ReplayConfig, Script};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            config,
            script,
            strict,
            mut steps,
        } => {
            let config = match config {
                Some(path) => ReplayConfig::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => ReplayConfig::default(),
            }
            .with_strict(strict);
            init_tracing(config.log_filter().as_deref());

            if let Some(path) = script {
                let mut scripted = Script::load(&path)?;
                scripted.append(&mut steps);
                steps = scripted;
            }

            info!(steps = steps.len(), strict = *config.strict(), "Starting replay");
            let replay = Replay::run(&steps, *config.strict())?;
            print!("{}", replay.report(*config.show_board()));
            Ok(())
        }
        Command::Labels { steps } => {
            init_tracing(None);
            let replay = Replay::run(&steps, false)?;
            debug!(rejected = replay.rejected.len(), "Labels computed");
            print!("{}", move_list(&replay.history));
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or("warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

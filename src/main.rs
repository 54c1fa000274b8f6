//! Strictly History - Unified CLI
//!
//! Plays in the terminal or replays a move list headlessly.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_history::{Cli, Command, Config, render_text, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay {
            moves,
            jump,
            flip,
            json,
        } => run_replay(&config, &moves, jump, flip, json),
    }
}

/// Replays moves and prints the resulting view to stdout.
fn run_replay(
    config: &Config,
    moves: &[usize],
    jump: Option<usize>,
    flip: bool,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = moves.len(), "Replaying moves");
    let game = replay(moves, jump, flip);

    if json {
        let snapshot = serde_json::to_string_pretty(&game.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{snapshot}");
    } else {
        print!("{}", render_text(&game));
    }
    Ok(())
}

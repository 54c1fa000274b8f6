//! Command-line interface for strictly_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly History - tic-tac-toe with a browsable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_history")]
#[command(about = "Tic-tac-toe with a browsable, branchable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a terminal UI and print the resulting view
    Replay {
        /// Cell indices to play in order (0-8, row-major), comma separated
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to jump to after the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        flip: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

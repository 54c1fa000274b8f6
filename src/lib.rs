//! Strictly History - terminal tic-tac-toe with a browsable move history.
//!
//! The game core lives in [`strictly_history_core`]; this crate is the
//! front end that displays its read model and forwards user intents.
//!
//! # Architecture
//!
//! - **TUI**: ratatui/crossterm event loop mapping keys to moves, jumps and flips
//! - **Replay**: headless application of a move list for scripting and tests
//! - **Config**: optional TOML file for logging and board display settings
//!
//! # Example
//!
//! ```
//! use strictly_history::{render_text, replay};
//!
//! let game = replay(&[0, 4, 1], Some(1), false);
//! assert!(render_text(&game).starts_with("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Replay
pub use replay::{render_text, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, digit_position, draw, move_cursor, run_tui};

// Crate-level exports - Game core
pub use strictly_history_core::{GameState, GameStatus, Position, Snapshot};

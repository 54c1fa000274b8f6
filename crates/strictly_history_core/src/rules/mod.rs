//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from history storage so the UI can call them on any snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, detect_win};

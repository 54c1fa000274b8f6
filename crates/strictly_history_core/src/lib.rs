//! Pure tic-tac-toe game core with a browsable, branchable move history.
//!
//! # Architecture
//!
//! - **Rules**: [`detect_win`] maps a board to the first completed line, if any
//! - **State**: [`GameState`] owns the history of board snapshots and the step being viewed
//! - **Read model**: status, move list and [`Snapshot`] are recomputed from history on every call
//!
//! # Example
//!
//! ```
//! use strictly_history_core::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::TopLeft).unwrap();
//! game.apply_move(Position::Center).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//!
//! game.jump_to(1).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{JumpError, LoadError, Move, MoveError};
pub use contracts::{Contract, GameNotWon, JumpContract, LegalMove, MoveContract, SquareIsEmpty, StepInRange};
pub use game::{GameState, Snapshot};
pub use history::{HistoryEntry, MoveListEntry};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::{Coordinate, Position};
pub use rules::{WinningLine, detect_win, is_full};
pub use types::{Board, GameStatus, Outcome, Player, Square};

//! Recorded board snapshots and their move-list labels.

use super::{Board, Move};
use serde::{Deserialize, Serialize};

/// A recorded board snapshot plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    pub board: Board,
    /// Move that produced the board; absent for the starting entry.
    pub play: Option<Move>,
}

impl HistoryEntry {
    /// Creates the starting entry: an empty board and no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            play: None,
        }
    }

    /// Creates an entry recording `play` and the board it produced.
    pub fn new(board: Board, play: Move) -> Self {
        Self {
            board,
            play: Some(play),
        }
    }

    /// Returns the move-list label for this entry at `step`.
    pub fn label(&self, step: usize) -> String {
        match self.play {
            Some(play) => format!("Go to move #{step}: {play}"),
            None => "Go to start".to_string(),
        }
    }
}

/// One navigable line of the displayed move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Display text.
    pub label: String,
    /// Whether this is the step being viewed.
    pub current: bool,
}

//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Returns the positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns the first position of the line.
    pub fn first(&self) -> Position {
        self.0[0]
    }

    /// Checks whether the position is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Returns the first completed line on the board.
///
/// Lines are checked in [`LINES`] order, so a board completing several
/// lines always reports the same one.
#[instrument(skip(board))]
pub fn detect_win(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        (sq != Square::Empty && sq == board.get(b) && sq == board.get(c))
            .then_some(WinningLine([a, b, c]))
    })
}

/// Returns the player owning the first completed line.
pub fn check_winner(board: &Board) -> Option<Player> {
    detect_win(board).and_then(|line| board.get(line.first()).player())
}

//! Start entry invariant: history begins at an empty board and the cursor is in range.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: entry 0 is the empty board with no move, and the viewed
/// step indexes a recorded entry.
pub struct StartEntryInvariant;

impl Invariant<GameState> for StartEntryInvariant {
    fn holds(game: &GameState) -> bool {
        let Some(first) = game.history().first() else {
            return false;
        };
        first.play.is_none()
            && first.board == Board::new()
            && game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "History starts at an empty board and the current step is recorded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Move, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(StartEntryInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut game = GameState::new();
        game.current_step = 1;
        assert!(!StartEntryInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!StartEntryInvariant::holds(&game));
    }

    #[test]
    fn test_start_with_move_violates() {
        let mut game = GameState::new();
        game.history[0] = HistoryEntry::new(Board::new(), Move::new(Player::X, Position::Center));
        assert!(!StartEntryInvariant::holds(&game));
    }
}

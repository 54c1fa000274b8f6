//! Alternating turn invariant: X plays odd entries, O plays even ones.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the move recorded at entry `k` was made by the player whose
/// turn it was at step `k - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| {
                entry
                    .play
                    .is_some_and(|play| play.player == Player::for_step(step - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns, X first"
    }
}

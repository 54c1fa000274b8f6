//! History consistency invariant: each entry adds exactly the mark its move records.

use super::Invariant;
use crate::{GameState, HistoryEntry, Position, Square};

/// Invariant: every entry after the first differs from its predecessor in
/// exactly one square, that square was empty, and the entry's move names
/// the square and the mark placed there.
pub struct HistoryConsistentInvariant;

fn follows(prev: &HistoryEntry, next: &HistoryEntry) -> bool {
    let Some(play) = next.play else {
        return false;
    };
    let changed: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| prev.board.get(*pos) != next.board.get(*pos))
        .collect();

    changed == [play.position]
        && prev.board.is_empty(play.position)
        && next.board.get(play.position) == Square::Occupied(play.player)
}

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .all(|pair| follows(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty square"
    }
}

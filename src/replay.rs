//! Headless replay of a move sequence.

use strictly_history_core::{GameState, Position};
use tracing::{debug, instrument, warn};

/// Plays `moves` from a fresh game, then applies the optional jump and flip.
///
/// Requests the game rejects are skipped, exactly as the terminal UI
/// ignores them.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, flip: bool) -> GameState {
    let mut game = GameState::new();

    for &index in moves {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Skipping cell index outside 0-8");
            continue;
        };
        if let Err(e) = game.apply_move(pos) {
            debug!(index, error = %e, "Skipping rejected move");
        }
    }

    if let Some(step) = jump
        && let Err(e) = game.jump_to(step)
    {
        warn!(step, error = %e, "Skipping rejected jump");
    }

    if flip {
        game.toggle_history_order();
    }

    game
}

/// Formats the status, board and move list as plain text.
///
/// The viewed entry of the move list is marked with `*`.
pub fn render_text(game: &GameState) -> String {
    let mut out = format!("{}\n\n{}\n\n", game.status(), game.current_board().display());
    for entry in game.displayed_move_list() {
        let marker = if entry.current { '*' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", entry.label));
    }
    out
}

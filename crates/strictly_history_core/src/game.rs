//! Game state with a browsable, branchable history of board snapshots.
//!
//! Only [`GameState::apply_move`], [`GameState::jump_to`] and
//! [`GameState::toggle_history_order`] mutate the state. Everything the UI
//! shows is projected from `history` and `current_step` on each call.

use super::action::{JumpError, LoadError, Move, MoveError};
use super::contracts::{Contract, JumpContract, MoveContract};
use super::history::{HistoryEntry, MoveListEntry};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::rules::{WinningLine, detect_win, is_full, win::check_winner};
use super::{Board, GameStatus, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, instrument, warn};

/// Authoritative state of one game session.
///
/// Deserializing checks the history invariants, so a loaded state is
/// always one that moves and jumps could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) display_reversed: bool,
}

/// Unchecked wire shape of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    display_reversed: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = LoadError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            current_step: raw.current_step,
            display_reversed: raw.display_reversed,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            let message = InvariantViolation::join(&violations);
            warn!(%message, "Rejected loaded game state");
            LoadError(message)
        })?;
        Ok(state)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board at the viewed step.
    pub board: Board,
    /// Completed line on the viewed board, if any.
    pub winning_line: Option<WinningLine>,
    /// Status of the viewed step, serialized as its display text.
    #[serde(serialize_with = "status_text")]
    pub status: GameStatus,
    /// Move list in display order.
    pub moves: Vec<MoveListEntry>,
    /// Whether the move list is shown newest first.
    pub display_reversed: bool,
    /// Index of the viewed step.
    pub current_step: usize,
}

fn status_text<S: Serializer>(status: &GameStatus, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(status)
}

impl GameState {
    /// Creates a new game at the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
            display_reversed: false,
        }
    }

    /// Returns the recorded history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the index of the viewed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns whether the move list is shown newest first.
    pub fn display_reversed(&self) -> bool {
        self.display_reversed
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Entries after the viewed step are discarded first, so playing from an
    /// earlier step starts a new branch.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the viewed board already has a
    /// completed line, or `MoveError::SquareOccupied` if `pos` is taken.
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Move, MoveError> {
        MoveContract::pre(self, &pos).inspect_err(|e| debug!(error = %e, "Move rejected"))?;

        let play = Move::new(self.next_player(), pos);
        let mut board = self.current_board().clone();
        board.set(pos, Square::Occupied(play.player));

        let mut history = self.history[..=self.current_step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(HistoryEntry::new(board, play));

        let next = Self {
            current_step: history.len() - 1,
            history,
            display_reversed: self.display_reversed,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        info!(
            player = %play.player,
            coordinate = %play.coordinate(),
            discarded,
            step = self.current_step,
            "Move applied"
        );
        Ok(play)
    }

    /// Views the recorded `step`, discarding every later entry.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` if `step` is not recorded. The state
    /// is unchanged on error.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        JumpContract::pre(self, &step).inspect_err(|e| debug!(error = %e, "Jump rejected"))?;

        let next = Self {
            history: self.history[..=step].to_vec(),
            current_step: step,
            display_reversed: self.display_reversed,
        };

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        *self = next;
        info!(step, "Jumped to step");
        Ok(())
    }

    /// Flips the move list between oldest-first and newest-first.
    #[instrument(skip(self))]
    pub fn toggle_history_order(&mut self) {
        self.display_reversed = !self.display_reversed;
        debug!(reversed = self.display_reversed, "History order toggled");
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived views
    // ─────────────────────────────────────────────────────────────

    /// Returns the board at the viewed step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// Returns the player who moves from the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the completed line on the viewed board.
    pub fn winning_line(&self) -> Option<WinningLine> {
        detect_win(self.current_board())
    }

    /// Returns the owner of the completed line on the viewed board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Returns true when the recorded game fills all nine squares with no
    /// line on the viewed board.
    ///
    /// Judged on the end of history, not on the viewed step.
    pub fn is_game_over(&self) -> bool {
        self.history_is_full() && self.winner().is_none()
    }

    /// Whether the last recorded board has every square taken.
    ///
    /// Each entry adds one mark, so this is the same as history holding
    /// all nine moves.
    fn history_is_full(&self) -> bool {
        self.history.last().is_some_and(|last| is_full(&last.board))
    }

    /// Returns the status of the viewed step.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if self.is_game_over() {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// Classifies the recorded game by the entry at the end of history.
    pub fn outcome(&self) -> Option<Outcome> {
        let last = self.history.last()?;
        if let Some(winner) = check_winner(&last.board) {
            Some(Outcome::Winner(winner))
        } else if self.history_is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Returns the move list in display order.
    pub fn displayed_move_list(&self) -> Vec<MoveListEntry> {
        let mut moves: Vec<MoveListEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry {
                step,
                label: entry.label(step),
                current: step == self.current_step,
            })
            .collect();
        if self.display_reversed {
            moves.reverse();
        }
        moves
    }

    /// Bundles every outbound view for one render.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.current_board().clone(),
            winning_line: self.winning_line(),
            status: self.status(),
            moves: self.displayed_move_list(),
            display_reversed: self.display_reversed,
            current_step: self.current_step,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert!(!game.display_reversed());
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.history()[0].play, None);
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_toggle_leaves_history_alone() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        let before = game.clone();

        game.toggle_history_order();
        assert!(game.display_reversed());
        assert_eq!(game.history(), before.history());
        assert_eq!(game.current_step(), before.current_step());
    }

    #[test]
    fn test_move_keeps_display_order() {
        let mut game = GameState::new();
        game.toggle_history_order();
        game.apply_move(Position::Center).unwrap();
        assert!(game.display_reversed());
    }

    #[test]
    fn test_outcome_tracks_end_of_history() {
        let mut game = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            game.apply_move(pos).unwrap();
        }
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::X)));

        game.jump_to(4).unwrap();
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_full_history_is_a_draw() {
        let mut game = GameState::new();
        for index in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
            let pos = Position::from_index(index).unwrap();
            assert!(!game.history_is_full());
            game.apply_move(pos).unwrap();
        }
        assert_eq!(game.history().len() - 1, Board::SIZE);
        assert!(game.history_is_full());
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert!(game.is_game_over());
    }

    #[test]
    fn test_snapshot_status_serializes_as_text() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["status"], "Next player: O");
    }

    #[test]
    fn test_snapshot_matches_views() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(&snapshot.board, game.current_board());
        assert_eq!(snapshot.status, GameStatus::NextPlayer(Player::O));
        assert_eq!(snapshot.moves.len(), 2);
        assert_eq!(snapshot.current_step, 1);
        assert_eq!(snapshot.winning_line, None);
    }
}

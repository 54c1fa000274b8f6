//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{JumpError, MoveError};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::rules::detect_win;
use super::{GameState, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when a condition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions on the candidate state before it is committed.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the square on the viewed board.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if !game.current_board().is_empty(pos) {
            Err(MoveError::SquareOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: No line may be complete on the viewed board.
pub struct GameNotWon;

impl GameNotWon {
    /// Checks the viewed board for a completed line.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match detect_win(game.current_board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Composite precondition: A move is legal if no line is complete and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        GameNotWon::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

/// Precondition: A jump target must be a recorded step.
pub struct StepInRange;

impl StepInRange {
    /// Checks the step against the history length.
    #[instrument(skip(game))]
    pub fn check(step: usize, game: &GameState) -> Result<(), JumpError> {
        let len = game.history().len();
        if step >= len {
            Err(JumpError::OutOfRange { step, len })
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Postconditions:
/// - History invariants still hold
/// - History grew by exactly one entry and the new entry is current
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Error = MoveError;

    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                InvariantViolation::join(&violations)
            ))
        })?;

        let expected_len = before.current_step() + 2;
        if after.history().len() != expected_len || after.current_step() != expected_len - 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} entries ending at the current step",
                expected_len
            )));
        }
        Ok(())
    }
}

/// Contract for jumping to a recorded step.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Error = JumpError;

    fn pre(game: &GameState, step: &usize) -> Result<(), JumpError> {
        StepInRange::check(*step, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), JumpError> {
        GameInvariants::check_all(after).map_err(|violations| {
            JumpError::InvariantViolation(format!(
                "Postcondition failed: {}",
                InvariantViolation::join(&violations)
            ))
        })?;

        let kept = after.history().len();
        if kept > before.history().len() || before.history()[..kept] != *after.history() {
            return Err(JumpError::InvariantViolation(
                "Postcondition failed: jump rewrote recorded entries".to_string(),
            ));
        }
        Ok(())
    }
}

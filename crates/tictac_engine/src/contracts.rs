//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} action {Q}`.
//! Preconditions run on every move; postconditions run in debug builds.

use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::{GameState, MoveError, Position, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a successful precondition check proves about the action.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions (checked in this order)
// ─────────────────────────────────────────────────────────────

/// Precondition: the index names a cell.
pub struct IndexInRange;

impl IndexInRange {
    /// Converts the raw index, rejecting anything outside 0-8.
    #[instrument]
    pub fn check(index: i64) -> Result<Position, MoveError> {
        Position::try_from(index).map_err(|e| MoveError::InvalidInput(e.index))
    }
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once a win or draw is recorded.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto a marked cell.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, pos: Position) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: range, then game over, then occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, yielding the target position.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, index: i64) -> Result<Position, MoveError> {
        let pos = IndexInRange::check(index)?;
        GameNotOver::check(state)?;
        CellIsEmpty::check(state, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `SubmitMove`.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - exactly one previously empty cell gained a mark, nothing else changed
/// - all [`EngineInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, i64> for MoveContract {
    type Checked = Position;

    fn pre(state: &GameState, index: &i64) -> Result<Position, MoveError> {
        LegalMove::check(state, *index)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let changed: Vec<_> = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(b, a)| b != a)
            .collect();
        let one_new_mark = matches!(
            changed.as_slice(),
            [(Square::Empty, Square::Occupied(_))]
        );
        if !one_new_mark {
            violations.push(InvariantViolation::new(
                "Exactly one empty cell gains a mark per move",
            ));
        }

        if let Err(mut rest) = EngineInvariants::check_all(after) {
            violations.append(&mut rest);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Panics in debug builds if the move broke its postconditions.
#[instrument(skip_all)]
pub fn assert_postconditions(before: &GameState, after: &GameState) {
    if let Err(violations) = MoveContract::post(before, after) {
        for v in &violations {
            warn!(invariant = %v.description, "Postcondition violated");
        }
        debug_assert!(false, "Move postconditions violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::fixtures::state;
    use crate::{Outcome, Player};

    #[test]
    fn test_precondition_order_range_first() {
        let over = state("XXXOO....", Player::X, Some(Outcome::Winner(Player::X)));
        // Out of range wins over game-over
        assert_eq!(MoveContract::pre(&over, &9), Err(MoveError::InvalidInput(9)));
        // Game-over wins over occupancy
        assert_eq!(MoveContract::pre(&over, &0), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = state("X........", Player::O, None);
        assert_eq!(
            MoveContract::pre(&game, &0),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(MoveContract::pre(&game, &4), Ok(Position::Center));
    }

    #[test]
    fn test_negative_index_rejected() {
        assert_eq!(
            MoveContract::pre(&GameState::new(), &-1),
            Err(MoveError::InvalidInput(-1))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = state("....X....", Player::O, None);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let before = state("X........", Player::O, None);
        let after = state("O........", Player::X, None);
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_double_move() {
        let before = GameState::new();
        let after = state("X...O....", Player::X, None);
        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert_eq!(violations.len(), 1);
    }
}

//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `current_player` agrees with the marks on the board.
///
/// While the game runs, X is to move exactly when both players have the
/// same number of marks. Once it is over, `current_player` is whoever
/// placed the last mark.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let even = state.board().count(Player::X) == state.board().count(Player::O);

        let expected = match (state.is_over(), even) {
            (false, true) | (true, false) => Player::X,
            (false, false) | (true, true) => Player::O,
        };

        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

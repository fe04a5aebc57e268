//! Board balance invariant: X is never behind, and never more than one ahead.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct BoardBalanceInvariant;

impl Invariant<GameState> for BoardBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

//! Outcome invariant: the recorded result matches the board.

use super::super::rules::{check_winner, has_line, is_full};
use super::super::{GameState, Outcome};
use super::Invariant;

/// Invariant: the terminal tag is exactly what the board shows.
///
/// - in progress: no monochrome line and at least one empty cell
/// - won by P: P holds a line and P made the last move
/// - draw: board full with no monochrome line
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.outcome() {
            None => check_winner(board).is_none() && !is_full(board),
            Some(Outcome::Winner(player)) => {
                has_line(board, player) && state.current_player() == player
            }
            Some(Outcome::Draw) => is_full(board) && check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::state;
    use super::*;
    use crate::Player;

    #[test]
    fn test_unrecorded_win_violates() {
        assert!(!OutcomeConsistentInvariant::holds(&state("XXXOO....", Player::O, None)));
    }

    #[test]
    fn test_recorded_draw_requires_full_board() {
        let draw = Some(Outcome::Draw);
        assert!(OutcomeConsistentInvariant::holds(&state("XOXXOOOXX", Player::X, draw)));
        assert!(!OutcomeConsistentInvariant::holds(&state("XOXXOOOX.", Player::O, draw)));
    }

    #[test]
    fn test_winner_must_hold_a_line() {
        let o_won = Some(Outcome::Winner(Player::O));
        assert!(!OutcomeConsistentInvariant::holds(&state("XXXOO....", Player::O, o_won)));
    }
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They never touch engine state, which
//! lets the contract and invariant layers reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, has_line};

use super::{Board, Outcome, Player};
use tracing::instrument;

/// Decides whether the move just made by `mover` ended the game.
///
/// Only the mover's lines are checked: a move cannot complete a line for
/// the other player.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> Option<Outcome> {
    if has_line(board, mover) {
        Some(Outcome::Winner(mover))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

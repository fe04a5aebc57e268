//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// True if `player` holds all three squares of some line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first monochrome line found,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(player);
            }
        }
    }

    None
}

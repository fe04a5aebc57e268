//! Typed board positions.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column (0-2).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Positions whose squares are still empty, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

/// An integer that does not name a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("index {} is outside 0-8", index)]
pub struct OutOfRange {
    /// The rejected index.
    pub index: i64,
}

impl TryFrom<i64> for Position {
    type Error = OutOfRange;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Self::from_index)
            .ok_or(OutOfRange { index })
    }
}

/// Index first, then label: `2 (Top-right)`.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.index(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_index_round_trip_covers_board() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!((Position::TopRight.row(), Position::TopRight.column()), (0, 2));
        assert_eq!((Position::Center.row(), Position::Center.column()), (1, 1));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.column()), (2, 0));
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Position::try_from(4), Ok(Position::Center));
        assert_eq!(Position::try_from(-1), Err(OutOfRange { index: -1 }));
        assert_eq!(Position::try_from(9), Err(OutOfRange { index: 9 }));
        assert!(Position::try_from(i64::MAX).is_err());
    }

    #[test]
    fn test_display_shows_index_and_label() {
        assert_eq!(Position::BottomCenter.to_string(), "7 (Bottom-center)");
    }

    #[test]
    fn test_valid_moves_skips_occupied() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));

        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::Center));
        assert!(!moves.contains(&Position::TopLeft));
        assert_eq!(moves[0], Position::TopCenter);
    }
}

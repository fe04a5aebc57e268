//! Errors returned for rejected moves.

use super::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a submitted move was rejected.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name a cell (outside 0-8).
    #[display("Invalid move index {}: must be 0-8", _0)]
    InvalidInput(#[error(not(source))] i64),

    /// The game has already ended in a win or draw.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}

impl MoveError {
    /// Wire tag for this error.
    pub fn kind(&self) -> MoveErrorKind {
        match self {
            MoveError::InvalidInput(_) => MoveErrorKind::InvalidInput,
            MoveError::GameAlreadyOver => MoveErrorKind::GameAlreadyOver,
            MoveError::CellOccupied(_) => MoveErrorKind::CellOccupied,
        }
    }
}

/// Error tag shared with the presentation layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum MoveErrorKind {
    /// Index outside 0-8.
    InvalidInput,
    /// Cell already holds a symbol.
    CellOccupied,
    /// Move submitted after a terminal state.
    GameAlreadyOver,
}

//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The symbol written into a cell for this player.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// On the wire a square is `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Wire symbol for the square.
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(player) => player.symbol(),
        }
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.symbol().to_string()
    }
}

/// A cell value that is neither empty nor a known symbol.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown cell symbol {:?}", symbol)]
pub struct SquareParseError {
    /// The rejected text.
    pub symbol: String,
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        match symbol.as_str() {
            "" => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Player::X)),
            "O" => Ok(Square::Occupied(Player::O)),
            _ => Err(SquareParseError { symbol }),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&pos.to_string()),
                    Square::Occupied(player) => result.push_str(player.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line completed.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// Only the engine mutates this; everyone else sees a
/// [`GameSnapshot`](crate::GameSnapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next (or moved last, once over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the terminal outcome, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once a win or draw has been recorded.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Writes the current player's mark (unchecked - use the engine for validation).
    pub(crate) fn place(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.current_player));
    }

    /// Hands the turn to the other player.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Records the terminal outcome.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    /// Builds a state from raw parts, bypassing the rules.
    #[cfg(test)]
    pub(crate) fn from_parts(
        board: Board,
        current_player: Player,
        outcome: Option<Outcome>,
    ) -> Self {
        Self {
            board,
            current_player,
            outcome,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

//! Immutable view of the game handed to callers.
//!
//! The JSON shape is a fixed contract with the presentation layer:
//!
//! ```json
//! {"board":["X","","","","","","","",""],"currentPlayer":"O","gameOver":false,"winner":""}
//! ```

use super::{Board, GameState, Outcome, Player};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Terminal tag as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// X completed a line.
    X,
    /// O completed a line.
    O,
    /// Board filled with no line.
    #[serde(rename = "draw")]
    Draw,
}

impl From<Outcome> for Winner {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(Player::X) => Winner::X,
            Outcome::Winner(Player::O) => Winner::O,
            Outcome::Draw => Winner::Draw,
        }
    }
}

/// Read-only copy of the game after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Nine cells, row-major.
    pub board: Board,
    /// Whoever moves next; the last mover once the game is over.
    pub current_player: Player,
    /// True once a win or draw was detected.
    pub game_over: bool,
    /// `None` while the game is in progress.
    #[serde(default, with = "winner_field")]
    pub winner: Option<Winner>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board().clone(),
            current_player: state.current_player(),
            game_over: state.is_over(),
            winner: state.outcome().map(Winner::from),
        }
    }
}

/// `winner` is always written; "no winner" is the empty string.
mod winner_field {
    use super::*;

    pub fn serialize<S: Serializer>(winner: &Option<Winner>, s: S) -> Result<S::Ok, S::Error> {
        match winner {
            Some(w) => w.serialize(s),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Winner>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Tag(Winner),
            Other(Option<String>),
        }

        match Raw::deserialize(d)? {
            Raw::Tag(w) => Ok(Some(w)),
            Raw::Other(None) => Ok(None),
            Raw::Other(Some(s)) if s.is_empty() => Ok(None),
            Raw::Other(Some(s)) => Err(serde::de::Error::custom(format!(
                "unknown winner {:?}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};
    use serde_json::json;

    #[test]
    fn test_fresh_game_json_contract() {
        let snapshot = GameSnapshot::from(&GameState::new());
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            json!({
                "board": ["", "", "", "", "", "", "", "", ""],
                "currentPlayer": "X",
                "gameOver": false,
                "winner": ""
            })
        );
    }

    #[test]
    fn test_finished_game_json_contract() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        let state = GameState::from_parts(board, Player::O, Some(Outcome::Draw));
        let value = serde_json::to_value(GameSnapshot::from(&state)).unwrap();
        assert_eq!(value["board"][4], "O");
        assert_eq!(value["gameOver"], true);
        assert_eq!(value["winner"], "draw");
    }

    #[test]
    fn test_winner_may_be_absent_or_null_on_input() {
        let base = json!({
            "board": ["", "", "", "", "", "", "", "", ""],
            "currentPlayer": "X",
            "gameOver": false
        });
        let snapshot: GameSnapshot = serde_json::from_value(base.clone()).unwrap();
        assert_eq!(snapshot.winner, None);

        let mut with_null = base;
        with_null["winner"] = serde_json::Value::Null;
        let snapshot: GameSnapshot = serde_json::from_value(with_null).unwrap();
        assert_eq!(snapshot.winner, None);
    }

    #[test]
    fn test_rejects_unknown_winner_and_cell() {
        let bad_winner = json!({
            "board": ["", "", "", "", "", "", "", "", ""],
            "currentPlayer": "X",
            "gameOver": true,
            "winner": "nobody"
        });
        assert!(serde_json::from_value::<GameSnapshot>(bad_winner).is_err());

        let bad_cell = json!({
            "board": ["Z", "", "", "", "", "", "", "", ""],
            "currentPlayer": "X",
            "gameOver": false,
            "winner": ""
        });
        assert!(serde_json::from_value::<GameSnapshot>(bad_cell).is_err());
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let wrong_case = json!({
            "Board": ["", "", "", "", "", "", "", "", ""],
            "CurrentPlayer": "X",
            "GameOver": false,
            "Winner": ""
        });
        assert!(serde_json::from_value::<GameSnapshot>(wrong_case).is_err());
    }
}

//! JSON shapes shared by the stdio and HTTP bridges.

use derive_new::new;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use tictac_engine::{GameSnapshot, MoveError};

/// Error tag used when a request could not be understood at all.
pub const BAD_REQUEST: &str = "BadRequest";

/// Error payload: `{"error":"CellOccupied","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ErrorBody {
    /// Machine-readable tag.
    pub error: String,
    /// Human-readable explanation, suitable as status text.
    pub message: String,
}

impl From<&MoveError> for ErrorBody {
    fn from(err: &MoveError) -> Self {
        Self::new(err.kind().to_string(), err.to_string())
    }
}

/// Body of `POST /api/game/move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Cell to mark, 0-8.
    #[serde(deserialize_with = "cell_index")]
    pub index: i64,
}

/// Reads any JSON integer as a cell index, saturating at the `i64` bounds.
///
/// Every integer reaches the engine, so one outside 0-8 is reported as
/// `InvalidInput` no matter how large it is. Fractional numbers are not
/// integers and fail to parse.
pub fn cell_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct CellIndexVisitor;

    impl Visitor<'_> for CellIndexVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer cell index")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX }))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        // Integer literals past the u64 range arrive as floats.
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() && v.fract() == 0.0 {
                Ok(v as i64)
            } else {
                Err(E::invalid_type(de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(CellIndexVisitor)
}

/// One line of input to the stdio bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum BridgeRequest {
    /// Start a fresh game.
    NewGame,
    /// Mark a cell for the current player.
    SubmitMove {
        /// Cell to mark, 0-8.
        #[serde(deserialize_with = "cell_index")]
        index: i64,
    },
    /// Same as `NewGame`.
    Reset,
    /// Read the current game without changing it.
    CurrentState,
}

/// One line of output from the stdio bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BridgeResponse {
    /// The operation succeeded.
    Ok(GameSnapshot),
    /// The operation was rejected; the game did not change.
    Err(ErrorBody),
}

impl From<Result<GameSnapshot, MoveError>> for BridgeResponse {
    fn from(result: Result<GameSnapshot, MoveError>) -> Self {
        match result {
            Ok(snapshot) => BridgeResponse::Ok(snapshot),
            Err(e) => BridgeResponse::Err(ErrorBody::from(&e)),
        }
    }
}

//! Bridge error type.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure outside the game rules: config, I/O, malformed requests.
#[derive(Debug, Clone, Display, Error)]
#[display("Bridge error: {} at {}:{}", message, file, line)]
pub struct BridgeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BridgeError {
    /// Creates a new bridge error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for BridgeError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<toml::de::Error> for BridgeError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}

impl From<serde_json::Error> for BridgeError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

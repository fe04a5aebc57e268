//! Tic-tac-toe game engine.
//!
//! One [`GameEngine`] owns the single live game. The presentation layer
//! drives it with four calls and re-renders from the returned
//! [`GameSnapshot`]:
//!
//! ```
//! use tictac_engine::{GameEngine, MoveError, Winner};
//!
//! let engine = GameEngine::new();
//! engine.new_game();
//! for index in [0, 3, 1, 4] {
//!     engine.submit_move(index)?;
//! }
//! let snapshot = engine.submit_move(2)?;
//! assert!(snapshot.game_over);
//! assert_eq!(snapshot.winner, Some(Winner::X));
//! assert_eq!(engine.submit_move(5), Err(MoveError::GameAlreadyOver));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
mod position;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use contracts::{CellIsEmpty, Contract, GameNotOver, IndexInRange, LegalMove, MoveContract};
pub use engine::GameEngine;
pub use error::{MoveError, MoveErrorKind};
pub use position::{OutOfRange, Position};
pub use snapshot::{GameSnapshot, Winner};
pub use types::{Board, GameState, Outcome, Player, Square, SquareParseError};

//! The single authoritative game.

use super::contracts::{Contract, MoveContract, assert_postconditions};
use super::rules;
use super::{GameSnapshot, GameState, MoveError};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Owns the one live game and serializes every operation on it.
///
/// Callers never see the state itself, only [`GameSnapshot`] copies.
/// Each operation holds the lock for its whole duration.
#[derive(Debug, Default)]
pub struct GameEngine {
    state: Mutex<GameState>,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game engine");
        Self::default()
    }

    /// Replaces the current game with a fresh one.
    #[instrument(skip(self))]
    pub fn new_game(&self) -> GameSnapshot {
        let mut state = self.lock();
        *state = GameState::new();
        info!("New game started");
        GameSnapshot::from(&*state)
    }

    /// Same contract as [`GameEngine::new_game`].
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameSnapshot {
        debug!("Reset requested");
        self.new_game()
    }

    /// Snapshot of the current game without changing it.
    #[instrument(skip(self))]
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot::from(&*self.lock())
    }

    /// Places the current player's mark at `index`.
    ///
    /// # Errors
    ///
    /// Checked in order: [`MoveError::InvalidInput`] for an index outside
    /// 0-8, [`MoveError::GameAlreadyOver`] once the game has ended,
    /// [`MoveError::CellOccupied`] for a taken cell. The game is untouched
    /// on error.
    #[instrument(skip(self))]
    pub fn submit_move(&self, index: i64) -> Result<GameSnapshot, MoveError> {
        let mut state = self.lock();

        let pos = MoveContract::pre(&*state, &index).map_err(|e| {
            warn!(index, error = %e, "Move rejected");
            e
        })?;

        let before = state.clone();
        let mover = state.current_player();
        state.place(pos);

        match rules::evaluate(state.board(), mover) {
            Some(outcome) => {
                state.finish(outcome);
                info!(index, player = %mover, %outcome, "Game over");
            }
            None => {
                state.advance_turn();
                info!(index, player = %mover, next = %state.current_player(), "Move accepted");
            }
        }

        if cfg!(debug_assertions) {
            assert_postconditions(&before, &state);
        }

        Ok(GameSnapshot::from(&*state))
    }

    fn lock(&self) -> MutexGuard<'_, GameState> {
        // State is only written after every check passes, so a poisoned
        // guard still holds a consistent game.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//! Owning controller for a single game.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{EngineError, GameState, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Holds exactly one [`GameState`] and is the only thing that mutates it.
/// Every operation returns the resulting state so a host can render it
/// directly.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Attempts a move at `(row, col)` for the current player.
    ///
    /// Moves on an occupied cell, or after the game has ended, are ignored
    /// and the unchanged state is returned.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either coordinate is outside `0..3`; the
    /// state is left untouched.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<&GameState, EngineError> {
        let pos = Position::from_coords(row, col)?;
        Ok(self.play(pos))
    }

    /// Plays an already validated position for the current player.
    ///
    /// Same rules as [`attempt_move`](Self::attempt_move).
    #[instrument(skip(self), fields(position = %pos))]
    pub fn play(&mut self, pos: Position) -> &GameState {
        if let Ok(outcome) = self.state.apply(pos) {
            debug_assert!(
                GameInvariants::check_all(&self.state).is_ok(),
                "Invariant violated after move at {}",
                pos
            );
            if outcome.is_over() {
                info!(%outcome, "Game over");
            }
        }
        &self.state
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        debug!(previous = ?self.state.outcome(), "Resetting game");
        self.state = GameState::new();
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player};

    #[test]
    fn test_attempt_move_places_mark() {
        let mut engine = GameEngine::new();
        let state = engine.attempt_move(1, 1).expect("in range");
        assert_eq!(state.board().get(Position::Center), crate::Cell::X);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_out_of_range_leaves_state() {
        let mut engine = GameEngine::new();
        engine.attempt_move(0, 0).expect("in range");
        let before = engine.state().clone();

        assert!(engine.attempt_move(3, 0).is_err());
        assert!(engine.attempt_move(0, 3).is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_reset_from_mid_game() {
        let mut engine = GameEngine::new();
        engine.play(Position::Center);
        engine.play(Position::TopLeft);
        assert_eq!(engine.reset(), &GameState::new());
    }
}

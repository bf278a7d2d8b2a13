//! Game state and the move transition.

use crate::rules::{check_winner, is_full};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The game has already been won or drawn.
    GameOver,
    /// The target cell already holds a mark.
    Occupied(Position),
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move, or the player who made the final move once over.
    current_player: Player,
    /// Game status.
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, current_player: Player, outcome: Outcome) -> Self {
        Self {
            board,
            current_player,
            outcome,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Checks whether a move at `pos` would be accepted.
    pub fn check_move(&self, pos: Position) -> Result<(), Rejection> {
        if self.outcome.is_over() {
            return Err(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(Rejection::Occupied(pos));
        }
        Ok(())
    }

    /// Consumes the state and returns the state after playing `pos`.
    ///
    /// Moves on an occupied cell or a finished game return the state
    /// unchanged.
    pub fn with_move(mut self, pos: Position) -> Self {
        let _ = self.apply(pos);
        self
    }

    /// Plays `pos` for the current player in place.
    ///
    /// Sets the mark, then checks for a win, then for a draw. The turn
    /// passes to the opponent only when the game continues.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub(crate) fn apply(&mut self, pos: Position) -> Result<Outcome, Rejection> {
        if let Err(rejection) = self.check_move(pos) {
            debug!(?rejection, "Move ignored");
            return Err(rejection);
        }

        let player = self.current_player;
        self.board.set(pos, player.into());

        self.outcome = if check_winner(&self.board).is_some() {
            Outcome::Won(player)
        } else if is_full(&self.board) {
            Outcome::Draw
        } else {
            self.current_player = player.opponent();
            Outcome::InProgress
        };

        debug!(outcome = ?self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// One-line status for display: turn indicator or result.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Player Turn: {}", self.current_player),
            outcome => outcome.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_with_move_flips_turn() {
        let state = GameState::new().with_move(Position::Center);
        assert_eq!(state.board().get(Position::Center), crate::Cell::X);
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_occupied_rejected() {
        let state = GameState::new().with_move(Position::Center);
        assert_eq!(
            state.check_move(Position::Center),
            Err(Rejection::Occupied(Position::Center))
        );
        let again = state.clone().with_move(Position::Center);
        assert_eq!(again, state);
    }

    #[test]
    fn test_winning_move_keeps_player() {
        let state = [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]
        .into_iter()
        .fold(GameState::new(), GameState::with_move);

        assert_eq!(state.outcome(), Outcome::Won(Player::X));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.check_move(Position::BottomRight), Err(Rejection::GameOver));
    }

    #[test]
    fn test_status_line() {
        assert_eq!(GameState::new().status_line(), "Player Turn: X");
        assert_eq!(Outcome::Won(Player::O).to_string(), "Winner: O");
        assert_eq!(Outcome::Draw.to_string(), "It's a Draw!");
    }
}

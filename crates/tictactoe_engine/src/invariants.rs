//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties every reachable [`GameState`] satisfies.
//! The engine checks them in debug builds after each accepted move, and they
//! can be tested independently.

use crate::rules::{check_winner, is_full};
use crate::{Cell, GameState, Outcome, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn violation<S, I: Invariant<S>>(state: &S) -> Option<InvariantViolation> {
    (!I::holds(state)).then(|| InvariantViolation {
        description: I::description(),
    })
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        into_result(
            [violation::<S, I1>(state), violation::<S, I2>(state)]
                .into_iter()
                .flatten()
                .collect(),
        )
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        into_result(
            [
                violation::<S, I1>(state),
                violation::<S, I2>(state),
                violation::<S, I3>(state),
            ]
            .into_iter()
            .flatten()
            .collect(),
        )
    }
}

/// X moves first, so X has as many marks as O or exactly one more.
pub struct MarkBalance;

impl Invariant<GameState> for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Cell::X);
        let o = state.board().count(Cell::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// While the game runs, X is to move exactly when the mark counts are equal.
pub struct TurnParity;

impl Invariant<GameState> for TurnParity {
    fn holds(state: &GameState) -> bool {
        if state.outcome().is_over() {
            return true;
        }
        let balanced = state.board().count(Cell::X) == state.board().count(Cell::O);
        (state.current_player() == Player::X) == balanced
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// The recorded outcome matches what the board shows.
pub struct OutcomeConsistent;

impl Invariant<GameState> for OutcomeConsistent {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match (state.outcome(), check_winner(board)) {
            (Outcome::Won(player), Some(winner)) => player == winner,
            (Outcome::Won(_), None) => false,
            (Outcome::Draw, winner) => winner.is_none() && is_full(board),
            (Outcome::InProgress, winner) => winner.is_none() && !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the board"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (MarkBalance, TurnParity, OutcomeConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_invariants_hold_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let state = GameState::new()
            .with_move(Position::TopLeft)
            .with_move(Position::Center)
            .with_move(Position::TopRight);
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_detects_double_move() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        let state = GameState::from_parts(Board::from_cells(cells), Player::O, Outcome::InProgress);

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation {
                description: MarkBalance::description()
            }]
        );
    }

    #[test]
    fn test_detects_wrong_turn() {
        let state = GameState::from_parts(Board::new(), Player::O, Outcome::InProgress);
        assert!(!TurnParity::holds(&state));
        assert!(MarkBalance::holds(&state));
    }

    #[test]
    fn test_detects_unearned_win() {
        let state = GameState::from_parts(Board::new(), Player::X, Outcome::Won(Player::X));
        assert!(!OutcomeConsistent::holds(&state));

        type TwoInvariants = (MarkBalance, OutcomeConsistent);
        assert_eq!(TwoInvariants::check_all(&state).unwrap_err().len(), 1);
    }
}

//! Tic-tac-toe game-state engine.
//!
//! The engine owns a 3x3 board, the player to move and the game outcome.
//! Hosts drive it through two calls, [`GameEngine::attempt_move`] and
//! [`GameEngine::reset`], and read back the [`GameState`] each returns.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], [`Position`], [`Board`]
//! - **Rules**: pure win/draw checks over a board ([`rules`])
//! - **State**: [`GameState`] and its move transition
//! - **Engine**: [`GameEngine`], the single owner of a running game
//! - **Invariants**: properties checked after every accepted move ([`invariants`])
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Player};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
//!     engine.attempt_move(row, col)?;
//! }
//! assert_eq!(engine.state().outcome(), Outcome::Won(Player::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use board::Board;
pub use engine::GameEngine;
pub use error::{EngineError, EngineErrorKind};
pub use position::{Position, SIZE};
pub use state::{GameState, Outcome, Rejection};
pub use types::{Cell, Player};

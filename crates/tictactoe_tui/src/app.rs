//! Application state and key handling.

use crate::input::{Action, action_for, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, GameState, Position};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep drawing and reading input.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// The app never edits the board itself: every mark goes through the engine.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match action_for(key) {
            Some(action) => self.perform(action),
            None => Control::Continue,
        }
    }

    /// Handles a click or tap on a board cell.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, pos: Position) -> Control {
        self.cursor = pos;
        self.perform(Action::PlaceAtCursor)
    }

    fn perform(&mut self, action: Action) -> Control {
        debug!(?action, "Performing action");
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlaceAtCursor => {
                self.engine.play(self.cursor);
            }
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.engine.play(pos);
            }
            Action::NewGame => {
                info!("Starting new game");
                self.engine.reset();
            }
            Action::Quit => {
                info!("User quit");
                return Control::Quit;
            }
        }
        Control::Continue
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

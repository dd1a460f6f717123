//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crate::config::GameConfig;
use crate::games::tictactoe::{FirstEmpty, MoveSelector, Position};
use crate::orchestrator::{GameMode, Snapshot};
use crate::runtime::GameRuntime;
use crossterm::event::KeyCode;
use tracing::debug;

/// Main application state.
pub struct App<S = FirstEmpty> {
    runtime: GameRuntime<S>,
    cursor: Position,
    should_quit: bool,
}

impl App<FirstEmpty> {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_runtime(GameRuntime::new(config))
    }
}

impl<S: MoveSelector> App<S> {
    /// Wraps an existing runtime.
    pub fn with_runtime(runtime: GameRuntime<S>) -> Self {
        Self {
            runtime,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Current view.
    pub fn snapshot(&self) -> Snapshot {
        self.runtime.snapshot()
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The runtime, for feeding timer events.
    pub fn runtime_mut(&mut self) -> &mut GameRuntime<S> {
        &mut self.runtime
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Key pressed");

        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        if self.runtime.orchestrator().mode() == GameMode::Unselected {
            match key {
                KeyCode::Char('1') => self.runtime.select_mode(GameMode::PlayerVsPlayer),
                KeyCode::Char('2') => self.runtime.select_mode(GameMode::PlayerVsAi),
                _ => {}
            }
            return;
        }

        let current = self.runtime.orchestrator().current_index();
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.runtime.click_cell(self.cursor.to_index()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.runtime.click_cell(pos.to_index());
                }
            }
            KeyCode::Char('[') => {
                if let Some(prev) = current.checked_sub(1) {
                    self.runtime.jump_to(prev);
                }
            }
            KeyCode::Char(']') => self.runtime.jump_to(current + 1),
            KeyCode::Home => self.runtime.jump_to(0),
            KeyCode::End => {
                let latest = self.runtime.orchestrator().latest_index();
                self.runtime.jump_to(latest);
            }
            _ => {}
        }
    }
}

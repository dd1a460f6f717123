//! Tic-tac-toe with a browsable move timeline.
//!
//! # Architecture
//!
//! - **Rules**: win detection, turn parity and status, as pure functions
//! - **Timeline**: every board of the game plus a cursor; rewinding and
//!   playing from the past discards the future
//! - **Opponent**: a [`MoveSelector`] picks the computer's square
//! - **Orchestrator**: an explicit state machine over one session that
//!   schedules the opponent's delayed move and cancels it when stale
//! - **Runtime**: tokio timers behind the orchestrator's effects
//! - **TUI**: ratatui front end over orchestrator snapshots
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameConfig, GameMode, Orchestrator};
//!
//! let mut game = Orchestrator::new(&GameConfig::default());
//! game.select_mode(GameMode::PlayerVsPlayer);
//! for index in [0, 4, 1, 7, 2] {
//!     game.click_cell(index);
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod orchestrator;
mod replay;
mod runtime;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_INFO_IMAGE_URL, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants;
pub use games::tictactoe::{
    Board, FirstEmpty, GameStatus, HistoryError, LINES, Mark, Move, MoveSelector, Position,
    Square, Timeline, current_turn, evaluate_winner, is_full, record_move, select_move,
};

// Crate-level exports - Orchestration
pub use orchestrator::{Effect, Event, GameMode, Orchestrator, Phase, Snapshot, Ticket};
pub use runtime::GameRuntime;

// Crate-level exports - Front ends
pub use replay::{Script, render_text, run as run_replay};
pub use tui::{App, run_tui};

//! Tic-tac-toe rules, history and opponent.

mod action;
mod history;
pub mod invariants;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use history::{HistoryError, Timeline, record_move};
pub use opponent::{FirstEmpty, MoveSelector, select_move};
pub use position::Position;
pub use rules::{GameStatus, LINES, current_turn, evaluate_winner, is_full};
pub use types::{Board, Mark, Square};

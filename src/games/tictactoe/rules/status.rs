//! Status line derivation.

use super::super::{Board, Mark};
use super::{current_turn, evaluate_winner};
use serde::{Deserialize, Serialize};

/// What the status line reports for a board.
///
/// There is deliberately no draw variant: a full board with no winner
/// still reports the next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line is complete.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// Nobody has won yet.
    #[display("Next player: {_0}")]
    NextPlayer(Mark),
}

impl GameStatus {
    /// Derives the status of `board` viewed at `move_index`.
    pub fn of(board: &Board, move_index: usize) -> Self {
        match evaluate_winner(board) {
            Some(mark) => GameStatus::Winner(mark),
            None => GameStatus::NextPlayer(current_turn(move_index)),
        }
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Winner(mark) => Some(mark),
            GameStatus::NextPlayer(_) => None,
        }
    }
}

//! Moves as first-class values.
//!
//! A move is never stored in the timeline: the timeline stores boards.
//! Moves are recovered by diffing consecutive boards, which is how the
//! history store checks that every entry is exactly one step from the last.

use super::history::HistoryError;
use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Recovers the single move that turns `before` into `after`.
    ///
    /// # Errors
    ///
    /// Fails if a previously occupied square changed, or if the boards
    /// differ in anything other than exactly one newly marked square.
    pub fn between(before: &Board, after: &Board) -> Result<Self, HistoryError> {
        let mut placed = None;
        let mut changed = 0;

        for position in Position::ALL {
            let (old, new) = (before.get(position), after.get(position));
            if old == new {
                continue;
            }
            changed += 1;
            match (old, new) {
                (Square::Empty, Square::Occupied(mark)) => placed = Some(Move::new(mark, position)),
                _ => return Err(HistoryError::Overwrite { position }),
            }
        }

        match placed {
            Some(mv) if changed == 1 => Ok(mv),
            _ => Err(HistoryError::NotSingleStep { changed }),
        }
    }

    /// Applies this move to `board`.
    pub fn apply(&self, board: &Board) -> Board {
        board.with_mark(self.position, self.mark)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

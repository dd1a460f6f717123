//! Move history with a movable read cursor.
//!
//! The timeline is a sequence of boards. Entry 0 is the empty board and
//! every later entry adds exactly one mark to its predecessor. The cursor
//! picks which entry is "current". Moving the cursor never changes the
//! entries; recording a move from a past entry discards everything after it.

use super::action::Move;
use super::invariants::assert_invariants;
use super::rules::current_turn;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Reasons a board cannot be appended to the timeline.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The entry to record from does not exist.
    #[display("Cannot record from entry {index}: the timeline has {len} entries")]
    IndexOutOfRange {
        /// Requested entry.
        index: usize,
        /// Number of entries.
        len: usize,
    },

    /// The new board does not add exactly one mark.
    #[display("Expected exactly one new mark, found {changed} changed squares")]
    NotSingleStep {
        /// Number of squares that differ.
        changed: usize,
    },

    /// The new board changes a square that was already marked.
    #[display("Square {position} was already occupied")]
    Overwrite {
        /// The overwritten square.
        position: Position,
    },

    /// The new mark belongs to the player who is not on turn.
    #[display("Expected {expected} to move, found {found}")]
    WrongMark {
        /// Mark on turn.
        expected: Mark,
        /// Mark that was placed.
        found: Mark,
    },
}

/// Keeps entries `[0, upto]` of `history` and appends `new_board`.
///
/// The entry at `upto + 1` of the result is the new board, so that is the
/// new current index.
///
/// # Errors
///
/// Fails if `upto` is out of range, or if `new_board` is not entry `upto`
/// plus one mark of the player on turn.
#[instrument(skip(history, new_board), fields(len = history.len()))]
pub fn record_move(
    history: &[Board],
    upto: usize,
    new_board: Board,
) -> Result<Vec<Board>, HistoryError> {
    let base = history.get(upto).ok_or(HistoryError::IndexOutOfRange {
        index: upto,
        len: history.len(),
    })?;

    let mv = Move::between(base, &new_board)?;
    let expected = current_turn(upto);
    if mv.mark != expected {
        return Err(HistoryError::WrongMark {
            expected,
            found: mv.mark,
        });
    }

    let discarded = history.len() - (upto + 1);
    if discarded > 0 {
        debug!(discarded, "Discarding entries after the recorded move");
    }

    let mut next = history[..=upto].to_vec();
    next.push(new_board);
    Ok(next)
}

/// Board history plus the index of the entry being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub(super) entries: Vec<Board>,
    pub(super) current: usize,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
            current: 0,
        }
    }

    /// Rebuilds a timeline by playing `moves` in order from the empty board.
    ///
    /// Marks alternate starting with X.
    ///
    /// # Errors
    ///
    /// Fails on the first move that targets an occupied square.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, HistoryError> {
        let mut timeline = Self::new();
        for &position in moves {
            let next = timeline
                .current_board()
                .with_mark(position, timeline.turn());
            timeline.record(next)?;
        }
        Ok(timeline)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the empty board is entry 0.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index of the newest entry.
    pub fn latest_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// The board at the current index.
    pub fn current_board(&self) -> &Board {
        &self.entries[self.current]
    }

    /// Whose turn it is at the current index.
    pub fn turn(&self) -> Mark {
        current_turn(self.current)
    }

    /// The move that produced entry `index`, or `None` for entry 0.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.entries.get(index.checked_sub(1)?)?;
        let after = self.entries.get(index)?;
        Move::between(before, after).ok()
    }

    /// Records `board` as the successor of the current entry.
    ///
    /// Later entries are discarded and the cursor moves to the new entry.
    /// On error the timeline is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`record_move`].
    #[instrument(skip(self, board), fields(current = self.current))]
    pub fn record(&mut self, board: Board) -> Result<usize, HistoryError> {
        self.entries = record_move(&self.entries, self.current, board)?;
        self.current += 1;
        assert_invariants(self);
        debug!(current = self.current, "Recorded move");
        Ok(self.current)
    }

    /// Moves the cursor to `index` without touching the entries.
    ///
    /// Returns the new index, or `None` if `index` does not exist.
    #[instrument(skip(self), fields(current = self.current, len = self.entries.len()))]
    pub fn jump(&mut self, index: usize) -> Option<usize> {
        if index >= self.entries.len() {
            debug!("Ignoring jump past the end of the timeline");
            return None;
        }
        self.current = index;
        Some(index)
    }

    /// Labels for a move list, one per entry.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.entries.len())
            .map(|index| {
                if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{index}")
                }
            })
            .collect()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

//! The timeline begins at the empty board.

use super::super::{Board, Timeline};
use super::Invariant;

/// Invariant: entry 0 is the all-empty board.
pub struct StartsEmptyInvariant;

impl Invariant<Timeline> for StartsEmptyInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.entries().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "Timeline starts with the empty board"
    }
}

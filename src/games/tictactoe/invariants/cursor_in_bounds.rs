//! The cursor always points at an existing entry.

use super::super::Timeline;
use super::Invariant;

/// Invariant: `0 <= current < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.current_index() < timeline.len()
    }

    fn description() -> &'static str {
        "Current index points at an existing entry"
    }
}

//! Each entry is exactly one move past its predecessor.

use super::super::{Move, Timeline};
use super::Invariant;

/// Invariant: every entry adds exactly one mark to an empty square of the
/// entry before it, and changes nothing else.
pub struct SingleStepInvariant;

impl Invariant<Timeline> for SingleStepInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .entries()
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_ok())
    }

    fn description() -> &'static str {
        "Each entry adds exactly one mark to its predecessor"
    }
}

//! Marks alternate X, O, X, ... along the timeline.

use super::super::rules::current_turn;
use super::super::{Move, Timeline};
use super::Invariant;

/// Invariant: the mark added by entry `k` is the mark on turn at `k - 1`.
///
/// Steps that are not single moves are left to [`super::SingleStepInvariant`].
pub struct AlternatingMarksInvariant;

impl Invariant<Timeline> for AlternatingMarksInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .entries()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| match Move::between(&pair[0], &pair[1]) {
                Ok(mv) => mv.mark == current_turn(index),
                Err(_) => true,
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Mark, Position};

    #[test]
    fn test_replayed_timeline_holds() {
        let timeline =
            Timeline::replay(&[Position::Center, Position::TopLeft]).expect("valid replay");
        assert!(AlternatingMarksInvariant::holds(&timeline));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut timeline = Timeline::new();
        timeline
            .entries
            .push(Board::new().with_mark(Position::Center, Mark::O));
        assert!(!AlternatingMarksInvariant::holds(&timeline));
    }
}

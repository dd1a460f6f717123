//! Timeline invariants.
//!
//! Invariants are logical properties of a [`Timeline`](super::Timeline) that
//! must hold after every recorded move. They are testable on their own and
//! checked together in debug builds.

mod alternating_marks;
mod cursor_in_bounds;
mod single_step;
mod starts_empty;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use single_step::SingleStepInvariant;
pub use starts_empty::StartsEmptyInvariant;

use super::history::Timeline;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every invariant a timeline must satisfy.
pub type TimelineInvariants = (
    StartsEmptyInvariant,
    SingleStepInvariant,
    AlternatingMarksInvariant,
    CursorInBoundsInvariant,
);

/// Checks [`TimelineInvariants`], panicking on violation in debug builds.
pub fn assert_invariants(timeline: &Timeline) {
    if cfg!(debug_assertions)
        && let Err(violations) = TimelineInvariants::check_all(timeline)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Timeline invariant violated");
        }
        panic!("Timeline invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_timeline() {
        assert!(TimelineInvariants::check_all(&Timeline::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let timeline = Timeline::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
            .expect("valid replay");
        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut timeline = Timeline::replay(&[Position::Center]).expect("valid replay");
        // Two new marks in one step, and the first entry is no longer empty.
        timeline.entries[1] = timeline.entries[1].with_mark(Position::TopLeft, Mark::O);
        timeline.entries[0] = timeline.entries[0].with_mark(Position::BottomRight, Mark::X);

        let violations = TimelineInvariants::check_all(&timeline).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StartsEmptyInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&Timeline::new()).is_ok());
    }
}

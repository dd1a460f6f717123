//! Turn derivation.

use super::super::Mark;

/// Returns whose turn it is at `move_index`.
///
/// X moves on even indices and O on odd ones. The turn is never stored.
pub fn current_turn(move_index: usize) -> Mark {
    if move_index % 2 == 0 { Mark::X } else { Mark::O }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        assert_eq!(current_turn(0), Mark::X);
        assert_eq!(current_turn(1), Mark::O);
        assert_eq!(current_turn(2), Mark::X);
        assert_eq!(current_turn(9), Mark::O);
    }
}

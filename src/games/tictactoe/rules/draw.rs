//! Full-board detection.

use super::super::{Board, Square};

/// Checks if every square is occupied.
///
/// A full board without a winner is a draw, but the status line never says so:
/// it keeps reporting the next player.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::super::win::evaluate_winner;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_board_is_full_without_winner() {
        // X O X / X O O / O X X
        #[rustfmt::skip]
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ];
        let board = Board::from_squares(marks.map(Mark::square));

        assert!(is_full(&board));
        assert_eq!(evaluate_winner(&board), None);
    }
}

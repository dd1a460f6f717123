//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark holding the first complete line, if any.
#[instrument(skip(board), level = "trace")]
pub fn evaluate_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark)).then_some(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, mark)| board.with_mark(pos, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(&line.map(|pos| (pos, mark)));
                assert_eq!(evaluate_winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // O fills the top row and X fills the middle row. Not reachable in
        // play, but the line order still decides which mark is reported.
        let board = board_with(&[
            (Position::TopLeft, Mark::O),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::O),
            (Position::MiddleRight, Mark::X),
            (Position::Center, Mark::X),
            (Position::MiddleLeft, Mark::X),
        ]);
        assert_eq!(evaluate_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(evaluate_winner(&board), None);
    }
}

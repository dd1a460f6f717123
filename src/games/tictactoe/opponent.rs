//! Computer opponent move selection.

use super::{Board, Position};

/// Picks a move for the computer opponent.
///
/// The orchestrator only ever calls [`MoveSelector::select_move`], so a
/// stronger strategy can be dropped in without touching turn handling.
/// Closures of the right shape implement this trait too.
pub trait MoveSelector {
    /// Chooses an empty square on `board`, or `None` if there is none.
    fn select_move(&self, board: &Board) -> Option<Position>;

    /// Name used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Picks the first empty square in index order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmpty;

impl MoveSelector for FirstEmpty {
    fn select_move(&self, board: &Board) -> Option<Position> {
        select_move(board)
    }

    fn name(&self) -> &str {
        "first-empty"
    }
}

impl<F> MoveSelector for F
where
    F: Fn(&Board) -> Option<Position>,
{
    fn select_move(&self, board: &Board) -> Option<Position> {
        self(board)
    }
}

/// Returns the first empty position on the board.
pub fn select_move(board: &Board) -> Option<Position> {
    Position::ALL.iter().copied().find(|&pos| board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_first_empty_skips_occupied() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::O);
        assert_eq!(select_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_move() {
        #[rustfmt::skip]
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::O,
            Mark::X, Mark::O, Mark::X,
        ];
        let board = Board::from_squares(marks.map(Mark::square));
        assert_eq!(FirstEmpty.select_move(&board), None);
    }

    #[test]
    fn test_closure_selector() {
        let last_empty = |board: &Board| Position::valid_moves(board).last().copied();
        assert_eq!(last_empty.select_move(&Board::new()), Some(Position::BottomRight));
        assert_eq!(last_empty.name(), "custom");
    }
}

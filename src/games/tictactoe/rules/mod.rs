//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board or a move index. Nothing here holds state,
//! so the orchestrator and the history store can call them freely.

pub mod draw;
pub mod status;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use status::GameStatus;
pub use turn::current_turn;
pub use win::{LINES, evaluate_winner};

pub mod chess_board;
pub mod errors;
pub mod game;
pub mod perft;

pub use errors::{LayoutError, MoveError};
pub use game::{apply_move, new_game, outcome, remaining_counts, turn, ChessVar, Outcome, RemainingCounts};

//! Rules engine for a chess variant won by capturing every piece of one kind.
//!
//! There is no check, castling, en passant or promotion. A game ends the
//! moment one side has lost all pieces of some kind (its king, its queen, both
//! rooks, ...).
//!
//! ```
//! use chessvar::{ChessVar, MoveError, Outcome};
//!
//! let mut game = ChessVar::new();
//! game.apply_move("e2", "e4").unwrap();
//! assert_eq!(game.apply_move("e4", "e5"), Err(MoveError::WrongColor));
//! assert_eq!(game.outcome(), Outcome::Unfinished);
//! ```

pub mod chess_boards;
pub mod ui;

pub use chess_boards::chess_board::{ChessBoard, ChessField, Color, Move, Piece, PieceType, Square};
pub use chess_boards::{
    apply_move, new_game, outcome, remaining_counts, turn, ChessVar, LayoutError, MoveError, Outcome, RemainingCounts,
};

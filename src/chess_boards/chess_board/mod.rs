pub mod layout;
pub mod zobrist_hash;
pub use zobrist_hash::ZobristHash;
pub use zobrist_hash::ZOBRIST;
pub mod model;
pub use model::{ChessField, Color, Move, Piece, PieceType, Square, ALL_PIECE_TYPES};

mod chess_board;
mod move_generation;
pub mod move_validation;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::{initial_counts, ChessBoard};
pub use move_validation::is_move_legal;

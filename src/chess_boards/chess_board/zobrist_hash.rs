use super::{ChessBoard, ChessField, Color, Piece};
use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::sync::Arc;

const BOARD_SIZE: usize = 8;

/// Zobrist keys for (color, kind, has-moved, square) and the side to move.
pub struct ZobristHash {
    piece_keys: [[[[u64; BOARD_SIZE * BOARD_SIZE]; 2]; 6]; 2],
    side_to_move_key: u64,
}

impl ZobristHash {
    fn new(seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);

        let mut piece_keys = [[[[0; BOARD_SIZE * BOARD_SIZE]; 2]; 6]; 2];
        for color_keys in &mut piece_keys {
            for kind_keys in color_keys {
                for moved_keys in kind_keys {
                    for square_key in moved_keys {
                        *square_key = rng.gen();
                    }
                }
            }
        }

        let side_to_move_key = rng.gen();

        ZobristHash {
            piece_keys,
            side_to_move_key,
        }
    }

    pub fn calculate_hash(&self, board: &ChessBoard, active_color: Color) -> u64 {
        let mut hash = 0;

        for (field, piece) in board.pieces_with_coordinates() {
            hash = self.update_piece(hash, piece, field);
        }

        if active_color == Color::Black {
            hash ^= self.side_to_move_key;
        }

        hash
    }

    pub fn update_piece(&self, hash: u64, piece: Piece, field: ChessField) -> u64 {
        let square_index = field.row as usize * BOARD_SIZE + field.col as usize;
        hash ^ self.piece_keys[piece.color.index()][piece.kind.index()][piece.has_moved as usize][square_index]
    }

    pub fn update_active_side(&self, hash: u64) -> u64 {
        hash ^ self.side_to_move_key
    }
}

lazy_static! {
    pub static ref ZOBRIST: Arc<ZobristHash> = Arc::new(ZobristHash::new(42));
}

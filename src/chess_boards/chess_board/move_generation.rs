use super::{ChessBoard, ChessField, Color, Move, PieceType, Square};

const KNIGHT_MOVES: [(i8, i8); 8] = [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];
const KING_MOVES: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [(-1, -1), (-1, 1), (1, -1), (1, 1), (0, -1), (0, 1), (-1, 0), (1, 0)];

impl ChessBoard {
    /// All moves `color` may make on this board, sorted by source then destination.
    pub fn generate_moves(&self, color: Color) -> Vec<Move> {
        let mut all_moves: Vec<Move> = Vec::with_capacity(64);

        for (field, piece) in self.pieces_with_coordinates() {
            if piece.color == color {
                all_moves.extend(self.generate_moves_from_position(field));
            }
        }

        all_moves
    }

    /// Moves of the piece standing on `field`, regardless of whose turn it is.
    pub fn generate_moves_from_position(&self, field: ChessField) -> Vec<Move> {
        let Some(piece) = self.get(field) else {
            return Vec::new();
        };
        let mut moves = match piece.kind {
            PieceType::Pawn => self.generate_pawn_moves(field),
            PieceType::Knight => self.generate_step_moves(field, &KNIGHT_MOVES),
            PieceType::Bishop => self.generate_sliding_moves(field, &BISHOP_DIRECTIONS),
            PieceType::Rook => self.generate_sliding_moves(field, &ROOK_DIRECTIONS),
            PieceType::Queen => self.generate_sliding_moves(field, &QUEEN_DIRECTIONS),
            PieceType::King => self.generate_step_moves(field, &KING_MOVES),
        };
        moves.sort();
        moves
    }

    fn generate_pawn_moves(&self, field: ChessField) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(pawn) = self.get(field) else {
            return moves;
        };
        let forward = pawn.color.forward();

        if let Some(one) = field.offset(forward, 0) {
            if self.is_empty(one) {
                moves.push(Move::new(field, one));

                if !pawn.has_moved {
                    if let Some(two) = field.offset(2 * forward, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(field, two));
                        }
                    }
                }
            }
        }

        // Capture diagonally
        for d_col in [-1, 1] {
            if let Some(target) = field.offset(forward, d_col) {
                if let Square::Occupied(opponent_piece) = self.square(target) {
                    if opponent_piece.color != pawn.color {
                        moves.push(Move::new(field, target));
                    }
                }
            }
        }

        moves
    }

    /// Single steps for king and knight.
    fn generate_step_moves(&self, field: ChessField, offsets: &[(i8, i8)]) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(moving_piece) = self.get(field) else {
            return moves;
        };

        for &(d_row, d_col) in offsets {
            if let Some(target) = field.offset(d_row, d_col) {
                match self.get(target) {
                    Some(p) if p.color == moving_piece.color => {}
                    _ => moves.push(Move::new(field, target)),
                }
            }
        }

        moves
    }

    /// Generate sliding piece moves (bishop, rook, queen).
    fn generate_sliding_moves(&self, field: ChessField, directions: &[(i8, i8)]) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(moving_piece) = self.get(field) else {
            return moves;
        };

        for &(d_row, d_col) in directions {
            let mut current = field;

            while let Some(target) = current.offset(d_row, d_col) {
                match self.square(target) {
                    Square::Empty => moves.push(Move::new(field, target)),
                    Square::Occupied(p) => {
                        if p.color != moving_piece.color {
                            moves.push(Move::new(field, target));
                        }
                        break; // Block sliding
                    }
                }
                current = target;
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_boards::chess_board::layout::INITIAL_POSITION;
    use crate::chess_boards::chess_board::test_utils::{assert_moves_from, moves_from};
    use crate::chess_boards::chess_board::{ChessBoard, Color};

    #[test]
    fn test_initial_moves() {
        let board = ChessBoard::initial();
        assert_eq!(board.generate_moves(Color::White).len(), 20);
        assert_eq!(board.generate_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_knight_moves() {
        assert_moves_from(INITIAL_POSITION, "b1", &["b1a3", "b1c3"]);
    }

    #[test]
    fn test_pawn_moves_with_capture() {
        assert_moves_from("8/8/8/8/8/3P1n2/4p3/8 w", "e2", &["e2d3", "e2e3", "e2e4"]);
    }

    #[test]
    fn test_pawn_blocked() {
        assert!(moves_from("8/8/8/8/8/4P3/4p3/8 w", "e2").is_empty());
        assert_moves_from("8/8/8/8/4P3/8/4p3/8 w", "e2", &["e2e3"]);
    }

    #[test]
    fn test_rook_moves_stop_at_blockers() {
        assert_moves_from("8/8/8/8/8/8/p7/r1P5 w", "a1", &["a1b1", "a1c1"]);
    }

    #[test]
    fn test_king_moves_in_corner() {
        assert_moves_from("K7/P7/8/8/8/8/8/8 b", "a8", &["a8b7", "a8b8"]);
    }

    #[test]
    fn test_generated_moves_are_sorted() {
        let moves = moves_from(INITIAL_POSITION, "g1");
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }
}

use super::{ChessBoard, ChessField, Piece, PieceType};

/// Geometric legality of moving `piece` from `from` to `to`.
///
/// Ownership of the destination is not checked here, except for pawns where
/// the shape of the move depends on whether it captures.
pub fn is_move_legal(board: &ChessBoard, piece: &Piece, from: ChessField, to: ChessField) -> bool {
    match piece.kind {
        PieceType::King => is_king_move(from, to),
        PieceType::Queen => is_rook_move(board, from, to) || is_bishop_move(board, from, to),
        PieceType::Rook => is_rook_move(board, from, to),
        PieceType::Bishop => is_bishop_move(board, from, to),
        PieceType::Knight => is_knight_move(from, to),
        PieceType::Pawn => is_pawn_move(board, piece, from, to),
    }
}

fn deltas(from: ChessField, to: ChessField) -> (i8, i8) {
    (to.row as i8 - from.row as i8, to.col as i8 - from.col as i8)
}

fn is_king_move(from: ChessField, to: ChessField) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}

fn is_rook_move(board: &ChessBoard, from: ChessField, to: ChessField) -> bool {
    let (d_row, d_col) = deltas(from, to);
    (d_row == 0) != (d_col == 0) && board.is_path_clear(from, to)
}

fn is_bishop_move(board: &ChessBoard, from: ChessField, to: ChessField) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row != 0 && d_row.abs() == d_col.abs() && board.is_path_clear(from, to)
}

fn is_knight_move(from: ChessField, to: ChessField) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

fn is_pawn_move(board: &ChessBoard, pawn: &Piece, from: ChessField, to: ChessField) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let forward = pawn.color.forward();

    if d_row.abs() > 2 || d_col.abs() > 2 {
        return false;
    }

    if d_col == 0 && d_row == forward {
        return board.is_empty(to);
    }

    if d_col == 0 && d_row == 2 * forward {
        let between = ChessField::new((from.row as i8 + forward) as u8, from.col);
        return !pawn.has_moved && board.is_empty(between) && board.is_empty(to);
    }

    if d_col.abs() == 1 && d_row == forward {
        return matches!(board.get(to), Some(target) if target.color != pawn.color);
    }

    false
}

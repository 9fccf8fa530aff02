use super::Square::Occupied;
use super::{ChessBoard, ChessField, Color, Piece, PieceType, Square};
use crate::chess_boards::errors::LayoutError;

pub const INITIAL_POSITION: &str = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr w";

/// Parses a layout string into a board and the side to move.
///
/// Rows are listed from row 0 (rank 8) down to row 7 (rank 1). Pieces use
/// their display identity, digits stand for runs of empty squares. Pawns away
/// from their home row are marked as moved.
pub fn from_layout(layout: &str) -> Result<(ChessBoard, Color), LayoutError> {
    let mut board = ChessBoard::new();
    let parts: Vec<&str> = layout.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(LayoutError::WrongPartCount);
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    if rows.len() != 8 {
        return Err(LayoutError::WrongRowCount(rows.len()));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0usize;

        for c in row.chars() {
            if let Some(empty) = c.to_digit(10) {
                col_index += empty as usize;
            } else {
                let mut piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece(c))?;
                if col_index > 7 {
                    return Err(LayoutError::WrongRowLength(row_index));
                }
                if piece.kind == PieceType::Pawn && row_index != piece.color.pawn_home_row() as usize {
                    piece.has_moved = true;
                }
                board.set(ChessField::new(row_index as u8, col_index as u8), Occupied(piece));
                col_index += 1;
            }
        }
        if col_index != 8 {
            return Err(LayoutError::WrongRowLength(row_index));
        }
    }

    let active_color = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(LayoutError::InvalidSide(other.to_string())),
    };

    Ok((board, active_color))
}

pub fn to_layout(board: &ChessBoard, active_color: Color) -> String {
    let mut board_representation = String::new();

    for row in 0..8 {
        let mut empty_count = 0;

        for col in 0..8 {
            match board.squares[row][col] {
                Occupied(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                Square::Empty => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if row < 7 {
            board_representation.push('/');
        }
    }

    let active_color = if active_color == Color::White { "w" } else { "b" };
    format!("{} {}", board_representation, active_color)
}

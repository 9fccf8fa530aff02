use super::layout::from_layout;
use super::{ChessField, Move};

/// Moves generated for the piece on `square` of the given layout.
pub fn moves_from(layout: &str, square: &str) -> Vec<Move> {
    let (board, _) = from_layout(layout).unwrap();
    board.generate_moves_from_position(ChessField::from_algebraic(square).unwrap())
}

pub fn assert_moves_from(layout: &str, square: &str, expected: &[&str]) {
    let mut generated: Vec<String> = moves_from(layout, square).iter().map(Move::as_algebraic).collect();
    let mut expected: Vec<String> = expected.iter().map(|m| m.to_string()).collect();
    generated.sort();
    expected.sort();

    assert_eq!(generated, expected, "moves from {} in {}", square, layout);
}

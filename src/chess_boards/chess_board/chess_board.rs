use super::model::ALL_PIECE_TYPES;
use super::{ChessField, Color, Piece, PieceType, Square};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Plain 8x8 piece storage. Holds no turn or legality state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChessBoard {
    pub squares: [[Square; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Creates an empty chess board
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// Standard starting position, Black on rows 0-1 and White on rows 6-7.
    pub fn initial() -> Self {
        let mut board = Self::new();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Square::Occupied(Piece::new(Color::Black, *kind));
            board.squares[1][col] = Square::Occupied(Piece::new(Color::Black, PieceType::Pawn));
            board.squares[6][col] = Square::Occupied(Piece::new(Color::White, PieceType::Pawn));
            board.squares[7][col] = Square::Occupied(Piece::new(Color::White, *kind));
        }
        board
    }

    pub fn get(&self, field: ChessField) -> Option<Piece> {
        self.squares[field.row as usize][field.col as usize].piece()
    }

    pub fn square(&self, field: ChessField) -> Square {
        self.squares[field.row as usize][field.col as usize]
    }

    pub fn set(&mut self, field: ChessField, square: Square) {
        self.squares[field.row as usize][field.col as usize] = square;
    }

    pub fn clear(&mut self, field: ChessField) {
        self.set(field, Square::Empty);
    }

    pub fn is_empty(&self, field: ChessField) -> bool {
        self.square(field).is_empty()
    }

    /// Returns an iterator over all pieces on the chessboard along with their coordinates.
    pub fn pieces_with_coordinates(&self) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        ChessField::all().filter_map(move |field| self.get(field).map(|piece| (field, piece)))
    }

    /// Number of pieces of every identity, indexed `[color][kind]`.
    pub fn census(&self) -> [[u8; 6]; 2] {
        let mut counts = [[0u8; 6]; 2];
        for (_, piece) in self.pieces_with_coordinates() {
            counts[piece.color.index()][piece.kind.index()] += 1;
        }
        counts
    }

    /// True if every square strictly between `from` and `to` is empty.
    /// Only meaningful for straight or diagonal lines.
    pub fn is_path_clear(&self, from: ChessField, to: ChessField) -> bool {
        let d_row = (to.row as i8 - from.row as i8).signum();
        let d_col = (to.col as i8 - from.col as i8).signum();
        let mut current = from;
        loop {
            current = match current.offset(d_row, d_col) {
                Some(next) => next,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..8 {
            // Row 0 is rank 8, drawn at the top
            let rank = 8 - row;
            board_representation.push_str(&format!("{} │", rank));
            for col in 0..8 {
                let square = match &self.squares[row][col] {
                    Square::Empty => ' ',
                    Square::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank));

            if row < 7 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

/// Starting count of every identity, indexed `[color][kind]`.
pub fn initial_counts() -> [[u8; 6]; 2] {
    let mut counts = [[0u8; 6]; 2];
    for kind in ALL_PIECE_TYPES {
        counts[Color::White.index()][kind.index()] = kind.initial_count();
        counts[Color::Black.index()][kind.index()] = kind.initial_count();
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(label: &str) -> ChessField {
        ChessField::from_algebraic(label).unwrap()
    }

    #[test]
    fn test_initial_position() {
        let board = ChessBoard::initial();
        assert_eq!(board.get(field("e1")), Some(Piece::new(Color::White, PieceType::King)));
        assert_eq!(board.get(field("d8")), Some(Piece::new(Color::Black, PieceType::Queen)));
        assert_eq!(board.get(field("a2")), Some(Piece::new(Color::White, PieceType::Pawn)));
        assert_eq!(board.get(field("h7")), Some(Piece::new(Color::Black, PieceType::Pawn)));
        assert_eq!(board.get(field("e4")), None);
        assert_eq!(board.pieces_with_coordinates().count(), 32);
        assert_eq!(board.census(), initial_counts());
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = ChessBoard::new();
        let rook = Piece::new(Color::Black, PieceType::Rook);
        board.set(field("c3"), Square::Occupied(rook));
        assert_eq!(board.get(field("c3")), Some(rook));
        board.clear(field("c3"));
        assert!(board.is_empty(field("c3")));
        assert_eq!(board, ChessBoard::new());
    }

    #[test]
    fn test_path_clear() {
        let board = ChessBoard::initial();
        assert!(!board.is_path_clear(field("a1"), field("a8")));
        assert!(board.is_path_clear(field("a2"), field("a7")));
        assert!(board.is_path_clear(field("c3"), field("f6")));
        assert!(!board.is_path_clear(field("c1"), field("e3")));
        // adjacent squares have nothing in between
        assert!(board.is_path_clear(field("a1"), field("a2")));
    }

    #[test]
    fn test_render_initial() {
        let rendered = ChessBoard::initial().render_to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[2], "8 │ R │ N │ B │ Q │ K │ B │ N │ R │ 8");
        assert_eq!(lines[16], "1 │ r │ n │ b │ q │ k │ b │ n │ r │ 1");
    }
}

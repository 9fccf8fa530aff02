use crate::chess_boards::errors::MoveError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row offset of a single forward step for this color.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on.
    pub fn pawn_home_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::King,
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Pawn,
];

impl PieceType {
    pub fn index(&self) -> usize {
        match self {
            PieceType::King => 0,
            PieceType::Queen => 1,
            PieceType::Rook => 2,
            PieceType::Bishop => 3,
            PieceType::Knight => 4,
            PieceType::Pawn => 5,
        }
    }

    /// Number of pieces of this kind each side starts with.
    pub fn initial_count(&self) -> u8 {
        match self {
            PieceType::King | PieceType::Queen => 1,
            PieceType::Rook | PieceType::Bishop | PieceType::Knight => 2,
            PieceType::Pawn => 8,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "Pawn"),
            PieceType::Knight => write!(f, "Knight"),
            PieceType::Bishop => write!(f, "Bishop"),
            PieceType::Rook => write!(f, "Rook"),
            PieceType::Queen => write!(f, "Queen"),
            PieceType::King => write!(f, "King"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
    pub has_moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

impl Square {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Occupied(piece) => Some(*piece),
            Square::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// Board coordinate. Row 0 is rank 8 (Black's home rank), column 0 is file `a`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Move {
    pub from: ChessField,
    pub to: ChessField,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Display identity: uppercase for Black, lowercase for White.
    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.color {
            Color::Black => c.to_ascii_uppercase(),
            Color::White => c,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        Some(Piece::new(color, kind))
    }
}

impl ChessField {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Parses a label like "e2". Rank 1 maps to row 7 and rank 8 to row 0.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, MoveError> {
        let invalid = || MoveError::InvalidSquare(algebraic.to_string());
        let bytes = algebraic.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Self {
            row: 8 - (rank - b'0'),
            col: file - b'a',
        })
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }

    /// Field reached by the given offset, if it stays on the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<ChessField> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(ChessField::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 fields in row-major order.
    pub fn all() -> impl Iterator<Item = ChessField> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| ChessField::new(row, col)))
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

impl Move {
    pub fn new(from: ChessField, to: ChessField) -> Self {
        Self { from, to }
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}{}", self.from.as_algebraic(), self.to.as_algebraic())
    }

    /// Parses a four character move like "e2e4".
    pub fn from_algebraic(algebraic: &str) -> Result<Self, MoveError> {
        if algebraic.len() != 4 || !algebraic.is_ascii() {
            return Err(MoveError::InvalidSquare(algebraic.to_string()));
        }
        let from = ChessField::from_algebraic(&algebraic[0..2])?;
        let to = ChessField::from_algebraic(&algebraic[2..4])?;
        Ok(Self { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char; // Convert 0-7 column index to 'a'-'h'
    let rank = 8 - row; // Row 0 is rank 8
    format!("{}{}", file, rank)
}

use super::chess_board::layout;
use super::chess_board::{
    initial_counts, is_move_legal, ChessBoard, ChessField, Color, Move, Piece, PieceType, Square, ALL_PIECE_TYPES,
    ZOBRIST,
};
use super::errors::{LayoutError, MoveError};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Unfinished,
    WhiteWon,
    BlackWon,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unfinished => write!(f, "UNFINISHED"),
            Outcome::WhiteWon => write!(f, "WHITE_WON"),
            Outcome::BlackWon => write!(f, "BLACK_WON"),
        }
    }
}

/// Surviving pieces per identity, indexed `[color][kind]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemainingCounts {
    counts: [[u8; 6]; 2],
}

impl RemainingCounts {
    pub fn get(&self, kind: PieceType, color: Color) -> u8 {
        self.counts[color.index()][kind.index()]
    }

    fn decrement(&mut self, kind: PieceType, color: Color) {
        let count = &mut self.counts[color.index()][kind.index()];
        *count = count.saturating_sub(1);
    }

    /// True if some identity of `color` has no pieces left.
    pub fn is_exhausted(&self, color: Color) -> bool {
        self.counts[color.index()].iter().any(|&count| count == 0)
    }

    /// All twelve identities with their counts, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, u8)> + '_ {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(move |color| ALL_PIECE_TYPES.into_iter().map(move |kind| (Piece::new(color, kind), self.get(kind, color))))
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().map(|&c| c as u32).sum()
    }
}

/// A game of the "capture every piece of one kind" variant.
///
/// Moves go through [`ChessVar::apply_move`] only. A rejected move leaves the
/// game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessVar {
    board: ChessBoard,
    counts: RemainingCounts,
    active_color: Color,
    outcome: Outcome,
    hash: u64,
}

impl Default for ChessVar {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessVar {
    /// Standard starting position with White to move.
    pub fn new() -> Self {
        let board = ChessBoard::initial();
        let hash = ZOBRIST.calculate_hash(&board, Color::White);
        Self {
            board,
            counts: RemainingCounts { counts: initial_counts() },
            active_color: Color::White,
            outcome: Outcome::Unfinished,
            hash,
        }
    }

    /// Starts from an arbitrary layout. Counts are the census of the board and
    /// the outcome is decided immediately.
    pub fn from_layout(text: &str) -> Result<Self, LayoutError> {
        let (board, active_color) = layout::from_layout(text)?;
        let counts = RemainingCounts { counts: board.census() };
        let hash = ZOBRIST.calculate_hash(&board, active_color);
        let mut game = Self {
            board,
            counts,
            active_color,
            outcome: Outcome::Unfinished,
            hash,
        };
        game.outcome = game.compute_outcome();
        Ok(game)
    }

    pub fn to_layout(&self) -> String {
        layout::to_layout(&self.board, self.active_color)
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.active_color
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Unfinished
    }

    pub fn remaining_counts(&self) -> &RemainingCounts {
        &self.counts
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn render_to_string(&self) -> String {
        self.board.render_to_string()
    }

    /// Validates and plays a move given as two square labels.
    pub fn apply_move(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        let result = self.validate(from, to).map(|(mv, piece)| self.play(mv, piece));
        if let Err(err) = &result {
            debug!(from, to, %err, "move rejected");
        }
        result
    }

    /// Same as [`ChessVar::apply_move`] for an already parsed move.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply_move(&mv.from.as_algebraic(), &mv.to.as_algebraic())
    }

    /// Runs every check of a move without touching the game.
    fn validate(&self, from: &str, to: &str) -> Result<(Move, Piece), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let from = ChessField::from_algebraic(from)?;
        let to = ChessField::from_algebraic(to)?;
        let piece = self.board.get(from).ok_or(MoveError::EmptySource)?;
        if from == to {
            return Err(MoveError::NullMove);
        }
        if piece.color != self.active_color {
            return Err(MoveError::WrongColor);
        }
        if !is_move_legal(&self.board, &piece, from, to) {
            return Err(MoveError::IllegalShape);
        }
        if matches!(self.board.get(to), Some(target) if target.color == piece.color) {
            return Err(MoveError::FriendlyCapture);
        }
        Ok((Move::new(from, to), piece))
    }

    /// Applies a validated move of `piece`: capture, relocation, turn and outcome.
    fn play(&mut self, mv: Move, mut piece: Piece) {
        let zobrist = &*ZOBRIST;
        let mut hash = self.hash;
        let captured = self.board.get(mv.to);

        if let Some(target) = captured {
            self.counts.decrement(target.kind, target.color);
            hash = zobrist.update_piece(hash, target, mv.to);
        }

        hash = zobrist.update_piece(hash, piece, mv.from);
        self.board.clear(mv.from);
        // only the double step uses up a pawn's first move
        if piece.kind == PieceType::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
            piece.has_moved = true;
        }
        self.board.set(mv.to, Square::Occupied(piece));
        hash = zobrist.update_piece(hash, piece, mv.to);

        self.active_color = self.active_color.opposite();
        hash = zobrist.update_active_side(hash);
        self.hash = hash;

        self.outcome = self.compute_outcome();

        debug!(
            mv = %mv,
            piece = %piece.kind,
            color = %piece.color,
            captured = ?captured.map(|c| c.to_char()),
            "move applied"
        );
        if self.is_over() {
            info!(outcome = %self.outcome, mv = %mv, "game over");
        }
    }

    fn compute_outcome(&self) -> Outcome {
        if self.counts.is_exhausted(Color::Black) {
            Outcome::WhiteWon
        } else if self.counts.is_exhausted(Color::White) {
            Outcome::BlackWon
        } else {
            Outcome::Unfinished
        }
    }

    /// Every move `apply_move` would accept right now.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.generate_moves(self.active_color)
    }

    /// Accepted moves starting on `field`. Empty if the piece there is not on move.
    pub fn legal_moves_from(&self, field: ChessField) -> Vec<Move> {
        match self.board.get(field) {
            Some(piece) if !self.is_over() && piece.color == self.active_color => {
                self.board.generate_moves_from_position(field)
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ChessVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_layout())
    }
}

pub fn new_game() -> ChessVar {
    ChessVar::new()
}

pub fn apply_move(game: &mut ChessVar, from: &str, to: &str) -> Result<(), MoveError> {
    game.apply_move(from, to)
}

pub fn outcome(game: &ChessVar) -> Outcome {
    game.outcome()
}

pub fn turn(game: &ChessVar) -> Color {
    game.turn()
}

pub fn remaining_counts(game: &ChessVar) -> &RemainingCounts {
    game.remaining_counts()
}

use thiserror::Error;

/// Reasons a move is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    #[error("game already over")]
    GameOver,
    #[error("no piece on the source square")]
    EmptySource,
    #[error("source and destination are the same square")]
    NullMove,
    #[error("piece belongs to the side not on move")]
    WrongColor,
    #[error("piece cannot move that way")]
    IllegalShape,
    #[error("destination holds a piece of the same color")]
    FriendlyCapture,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout must have 2 parts: placement and side to move")]
    WrongPartCount,
    #[error("expected 8 rows, found {0}")]
    WrongRowCount(usize),
    #[error("row {0} does not describe exactly 8 squares")]
    WrongRowLength(usize),
    #[error("invalid piece character: {0}")]
    InvalidPiece(char),
    #[error("invalid side to move: {0}")]
    InvalidSide(String),
}

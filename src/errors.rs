use thiserror::Error;

/// Represents all possible error types that can occur in the engine core.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The provided position string is invalid or could not be parsed.
    #[error("invalid position string: {0}")]
    InvalidPosition(String),
    /// A bit scan was requested on an empty bitboard. This is a contract
    /// violation: callers must establish non-emptiness first.
    #[error("bit scan forward on an empty bitboard")]
    EmptyBitboard,
    /// Indicates an attempted access outside the playable squares of the board.
    #[error("square ({0}, {1}) is outside the playable board")]
    OutOfBounds(i8, i8),
    /// Attempted to move a piece from a square that has none.
    #[error("no piece on square ({0}, {1})")]
    EmptySquare(i8, i8),
    /// The requested move cannot be applied to the current board, e.g. a
    /// non-castling landing on a same-color piece.
    #[error("move ({0}, {1}) -> ({2}, {3}) is not applicable")]
    IllegalMove(i8, i8, i8, i8),
}

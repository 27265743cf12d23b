//! Error types for the rules engine
//!
//! Two very different failure families live here. `ChessError` covers
//! malformed input at the boundary (coordinate text, FEN text) and is fully
//! recoverable. `IllegalStateError` reports that a move would capture a
//! king, which means an earlier check went unhandled and the game state is
//! no longer trustworthy.

use crate::square::Square;
use thiserror::Error;

/// Input-validation errors raised at construction time
#[derive(Error, Debug)]
pub enum ChessError {
    /// Coordinate text that is not a file letter followed by a rank digit
    #[error("invalid coordinate '{text}': expected a file a-h followed by a rank 1-8")]
    InvalidCoordinate { text: String },

    /// FEN placement text that does not describe an 8x8 board
    #[error("invalid FEN placement: {message}")]
    InvalidFen { message: String },
}

/// Result type alias for fallible constructors
pub type ChessResult<T> = Result<T, ChessError>;

/// A move that would capture a king was validated as otherwise legal.
///
/// No reachable sequence of legal moves allows this: the side to move must
/// have been left in check on a previous turn. The error carries the
/// attempted move and a rendering of the whole board so the failure can be
/// diagnosed after the fact. Callers should treat it as fatal; the one
/// exception is check detection, which never constructs this error because
/// it reads the validation verdict directly.
#[derive(Error, Debug)]
#[error(
    "an attempt ({from} -> {to}) was made to capture a king, indicating that the game was in an illegal state:\n{board}"
)]
pub struct IllegalStateError {
    /// Square the attacking piece moved from
    pub from: Square,
    /// Square holding the king
    pub to: Square,
    /// Plain-text rendering of the board at the time of the attempt
    pub board: String,
}

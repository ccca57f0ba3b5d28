//! Error types for the shogi engine
//!
//! Only two things can go wrong at the engine boundary and both are worth
//! distinguishing from an ordinary illegal-move rejection:
//! - a caller handed in coordinates outside the 9x9 board
//! - the board lost a king, which means the state is corrupted
//!
//! Illegal move attempts (wrong turn, destination not in the legal set) are
//! not errors; `make_move` reports them as `Ok(false)` so a UI can show
//! feedback and let the player retry.

use thiserror::Error;

/// Errors that can occur in the shogi engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShogiEngineError {
    /// Square coordinates outside `[0, 9)`
    #[error("square ({row}, {col}) is outside the 9x9 board")]
    OutOfBounds { row: i8, col: i8 },

    /// No king on the board for the given player. This is an invariant
    /// violation, not a recoverable input error.
    #[error("no king found for player {color}; board state is corrupted")]
    KingNotFound { color: i8 },
}

/// Result type alias for shogi engine operations
pub type ShogiEngineResult<T> = Result<T, ShogiEngineError>;

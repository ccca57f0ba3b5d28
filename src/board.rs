//! Board utilities and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Square validation and indexing
//! - Piece queries
//! - Promotion geometry
//! - The initial layout

use crate::constants::*;
use crate::error::{ShogiEngineError, ShogiEngineResult};
use crate::types::*;

/// Convert row and column to a linear position (0-80)
#[inline]
pub fn square_to_pos(row: i8, col: i8) -> Position {
    row * BOARD_SIZE + col
}

/// Convert a linear position back to (row, col)
#[inline]
pub fn pos_to_square(pos: Position) -> Square {
    (pos / BOARD_SIZE, pos % BOARD_SIZE)
}

/// Check if square coordinates are on the board. Bounds are strict on both
/// ends; row or column 9 is never valid.
#[inline]
pub fn is_valid_square(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Get the piece at (row, col), or `OutOfBounds` for coordinates outside
/// the board. Out-of-range input is never clamped or wrapped.
pub fn piece_at(board: &Board, row: i8, col: i8) -> ShogiEngineResult<i8> {
    if !is_valid_square(row, col) {
        return Err(ShogiEngineError::OutOfBounds { row, col });
    }
    Ok(board[square_to_pos(row, col) as usize])
}

/// Unconditioned write. Only move application uses this; it assumes the
/// position has already been validated.
#[inline]
pub(crate) fn set_piece_at(board: &mut Board, pos: Position, piece: i8) {
    board[pos as usize] = piece;
}

/// Check if a piece belongs to a player (1 = Sente, -1 = Gote)
#[inline]
pub fn piece_belongs_to(piece: i8, color: Color) -> bool {
    if piece == 0 {
        false
    } else if color > 0 {
        piece > 0
    } else {
        piece < 0
    }
}

/// Get the owner of a piece (1 = Sente, -1 = Gote, 0 = empty)
#[inline]
pub fn piece_color(piece: i8) -> Color {
    piece.signum()
}

/// Unpromoted base kind of any kind identifier
#[inline]
pub fn base_kind(kind: i8) -> i8 {
    DEMOTES_TO[kind as usize]
}

/// Promoted kind for a base kind, or 0 if the kind has no promoted form
#[inline]
pub fn promoted_kind(kind: i8) -> i8 {
    PROMOTES_TO[kind as usize]
}

/// Whether the kind can still promote (Gold, King and already-promoted
/// kinds cannot)
#[inline]
pub fn is_promotable(kind: i8) -> bool {
    promoted_kind(kind) != 0
}

/// Whether a row lies inside the opponent's camp for the given player.
/// Rows 6-8 for Sente, rows 0-2 for Gote.
#[inline]
pub fn in_promotion_zone(row: i8, color: Color) -> bool {
    if color > 0 {
        row >= BOARD_SIZE - PROMOTION_ZONE_DEPTH
    } else {
        row < PROMOTION_ZONE_DEPTH
    }
}

/// Whether a move to `to_row` leaves the piece with no further legal
/// squares, which forces promotion: pawns and lances on the last rank,
/// knights on the last two ranks.
pub fn must_promote(kind: i8, to_row: i8, color: Color) -> bool {
    let last = if color > 0 { BOARD_SIZE - 1 } else { 0 };
    match kind {
        PAWN_ID | LANCE_ID => to_row == last,
        KNIGHT_ID => (to_row - last).abs() <= 1,
        _ => false,
    }
}

/// Initialize a board to the standard starting position
pub fn init_board() -> Board {
    SETUP
}

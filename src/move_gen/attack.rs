//! Attack detection and check queries
//!
//! Provides functions to check whether squares are under attack and whether
//! kings are in check. This module is the base of move legality filtering
//! and terminal-state detection.
//!
//! ## Algorithm
//!
//! A square is attacked by a player if any of that player's pieces has the
//! square in its pseudo-legal destination set. The scan visits all 81
//! squares and regenerates the attacker's moves, which is acceptable at
//! board scale and keeps a single source of truth for movement rules.

use crate::board::*;
use crate::constants::*;
use crate::error::{ShogiEngineError, ShogiEngineResult};
use crate::move_gen::generate_piece_moves;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified player.
///
/// # Arguments
///
/// * `board` - The current position
/// * `square` - Target square index (0-80)
/// * `by_color` - Owner of the attacking pieces (1 for Sente, -1 for Gote)
pub fn is_square_attacked(board: &Board, square: Position, by_color: Color) -> bool {
    for from in 0..NUM_SQUARES {
        let piece = board[from];

        if !piece_belongs_to(piece, by_color) {
            continue;
        }

        if generate_piece_moves(board, from as Position).contains(&square) {
            return true;
        }
    }

    false
}

/// Find the king position for a player.
///
/// A missing king means the board state is corrupted; this is reported as
/// `KingNotFound` rather than folded into an ordinary rejection.
pub fn find_king(board: &Board, color: Color) -> ShogiEngineResult<Position> {
    let king_piece = color * KING_ID;

    for pos in 0..NUM_SQUARES {
        if board[pos] == king_piece {
            return Ok(pos as Position);
        }
    }

    Err(ShogiEngineError::KingNotFound { color })
}

/// Check if the king of a player is in check.
pub fn is_in_check(board: &Board, color: Color) -> ShogiEngineResult<bool> {
    let king_pos = find_king(board, color)?;
    Ok(is_square_attacked(board, king_pos, -color))
}

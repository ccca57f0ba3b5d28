//! One-step and jump move generation
//!
//! Handles every fixed-offset capability: the single steps of pawns,
//! silvers, golds, kings and the promoted kinds, and the knight jump.
//!
//! ## Rules
//!
//! - A destination is valid if the target square is empty or holds an
//!   opposing piece (capture)
//! - A square holding the mover's own piece blocks that destination
//!   entirely; nothing is added
//! - Offsets are relative to the mover, so the row delta is multiplied by
//!   the player sign before stepping

use crate::board::*;
use crate::types::*;

/// Append the valid fixed-step destinations for the piece at `from`.
///
/// # Arguments
///
/// * `board` - The current position
/// * `from` - Source square index (0-80)
/// * `color` - Owner of the moving piece (1 for Sente, -1 for Gote)
/// * `deltas` - `(row_delta, col_delta)` offsets relative to the mover
/// * `moves` - Output vector to append valid destinations to
pub fn generate_step_moves(
    board: &Board,
    from: Position,
    color: Color,
    deltas: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    let (row, col) = pos_to_square(from);

    for &(dr, dc) in deltas {
        let to_row = row + dr * color;
        let to_col = col + dc;

        if !is_valid_square(to_row, to_col) {
            continue;
        }

        let to = square_to_pos(to_row, to_col);
        let dest_piece = board[to as usize];

        if dest_piece == 0 || !piece_belongs_to(dest_piece, color) {
            moves.push(to);
        }
    }
}

/// Append the valid jump destinations for the knight at `from`.
///
/// Jumps ignore intervening pieces; only the destination square is
/// inspected. The occupancy rule is the same as for steps.
pub fn generate_jump_moves(
    board: &Board,
    from: Position,
    color: Color,
    jumps: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    let (row, col) = pos_to_square(from);

    for &(dr, dc) in jumps {
        let to_row = row + dr * color;
        let to_col = col + dc;

        if !is_valid_square(to_row, to_col) {
            continue;
        }

        let to = square_to_pos(to_row, to_col);
        let dest_piece = board[to as usize];

        if dest_piece == 0 || !piece_belongs_to(dest_piece, color) {
            moves.push(to);
        }
    }
}

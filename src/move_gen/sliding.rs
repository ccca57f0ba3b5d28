//! Sliding move generation
//!
//! Common functionality for the sliding capabilities of lances, rooks,
//! bishops and their promoted forms. Sliders move any number of squares
//! along a ray until blocked.
//!
//! ## Algorithm
//!
//! Rays are walked one square at a time from the source:
//! 1. An empty square is a valid destination and the walk continues
//! 2. A square holding an opposing piece is a valid destination (capture)
//!    and the walk stops
//! 3. A square holding the mover's own piece stops the walk without adding
//!    a destination
//!
//! Walking in (row, col) space keeps the ray inside the board by
//! construction; there is no wrap-around case to guard against.

use crate::board::*;
use crate::types::*;

/// Append the valid sliding destinations for the piece at `from`.
///
/// # Arguments
///
/// * `board` - The current position
/// * `from` - Source square index (0-80)
/// * `color` - Owner of the moving piece (1 for Sente, -1 for Gote)
/// * `rays` - `(row_delta, col_delta)` ray directions relative to the mover
/// * `moves` - Output vector to append valid destinations to
pub fn generate_sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    rays: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    let (row, col) = pos_to_square(from);

    for &(dr, dc) in rays {
        let step_row = dr * color;
        let step_col = dc;

        let mut to_row = row + step_row;
        let mut to_col = col + step_col;

        while is_valid_square(to_row, to_col) {
            let to = square_to_pos(to_row, to_col);
            let dest_piece = board[to as usize];

            if dest_piece == 0 {
                moves.push(to);
            } else if !piece_belongs_to(dest_piece, color) {
                moves.push(to);
                break;
            } else {
                break;
            }

            to_row += step_row;
            to_col += step_col;
        }
    }
}

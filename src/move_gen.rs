//! Move generation
//!
//! This module produces destination sets for pieces by aggregating the
//! movement capabilities their kind possesses. A piece may have a single
//! capability (a pawn only steps forward) or several (the promoted rook
//! slides orthogonally and steps diagonally); the dispatch below reads the
//! capability tables in `constants.rs` and funnels them through two
//! mechanics, fixed steps and walked rays.
//!
//! Two layers are exposed:
//! - [`generate_piece_moves`] - pseudo-legal destinations, respecting board
//!   edges, blocking and capture rules but not king safety
//! - [`generate_legal_destinations`] - the pseudo-legal set filtered by
//!   simulating each move on a scratch copy of the board and discarding
//!   any that leave the mover's own king attacked

pub mod attack;
pub mod sliding;
pub mod steps;

pub use attack::{find_king, is_in_check, is_square_attacked};

use crate::constants::*;
use crate::error::ShogiEngineResult;
use crate::types::*;

/// Generate all pseudo-legal destinations for the piece at `from`.
///
/// An empty square yields the empty set. The owner is derived from the
/// piece's sign, so the generator works for either side regardless of
/// whose turn it is.
pub fn generate_piece_moves(board: &Board, from: Position) -> Vec<Position> {
    let piece = board[from as usize];
    if piece == 0 {
        return Vec::new();
    }

    let color = piece.signum();
    let kind = piece.abs();
    let mut moves = Vec::new();

    match kind {
        PAWN_ID => steps::generate_step_moves(board, from, color, &PAWN_STEPS, &mut moves),
        LANCE_ID => sliding::generate_sliding_moves(board, from, color, &LANCE_SLIDES, &mut moves),
        KNIGHT_ID => steps::generate_jump_moves(board, from, color, &KNIGHT_JUMPS, &mut moves),
        SILVER_ID => steps::generate_step_moves(board, from, color, &SILVER_STEPS, &mut moves),
        GOLD_ID | PROMOTED_PAWN_ID | PROMOTED_LANCE_ID | PROMOTED_KNIGHT_ID
        | PROMOTED_SILVER_ID => {
            steps::generate_step_moves(board, from, color, &GOLD_STEPS, &mut moves)
        }
        BISHOP_ID => sliding::generate_sliding_moves(board, from, color, &BISHOP_SLIDES, &mut moves),
        ROOK_ID => sliding::generate_sliding_moves(board, from, color, &ROOK_SLIDES, &mut moves),
        KING_ID => steps::generate_step_moves(board, from, color, &KING_STEPS, &mut moves),
        PROMOTED_BISHOP_ID => {
            sliding::generate_sliding_moves(board, from, color, &BISHOP_SLIDES, &mut moves);
            steps::generate_step_moves(board, from, color, &PROMOTED_BISHOP_STEPS, &mut moves);
        }
        PROMOTED_ROOK_ID => {
            sliding::generate_sliding_moves(board, from, color, &ROOK_SLIDES, &mut moves);
            steps::generate_step_moves(board, from, color, &PROMOTED_ROOK_STEPS, &mut moves);
        }
        _ => {}
    }

    // The capability grants are mutually exclusive so duplicates should be
    // impossible, but the output is a set and callers treat it as one.
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Generate the legal destinations for the piece at `from`: the
/// pseudo-legal set minus every move that would leave the mover's own king
/// under attack.
///
/// Each candidate is simulated on an independent copy of the board. The
/// live board is never mutated here, so a rejected candidate has no side
/// effects.
pub fn generate_legal_destinations(
    board: &Board,
    from: Position,
) -> ShogiEngineResult<Vec<Position>> {
    let piece = board[from as usize];
    if piece == 0 {
        return Ok(Vec::new());
    }

    let color = piece.signum();
    let mut legal = Vec::new();

    for to in generate_piece_moves(board, from) {
        // Board is Copy; this is a full scratch copy, not an alias.
        let mut scratch = *board;
        scratch[to as usize] = piece;
        scratch[from as usize] = 0;

        if !is_in_check(&scratch, color)? {
            legal.push(to);
        }
    }

    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{pos_to_square, square_to_pos};

    fn empty_board() -> Board {
        [0; NUM_SQUARES]
    }

    /// Both kings far from the action so legality filtering stays inert.
    fn board_with_kings() -> Board {
        let mut board = empty_board();
        board[square_to_pos(0, 0) as usize] = S_KING;
        board[square_to_pos(8, 8) as usize] = G_KING;
        board
    }

    fn squares(board: &Board, row: i8, col: i8) -> Vec<Square> {
        generate_piece_moves(board, square_to_pos(row, col))
            .into_iter()
            .map(pos_to_square)
            .collect()
    }

    #[test]
    fn test_empty_square_generates_no_moves() {
        let board = empty_board();
        assert!(generate_piece_moves(&board, square_to_pos(4, 4)).is_empty());
    }

    #[test]
    fn test_rook_open_board_has_16_destinations() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_ROOK;
        // Four open rays of length 4 each from the center of a 9x9 board.
        assert_eq!(squares(&board, 4, 4).len(), 16);
    }

    #[test]
    fn test_bishop_open_board_has_16_destinations() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_BISHOP;
        assert_eq!(squares(&board, 4, 4).len(), 16);
    }

    #[test]
    fn test_sente_knight_jumps() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_KNIGHT;
        let mut dests = squares(&board, 4, 4);
        dests.sort_unstable();
        assert_eq!(dests, vec![(6, 3), (6, 5)]);
    }

    #[test]
    fn test_gote_knight_jumps_toward_row_zero() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = G_KNIGHT;
        let mut dests = squares(&board, 4, 4);
        dests.sort_unstable();
        assert_eq!(dests, vec![(2, 3), (2, 5)]);
    }

    #[test]
    fn test_knight_jumps_over_intervening_pieces() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_KNIGHT;
        // Wall directly in front; the jump ignores it.
        board[square_to_pos(5, 3) as usize] = S_PAWN;
        board[square_to_pos(5, 4) as usize] = S_PAWN;
        board[square_to_pos(5, 5) as usize] = S_PAWN;
        let mut dests = squares(&board, 4, 4);
        dests.sort_unstable();
        assert_eq!(dests, vec![(6, 3), (6, 5)]);
    }

    #[test]
    fn test_pawn_steps_forward_only() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_PAWN;
        assert_eq!(squares(&board, 4, 4), vec![(5, 4)]);

        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = G_PAWN;
        assert_eq!(squares(&board, 4, 4), vec![(3, 4)]);
    }

    #[test]
    fn test_pawn_blocked_by_own_piece() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_PAWN;
        board[square_to_pos(5, 4) as usize] = S_GOLD;
        assert!(squares(&board, 4, 4).is_empty());
    }

    #[test]
    fn test_pawn_captures_opposing_piece() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_PAWN;
        board[square_to_pos(5, 4) as usize] = G_GOLD;
        assert_eq!(squares(&board, 4, 4), vec![(5, 4)]);
    }

    #[test]
    fn test_lance_slides_forward_until_blocker() {
        let mut board = empty_board();
        board[square_to_pos(2, 4) as usize] = S_LANCE;
        board[square_to_pos(6, 4) as usize] = G_PAWN;
        let dests = squares(&board, 2, 4);
        // Rows 3-5 empty, row 6 is a capture, nothing beyond.
        assert_eq!(dests, vec![(3, 4), (4, 4), (5, 4), (6, 4)]);
    }

    #[test]
    fn test_ray_stops_before_own_piece() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_ROOK;
        board[square_to_pos(4, 6) as usize] = S_PAWN;
        let dests = squares(&board, 4, 4);
        assert!(dests.contains(&(4, 5)));
        assert!(!dests.contains(&(4, 6)), "own piece is not a destination");
        assert!(!dests.contains(&(4, 7)), "ray must stop at the blocker");
    }

    #[test]
    fn test_ray_stops_after_capture() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_ROOK;
        board[square_to_pos(4, 6) as usize] = G_PAWN;
        let dests = squares(&board, 4, 4);
        assert!(dests.contains(&(4, 6)), "capture square is a destination");
        assert!(!dests.contains(&(4, 7)), "ray must stop on the capture");
    }

    #[test]
    fn test_silver_and_gold_step_patterns() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_SILVER;
        let mut dests = squares(&board, 4, 4);
        dests.sort_unstable();
        assert_eq!(dests, vec![(3, 3), (3, 5), (5, 3), (5, 4), (5, 5)]);

        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = S_GOLD;
        let mut dests = squares(&board, 4, 4);
        dests.sort_unstable();
        assert_eq!(dests, vec![(3, 4), (4, 3), (4, 5), (5, 3), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_promoted_pawn_moves_like_gold() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = COLOR_GOTE * PROMOTED_PAWN_ID;
        let mut dests = squares(&board, 4, 4);
        dests.sort_unstable();
        // Gold pattern mirrored for Gote: forward is toward row 0.
        assert_eq!(dests, vec![(3, 3), (3, 4), (3, 5), (4, 3), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_promoted_rook_gains_diagonal_steps() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = PROMOTED_ROOK_ID;
        let dests = squares(&board, 4, 4);
        assert_eq!(dests.len(), 20, "16 ray squares plus 4 diagonal steps");
        for dest in [(5, 5), (5, 3), (3, 5), (3, 3)] {
            assert!(dests.contains(&dest));
        }
    }

    #[test]
    fn test_promoted_bishop_gains_orthogonal_steps() {
        let mut board = empty_board();
        board[square_to_pos(4, 4) as usize] = PROMOTED_BISHOP_ID;
        let dests = squares(&board, 4, 4);
        assert_eq!(dests.len(), 20, "16 ray squares plus 4 orthogonal steps");
        for dest in [(5, 4), (3, 4), (4, 5), (4, 3)] {
            assert!(dests.contains(&dest));
        }
    }

    #[test]
    fn test_king_in_corner_has_three_moves() {
        let mut board = empty_board();
        board[square_to_pos(0, 0) as usize] = S_KING;
        let mut dests = squares(&board, 0, 0);
        dests.sort_unstable();
        assert_eq!(dests, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_edge_pieces_never_wrap() {
        let mut board = empty_board();
        board[square_to_pos(4, 8) as usize] = S_ROOK;
        let dests = squares(&board, 4, 8);
        // 8 horizontal + 8 vertical, none wrapping to column 0 of another row.
        assert_eq!(dests.len(), 16);
        for (row, col) in dests {
            assert!(row == 4 || col == 8, "wrapped destination ({row}, {col})");
        }
    }

    #[test]
    fn test_legal_destinations_keep_pinned_piece_on_file() {
        let mut board = board_with_kings();
        board[square_to_pos(0, 4) as usize] = S_KING;
        board[square_to_pos(0, 0) as usize] = 0;
        board[square_to_pos(1, 4) as usize] = S_SILVER;
        board[square_to_pos(5, 4) as usize] = G_ROOK;

        let legal = generate_legal_destinations(&board, square_to_pos(1, 4)).unwrap();
        let dests: Vec<Square> = legal.into_iter().map(pos_to_square).collect();
        // The silver is pinned; only the forward step keeps the file closed.
        assert_eq!(dests, vec![(2, 4)]);
    }

    #[test]
    fn test_legal_destinations_do_not_mutate_board() {
        let mut board = board_with_kings();
        board[square_to_pos(4, 4) as usize] = S_ROOK;
        let before = board;
        generate_legal_destinations(&board, square_to_pos(4, 4)).unwrap();
        assert_eq!(board, before, "simulation must run on a scratch copy");
    }
}

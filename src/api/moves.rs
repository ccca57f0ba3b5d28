//! Move generation and execution
//!
//! The host-facing half of the rules engine: legal-move queries for a
//! selected square and the single state-transition entry point
//! [`make_move`].
//!
//! Rejection semantics: a move that is merely illegal (wrong turn, or the
//! destination is not in the legal set, or an ineligible promotion request)
//! returns `Ok(false)` and leaves the game untouched, so a UI can show
//! "invalid move" feedback and retry. Only out-of-range coordinates and
//! corrupted-board invariants surface as errors.

use tracing::{debug, trace};

use crate::board::*;
use crate::error::{ShogiEngineError, ShogiEngineResult};
use crate::move_gen::generate_legal_destinations;
use crate::types::*;

use super::state::get_game_state;

/// Generate the legal destinations for the piece at (row, col).
///
/// The result is the pseudo-legal destination set filtered by the
/// self-check rule: any move that would leave the owner's king under
/// attack is removed. An empty square yields an empty set. The owner is
/// taken from the piece itself, so a host may highlight moves for either
/// side; turn ownership is enforced by [`make_move`], not here.
///
/// # Errors
///
/// `OutOfBounds` if (row, col) is outside `[0, 9)`; `KingNotFound` if the
/// owner has no king on the board.
pub fn generate_legal_moves(game: &Game, row: i8, col: i8) -> ShogiEngineResult<Vec<Square>> {
    if !is_valid_square(row, col) {
        return Err(ShogiEngineError::OutOfBounds { row, col });
    }

    let from = square_to_pos(row, col);
    let destinations = generate_legal_destinations(&game.board, from)?;
    Ok(destinations.into_iter().map(pos_to_square).collect())
}

/// Check whether moving from `start` to `end` would be accepted for the
/// current player. Does not mutate the game.
pub fn is_legal_move(game: &Game, start: Square, end: Square) -> ShogiEngineResult<bool> {
    let (start_row, start_col) = start;
    let (end_row, end_col) = end;

    if !is_valid_square(end_row, end_col) {
        return Err(ShogiEngineError::OutOfBounds {
            row: end_row,
            col: end_col,
        });
    }

    let piece = piece_at(&game.board, start_row, start_col)?;
    if !piece_belongs_to(piece, game.current_player) {
        return Ok(false);
    }

    Ok(generate_legal_moves(game, start_row, start_col)?.contains(&end))
}

/// Apply a move for the current player.
///
/// Validates turn ownership and membership in the legal-move set, records
/// any capture into the mover's pool (unsigned, de-promoted), applies
/// optional or forced promotion, flips the turn and recomputes the status
/// for the new side to move.
///
/// # Arguments
///
/// * `game` - The game state
/// * `start` - Source square (row, col)
/// * `end` - Destination square (row, col)
/// * `promote` - Caller-supplied promotion intent. Requesting promotion
///   outside the eligibility rules rejects the move; promotion happens
///   regardless of this flag when the piece would otherwise have no
///   further legal squares.
///
/// # Returns
///
/// `Ok(true)` if the move was applied, `Ok(false)` for a rejected move
/// (game unchanged).
///
/// # Errors
///
/// `OutOfBounds` for coordinates outside the board, `KingNotFound` if a
/// king is missing during check computation.
pub fn make_move(
    game: &mut Game,
    start: Square,
    end: Square,
    promote: bool,
) -> ShogiEngineResult<bool> {
    let (start_row, start_col) = start;
    let (end_row, end_col) = end;

    if !is_valid_square(end_row, end_col) {
        return Err(ShogiEngineError::OutOfBounds {
            row: end_row,
            col: end_col,
        });
    }

    let piece = piece_at(&game.board, start_row, start_col)?;
    let color = game.current_player;

    if !piece_belongs_to(piece, color) {
        trace!(?start, ?end, "rejected move: piece is not the current player's");
        return Ok(false);
    }

    if !generate_legal_moves(game, start_row, start_col)?.contains(&end) {
        trace!(?start, ?end, "rejected move: destination not in legal set");
        return Ok(false);
    }

    let kind = piece.abs();
    let eligible = is_promotable(kind)
        && (in_promotion_zone(start_row, color) || in_promotion_zone(end_row, color));
    let forced = must_promote(kind, end_row, color);

    if promote && !eligible {
        trace!(?start, ?end, "rejected move: promotion not available here");
        return Ok(false);
    }

    let from = square_to_pos(start_row, start_col);
    let to = square_to_pos(end_row, end_col);

    let captured = game.board[to as usize];
    if captured != 0 {
        let pooled = base_kind(captured.abs());
        if color > 0 {
            game.sente_captured.push(pooled);
        } else {
            game.gote_captured.push(pooled);
        }
        debug!(?end, piece = captured, pooled, "capture");
    }

    let placed = if (promote && eligible) || forced {
        debug!(?start, ?end, kind, "promotion");
        color * promoted_kind(kind)
    } else {
        piece
    };

    set_piece_at(&mut game.board, to, placed);
    set_piece_at(&mut game.board, from, 0);
    game.move_counter += 1;
    game.current_player = -color;
    game.state = get_game_state(game, game.current_player)?;

    debug!(
        ?start,
        ?end,
        player = color,
        state = game.state,
        "move applied"
    );

    Ok(true)
}

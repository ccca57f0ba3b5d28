//! Game state queries
//!
//! Functions for querying check, checkmate and overall game status.

use tracing::debug;

use crate::board::piece_belongs_to;
use crate::constants::*;
use crate::error::ShogiEngineResult;
use crate::move_gen::{generate_legal_destinations, is_in_check};
use crate::types::*;

/// Get the status code for a player: playing, check, checkmate, or
/// stalemate (no legal moves while not in check; reported for
/// completeness, not a terminal condition here).
pub fn get_game_state(game: &Game, color: Color) -> ShogiEngineResult<i32> {
    let in_check = is_in_check(&game.board, color)?;
    let has_legal_moves = has_any_legal_move(game, color)?;

    let state = if !has_legal_moves {
        if in_check {
            STATE_CHECKMATE
        } else {
            STATE_STALEMATE
        }
    } else if in_check {
        STATE_CHECK
    } else {
        STATE_PLAYING
    };

    if state == STATE_CHECKMATE {
        debug!(player = color, "checkmate");
    }

    Ok(state)
}

/// True iff the player is in check and no legal move exists for any of
/// their pieces.
pub fn is_checkmate(game: &Game, color: Color) -> ShogiEngineResult<bool> {
    Ok(is_in_check(&game.board, color)? && !has_any_legal_move(game, color)?)
}

/// True iff either side is checkmated.
pub fn is_game_over(game: &Game) -> ShogiEngineResult<bool> {
    Ok(is_checkmate(game, COLOR_SENTE)? || is_checkmate(game, COLOR_GOTE)?)
}

/// Plain-data snapshot of the game for rendering or persistence.
pub fn snapshot(game: &Game) -> GameSnapshot {
    GameSnapshot::from(game)
}

fn has_any_legal_move(game: &Game, color: Color) -> ShogiEngineResult<bool> {
    for pos in 0..NUM_SQUARES {
        if !piece_belongs_to(game.board[pos], color) {
            continue;
        }
        if !generate_legal_destinations(&game.board, pos as Position)?.is_empty() {
            return Ok(true);
        }
    }

    Ok(false)
}

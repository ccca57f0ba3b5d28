//! Game lifecycle management and read access
//!
//! Functions for creating and resetting games, plus the read-only queries a
//! rendering host needs.

use crate::board::{init_board, piece_at};
use crate::constants::{COLOR_SENTE, STATE_PLAYING};
use crate::error::ShogiEngineResult;
use crate::types::*;

/// Create a new game with the standard initial position, Sente to move.
pub fn new_game() -> Game {
    Game {
        board: init_board(),
        sente_captured: Vec::new(),
        gote_captured: Vec::new(),
        current_player: COLOR_SENTE,
        state: STATE_PLAYING,
        move_counter: 0,
    }
}

/// Reset an existing game to the starting position.
pub fn reset_game(game: &mut Game) {
    game.board = init_board();
    game.sente_captured.clear();
    game.gote_captured.clear();
    game.current_player = COLOR_SENTE;
    game.state = STATE_PLAYING;
    game.move_counter = 0;
}

/// Read-only view of the grid for rendering.
#[inline]
pub fn get_board(game: &Game) -> &Board {
    &game.board
}

/// Get the piece code at (row, col), or `OutOfBounds` for coordinates
/// outside the board.
#[inline]
pub fn get_piece_at(game: &Game, row: i8, col: i8) -> ShogiEngineResult<i8> {
    piece_at(&game.board, row, col)
}

/// The player to move (1 = Sente, -1 = Gote).
#[inline]
pub fn current_player(game: &Game) -> Color {
    game.current_player
}

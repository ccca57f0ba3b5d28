//! Public API for the shogi engine
//!
//! Provides the narrow synchronous call surface a presentation host uses.
//! All functions validate their input; illegal move attempts are rejected
//! without mutating state and without raising.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle and read access (new_game, reset_game, get_board)
//! - `moves` - Move generation and execution (generate_legal_moves, make_move)
//! - `state` - Status queries (get_game_state, is_checkmate, is_game_over)

mod game;
mod moves;
mod state;

pub use game::{current_player, get_board, get_piece_at, new_game, reset_game};
pub use moves::{generate_legal_moves, is_legal_move, make_move};
pub use state::{get_game_state, is_checkmate, is_game_over, snapshot};

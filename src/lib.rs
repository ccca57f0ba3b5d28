//! A rules engine for Shogi (Japanese chess).
//!
//! The crate tracks board state, enumerates legal moves per piece, applies
//! moves (captures, promotion, turn switching) and determines terminal game
//! conditions (check, checkmate, game over). Rendering, input handling and
//! process wiring are left to a host, which only reads state and forwards
//! selected source/destination squares.
//!
//! # Layers
//!
//! - [`board`] - the 9x9 grid of signed piece codes and its invariants
//! - [`move_gen`] - pseudo-legal generation per movement capability, the
//!   self-check filter, and attack/check detection
//! - [`api`] - the host-facing surface: lifecycle, move application and
//!   status queries
//!
//! # Example
//!
//! ```
//! use shogi_engine::{generate_legal_moves, is_game_over, make_move, new_game};
//!
//! let mut game = new_game();
//!
//! // Highlight destinations for the pawn on (2, 2), then play one.
//! let moves = generate_legal_moves(&game, 2, 2).unwrap();
//! assert!(moves.contains(&(3, 2)));
//! assert_eq!(make_move(&mut game, (2, 2), (3, 2), false), Ok(true));
//!
//! // Gote to move now; an out-of-turn request is rejected silently.
//! assert_eq!(make_move(&mut game, (3, 2), (4, 2), false), Ok(false));
//! assert_eq!(is_game_over(&game), Ok(false));
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod types;

pub use api::{
    current_player, generate_legal_moves, get_board, get_piece_at, get_game_state, is_checkmate,
    is_game_over, is_legal_move, make_move, new_game, reset_game, snapshot,
};
pub use error::{ShogiEngineError, ShogiEngineResult};
pub use types::{Board, Color, Game, GameSnapshot, Position, Square};

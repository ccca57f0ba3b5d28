//! # Shogi Engine Core Types
//!
//! ## Overview
//!
//! This module defines the data structures the rules engine operates on. The
//! design keeps the board as a flat signed array so that piece ownership,
//! kind and emptiness all fall out of a single `i8` per square.
//!
//! ## The `Game` Structure
//!
//! `Game` is the complete state of one Shogi session:
//! 1. **Current position** (`board: [i8; 81]`) - piece placement
//! 2. **Captured pools** (`sente_captured` / `gote_captured`) - pieces taken
//!    by each side, stored unsigned and de-promoted
//! 3. **Turn** (`current_player`) - +1 for Sente, -1 for Gote
//! 4. **Status** (`state`) - one of the `STATE_*` codes, recomputed for the
//!    side to move after every applied move
//!
//! One `Game` instance is exclusively owned by one logical game loop. Hosting
//! several simultaneous games means one independent `Game` per session; the
//! engine never shares mutable board state between instances.
//!
//! ## Why i8 for Board Representation?
//!
//! - **Sign bit = owner**: `piece < 0` is Gote, `piece > 0` is Sente
//! - **Absolute value = kind**: `piece.abs()` gives the piece identifier
//! - **Copy semantics**: `[i8; 81]` is `Copy`, so the self-check filter can
//!   simulate a move on an independent scratch copy with a plain assignment
//!   and never touch the live board

use crate::constants::*;

/// Linear square index, `row * 9 + col`, in `0..81`.
pub type Position = i8;
/// Player sign: +1 Sente, -1 Gote. Zero only as the "color" of an empty square.
pub type Color = i8;
/// `(row, col)` pair, each in `0..9`. Row 0 is Sente's back rank.
pub type Square = (i8, i8);
/// Flat 9x9 grid of signed piece codes.
pub type Board = [i8; NUM_SQUARES];

/// Central game state for one Shogi session.
#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    /// Pieces Sente has captured, unsigned and de-promoted.
    pub sente_captured: Vec<i8>,
    /// Pieces Gote has captured, unsigned and de-promoted.
    pub gote_captured: Vec<i8>,
    pub current_player: Color,
    /// `STATE_*` code for the side to move.
    pub state: i32,
    pub move_counter: i32,
}

/// Read-only view of a game for rendering or persistence by a host.
///
/// The board is flattened to a `Vec` so the snapshot stays plain data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board: Vec<i8>,
    pub sente_captured: Vec<i8>,
    pub gote_captured: Vec<i8>,
    pub current_player: i8,
    pub state: i32,
    pub move_counter: i32,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        GameSnapshot {
            board: game.board.to_vec(),
            sente_captured: game.sente_captured.clone(),
            gote_captured: game.gote_captured.clone(),
            current_player: game.current_player,
            state: game.state,
            move_counter: game.move_counter,
        }
    }
}

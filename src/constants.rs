//! # Shogi Engine Constants - Piece Codes & Movement Capability Tables
//!
//! ## Overview
//!
//! This module centralizes the constant data the rules engine is built on:
//! piece identifiers, the promotion mapping, the initial board setup, and the
//! movement capability tables that drive move generation.
//!
//! ## Signed Piece Encoding
//!
//! The board stores **signed 8-bit integers** where:
//! - Positive values (1-14) represent Sente (the player moving "up" the board)
//! - Negative values (-1 to -14) represent Gote
//! - Zero represents empty squares
//!
//! This encoding allows several simplifications:
//! - **Sign = owner**: `piece > 0` is Sente, `piece < 0` is Gote
//! - **Absolute value = kind**: `piece.abs()` gives the piece identifier
//! - **Compact storage**: the whole 9x9 board is 81 bytes
//!
//! Promoted pieces get their own identifiers (9-14) rather than a separate
//! flag, so a single magnitude lookup answers both "what kind" and "is it
//! promoted". `PROMOTES_TO` and `DEMOTES_TO` map between the base and
//! promoted forms; Gold and King have no promoted form.
//!
//! ## Capability Tables
//!
//! Shogi movement decomposes into orthogonal capabilities: fixed one-step
//! destinations, unbounded sliding rays, and the knight jump. Each table
//! below is a list of `(row_delta, col_delta)` offsets with the row delta
//! expressed **relative to the moving player** (+1 is "forward"). Move
//! generation multiplies the row delta by the player sign, so the same
//! tables serve both sides. For example a Gote pawn with `PAWN_STEPS`
//! `(1, 0)` moves toward row 0 because its sign is -1.
//!
//! Promoted pawn, lance, knight and silver all move like Gold and share
//! `GOLD_STEPS`. The promoted rook and bishop keep their sliding rays and
//! gain four one-step moves covering the directions their rays miss.

pub const VOID_ID: i8 = 0;
pub const PAWN_ID: i8 = 1;
pub const LANCE_ID: i8 = 2;
pub const KNIGHT_ID: i8 = 3;
pub const SILVER_ID: i8 = 4;
pub const GOLD_ID: i8 = 5;
pub const BISHOP_ID: i8 = 6;
pub const ROOK_ID: i8 = 7;
pub const KING_ID: i8 = 8;
pub const PROMOTED_PAWN_ID: i8 = 9;
pub const PROMOTED_LANCE_ID: i8 = 10;
pub const PROMOTED_KNIGHT_ID: i8 = 11;
pub const PROMOTED_SILVER_ID: i8 = 12;
pub const PROMOTED_BISHOP_ID: i8 = 13;
pub const PROMOTED_ROOK_ID: i8 = 14;

pub const S_PAWN: i8 = PAWN_ID;
pub const S_LANCE: i8 = LANCE_ID;
pub const S_KNIGHT: i8 = KNIGHT_ID;
pub const S_SILVER: i8 = SILVER_ID;
pub const S_GOLD: i8 = GOLD_ID;
pub const S_BISHOP: i8 = BISHOP_ID;
pub const S_ROOK: i8 = ROOK_ID;
pub const S_KING: i8 = KING_ID;

pub const G_PAWN: i8 = -PAWN_ID;
pub const G_LANCE: i8 = -LANCE_ID;
pub const G_KNIGHT: i8 = -KNIGHT_ID;
pub const G_SILVER: i8 = -SILVER_ID;
pub const G_GOLD: i8 = -GOLD_ID;
pub const G_BISHOP: i8 = -BISHOP_ID;
pub const G_ROOK: i8 = -ROOK_ID;
pub const G_KING: i8 = -KING_ID;

pub const COLOR_SENTE: i8 = 1;
pub const COLOR_GOTE: i8 = -1;

pub const BOARD_SIZE: i8 = 9;
pub const NUM_SQUARES: usize = 81;

/// Depth of the promotion zone on each side of the board.
/// Rows 6-8 for Sente, rows 0-2 for Gote.
pub const PROMOTION_ZONE_DEPTH: i8 = 3;

/// Base kind to promoted kind. Zero marks kinds with no promoted form
/// (Gold, King) and kinds that are already promoted.
pub const PROMOTES_TO: [i8; 15] = [
    0,                  // empty
    PROMOTED_PAWN_ID,   // pawn
    PROMOTED_LANCE_ID,  // lance
    PROMOTED_KNIGHT_ID, // knight
    PROMOTED_SILVER_ID, // silver
    0,                  // gold
    PROMOTED_BISHOP_ID, // bishop
    PROMOTED_ROOK_ID,   // rook
    0,                  // king
    0, 0, 0, 0, 0, 0,   // promoted kinds
];

/// Any kind back to its unpromoted base kind. Captured pieces are pooled
/// in this form.
pub const DEMOTES_TO: [i8; 15] = [
    VOID_ID,
    PAWN_ID,
    LANCE_ID,
    KNIGHT_ID,
    SILVER_ID,
    GOLD_ID,
    BISHOP_ID,
    ROOK_ID,
    KING_ID,
    PAWN_ID,   // promoted pawn
    LANCE_ID,  // promoted lance
    KNIGHT_ID, // promoted knight
    SILVER_ID, // promoted silver
    BISHOP_ID, // promoted bishop
    ROOK_ID,   // promoted rook
];

// One-step capability tables, (row_delta, col_delta) relative to the mover.

pub const PAWN_STEPS: [(i8, i8); 1] = [(1, 0)];

pub const SILVER_STEPS: [(i8, i8); 5] = [(1, -1), (1, 0), (1, 1), (-1, -1), (-1, 1)];

pub const GOLD_STEPS: [(i8, i8); 6] = [(1, -1), (1, 0), (1, 1), (0, -1), (0, 1), (-1, 0)];

pub const KING_STEPS: [(i8, i8); 8] = [
    (1, -1), (1, 0), (1, 1),
    (0, -1), (0, 1),
    (-1, -1), (-1, 0), (-1, 1),
];

/// The knight jump ignores intervening pieces. Shogi knights only jump
/// forward, never sideways or back.
pub const KNIGHT_JUMPS: [(i8, i8); 2] = [(2, -1), (2, 1)];

/// One-step diagonals gained by the promoted rook on top of its rays.
pub const PROMOTED_ROOK_STEPS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// One-step orthogonals gained by the promoted bishop on top of its rays.
pub const PROMOTED_BISHOP_STEPS: [(i8, i8); 4] = [(1, 0), (0, -1), (0, 1), (-1, 0)];

// Sliding capability tables. Rays are walked square by square until blocked.

pub const LANCE_SLIDES: [(i8, i8); 1] = [(1, 0)];

pub const ROOK_SLIDES: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

pub const BISHOP_SLIDES: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Standard starting position. Row 0 is Sente's back rank; Gote's half is
/// the point reflection (negated sign, reflected row and column), so the
/// two camps are 180-degree rotations of each other.
pub const SETUP: [i8; 81] = [
    S_LANCE, S_KNIGHT, S_SILVER, S_GOLD, S_KING, S_GOLD, S_SILVER, S_KNIGHT, S_LANCE,
    0, S_BISHOP, 0, 0, 0, 0, 0, S_ROOK, 0,
    S_PAWN, S_PAWN, S_PAWN, S_PAWN, S_PAWN, S_PAWN, S_PAWN, S_PAWN, S_PAWN,
    0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0,
    G_PAWN, G_PAWN, G_PAWN, G_PAWN, G_PAWN, G_PAWN, G_PAWN, G_PAWN, G_PAWN,
    0, G_ROOK, 0, 0, 0, 0, 0, G_BISHOP, 0,
    G_LANCE, G_KNIGHT, G_SILVER, G_GOLD, G_KING, G_GOLD, G_SILVER, G_KNIGHT, G_LANCE,
];

pub const STATE_PLAYING: i32 = 0;
pub const STATE_CHECK: i32 = 1;
pub const STATE_STALEMATE: i32 = 2;
pub const STATE_CHECKMATE: i32 = 3;

/// Stable kind-to-glyph mapping for hosts that render piece identity.
pub const KIND_STR: [&str; 15] = [
    "", "P", "L", "N", "S", "G", "B", "R", "K",
    "+P", "+L", "+N", "+S", "+B", "+R",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_glyphs() {
        assert_eq!(KIND_STR[VOID_ID as usize], "");
        assert_eq!(KIND_STR[PAWN_ID as usize], "P");
        assert_eq!(KIND_STR[LANCE_ID as usize], "L");
        assert_eq!(KIND_STR[KNIGHT_ID as usize], "N");
        assert_eq!(KIND_STR[SILVER_ID as usize], "S");
        assert_eq!(KIND_STR[GOLD_ID as usize], "G");
        assert_eq!(KIND_STR[BISHOP_ID as usize], "B");
        assert_eq!(KIND_STR[ROOK_ID as usize], "R");
        assert_eq!(KIND_STR[KING_ID as usize], "K");
    }

    #[test]
    fn test_promoted_glyphs_prefix_their_base_kind() {
        for kind in PROMOTED_PAWN_ID..=PROMOTED_ROOK_ID {
            let glyph = KIND_STR[kind as usize];
            let base = KIND_STR[DEMOTES_TO[kind as usize] as usize];
            assert!(
                glyph.starts_with('+'),
                "promoted kind {kind} glyph {glyph:?} lacks the '+' prefix"
            );
            assert_eq!(&glyph[1..], base, "glyph for kind {kind} does not match its base");
        }
    }
}

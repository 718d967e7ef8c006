//! # Evaluation Values & Search Parameters
//!
//! Scores are in **centipawns** (1/100th of a pawn), always from white's point
//! of view in the evaluator and from the side to move's point of view inside
//! the negamax search.
//!
//! ## Material
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 0, a lost king is scored as mate instead
//!
//! The small bishop premium nudges the AI to keep the bishop pair in even
//! trades.
//!
//! ## Mate Scores
//!
//! A mate found `n` plies from the root scores `MATE_SCORE - n`, so shorter
//! mates are preferred and any mate outranks any material balance.

use crate::types::PieceType;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

/// Score of a side delivering mate at the root
pub const MATE_SCORE: i32 = 100_000;

/// Bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Scores above this are mates, not material
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Material value of a piece type
#[inline]
pub fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => PAWN_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Queen => QUEEN_VALUE,
        PieceType::King => 0,
    }
}

/// Is `score` a forced mate for either side?
#[inline]
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

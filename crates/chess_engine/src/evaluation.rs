//! Position evaluation
//!
//! Static evaluation used at the leaves of the AI search:
//!
//! - Material count ([`material`])
//! - Positional bonuses from piece-square tables ([`position`])
//!
//! Scores are in centipawns from white's perspective; positive favours white.
//! Use [`evaluate_for`] to get the score from one side's perspective.

pub mod material;
pub mod position;

use crate::board::Board;
use crate::types::Color;

pub use material::evaluate_material;
pub use position::evaluate_placement;

/// Full static evaluation from white's perspective
pub fn evaluate(board: &Board) -> i32 {
    evaluate_material(board) + evaluate_placement(board)
}

/// Static evaluation from `color`'s perspective
#[inline]
pub fn evaluate_for(board: &Board, color: Color) -> i32 {
    match color {
        Color::White => evaluate(board),
        Color::Black => -evaluate(board),
    }
}

//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Board;
use crate::constants::piece_value;
use crate::types::Color;

/// Evaluate material balance, white minus black
pub fn evaluate_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = piece_value(piece.piece_type);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

//! Diagonal movement
//!
//! The bishop's archetype, also half of the queen's.
//!
//! ## Diagonal Movement Rules
//!
//! - Moves along a diagonal: equal distance on both axes
//! - Cannot jump over pieces
//! - Lands on an empty square or captures an opposing piece

use super::sliding::is_path_clear;
use crate::board::Board;
use crate::location::BoardLocation;

/// Check the diagonal geometry and path from `from` to `to`
pub fn is_valid_diagonal_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    let (dx, dy) = from.delta(to);

    if dx.abs() != dy.abs() {
        return false;
    }

    is_path_clear(board, from, to)
}

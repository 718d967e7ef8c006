//! King movement
//!
//! ## King Movement Rules
//!
//! - One square in any of the 8 directions
//! - Castling is not part of this rule; the two-square king move is recognised
//!   by [`super::castling`] because it depends on move history and attacks

use crate::location::BoardLocation;

/// King moves one square in any direction
pub fn is_valid_king_move(from: BoardLocation, to: BoardLocation) -> bool {
    let (dx, dy) = from.delta(to);
    dx.abs() <= 1 && dy.abs() <= 1
}

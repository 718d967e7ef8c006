//! Knight movement
//!
//! ## Knight Movement Rules
//!
//! - Two squares along one axis and one along the other
//! - Jumps: intervening squares are never checked
//! - 8 possible destinations from most squares (fewer near edges)

use crate::location::BoardLocation;

pub fn is_valid_knight_move(from: BoardLocation, to: BoardLocation) -> bool {
    let (dx, dy) = from.delta(to);
    let (dx, dy) = (dx.abs(), dy.abs());
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

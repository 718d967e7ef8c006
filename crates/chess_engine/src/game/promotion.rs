//! Pending pawn promotion
//!
//! When a human-controlled pawn reaches the far rank without a promotion
//! choice, the game stores a [`PendingPromotion`] and pauses the turn
//! transition. No other move is accepted until
//! [`crate::game::Game::resolve_promotion`] supplies the new piece type.

use crate::location::BoardLocation;
use crate::types::{Color, PieceTag, PieceType, PROMOTION_TYPES};

/// A pawn waiting for its owner to pick a promotion piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    /// Square the pawn landed on
    pub location: BoardLocation,
    pub color: Color,
    /// Tag of the pawn; the promoted piece keeps it
    pub tag: PieceTag,
    /// Types the player may choose from
    pub options: [PieceType; 4],
}

impl PendingPromotion {
    pub fn new(location: BoardLocation, color: Color, tag: PieceTag) -> Self {
        Self {
            location,
            color,
            tag,
            options: PROMOTION_TYPES,
        }
    }

    #[inline]
    pub fn allows(&self, piece_type: PieceType) -> bool {
        self.options.contains(&piece_type)
    }
}

/// Check if a pawn move results in promotion
pub fn is_promotion_move(piece_type: PieceType, color: Color, target_rank: u8) -> bool {
    piece_type == PieceType::Pawn && target_rank == color.promotion_rank()
}

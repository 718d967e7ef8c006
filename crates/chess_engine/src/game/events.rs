//! Notifications queued for external collaborators
//!
//! The game never calls out to a renderer. Each applied move appends its
//! notifications to a queue that the embedding drains with
//! [`crate::game::Game::drain_events`], in this order:
//!
//! ```text
//! BeginUpdate
//!   { PieceAdded | PieceMoved | PieceRemoved | PieceTransformed }*
//! EndUpdate
//! TurnChanged | Won | Stalemate
//! ```
//!
//! When a human promotion is pending, `PromotionRequested` follows `EndUpdate`
//! and the closing notification waits until the choice is resolved.

use super::promotion::PendingPromotion;
use crate::location::BoardLocation;
use crate::types::{Color, Piece, PieceTag, PieceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BeginUpdate,
    PieceAdded {
        tag: PieceTag,
        piece: Piece,
        location: BoardLocation,
    },
    PieceMoved {
        tag: PieceTag,
        from: BoardLocation,
        to: BoardLocation,
    },
    PieceRemoved {
        tag: PieceTag,
        location: BoardLocation,
    },
    /// Promotion changed a piece's type; its tag is unchanged
    PieceTransformed {
        tag: PieceTag,
        location: BoardLocation,
        piece_type: PieceType,
    },
    EndUpdate,
    TurnChanged {
        color: Color,
    },
    Won {
        winner: Color,
    },
    Stalemate,
    PromotionRequested(PendingPromotion),
}

//! Move history
//!
//! An append-only log of completed moves, owned by the game.

use crate::location::BoardLocation;
use crate::types::{Color, Move, PieceType};

/// One completed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub piece_type: PieceType,
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub captured: Option<PieceType>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub promotion: Option<PieceType>,
    /// The move left the opponent in check (or mated)
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl MoveRecord {
    /// The move as it would be submitted again
    pub fn as_move(&self) -> Move {
        match self.promotion {
            Some(piece_type) => Move::with_promotion(self.from, self.to, piece_type),
            None => Move::new(self.from, self.to),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }

    /// Number of captures made by `color`
    pub fn captures_by(&self, color: Color) -> usize {
        self.moves
            .iter()
            .filter(|record| record.color == color && record.captured.is_some())
            .count()
    }
}

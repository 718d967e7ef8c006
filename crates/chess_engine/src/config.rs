//! AI player configuration
//!
//! Controls how deep the AI searches and which piece its pawns promote to.
//!
//! # Difficulty Levels
//!
//! Difficulty is a shorthand for search depth:
//!
//! | Difficulty | Depth | Strength          |
//! |------------|-------|-------------------|
//! | Easy       | 2 ply | Sees direct trades |
//! | Medium     | 3 ply | Default           |
//! | Hard       | 4 ply | Short combinations |
//!
//! Depth is a fixed ply count; the search does not deepen iteratively, so
//! response time grows exponentially with it.
//!
//! # Examples
//!
//! ```rust,ignore
//! let config = AiConfig::from_difficulty(AiDifficulty::Hard);
//! let ai = AiPlayer::new(Color::Black, config);
//! ```

use crate::types::PieceType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEPTH: u8 = 3;

/// Search and promotion settings for one AI player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Plies searched below the root; values below 1 are treated as 1
    pub depth: u8,
    /// Piece the AI's pawns become on the far rank
    pub promotion: PieceType,
}

impl Default for AiConfig {
    /// Depth 3, promoting to a queen
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            promotion: PieceType::Queen,
        }
    }
}

impl AiConfig {
    pub fn from_difficulty(difficulty: AiDifficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_promotion(mut self, promotion: PieceType) -> Self {
        self.promotion = promotion;
        self
    }

    /// Depth actually searched
    #[inline]
    pub fn effective_depth(&self) -> u8 {
        self.depth.max(1)
    }

    /// Promotion type actually used; pawn or king fall back to queen
    pub fn effective_promotion(&self) -> PieceType {
        if self.promotion.is_promotion_target() {
            self.promotion
        } else {
            PieceType::Queen
        }
    }
}

/// AI strength presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl AiDifficulty {
    /// Search depth in plies for this difficulty
    pub fn depth(self) -> u8 {
        match self {
            AiDifficulty::Easy => 2,
            AiDifficulty::Medium => 3,
            AiDifficulty::Hard => 4,
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            AiDifficulty::Easy => "Easy (2 ply)",
            AiDifficulty::Medium => "Medium (3 ply)",
            AiDifficulty::Hard => "Hard (4 ply)",
        }
    }
}

//! Game state classification

use crate::types::Color;
use std::fmt;

/// Where the game stands after the last completed move
///
/// `Check` and `Checkmate` carry the color whose king is attacked.
/// `Checkmate` and `Stalemate` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Normal,
    Check(Color),
    Checkmate(Color),
    Stalemate,
}

impl GameState {
    /// Checkmate or stalemate
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Checkmate(_) | GameState::Stalemate)
    }

    /// Is `color`'s king attacked in this state?
    pub fn is_check_for(self, color: Color) -> bool {
        matches!(self, GameState::Check(c) | GameState::Checkmate(c) if c == color)
    }

    /// Winner of a finished game, `None` for stalemate or an ongoing game
    pub fn winner(self) -> Option<Color> {
        match self {
            GameState::Checkmate(loser) => Some(!loser),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Normal => write!(f, "in progress"),
            GameState::Check(color) => write!(f, "{} is in check", color.name()),
            GameState::Checkmate(color) => write!(f, "{} is checkmated", color.name()),
            GameState::Stalemate => write!(f, "stalemate"),
        }
    }
}

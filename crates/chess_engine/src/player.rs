//! Players
//!
//! A closed set of player kinds. Neither kind holds a reference to the game:
//! every entry point takes the [`Game`] explicitly and funnels into
//! [`Game::make_move_with`], so human and AI moves pass the same validation.

mod ai;

pub use ai::AiPlayer;

use crate::error::{ChessEngineResult, PromotionError};
use crate::game::{Game, GameState, MoveOutcome};
use crate::location::BoardLocation;
use crate::types::{Color, Move, PieceType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Player {
    Human(Human),
    Ai(AiPlayer),
}

impl Player {
    pub fn color(&self) -> Color {
        match self {
            Player::Human(human) => human.color(),
            Player::Ai(ai) => ai.color(),
        }
    }

    #[inline]
    pub fn is_ai(&self) -> bool {
        matches!(self, Player::Ai(_))
    }

    /// Shorthand for a human seat
    pub fn human(color: Color) -> Self {
        Player::Human(Human::new(color))
    }

    /// Shorthand for an AI seat with default configuration
    pub fn ai(color: Color) -> Self {
        Player::Ai(AiPlayer::new(color, Default::default()))
    }
}

/// A player whose moves come from outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Human {
    color: Color,
}

impl Human {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Submit a move intent; the game's rejection reason is returned unchanged
    pub fn move_piece(
        &self,
        game: &mut Game,
        from: BoardLocation,
        to: BoardLocation,
    ) -> ChessEngineResult<MoveOutcome> {
        game.make_move(self.color, from, to)
    }

    /// Submit a move intent given as raw `(x, y)` board coordinates
    ///
    /// # Errors
    ///
    /// `InvalidCoordinate` when either pair lies off the board, before any
    /// rule is consulted; otherwise as [`Human::move_piece`].
    pub fn move_coordinates(
        &self,
        game: &mut Game,
        from: (i32, i32),
        to: (i32, i32),
    ) -> ChessEngineResult<MoveOutcome> {
        let from = BoardLocation::try_from(from)?;
        let to = BoardLocation::try_from(to)?;
        self.move_piece(game, from, to)
    }

    /// Submit a move with its promotion choice up front
    pub fn play(&self, game: &mut Game, mv: Move) -> ChessEngineResult<MoveOutcome> {
        game.make_move_with(self.color, mv)
    }

    /// Does this player have a piece on `location`?
    pub fn occupies_square(&self, game: &Game, location: BoardLocation) -> bool {
        game.board().color_at(location) == Some(self.color)
    }

    /// Answer this player's pending promotion
    ///
    /// # Errors
    ///
    /// `NoPromotionPending` when no promotion of this player's color waits.
    pub fn choose_promotion(
        &self,
        game: &mut Game,
        piece_type: PieceType,
    ) -> Result<GameState, PromotionError> {
        match game.pending_promotion() {
            Some(pending) if pending.color == self.color => game.resolve_promotion(piece_type),
            _ => Err(PromotionError::NoPromotionPending),
        }
    }
}

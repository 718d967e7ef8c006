//! Computer player
//!
//! Searches a copy of the game's position and commits the chosen move through
//! [`Game::make_move_with`]. The search can run inline ([`AiPlayer::make_move`])
//! or on a worker thread ([`AiPlayer::spawn_search`] then
//! [`AiPlayer::commit`]).

use crate::config::AiConfig;
use crate::error::{ChessEngineResult, MoveError};
use crate::game::{Game, MoveOutcome};
use crate::position::Position;
use crate::search::{find_best_move, SearchHandle, SearchResult};
use crate::types::{Color, PieceType};
use std::sync::atomic::AtomicBool;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiPlayer {
    color: Color,
    config: AiConfig,
}

impl AiPlayer {
    pub fn new(color: Color, config: AiConfig) -> Self {
        Self { color, config }
    }

    pub fn with_depth(color: Color, depth: u8) -> Self {
        Self::new(color, AiConfig::default().with_depth(depth))
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Piece type this player's pawns promote to
    pub fn promotion_choice(&self) -> PieceType {
        self.config.effective_promotion()
    }

    /// Search `position` to this player's depth
    pub fn choose_move(&self, position: &Position) -> Option<SearchResult> {
        let never = AtomicBool::new(false);
        find_best_move(position, &self.config, &never)
    }

    fn ensure_turn(&self, game: &Game) -> ChessEngineResult<()> {
        if game.is_over() {
            return Err(MoveError::GameOver);
        }
        if game.side_to_move() != self.color {
            return Err(MoveError::NotYourTurn { color: self.color });
        }
        Ok(())
    }

    /// Search and play one move
    ///
    /// # Errors
    ///
    /// `NotYourTurn` off turn, `GameOver` on a finished game, otherwise
    /// whatever the game answers for the chosen move.
    pub fn make_move(&self, game: &mut Game) -> ChessEngineResult<MoveOutcome> {
        self.ensure_turn(game)?;
        let mut result = self.choose_move(game.position()).ok_or(MoveError::GameOver)?;
        result.ply = game.ply();
        self.commit(game, result)
    }

    /// Start searching the current position on a worker thread
    pub fn spawn_search(&self, game: &Game) -> ChessEngineResult<SearchHandle> {
        self.ensure_turn(game)?;
        Ok(SearchHandle::spawn(
            game.position().clone(),
            self.config,
            game.ply(),
        ))
    }

    /// Play a finished search result
    ///
    /// # Errors
    ///
    /// `StaleSearch` when the game has moved on since the search started.
    pub fn commit(&self, game: &mut Game, result: SearchResult) -> ChessEngineResult<MoveOutcome> {
        if result.ply != game.ply() {
            warn!(
                "Discarding search for ply {}; game is at ply {}",
                result.ply,
                game.ply()
            );
            return Err(MoveError::StaleSearch {
                searched: result.ply,
                current: game.ply(),
            });
        }

        info!(
            "AI ({}) plays {} | score {} depth {} nodes {} time {:.2}s",
            self.color.name(),
            result.best_move,
            result.score,
            result.depth,
            result.nodes,
            result.elapsed.as_secs_f32()
        );
        game.make_move_with(self.color, result.best_move)
    }
}

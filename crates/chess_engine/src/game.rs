//! Game state machine
//!
//! [`Game`] owns the authoritative [`Position`], the two players, the move
//! history and the notification queue. Every move, human or AI, goes through
//! [`Game::make_move_with`]: validate, apply, notify, classify, hand over.
//!
//! ## Turn Lifecycle
//!
//! 1. Reject when the game is over or a promotion is pending
//! 2. Validate through [`Position::validate_move`]
//! 3. Apply on the board and queue notifications
//! 4. A pawn on the far rank asks its owner for a piece type: AI players
//!    answer at once from their configuration, human players leave a
//!    [`PendingPromotion`] that [`Game::resolve_promotion`] completes
//! 5. Classify the position for the opponent and close the turn

pub mod events;
pub mod history;
pub mod promotion;
mod state;

pub use events::GameEvent;
pub use history::{MoveHistory, MoveRecord};
pub use promotion::{is_promotion_move, PendingPromotion};
pub use state::GameState;

use crate::board::Board;
use crate::error::{ChessEngineResult, MoveError, PromotionError, SetupError};
use crate::location::BoardLocation;
use crate::player::Player;
use crate::position::{AppliedMove, Position};
use crate::types::{Color, Move, PieceType, ALL_COLORS};
use std::mem;
use tracing::{debug, info};

/// Result of a successfully submitted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn is over; the state is the one the opponent now faces
    Completed(GameState),
    /// A human pawn reached the far rank and waits for its piece type
    PromotionPending(PendingPromotion),
}

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    players: [Player; 2],
    state: GameState,
    pending: Option<(PendingPromotion, MoveRecord)>,
    history: MoveHistory,
    events: Vec<GameEvent>,
    ply: u32,
}

impl Game {
    /// Start a game from the standard layout, white to move
    ///
    /// # Errors
    ///
    /// Fails if a player sits in the wrong seat.
    pub fn new(white: Player, black: Player) -> Result<Self, SetupError> {
        Self::with_position(Position::default(), white, black)
    }

    /// Start a game from an arbitrary board
    pub fn with_board(
        board: Board,
        side_to_move: Color,
        white: Player,
        black: Player,
    ) -> Result<Self, SetupError> {
        Self::with_position(Position::new(board, side_to_move), white, black)
    }

    /// Start a game from an arbitrary position
    ///
    /// # Errors
    ///
    /// Rejects boards without exactly one king per color, positions where the
    /// side not to move is in check, and players seated on the wrong color.
    pub fn with_position(
        position: Position,
        white: Player,
        black: Player,
    ) -> Result<Self, SetupError> {
        let board = position.board();
        for color in ALL_COLORS {
            match board.count(PieceType::King, color) {
                0 => return Err(SetupError::MissingKing { color }),
                1 => {}
                _ => return Err(SetupError::DuplicateKing { color }),
            }
        }

        let waiting = !position.side_to_move();
        if position.is_in_check(waiting) {
            return Err(SetupError::OpponentInCheck { color: waiting });
        }

        for (seat, player) in [(Color::White, &white), (Color::Black, &black)] {
            if player.color() != seat {
                return Err(SetupError::PlayerColorMismatch {
                    expected: seat,
                    found: player.color(),
                });
            }
        }

        let mut events = Vec::with_capacity(34);
        events.push(GameEvent::BeginUpdate);
        events.extend(board.pieces().map(|(location, piece)| GameEvent::PieceAdded {
            tag: piece.tag(),
            piece,
            location,
        }));
        events.push(GameEvent::EndUpdate);

        // A finished setup position announces its result straight away
        let state = position.status();
        match state {
            GameState::Checkmate(loser) => events.push(GameEvent::Won { winner: !loser }),
            GameState::Stalemate => events.push(GameEvent::Stalemate),
            GameState::Normal | GameState::Check(_) => {}
        }

        info!(
            "Game started: {} to move, {} pieces, state {}",
            position.side_to_move().name(),
            board.pieces().count(),
            state
        );
        debug!("Initial board:\n{}", board);

        Ok(Self {
            position,
            players: [white, black],
            state,
            pending: None,
            history: MoveHistory::default(),
            events,
            ply: 0,
        })
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.to_index()]
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move())
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending.map(|(pending, _)| pending)
    }

    /// Completed moves so far; stale search results are detected by it
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Notifications queued since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every queued notification, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Legal destinations of the piece on `from`, for the side to move
    ///
    /// Empty while the game is over or a promotion is pending.
    pub fn legal_destinations(&self, from: BoardLocation) -> Vec<BoardLocation> {
        if self.accepting_moves().is_err() {
            return Vec::new();
        }
        self.position.legal_destinations(from)
    }

    /// Every legal move for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.accepting_moves().is_err() {
            return Vec::new();
        }
        self.position.legal_moves()
    }

    fn accepting_moves(&self) -> ChessEngineResult<()> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }
        if let Some((pending, _)) = self.pending {
            return Err(MoveError::PromotionPending {
                location: pending.location,
            });
        }
        Ok(())
    }

    /// Move the piece on `from` to `to` on behalf of `color`
    ///
    /// See [`Game::make_move_with`].
    pub fn make_move(
        &mut self,
        color: Color,
        from: BoardLocation,
        to: BoardLocation,
    ) -> ChessEngineResult<MoveOutcome> {
        self.make_move_with(color, Move::new(from, to))
    }

    /// Validate and apply `mv` on behalf of `color`
    ///
    /// A promoting move may carry its piece type. Without one, an AI mover
    /// promotes per its configuration and a human mover leaves the promotion
    /// pending.
    ///
    /// # Errors
    ///
    /// `GameOver` and `PromotionPending` before anything else, then the
    /// rejection reasons of [`Position::validate`] unchanged.
    pub fn make_move_with(&mut self, color: Color, mv: Move) -> ChessEngineResult<MoveOutcome> {
        self.accepting_moves()?;

        let kind = self.position.validate_move(color, mv).map_err(|err| {
            debug!("Rejected {} for {}: {}", mv, color.name(), err);
            err
        })?;

        let mv = match (mv.promotion, &self.players[color.to_index()]) {
            (None, Player::Ai(ai)) if self.position.is_promotion(mv.from, mv.to) => {
                Move::with_promotion(mv.from, mv.to, ai.promotion_choice())
            }
            _ => mv,
        };

        let applied = self.position.apply(mv, kind);
        debug!("{} played {}", color.name(), mv);
        self.queue_move_events(&applied);

        let record = MoveRecord {
            color,
            piece_type: if applied.promotion.is_some() || applied.awaiting_promotion {
                PieceType::Pawn
            } else {
                applied.piece.piece_type
            },
            from: applied.from,
            to: applied.to,
            captured: applied.captured.map(|(piece, _)| piece.piece_type),
            is_castling: applied.castle.is_some(),
            is_en_passant: applied.is_en_passant,
            promotion: applied.promotion,
            is_check: false,
            is_checkmate: false,
        };

        if applied.awaiting_promotion {
            let pending = PendingPromotion::new(applied.to, color, applied.piece.tag());
            info!(
                "{} pawn on {} awaits a promotion choice",
                color.name(),
                applied.to
            );
            self.pending = Some((pending, record));
            self.events.push(GameEvent::PromotionRequested(pending));
            return Ok(MoveOutcome::PromotionPending(pending));
        }

        Ok(MoveOutcome::Completed(self.finish_turn(record)))
    }

    fn queue_move_events(&mut self, applied: &AppliedMove) {
        self.events.push(GameEvent::BeginUpdate);

        if let Some((captured, location)) = applied.captured {
            if applied.is_en_passant {
                debug!("En passant removes pawn on {}", location);
            }
            self.events.push(GameEvent::PieceRemoved {
                tag: captured.tag(),
                location,
            });
        }

        self.events.push(GameEvent::PieceMoved {
            tag: applied.piece.tag(),
            from: applied.from,
            to: applied.to,
        });

        if let Some((rook, castle)) = applied.castle {
            debug!("Castling moves rook {} -> {}", castle.rook_from, castle.rook_to);
            self.events.push(GameEvent::PieceMoved {
                tag: rook.tag(),
                from: castle.rook_from,
                to: castle.rook_to,
            });
        }

        if let Some(piece_type) = applied.promotion {
            info!("Pawn on {} promoted to {:?}", applied.to, piece_type);
            self.events.push(GameEvent::PieceTransformed {
                tag: applied.piece.tag(),
                location: applied.to,
                piece_type,
            });
        }

        self.events.push(GameEvent::EndUpdate);
    }

    /// Supply the piece type for the pending promotion and finish the turn
    ///
    /// # Errors
    ///
    /// `NoPromotionPending` when nothing waits, `InvalidPromotion` for pawn
    /// or king.
    pub fn resolve_promotion(&mut self, piece_type: PieceType) -> Result<GameState, PromotionError> {
        let (pending, mut record) = self.pending.ok_or(PromotionError::NoPromotionPending)?;

        if !pending.allows(piece_type) {
            return Err(PromotionError::InvalidPromotion { piece_type });
        }

        self.position
            .promote(pending.location, piece_type)
            .ok_or(PromotionError::NoPromotionPending)?;
        self.pending = None;

        info!("Pawn on {} promoted to {:?}", pending.location, piece_type);
        self.events.push(GameEvent::BeginUpdate);
        self.events.push(GameEvent::PieceTransformed {
            tag: pending.tag,
            location: pending.location,
            piece_type,
        });
        self.events.push(GameEvent::EndUpdate);

        record.promotion = Some(piece_type);
        Ok(self.finish_turn(record))
    }

    /// Classify the position for the player now to move and close the turn
    fn finish_turn(&mut self, mut record: MoveRecord) -> GameState {
        let state = self.position.status();
        let opponent = !record.color;

        record.is_check = state.is_check_for(opponent);
        record.is_checkmate = matches!(state, GameState::Checkmate(_));
        self.history.push(record);
        self.ply += 1;
        self.state = state;

        match state {
            GameState::Checkmate(loser) => {
                info!("Checkmate: {} wins", (!loser).name());
                self.events.push(GameEvent::Won { winner: !loser });
            }
            GameState::Stalemate => {
                info!("Stalemate after {} plies", self.ply);
                self.events.push(GameEvent::Stalemate);
            }
            GameState::Check(color) => {
                info!("{} is in check", color.name());
                self.events.push(GameEvent::TurnChanged {
                    color: self.side_to_move(),
                });
            }
            GameState::Normal => {
                self.events.push(GameEvent::TurnChanged {
                    color: self.side_to_move(),
                });
            }
        }

        state
    }

    /// Let the player to move search and play, if it is an AI
    ///
    /// Returns `Ok(None)` when a human is to move.
    pub fn play_ai_turn(&mut self) -> ChessEngineResult<Option<MoveOutcome>> {
        self.accepting_moves()?;
        match self.current_player().clone() {
            Player::Ai(ai) => ai.make_move(self).map(Some),
            Player::Human(_) => Ok(None),
        }
    }
}

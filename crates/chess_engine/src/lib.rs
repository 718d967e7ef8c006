//! Chess rules engine
//!
//! Board representation, per-piece movement rules, check, checkmate and
//! stalemate detection, move execution with castling, en passant and
//! promotion, and a minimax AI with alpha-beta pruning.
//!
//! ## Layers
//!
//! - [`location`], [`types`], [`board`] - values and the 8×8 grid
//! - [`move_gen`] - movement archetypes and attack detection
//! - [`position`] - king-safety filter, legal move lists, move application
//! - [`game`] - turn order, notifications, promotion suspension, history
//! - [`player`] - human and AI seats
//! - [`evaluation`], [`search`] - the AI's scoring and tree search
//!
//! ## Example
//!
//! ```rust,ignore
//! use chess_engine::{BoardLocation, Color, Game, Player};
//!
//! let mut game = Game::new(Player::human(Color::White), Player::ai(Color::Black))?;
//! game.make_move(Color::White, "e2".parse()?, "e4".parse()?)?;
//! game.play_ai_turn()?;
//! for event in game.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod location;
pub mod move_gen;
pub mod player;
pub mod position;
pub mod search;
pub mod types;

pub use board::Board;
pub use config::{AiConfig, AiDifficulty};
pub use error::{ChessEngineResult, LocationError, MoveError, PromotionError, SetupError};
pub use game::{Game, GameEvent, GameState, MoveOutcome, MoveRecord, PendingPromotion};
pub use location::BoardLocation;
pub use player::{AiPlayer, Human, Player};
pub use position::Position;
pub use search::{find_best_move, SearchHandle, SearchResult, SearchStatus};
pub use types::{Color, Move, Piece, PieceTag, PieceType};

//! Alpha-beta search
//!
//! This module implements the AI's move selection:
//! - Negamax variant of minimax with alpha-beta pruning, to a fixed depth
//! - Capture-first move ordering below the root for better pruning
//! - Mate and stalemate detection at every node, including the leaves
//! - A background handle that runs the search on a worker thread
//!
//! The search only ever works on copies of a [`Position`]; the live game is
//! never touched. The chosen move is committed through the same game entry
//! point a human uses.
//!
//! ## Determinism
//!
//! Root moves are tried in [`Position::legal_moves`] order (source index,
//! destination index) and a later move only replaces the best one with a
//! strictly higher score, so ties go to the first move enumerated.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core negamax search
//! - `ordering` - Move ordering heuristics
//! - `background` - Worker thread handle with cancellation

mod alphabeta;
pub mod background;
mod ordering;

pub use background::{SearchHandle, SearchStatus};

use crate::config::AiConfig;
use crate::constants::INFINITY;
use crate::position::Position;
use crate::types::Move;
use alphabeta::{alphabeta, SearchContext};
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use tracing::debug;
use web_time::Instant;

/// Outcome of one completed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Centipawns from the mover's perspective; mates are near `MATE_SCORE`
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Game ply the searched position belonged to
    pub ply: u32,
}

/// Pick the best move for the side to move in `position`
///
/// Returns `None` when the side to move has no legal move, or when `stop`
/// was raised before the search finished.
pub fn find_best_move(position: &Position, config: &AiConfig, stop: &AtomicBool) -> Option<SearchResult> {
    let start = Instant::now();
    let depth = config.effective_depth();
    let mut ctx = SearchContext::new(config.effective_promotion(), stop);

    let moves = position.legal_moves_promoting_to(ctx.promotion);
    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INFINITY;

    for mv in moves {
        let Ok(child) = position.play(mv) else {
            continue;
        };
        let score = -alphabeta(&child, depth - 1, -INFINITY, -alpha, 1, &mut ctx);
        if ctx.stopped {
            debug!("Search stopped after {} nodes", ctx.nodes);
            return None;
        }

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    let (best_move, score) = best?;
    let elapsed = start.elapsed();
    debug!(
        "Search: best {} score {} depth {} nodes {} in {:?}",
        best_move, score, depth, ctx.nodes, elapsed
    );

    Some(SearchResult {
        best_move,
        score,
        depth,
        nodes: ctx.nodes,
        elapsed,
        ply: 0,
    })
}

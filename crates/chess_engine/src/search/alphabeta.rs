//! Negamax with alpha-beta pruning
//!
//! Scores are from the perspective of the side to move at each node. A side
//! with no legal move scores `-(MATE_SCORE - ply)` when in check and 0 when
//! stalemated, checked before the depth cut-off so leaves see mates too.

use super::ordering::order_moves;
use crate::constants::MATE_SCORE;
use crate::evaluation::evaluate_for;
use crate::position::Position;
use crate::types::PieceType;
use std::sync::atomic::{AtomicBool, Ordering};

/// Nodes between polls of the stop flag
const STOP_CHECK_INTERVAL: u64 = 512;

pub(super) struct SearchContext<'a> {
    pub(super) promotion: PieceType,
    pub(super) nodes: u64,
    pub(super) stopped: bool,
    stop: &'a AtomicBool,
}

impl<'a> SearchContext<'a> {
    pub(super) fn new(promotion: PieceType, stop: &'a AtomicBool) -> Self {
        Self {
            promotion,
            nodes: 0,
            stopped: false,
            stop,
        }
    }

    fn should_stop(&mut self) -> bool {
        if !self.stopped && self.nodes % STOP_CHECK_INTERVAL == 0 {
            self.stopped = self.stop.load(Ordering::Relaxed);
        }
        self.stopped
    }
}

pub(super) fn alphabeta(
    position: &Position,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;
    if ctx.should_stop() {
        return 0;
    }

    let side = position.side_to_move();

    if depth == 0 {
        if !position.has_legal_move() {
            return terminal_score(position, ply);
        }
        return evaluate_for(position.board(), side);
    }

    let mut moves = position.legal_moves_promoting_to(ctx.promotion);
    if moves.is_empty() {
        return terminal_score(position, ply);
    }

    order_moves(position.board(), &mut moves);

    for mv in moves {
        let Ok(child) = position.play(mv) else {
            continue;
        };
        let score = -alphabeta(&child, depth - 1, -beta, -alpha, ply + 1, ctx);
        if ctx.stopped {
            return 0;
        }
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

fn terminal_score(position: &Position, ply: i32) -> i32 {
    if position.is_in_check(position.side_to_move()) {
        -(MATE_SCORE - ply)
    } else {
        0
    }
}

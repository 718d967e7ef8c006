//! Background search
//!
//! Runs [`super::find_best_move`] on a worker thread so an interactive caller
//! stays responsive. The worker owns a copy of the position and reports back
//! over a bounded channel.
//!
//! Cancelling (or dropping the handle) raises the stop flag; the worker
//! abandons its search and the result, if any, is discarded. The game is
//! never touched by the worker, so there is nothing to roll back.
//!
//! ```rust,ignore
//! let mut handle = SearchHandle::spawn(game.position().clone(), config, game.ply());
//! loop {
//!     match handle.poll() {
//!         SearchStatus::Searching => render_spinner(),
//!         SearchStatus::Done(result) => break result,
//!     }
//! }
//! ```

use super::{find_best_move, SearchResult};
use crate::config::AiConfig;
use crate::position::Position;
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Progress of a background search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Searching,
    /// Finished; `None` when there was no legal move or the search was stopped
    Done(Option<SearchResult>),
}

/// Handle to a search running on a worker thread
#[derive(Debug)]
pub struct SearchHandle {
    receiver: Receiver<Option<SearchResult>>,
    stop: Arc<AtomicBool>,
    ply: u32,
}

impl SearchHandle {
    /// Start searching `position` on a new thread
    ///
    /// `ply` is stamped on the result so a stale result can be recognised
    /// when it is committed.
    pub fn spawn(position: Position, config: AiConfig, ply: u32) -> Self {
        let (sender, receiver) = bounded(1);
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);

        let spawned = thread::Builder::new()
            .name("chess-search".into())
            .spawn(move || {
                let result = find_best_move(&position, &config, &worker_stop).map(|mut result| {
                    result.ply = ply;
                    result
                });
                // The receiver is gone when the handle was dropped
                let _ = sender.send(result);
            });

        if let Err(err) = spawned {
            warn!("Failed to spawn search thread: {}", err);
        } else {
            debug!("Search started for ply {} at depth {}", ply, config.effective_depth());
        }

        Self {
            receiver,
            stop,
            ply,
        }
    }

    /// Ply of the position being searched
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Check for a result without blocking
    pub fn poll(&self) -> SearchStatus {
        match self.receiver.try_recv() {
            Ok(result) => SearchStatus::Done(result),
            Err(TryRecvError::Empty) => SearchStatus::Searching,
            Err(TryRecvError::Disconnected) => SearchStatus::Done(None),
        }
    }

    /// Block until the worker reports
    pub fn wait(self) -> Option<SearchResult> {
        self.receiver.recv().ok().flatten()
    }

    /// Stop the worker and discard whatever it finds
    pub fn cancel(self) {
        debug!("Search for ply {} cancelled", self.ply);
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

//! Asynchronous search coordinator.
//!
//! Owns the lifecycle of at most one outstanding move search: start, poll,
//! retrieve, cancel. The worker is an isolated thread holding an immutable
//! position snapshot; its result comes back over a single-slot channel whose
//! receiving half doubles as the task handle, so dropping the handle is the
//! cancellation. A worker whose channel is gone gets a send error and
//! nothing else happens with its result.

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use game_core::{RulesEngine, SearchEngine};
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Running,
    Ready,
}

struct SearchTask<M> {
    result: Receiver<Option<M>>,
    started: Instant,
}

pub struct SearchCoordinator<R: RulesEngine, S: SearchEngine<R>> {
    engine: S,
    task: Option<SearchTask<R::Move>>,
    /// A received-but-unretrieved outcome; `Some(None)` means the engine
    /// reported no move.
    outcome: Option<Option<R::Move>>,
}

impl<R, S> SearchCoordinator<R, S>
where
    R: RulesEngine,
    S: SearchEngine<R>,
{
    pub fn new(engine: S) -> Self {
        Self {
            engine,
            task: None,
            outcome: None,
        }
    }

    pub fn status(&self) -> SearchStatus {
        if self.outcome.is_some() {
            SearchStatus::Ready
        } else if self.task.is_some() {
            SearchStatus::Running
        } else {
            SearchStatus::Idle
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status() == SearchStatus::Idle
    }

    /// Spawn a worker over an immutable snapshot of the position and its
    /// legal moves. Only valid when idle; a start while a task is
    /// outstanding is rejected, keeping at most one task alive.
    pub fn start(&mut self, position: R::Position, legal_moves: Vec<R::Move>) {
        if !self.is_idle() {
            warn!("search start rejected: a task is already outstanding");
            return;
        }
        let (sender, receiver) = bounded(1);
        let mut engine = self.engine.clone();
        let spawned = thread::Builder::new()
            .name("move-search".into())
            .spawn(move || {
                let found = engine.search(&position, &legal_moves);
                // The receiver is gone when the session cancelled this
                // task; the result is dropped with the send error.
                let _ = sender.send(found);
            });
        match spawned {
            Ok(_handle) => {
                self.task = Some(SearchTask {
                    result: receiver,
                    started: Instant::now(),
                });
                info!("thinking...");
            }
            Err(err) => {
                warn!(%err, "failed to spawn search worker");
                // Report an empty outcome so the fallback keeps the game moving
                self.outcome = Some(None);
            }
        }
    }

    /// Non-blocking check on the outstanding task.
    pub fn poll(&mut self) -> SearchStatus {
        if self.outcome.is_some() {
            return SearchStatus::Ready;
        }
        let Some(task) = self.task.take() else {
            return SearchStatus::Idle;
        };
        match task.result.try_recv() {
            Ok(found) => {
                info!(elapsed = ?task.started.elapsed(), "done thinking");
                self.outcome = Some(found);
                SearchStatus::Ready
            }
            Err(TryRecvError::Empty) => {
                self.task = Some(task);
                SearchStatus::Running
            }
            Err(TryRecvError::Disconnected) => {
                warn!("search worker exited without a result");
                self.outcome = Some(None);
                SearchStatus::Ready
            }
        }
    }

    /// Take the ready outcome, substituting a uniformly-random legal move
    /// when the engine produced nothing, so the engine side always moves in
    /// a non-terminal position. Returns `None` when nothing is ready.
    pub fn retrieve(&mut self, legal_moves: &[R::Move]) -> Option<R::Move> {
        let found = self.outcome.take()?;
        Some(match found {
            Some(mv) => mv,
            None => {
                warn!("search produced no move; falling back to a random legal move");
                self.engine.random_move(legal_moves)
            }
        })
    }

    /// Discard the outstanding task, if any. Dropping the receiver makes the
    /// worker's eventual send fail, so a late result can never be observed;
    /// an already-received but unretrieved outcome is discarded too.
    pub fn cancel(&mut self) {
        if self.task.take().is_some() {
            debug!("cancelled outstanding search");
        }
        if self.outcome.take().is_some() {
            debug!("discarded unretrieved search result");
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

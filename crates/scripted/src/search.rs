//! A scripted search backend.

use game_core::{RulesEngine, SearchEngine};
use std::thread;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Script {
    /// Return the first legal move.
    First,
    /// Return the n-th legal move (None when out of range).
    Nth(usize),
    /// Report that no move was found.
    NoMove,
    /// Die without producing a result.
    Panic,
}

/// Search engine whose behavior is fixed up front, with an optional
/// per-search delay to simulate thinking time.
#[derive(Clone, Debug)]
pub struct ScriptedSearch {
    script: Script,
    delay: Duration,
}

impl ScriptedSearch {
    pub fn first() -> Self {
        Self {
            script: Script::First,
            delay: Duration::ZERO,
        }
    }

    pub fn nth(index: usize) -> Self {
        Self {
            script: Script::Nth(index),
            delay: Duration::ZERO,
        }
    }

    pub fn no_move() -> Self {
        Self {
            script: Script::NoMove,
            delay: Duration::ZERO,
        }
    }

    pub fn panicking() -> Self {
        Self {
            script: Script::Panic,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl<R: RulesEngine> SearchEngine<R> for ScriptedSearch {
    fn search(&mut self, _position: &R::Position, legal_moves: &[R::Move]) -> Option<R::Move> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        match self.script {
            Script::First => legal_moves.first().cloned(),
            Script::Nth(index) => legal_moves.get(index).cloned(),
            Script::NoMove => None,
            Script::Panic => panic!("scripted search failure"),
        }
    }
}

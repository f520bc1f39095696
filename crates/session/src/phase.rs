//! Session phase state machine.
//!
//! Side selection is an explicit state rather than an event loop nested
//! inside mode selection. Every input is evaluated against exactly one
//! phase's accepted outcomes; anything unrecognized is a no-op.

use crate::config::MenuLayout;
use crate::turn::Seats;
use game_core::{SessionPhase, Side};
use tracing::debug;

/// What a setup-menu click resolved to.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    Stay,
    StartGame(Seats),
    Quit,
}

#[derive(Debug)]
pub struct PhaseMachine {
    current: SessionPhase,
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self {
            current: SessionPhase::ModeSelect,
        }
    }

    pub fn current(&self) -> SessionPhase {
        self.current
    }

    /// Resolve a pointer-down against the setup menus.
    ///
    /// Mode selection offers both-human play, play against the engine, and
    /// quit; side selection seats the engine opposite the chosen side. Out
    /// of the selection phases this is a no-op.
    pub fn menu_click(&mut self, x: u32, y: u32, layout: &MenuLayout) -> MenuOutcome {
        match self.current {
            SessionPhase::ModeSelect => {
                if layout.play_both.contains(x, y) {
                    self.enter(SessionPhase::Active);
                    MenuOutcome::StartGame(Seats::both_human())
                } else if layout.play_engine.contains(x, y) {
                    self.enter(SessionPhase::SideSelect);
                    MenuOutcome::Stay
                } else if layout.quit.contains(x, y) {
                    MenuOutcome::Quit
                } else {
                    MenuOutcome::Stay
                }
            }
            SessionPhase::SideSelect => {
                if layout.pick_white.contains(x, y) {
                    self.enter(SessionPhase::Active);
                    MenuOutcome::StartGame(Seats::engine_plays(Side::Black))
                } else if layout.pick_black.contains(x, y) {
                    self.enter(SessionPhase::Active);
                    MenuOutcome::StartGame(Seats::engine_plays(Side::White))
                } else {
                    MenuOutcome::Stay
                }
            }
            SessionPhase::Active | SessionPhase::GameOver => MenuOutcome::Stay,
        }
    }

    /// Mark the game finished. Only meaningful during active play.
    pub fn finish_game(&mut self) {
        if self.current == SessionPhase::Active {
            self.enter(SessionPhase::GameOver);
        }
    }

    /// Return to active play with the same seats. Valid from `Active` (a
    /// mid-game restart) and `GameOver`; the setup screens are never
    /// re-entered within a session.
    pub fn restart(&mut self) {
        if matches!(
            self.current,
            SessionPhase::Active | SessionPhase::GameOver
        ) {
            self.enter(SessionPhase::Active);
        }
    }

    fn enter(&mut self, next: SessionPhase) {
        debug!(from = ?self.current, to = ?next, "phase transition");
        self.current = next;
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod phase_tests;

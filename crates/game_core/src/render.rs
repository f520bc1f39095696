//! Renderer and input-source contracts.
//!
//! The renderer consumes a read-only frame once per loop iteration and never
//! mutates controller state. The input source yields at most one decoded
//! event per iteration; the controller does its own pointer-to-square
//! mapping.

use crate::rules::RulesEngine;
use crate::types::{InputEvent, Selection, SessionPhase, Square};

/// Read-only snapshot handed to the renderer every iteration, whether or not
/// anything changed since the previous one.
pub struct Frame<'a, R: RulesEngine> {
    pub position: &'a R::Position,
    pub legal_moves: &'a [R::Move],
    pub selection: &'a Selection,
    pub move_log: &'a [R::Move],
    pub phase: SessionPhase,
    /// Endpoints of the most recently committed move, as a highlight or
    /// animation cue.
    pub last_move: Option<(Square, Square)>,
    /// One-line status: side to move, "thinking...", or the end-game text.
    pub status: &'a str,
}

pub trait Renderer<R: RulesEngine> {
    fn draw(&mut self, frame: &Frame<'_, R>);
}

/// A source of decoded input events.
pub trait InputSource {
    /// The next pending event, if any. Must not block.
    fn poll(&mut self) -> Option<InputEvent>;
}

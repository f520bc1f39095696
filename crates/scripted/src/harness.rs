//! Shared-handle input and render doubles.
//!
//! Both types are cheap clones around shared interiors: a test keeps one
//! handle to feed events or read frames while the session owns the other.

use game_core::{Frame, InputEvent, InputSource, Renderer, RulesEngine, SessionPhase, Square};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A queue of input events shared between a test and the session.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    events: Arc<Mutex<VecDeque<InputEvent>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: InputEvent) {
        self.events.lock().unwrap().push_back(event);
    }

    pub fn click(&self, x: u32, y: u32) {
        self.push(InputEvent::PointerDown { x, y });
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl InputSource for InputQueue {
    fn poll(&mut self) -> Option<InputEvent> {
        self.events.lock().unwrap().pop_front()
    }
}

/// What a recorded frame looked like, minus the engine-typed borrows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRecord {
    pub phase: SessionPhase,
    pub status: String,
    pub log_len: usize,
    pub selection_len: usize,
    pub last_move: Option<(Square, Square)>,
}

/// Renderer double that appends one [`FrameRecord`] per draw call.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    frames: Arc<Mutex<Vec<FrameRecord>>>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<FrameRecord> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<FrameRecord> {
        self.frames.lock().unwrap().last().cloned()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }
}

impl<R: RulesEngine> Renderer<R> for FrameRecorder {
    fn draw(&mut self, frame: &Frame<'_, R>) {
        self.frames.lock().unwrap().push(FrameRecord {
            phase: frame.phase,
            status: frame.status.to_string(),
            log_len: frame.move_log.len(),
            selection_len: frame.selection.len(),
            last_move: frame.last_move,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_queue_drains_in_order() {
        let queue = InputQueue::new();
        let mut source = queue.clone();
        queue.push(InputEvent::KeyUndo);
        queue.click(10, 20);

        assert_eq!(source.poll(), Some(InputEvent::KeyUndo));
        assert_eq!(source.poll(), Some(InputEvent::PointerDown { x: 10, y: 20 }));
        assert_eq!(source.poll(), None);
        assert!(queue.is_empty());
    }
}

//! The session loop.
//!
//! One iteration: at most one input event, phase dispatch, exactly one
//! render. The loop never blocks on the search worker; it polls and moves
//! on, pacing itself with a cooperative frame clock.

use crate::config::SessionConfig;
use crate::history::HistoryController;
use crate::phase::{MenuOutcome, PhaseMachine};
use crate::search::SearchCoordinator;
use crate::turn::{Seats, TurnCoordinator};
use game_core::{
    Frame, InputEvent, InputSource, Renderer, RulesEngine, SearchEngine, SessionPhase, Terminal,
};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Whether the loop keeps going after an iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, S, I, V>
where
    R: RulesEngine,
    S: SearchEngine<R>,
    I: InputSource,
    V: Renderer<R>,
{
    config: SessionConfig,
    phase: PhaseMachine,
    turn: TurnCoordinator,
    history: HistoryController<R>,
    search: SearchCoordinator<R, S>,
    input: I,
    renderer: V,
}

impl<R, S, I, V> Session<R, S, I, V>
where
    R: RulesEngine,
    S: SearchEngine<R>,
    I: InputSource,
    V: Renderer<R>,
{
    pub fn new(rules: R, engine: S, input: I, renderer: V, config: SessionConfig) -> Self {
        Self {
            config,
            phase: PhaseMachine::new(),
            turn: TurnCoordinator::new(Seats::both_human()),
            history: HistoryController::new(rules),
            search: SearchCoordinator::new(engine),
            input,
            renderer,
        }
    }

    /// Run until quit, pacing iterations at the configured frame rate.
    pub fn run(&mut self) {
        info!("session started");
        let mut clock = FrameClock::new(self.config.frame_rate);
        while self.step() == Flow::Continue {
            clock.tick();
        }
        info!("session ended");
    }

    /// One loop iteration. Public so callers and tests can pace the loop
    /// themselves.
    pub fn step(&mut self) -> Flow {
        let event = self.input.poll();
        // A quit signal ends the session from every phase
        if event == Some(InputEvent::Quit) {
            return Flow::Exit;
        }
        match self.phase.current() {
            SessionPhase::ModeSelect | SessionPhase::SideSelect => {
                if let Some(InputEvent::PointerDown { x, y }) = event {
                    match self.phase.menu_click(x, y, &self.config.menu) {
                        MenuOutcome::StartGame(seats) => self.start_game(seats),
                        MenuOutcome::Quit => return Flow::Exit,
                        MenuOutcome::Stay => {}
                    }
                }
            }
            SessionPhase::Active => self.step_active(event),
            SessionPhase::GameOver => {
                // Only reset (and quit, above) are honored here
                if event == Some(InputEvent::KeyReset) {
                    self.restart();
                }
            }
        }
        self.render();
        Flow::Continue
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.current()
    }

    pub fn seats(&self) -> Seats {
        self.turn.seats()
    }

    pub fn history(&self) -> &HistoryController<R> {
        &self.history
    }

    pub fn search(&self) -> &SearchCoordinator<R, S> {
        &self.search
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn start_game(&mut self, seats: Seats) {
        self.turn.set_seats(seats);
        self.history.reset(&mut self.search);
        info!(?seats, "game started");
    }

    fn restart(&mut self) {
        self.history.reset(&mut self.search);
        self.phase.restart();
    }

    fn step_active(&mut self, event: Option<InputEvent>) {
        // The actor is decided before the event lands, as the loop observed it
        let human_turn = self.turn.human_turn(&self.history);
        let mut reverted = false;

        match event {
            Some(InputEvent::KeyUndo) => {
                reverted = true;
                if let Err(err) = self.history.undo(&mut self.search) {
                    debug!(%err, "undo ignored");
                }
            }
            Some(InputEvent::KeyReset) => {
                reverted = true;
                self.restart();
            }
            Some(InputEvent::PointerDown { x, y }) if human_turn => {
                let square = self.config.board.square_at(x, y);
                self.turn.handle_pointer(square, &mut self.history);
            }
            _ => {}
        }

        // Engine turns advance through the coordinator; an iteration that
        // rewound the position does not start a search against it
        if !reverted && !human_turn && self.history.terminal().is_none() {
            self.turn.drive_engine(&mut self.history, &mut self.search);
        }

        if self.history.terminal().is_some() {
            self.phase.finish_game();
        }
    }

    fn render(&mut self) {
        let status = self.status_line();
        let frame = Frame {
            position: self.history.position(),
            legal_moves: self.history.legal_moves(),
            selection: self.history.selection(),
            move_log: self.history.move_log(),
            phase: self.phase.current(),
            last_move: self.history.last_move(),
            status: &status,
        };
        self.renderer.draw(&frame);
    }

    fn status_line(&self) -> String {
        match self.phase.current() {
            SessionPhase::ModeSelect => "Select play mode".to_string(),
            SessionPhase::SideSelect => "Select your side".to_string(),
            SessionPhase::Active => {
                if !self.turn.human_turn(&self.history) && !self.search.is_idle() {
                    "thinking...".to_string()
                } else {
                    format!("{} to move", self.history.side_to_move())
                }
            }
            SessionPhase::GameOver => match self.history.terminal() {
                Some(Terminal::Stalemate) => "Stalemate".to_string(),
                Some(Terminal::Checkmate) => {
                    format!("{} wins by checkmate", self.history.side_to_move().other())
                }
                None => String::new(),
            },
        }
    }
}

/// Cooperative frame pacing: sleep out the remainder of each interval.
struct FrameClock {
    interval: Duration,
    last: Instant,
}

impl FrameClock {
    fn new(frame_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / frame_rate.max(1),
            last: Instant::now(),
        }
    }

    fn tick(&mut self) {
        let due = self.last + self.interval;
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        self.last = Instant::now();
    }
}

//! Board-game session controller.
//!
//! Sequences a session from the setup screens into active play and the end
//! screen, and drives the per-turn cycle:
//! - input capture and two-click move selection for the human player
//! - an asynchronous, cancellable move search for the engine player
//! - commit and undo through a history controller that keeps the legal-move
//!   cache fresh
//!
//! Rendering, move legality, and the search algorithm live behind the
//! collaborator contracts in `game_core`; nothing in this crate knows how a
//! board is drawn or why a move is legal.

pub mod config;
pub mod history;
pub mod phase;
pub mod search;
pub mod session;
pub mod turn;

pub use config::{BoardGeometry, ConfigError, MenuLayout, Rect, SessionConfig};
pub use history::HistoryController;
pub use phase::{MenuOutcome, PhaseMachine};
pub use search::{SearchCoordinator, SearchStatus};
pub use session::{Flow, Session};
pub use turn::{Actor, Seats, TurnCoordinator};

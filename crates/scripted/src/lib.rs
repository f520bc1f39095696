//! Scripted Game Collaborators
//!
//! Deterministic, table-driven implementations of the collaborator
//! contracts in `game_core`. Useful for:
//! - Exercising the session controller without a real rules engine
//! - Reproducing exact turn sequences in tests
//! - Stress testing the search coordinator with slow or failing workers
//!
//! Nothing here knows how to play a real game: legal moves come from a
//! per-ply script, and terminal states are declared, not detected.

mod harness;
mod rules;
mod search;

pub use harness::{FrameRecord, FrameRecorder, InputQueue};
pub use rules::{mv, ScriptedMove, ScriptedPosition, ScriptedRules};
pub use search::ScriptedSearch;

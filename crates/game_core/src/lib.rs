pub mod error;
pub mod render;
pub mod rules;
pub mod types;

// Re-export the shared vocabulary (not controller-specific)
pub use error::*;
pub use render::*;
pub use rules::*;
pub use types::*;

use rand::seq::SliceRandom;
use rand::thread_rng;

// =============================================================================
// SearchEngine trait — implemented by all move-search backends
// =============================================================================

/// Trait that all move-search backends must implement.
///
/// The session controller never runs a search on its own thread of control;
/// it clones the engine into an isolated worker and hands it an immutable
/// position snapshot together with the legal moves for that position. This
/// allows swapping between trivial (random), classical, and external search
/// backends without touching the controller.
pub trait SearchEngine<R: RulesEngine>: Clone + Send + 'static {
    /// Search the position for a best move.
    ///
    /// # Arguments
    /// * `position` - An immutable snapshot of the position to analyze
    /// * `legal_moves` - The legal moves available in that position
    ///
    /// # Returns
    /// The best move found, or `None` if the search produced nothing.
    /// Callers must treat `None` as recoverable and fall back to
    /// [`SearchEngine::random_move`].
    fn search(&mut self, position: &R::Position, legal_moves: &[R::Move]) -> Option<R::Move>;

    /// Pick a uniformly-random legal move.
    ///
    /// Used as the mandatory fallback when [`SearchEngine::search`] yields
    /// nothing, so the engine side always moves in a non-terminal position.
    /// Only ever invoked with a non-empty move list.
    fn random_move(&mut self, legal_moves: &[R::Move]) -> R::Move {
        legal_moves
            .choose(&mut thread_rng())
            .cloned()
            .expect("random_move requires at least one legal move")
    }
}

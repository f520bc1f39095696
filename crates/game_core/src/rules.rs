//! The rules-engine contract.
//!
//! The controller never inspects a position beyond the accessors declared
//! here. Board representation, legality, and terminal-state detection are
//! owned by the implementation; the controller only sequences mutations and
//! keeps its caches in sync with them.

use crate::error::NoHistoryError;
use crate::types::{Side, Square};
use std::fmt;

/// A single legal transition between two squares, produced by the rules
/// engine and treated as an opaque value by the controller.
///
/// The controller compares moves for equality, logs them, and reads the two
/// endpoint squares for selection matching and animation cues. It never
/// decomposes a move beyond that.
pub trait PlayedMove: Clone + PartialEq + fmt::Debug + fmt::Display + Send + 'static {
    fn from_square(&self) -> Square;
    fn to_square(&self) -> Square;
}

/// Everything the controller requires from a rules engine.
///
/// `Position` is an opaque handle: it is mutated in place through
/// [`RulesEngine::apply`]/[`RulesEngine::undo`] and carries its own applied-
/// move history. It must be cheaply cloneable so the search worker can take
/// an immutable snapshot.
pub trait RulesEngine {
    type Position: Clone + Send + 'static;
    type Move: PlayedMove;

    /// A fresh starting position. Called once per session and on reset.
    fn initial_position(&self) -> Self::Position;

    /// The moves available to the side to move, in a stable order.
    fn legal_moves(&self, position: &Self::Position) -> Vec<Self::Move>;

    /// Apply a move produced by [`RulesEngine::legal_moves`] for this
    /// position. Moves from any other position are never passed in.
    fn apply(&self, position: &mut Self::Position, mv: &Self::Move);

    /// Revert the most recent applied move.
    fn undo(&self, position: &mut Self::Position) -> Result<(), NoHistoryError>;

    /// Number of applied moves the position currently carries. The
    /// controller mirrors its move log against this.
    fn history_len(&self, position: &Self::Position) -> usize;

    fn is_checkmate(&self, position: &Self::Position) -> bool;

    fn is_stalemate(&self, position: &Self::Position) -> bool;

    fn side_to_move(&self, position: &Self::Position) -> Side;
}

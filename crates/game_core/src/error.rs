//! Error types shared by the controller and its collaborators.
//!
//! None of these are user-fatal: an illegal commit is a programming-contract
//! violation rejected defensively, and an empty-history undo is recovered as
//! a no-op by the caller.

use thiserror::Error;

/// A caller tried to commit a move that is not in the current legal-move
/// cache. The position, selection, and move log are left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("move is not legal in the current position")]
pub struct IllegalMoveError;

/// Undo was requested with no applied moves to revert.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no applied moves to undo")]
pub struct NoHistoryError;

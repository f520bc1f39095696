//! A table-driven rules engine.
//!
//! The "game" is defined entirely by a script: one list of legal moves per
//! ply, plus optional declared terminal plies. Positions carry their applied
//! moves, which is all the undo support a controller needs.

use game_core::{NoHistoryError, PlayedMove, RulesEngine, Side, Square};
use std::fmt;

/// Build a scripted move from `(row, col)` endpoint pairs.
pub fn mv(from: (u8, u8), to: (u8, u8)) -> ScriptedMove {
    ScriptedMove {
        from: Square::new(from.0, from.1),
        to: Square::new(to.0, to.1),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedMove {
    pub from: Square,
    pub to: Square,
}

impl PlayedMove for ScriptedMove {
    fn from_square(&self) -> Square {
        self.from
    }

    fn to_square(&self) -> Square {
        self.to
    }
}

impl fmt::Display for ScriptedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Algebraic-style endpoints on an 8x8 board, e.g. "e2e4"
        let file = |sq: Square| (b'a' + sq.col) as char;
        let rank = |sq: Square| 8 - sq.row;
        write!(
            f,
            "{}{}{}{}",
            file(self.from),
            rank(self.from),
            file(self.to),
            rank(self.to)
        )
    }
}

/// A position is nothing but its applied-move history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedPosition {
    applied: Vec<ScriptedMove>,
}

impl ScriptedPosition {
    pub fn ply(&self) -> usize {
        self.applied.len()
    }
}

/// Rules engine driven by a per-ply move table.
///
/// Plies past the end of the script fall back to a fixed pair of filler
/// moves so games can run on indefinitely. White moves on even plies.
#[derive(Clone, Debug)]
pub struct ScriptedRules {
    script: Vec<Vec<ScriptedMove>>,
    mate_at: Option<usize>,
    stalemate_at: Option<usize>,
}

impl ScriptedRules {
    pub fn new(script: Vec<Vec<ScriptedMove>>) -> Self {
        Self {
            script,
            mate_at: None,
            stalemate_at: None,
        }
    }

    /// The standard opening fixture used across the controller tests:
    /// a handful of scripted plies, including the pawn two-step
    /// (6,4) -> (4,4) from a fresh position.
    pub fn opening() -> Self {
        Self::new(vec![
            vec![mv((6, 4), (4, 4)), mv((6, 0), (5, 0)), mv((7, 6), (5, 5))],
            vec![mv((1, 4), (3, 4)), mv((1, 0), (2, 0))],
            vec![mv((7, 3), (3, 7)), mv((6, 3), (5, 3))],
            vec![mv((0, 1), (2, 2))],
        ])
    }

    /// Declare the position reached after `ply` applied moves checkmate.
    pub fn mate_at(mut self, ply: usize) -> Self {
        self.mate_at = Some(ply);
        self
    }

    /// Declare the position reached after `ply` applied moves stalemate.
    pub fn stalemate_at(mut self, ply: usize) -> Self {
        self.stalemate_at = Some(ply);
        self
    }

    fn terminal_at(&self, ply: usize) -> bool {
        self.mate_at == Some(ply) || self.stalemate_at == Some(ply)
    }
}

impl RulesEngine for ScriptedRules {
    type Position = ScriptedPosition;
    type Move = ScriptedMove;

    fn initial_position(&self) -> ScriptedPosition {
        ScriptedPosition::default()
    }

    fn legal_moves(&self, position: &ScriptedPosition) -> Vec<ScriptedMove> {
        let ply = position.ply();
        if self.terminal_at(ply) {
            return Vec::new();
        }
        match self.script.get(ply) {
            Some(moves) => moves.clone(),
            // Filler moves keep unscripted games alive
            None => vec![mv((2, 1), (3, 1)), mv((2, 2), (3, 2))],
        }
    }

    fn apply(&self, position: &mut ScriptedPosition, mv: &ScriptedMove) {
        position.applied.push(mv.clone());
    }

    fn undo(&self, position: &mut ScriptedPosition) -> Result<(), NoHistoryError> {
        match position.applied.pop() {
            Some(_) => Ok(()),
            None => Err(NoHistoryError),
        }
    }

    fn history_len(&self, position: &ScriptedPosition) -> usize {
        position.applied.len()
    }

    fn is_checkmate(&self, position: &ScriptedPosition) -> bool {
        self.mate_at == Some(position.ply())
    }

    fn is_stalemate(&self, position: &ScriptedPosition) -> bool {
        self.stalemate_at == Some(position.ply())
    }

    fn side_to_move(&self, position: &ScriptedPosition) -> Side {
        if position.ply() % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;

//! Move/undo history controller.
//!
//! Every rules-engine mutation goes through here, so the legal-move cache,
//! move log, selection, and terminal flag are resynchronized inside the same
//! operation as the mutation itself. Callers never observe a stale cache.

use crate::search::SearchCoordinator;
use game_core::{
    IllegalMoveError, NoHistoryError, PlayedMove, RulesEngine, SearchEngine, Selection, Side,
    Square, Terminal,
};
use tracing::{debug, info};

pub struct HistoryController<R: RulesEngine> {
    rules: R,
    position: R::Position,
    legal: Vec<R::Move>,
    log: Vec<R::Move>,
    selection: Selection,
    terminal: Option<Terminal>,
    last_move: Option<(Square, Square)>,
}

impl<R: RulesEngine> HistoryController<R> {
    pub fn new(rules: R) -> Self {
        let position = rules.initial_position();
        let legal = rules.legal_moves(&position);
        let mut controller = Self {
            rules,
            position,
            legal,
            log: Vec::new(),
            selection: Selection::new(),
            terminal: None,
            last_move: None,
        };
        controller.terminal = controller.detect_terminal();
        controller
    }

    /// Apply a move from the current legal-move cache.
    ///
    /// Returns the applied move for logging and animation cues. Fails with
    /// [`IllegalMoveError`] without touching any state when the move is not
    /// in the cache.
    pub fn commit(&mut self, mv: &R::Move) -> Result<R::Move, IllegalMoveError> {
        if !self.legal.contains(mv) {
            return Err(IllegalMoveError);
        }
        self.rules.apply(&mut self.position, mv);
        self.legal = self.rules.legal_moves(&self.position);
        self.selection.clear();
        self.log.push(mv.clone());
        self.last_move = Some((mv.from_square(), mv.to_square()));
        self.terminal = self.detect_terminal();
        info!(%mv, "committed move");
        Ok(mv.clone())
    }

    /// Revert one ply.
    ///
    /// Cancels any outstanding search first: the position it was computed
    /// against no longer exists once the undo lands, so a late result must
    /// never be committed. Fails with [`NoHistoryError`] when there is
    /// nothing to revert.
    pub fn undo<S>(
        &mut self,
        search: &mut SearchCoordinator<R, S>,
    ) -> Result<(), NoHistoryError>
    where
        S: SearchEngine<R>,
    {
        if self.rules.history_len(&self.position) == 0 {
            return Err(NoHistoryError);
        }
        search.cancel();
        self.rules.undo(&mut self.position)?;
        self.legal = self.rules.legal_moves(&self.position);
        self.log.truncate(self.rules.history_len(&self.position));
        self.selection.clear();
        self.terminal = None;
        self.last_move = self
            .log
            .last()
            .map(|m| (m.from_square(), m.to_square()));
        debug!("undid one ply");
        Ok(())
    }

    /// Discard the position for a fresh initial one.
    pub fn reset<S>(&mut self, search: &mut SearchCoordinator<R, S>)
    where
        S: SearchEngine<R>,
    {
        search.cancel();
        self.position = self.rules.initial_position();
        self.legal = self.rules.legal_moves(&self.position);
        self.log.clear();
        self.selection.clear();
        self.terminal = self.detect_terminal();
        self.last_move = None;
        info!("reset to a fresh position");
    }

    pub fn position(&self) -> &R::Position {
        &self.position
    }

    pub fn legal_moves(&self) -> &[R::Move] {
        &self.legal
    }

    pub fn move_log(&self) -> &[R::Move] {
        &self.log
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn terminal(&self) -> Option<Terminal> {
        self.terminal
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn side_to_move(&self) -> Side {
        self.rules.side_to_move(&self.position)
    }

    /// The move log paired into numbered White/Black rows for display.
    pub fn paired_log_rows(&self) -> Vec<String> {
        self.log
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| {
                let mut row = format!("{}. White: {}", i + 1, pair[0]);
                if let Some(black) = pair.get(1) {
                    row.push_str(&format!("  Black: {black}"));
                }
                row
            })
            .collect()
    }

    fn detect_terminal(&self) -> Option<Terminal> {
        if self.rules.is_checkmate(&self.position) {
            Some(Terminal::Checkmate)
        } else if self.rules.is_stalemate(&self.position) {
            Some(Terminal::Stalemate)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;

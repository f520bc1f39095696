//! Turn coordination: deciding who acts and routing their move into the
//! history controller.

use crate::history::HistoryController;
use crate::search::{SearchCoordinator, SearchStatus};
use game_core::{PlayedMove, RulesEngine, SearchEngine, Side, Square};
use tracing::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Actor {
    Human,
    Engine,
}

/// Which actor sits behind each side for the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seats {
    pub white: Actor,
    pub black: Actor,
}

impl Seats {
    pub fn both_human() -> Self {
        Self {
            white: Actor::Human,
            black: Actor::Human,
        }
    }

    /// Seat the engine on `side` and the human opposite it.
    pub fn engine_plays(side: Side) -> Self {
        match side {
            Side::White => Self {
                white: Actor::Engine,
                black: Actor::Human,
            },
            Side::Black => Self {
                white: Actor::Human,
                black: Actor::Engine,
            },
        }
    }

    pub fn actor_for(&self, side: Side) -> Actor {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }
}

pub struct TurnCoordinator {
    seats: Seats,
}

impl TurnCoordinator {
    pub fn new(seats: Seats) -> Self {
        Self { seats }
    }

    pub fn seats(&self) -> Seats {
        self.seats
    }

    pub fn set_seats(&mut self, seats: Seats) {
        self.seats = seats;
    }

    pub fn human_turn<R: RulesEngine>(&self, history: &HistoryController<R>) -> bool {
        self.seats.actor_for(history.side_to_move()) == Actor::Human
    }

    /// Two-click move input over an opaque position.
    ///
    /// A square is selectable when some cached legal move starts there. A
    /// second click commits on an endpoint match, re-anchors on a selectable
    /// mismatch, and otherwise clears. Off-board pointers arrive as `None`
    /// and always deselect.
    pub fn handle_pointer<R: RulesEngine>(
        &self,
        square: Option<Square>,
        history: &mut HistoryController<R>,
    ) -> Option<R::Move> {
        let Some(square) = square else {
            history.selection_mut().clear();
            return None;
        };
        match history.selection().anchor() {
            None => {
                if Self::selectable(history, square) {
                    history.selection_mut().push(square);
                }
                None
            }
            Some(anchor) if anchor == square => {
                // Re-clicking the selected square deselects it
                history.selection_mut().clear();
                None
            }
            Some(anchor) => {
                history.selection_mut().push(square);
                let candidate = history
                    .legal_moves()
                    .iter()
                    .find(|m| m.from_square() == anchor && m.to_square() == square)
                    .cloned();
                match candidate {
                    Some(mv) => match history.commit(&mv) {
                        Ok(applied) => Some(applied),
                        Err(err) => {
                            // Unreachable by construction; reject defensively
                            error!(%err, "refused pointer move");
                            history.selection_mut().clear();
                            None
                        }
                    },
                    None => {
                        history.selection_mut().clear();
                        if Self::selectable(history, square) {
                            history.selection_mut().push(square);
                        }
                        None
                    }
                }
            }
        }
    }

    /// Drive the engine's turn: start a search when none is outstanding,
    /// otherwise poll it, and commit a ready result through the history
    /// controller exactly like a human move.
    pub fn drive_engine<R, S>(
        &self,
        history: &mut HistoryController<R>,
        search: &mut SearchCoordinator<R, S>,
    ) -> Option<R::Move>
    where
        R: RulesEngine,
        S: SearchEngine<R>,
    {
        if history.terminal().is_some() {
            return None;
        }
        if search.is_idle() {
            search.start(history.position().clone(), history.legal_moves().to_vec());
            return None;
        }
        if search.poll() != SearchStatus::Ready {
            return None;
        }
        let mv = search.retrieve(history.legal_moves())?;
        match history.commit(&mv) {
            Ok(applied) => Some(applied),
            Err(err) => {
                error!(%err, "discarding engine move that is no longer legal");
                None
            }
        }
    }

    fn selectable<R: RulesEngine>(history: &HistoryController<R>, square: Square) -> bool {
        history
            .legal_moves()
            .iter()
            .any(|m| m.from_square() == square)
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod turn_tests;

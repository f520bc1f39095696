use super::*;
use scripted_game::{mv, ScriptedRules, ScriptedSearch};
use std::time::Duration;

type Coordinator = SearchCoordinator<ScriptedRules, ScriptedSearch>;

fn game(seats: Seats) -> (TurnCoordinator, HistoryController<ScriptedRules>) {
    (
        TurnCoordinator::new(seats),
        HistoryController::new(ScriptedRules::opening()),
    )
}

fn sq(row: u8, col: u8) -> Option<Square> {
    Some(Square::new(row, col))
}

#[test]
fn first_click_selects_a_movable_square() {
    let (turn, mut history) = game(Seats::both_human());

    assert_eq!(turn.handle_pointer(sq(6, 4), &mut history), None);
    assert_eq!(history.selection().anchor(), Some(Square::new(6, 4)));
}

#[test]
fn first_click_on_an_inert_square_selects_nothing() {
    let (turn, mut history) = game(Seats::both_human());

    turn.handle_pointer(sq(3, 3), &mut history);
    assert!(history.selection().is_empty());
}

#[test]
fn second_click_commits_a_matching_move() {
    let (turn, mut history) = game(Seats::both_human());

    turn.handle_pointer(sq(6, 4), &mut history);
    let committed = turn.handle_pointer(sq(4, 4), &mut history);

    assert_eq!(committed, Some(mv((6, 4), (4, 4))));
    assert_eq!(history.move_log(), &[mv((6, 4), (4, 4))]);
    assert!(history.selection().is_empty());
}

#[test]
fn mismatched_second_click_reanchors_on_a_movable_square() {
    let (turn, mut history) = game(Seats::both_human());

    turn.handle_pointer(sq(6, 4), &mut history);
    // no scripted move runs (6,4) -> (6,0), but (6,0) can move itself
    assert_eq!(turn.handle_pointer(sq(6, 0), &mut history), None);

    assert!(history.move_log().is_empty());
    assert_eq!(history.selection().anchor(), Some(Square::new(6, 0)));
}

#[test]
fn mismatched_second_click_on_an_inert_square_clears() {
    let (turn, mut history) = game(Seats::both_human());

    turn.handle_pointer(sq(6, 4), &mut history);
    turn.handle_pointer(sq(3, 3), &mut history);

    assert!(history.selection().is_empty());
}

#[test]
fn reclicking_the_selected_square_deselects() {
    let (turn, mut history) = game(Seats::both_human());

    turn.handle_pointer(sq(6, 4), &mut history);
    turn.handle_pointer(sq(6, 4), &mut history);

    assert!(history.selection().is_empty());
}

#[test]
fn off_board_pointer_deselects() {
    let (turn, mut history) = game(Seats::both_human());

    turn.handle_pointer(sq(6, 4), &mut history);
    turn.handle_pointer(None, &mut history);

    assert!(history.selection().is_empty());
}

#[test]
fn human_turn_tracks_the_seat_table() {
    let (turn, mut history) = game(Seats::engine_plays(Side::Black));

    assert!(turn.human_turn(&history));
    history.commit(&mv((6, 4), (4, 4))).unwrap();
    assert!(!turn.human_turn(&history));
}

#[test]
fn drive_engine_starts_a_search_then_commits_the_result() {
    let (turn, mut history) = game(Seats::engine_plays(Side::White));
    let mut search: Coordinator = SearchCoordinator::new(ScriptedSearch::first());

    // first call only launches the worker
    assert_eq!(turn.drive_engine(&mut history, &mut search), None);
    assert_ne!(search.status(), SearchStatus::Idle);

    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    let committed = loop {
        if let Some(mv) = turn.drive_engine(&mut history, &mut search) {
            break mv;
        }
        assert!(std::time::Instant::now() < deadline, "engine never moved");
        std::thread::sleep(Duration::from_millis(2));
    };

    assert_eq!(committed, mv((6, 4), (4, 4)));
    assert_eq!(history.move_log(), &[mv((6, 4), (4, 4))]);
    assert_eq!(search.status(), SearchStatus::Idle);
}

#[test]
fn drive_engine_does_nothing_in_a_terminal_position() {
    let rules = ScriptedRules::opening().mate_at(0);
    let turn = TurnCoordinator::new(Seats::engine_plays(Side::White));
    let mut history = HistoryController::new(rules);
    let mut search: Coordinator = SearchCoordinator::new(ScriptedSearch::first());

    assert_eq!(turn.drive_engine(&mut history, &mut search), None);
    assert_eq!(search.status(), SearchStatus::Idle);
}

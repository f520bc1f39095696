use super::*;
use scripted_game::{mv, ScriptedRules, ScriptedSearch};
use std::collections::HashMap;
use std::thread;
use std::time::Duration;

type Coordinator = SearchCoordinator<ScriptedRules, ScriptedSearch>;

fn coordinator(engine: ScriptedSearch) -> Coordinator {
    SearchCoordinator::new(engine)
}

fn wait_ready(search: &mut Coordinator) {
    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    while search.poll() != SearchStatus::Ready {
        assert!(
            std::time::Instant::now() < deadline,
            "search did not finish in time"
        );
        thread::sleep(Duration::from_millis(2));
    }
}

fn start_over_opening(search: &mut Coordinator) -> Vec<scripted_game::ScriptedMove> {
    let rules = ScriptedRules::opening();
    let position = rules.initial_position();
    let legal = rules.legal_moves(&position);
    search.start(position, legal.clone());
    legal
}

#[test]
fn lifecycle_runs_idle_running_ready_idle() {
    let mut search = coordinator(ScriptedSearch::first().with_delay(Duration::from_millis(30)));
    assert_eq!(search.status(), SearchStatus::Idle);

    let legal = start_over_opening(&mut search);
    assert_eq!(search.status(), SearchStatus::Running);

    wait_ready(&mut search);
    assert_eq!(search.status(), SearchStatus::Ready);

    let found = search.retrieve(&legal);
    assert_eq!(found, Some(legal[0].clone()));
    assert_eq!(search.status(), SearchStatus::Idle);
}

#[test]
fn poll_never_blocks_on_a_slow_worker() {
    let mut search = coordinator(ScriptedSearch::first().with_delay(Duration::from_millis(300)));
    start_over_opening(&mut search);

    let began = std::time::Instant::now();
    let status = search.poll();
    assert!(began.elapsed() < Duration::from_millis(100));
    assert_eq!(status, SearchStatus::Running);

    search.cancel();
}

#[test]
fn second_start_is_rejected_while_running() {
    let mut search = coordinator(ScriptedSearch::first().with_delay(Duration::from_millis(50)));
    let legal = start_over_opening(&mut search);
    // a second start while running must not replace the task
    start_over_opening(&mut search);

    wait_ready(&mut search);
    assert_eq!(search.retrieve(&legal), Some(legal[0].clone()));
    // exactly one outcome existed
    assert_eq!(search.status(), SearchStatus::Idle);
    assert_eq!(search.retrieve(&legal), None);
}

#[test]
fn cancel_discards_a_late_result() {
    let mut search = coordinator(ScriptedSearch::first().with_delay(Duration::from_millis(80)));
    start_over_opening(&mut search);
    assert_eq!(search.status(), SearchStatus::Running);

    search.cancel();
    assert_eq!(search.status(), SearchStatus::Idle);

    // let the detached worker finish and try to deliver
    thread::sleep(Duration::from_millis(160));
    assert_eq!(search.status(), SearchStatus::Idle);
    assert_eq!(search.poll(), SearchStatus::Idle);

    // the coordinator is reusable afterwards
    let legal = start_over_opening(&mut search);
    wait_ready(&mut search);
    assert_eq!(search.retrieve(&legal), Some(legal[0].clone()));
}

#[test]
fn cancel_discards_an_unretrieved_outcome() {
    let mut search = coordinator(ScriptedSearch::first());
    let legal = start_over_opening(&mut search);
    wait_ready(&mut search);

    search.cancel();
    assert_eq!(search.status(), SearchStatus::Idle);
    assert_eq!(search.retrieve(&legal), None);
}

#[test]
fn no_move_falls_back_to_a_random_legal_move() {
    let mut search = coordinator(ScriptedSearch::no_move());
    let legal = start_over_opening(&mut search);
    wait_ready(&mut search);

    let found = search.retrieve(&legal).expect("an outcome was ready");
    assert!(legal.contains(&found));
}

#[test]
fn fallback_draws_uniformly_from_the_cache() {
    // two filler moves only
    let rules = ScriptedRules::new(vec![]);
    let position = rules.initial_position();
    let legal = rules.legal_moves(&position);
    assert_eq!(legal.len(), 2);

    let mut search = coordinator(ScriptedSearch::no_move());
    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..200 {
        search.start(position.clone(), legal.clone());
        wait_ready(&mut search);
        let found = search.retrieve(&legal).unwrap();
        *counts.entry(found.to_string()).or_default() += 1;
    }

    assert_eq!(counts.len(), 2);
    for (_, count) in counts {
        assert!(count >= 40, "fallback is far from uniform: {count}/200");
    }
}

#[test]
fn dead_worker_counts_as_no_move() {
    let mut search = coordinator(ScriptedSearch::panicking());
    let legal = start_over_opening(&mut search);

    wait_ready(&mut search);
    let found = search.retrieve(&legal).expect("fallback outcome");
    assert!(legal.contains(&found));
}

#[test]
fn retrieve_without_a_ready_outcome_is_none() {
    let mut search = coordinator(ScriptedSearch::first());
    let legal = vec![mv((6, 4), (4, 4))];
    assert_eq!(search.retrieve(&legal), None);
}

//! Overlapping requests on a single-threaded executor, with responses
//! delivered in an order chosen by the test.
mod common;

use common::*;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use std::cell::RefCell;
use std::rc::Rc;
use vermak_core::prelude::*;

type Slot<T> = Rc<RefCell<Option<T>>>;

fn spawn_search(pool: &LocalPool, s: &Rc<TestSession>) -> Slot<SearchOutcome> {
    let slot: Slot<SearchOutcome> = Rc::default();
    let (s, out) = (s.clone(), slot.clone());
    pool.spawner()
        .spawn_local(async move {
            let outcome = s.search().await.expect("search issued");
            *out.borrow_mut() = Some(outcome);
        })
        .expect("spawn search");
    slot
}

fn spawn_details(pool: &LocalPool, s: &Rc<TestSession>, index: usize) -> Slot<DetailsOutcome> {
    let slot: Slot<DetailsOutcome> = Rc::default();
    let (s, out) = (s.clone(), slot.clone());
    pool.spawner()
        .spawn_local(async move {
            let outcome = s.select_result(index).await.expect("details issued");
            *out.borrow_mut() = Some(outcome);
        })
        .expect("spawn details");
    slot
}

fn named(prefix: &str, n: usize) -> Vec<SearchResult> {
    (0..n)
        .map(|i| result(&format!("{prefix}-{i}"), &format!("{prefix} {i}"), -6.40, 106.77))
        .collect()
}

#[test]
fn stale_search_response_arriving_last_is_discarded() {
    let mut pool = LocalPool::new();
    let s = Rc::new(session(FakePlaces::default()));

    let first = spawn_search(&pool, &s);
    let second = spawn_search(&pool, &s);
    pool.run_until_stalled();
    assert_eq!(s.places().searches.borrow().len(), 2);

    // Second request answers first and renders.
    s.places().resolve_search(1, NearbySearchResponse::ok(named("new", 2)));
    pool.run_until_stalled();
    assert_eq!(*second.borrow(), Some(SearchOutcome::Rendered(2)));

    // First request answers late and must not overwrite the display.
    s.places().resolve_search(0, NearbySearchResponse::ok(named("old", 4)));
    pool.run_until_stalled();
    assert_eq!(*first.borrow(), Some(SearchOutcome::Stale));

    let c = s.controller();
    assert_eq!(c.results().rows.len(), 2);
    assert!(c.placements().iter().all(|p| p.result.place_id.starts_with("new-")));
    assert_eq!(c.map().markers.len(), 2);
}

#[test]
fn in_order_responses_keep_only_the_latest() {
    let mut pool = LocalPool::new();
    let s = Rc::new(session(FakePlaces::default()));

    let first = spawn_search(&pool, &s);
    let second = spawn_search(&pool, &s);
    pool.run_until_stalled();

    s.places().resolve_search(0, NearbySearchResponse::ok(named("old", 3)));
    pool.run_until_stalled();
    assert_eq!(*first.borrow(), Some(SearchOutcome::Stale));
    assert!(s.controller().placements().is_empty());

    s.places().resolve_search(1, NearbySearchResponse::ok(named("new", 1)));
    pool.run_until_stalled();
    assert_eq!(*second.borrow(), Some(SearchOutcome::Rendered(1)));
}

#[test]
fn country_change_invalidates_in_flight_search() {
    let mut pool = LocalPool::new();
    let s = Rc::new(session(FakePlaces::default()));

    let pending = spawn_search(&pool, &s);
    pool.run_until_stalled();
    s.country_changed("all").unwrap();

    s.places().resolve_search(0, NearbySearchResponse::ok(named("late", 3)));
    pool.run_until_stalled();
    assert_eq!(*pending.borrow(), Some(SearchOutcome::Stale));
    assert!(s.controller().results().rows.is_empty());
    assert!(s.controller().map().markers.is_empty());
}

#[test]
fn details_for_a_replaced_result_set_are_dropped() {
    let mut pool = LocalPool::new();
    let places = FakePlaces::default()
        .reply_search(NearbySearchResponse::ok(named("old", 2)))
        .reply_search(NearbySearchResponse::ok(named("new", 2)));
    let s = Rc::new(session(places));

    spawn_search(&pool, &s);
    pool.run_until_stalled();

    let pending = spawn_details(&pool, &s, 1);
    pool.run_until_stalled();

    spawn_search(&pool, &s);
    pool.run_until_stalled();

    s.places().resolve_details(0, PlaceDetailsResponse::ok(details("old 1")));
    pool.run_until_stalled();
    assert_eq!(*pending.borrow(), Some(DetailsOutcome::Stale));
    assert!(s.controller().map().opened.is_none());
}

#[test]
fn only_the_latest_click_opens_the_panel() {
    let mut pool = LocalPool::new();
    let places = FakePlaces::default().reply_search(NearbySearchResponse::ok(named("p", 3)));
    let s = Rc::new(session(places));
    spawn_search(&pool, &s);
    pool.run_until_stalled();

    let a = spawn_details(&pool, &s, 0);
    let b = spawn_details(&pool, &s, 2);
    pool.run_until_stalled();

    s.places().resolve_details(1, PlaceDetailsResponse::ok(details("p 2")));
    s.places().resolve_details(0, PlaceDetailsResponse::ok(details("p 0")));
    pool.run_until_stalled();

    assert_eq!(*b.borrow(), Some(DetailsOutcome::Shown));
    assert_eq!(*a.borrow(), Some(DetailsOutcome::Stale));
    let c = s.controller();
    let (anchor, content) = c.map().opened.as_ref().unwrap();
    assert_eq!(*anchor, 2);
    assert_eq!(content.name, "p 2");
}

#[test]
fn searches_carry_increasing_generations() {
    let mut pool = LocalPool::new();
    let s = Rc::new(session(FakePlaces::default()));
    spawn_search(&pool, &s);
    spawn_search(&pool, &s);
    spawn_search(&pool, &s);
    pool.run_until_stalled();

    let gens: Vec<_> = s.places().searches.borrow().iter().map(|r| r.generation).collect();
    assert!(gens.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(s.controller().generation(), gens[2]);
}

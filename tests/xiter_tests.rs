//! Unit tests for the lazy `Xiter` wrapper.

#![cfg(feature = "collection")]

use std::cell::Cell;

use rstest::rstest;
use xfp::collection::{Xiter, Xlist};
use xfp::xresult::Xresult;

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn combinators_consume_nothing_before_a_terminal() {
    let produced = Cell::new(0);
    let source = Xiter::new(0..100).map(|value| {
        produced.set(produced.get() + 1);
        value
    });

    let limited = source.filter(|value| value % 2 == 0).take(2);
    assert_eq!(produced.get(), 0);

    assert_eq!(limited.to_xlist(), Xlist::from(vec![0, 2]));
    assert_eq!(produced.get(), 3);
}

#[rstest]
fn unbounded_sources_are_usable_once_limited() {
    let evens = Xiter::new(0..)
        .filter(|value| value % 2 == 0)
        .take_while(|value| *value < 6)
        .to_xlist();
    assert_eq!(evens, Xlist::from(vec![0, 2, 4]));
}

#[rstest]
fn repeat_and_cycle_generate_unbounded_streams() {
    assert_eq!(
        Xiter::repeat(7).take(3).to_xlist(),
        Xlist::from(vec![7, 7, 7])
    );
    assert_eq!(
        Xiter::cycle(vec![1, 2]).take(5).to_xlist(),
        Xlist::from(vec![1, 2, 1, 2, 1])
    );
}

// =============================================================================
// Combinators Agree With Their Eager Counterparts
// =============================================================================

#[rstest]
fn map_filter_agree_with_xlist() {
    let lazy = Xiter::new(1..=4)
        .map(|value| value * value)
        .filter(|value| value % 2 == 0)
        .to_xlist();
    let eager = Xlist::from(vec![1, 2, 3, 4])
        .map(|value| value * value)
        .filter(|value| value % 2 == 0);
    assert_eq!(lazy, eager);
}

#[rstest]
fn flat_map_expands_each_element() {
    let expanded = Xiter::new(1..=3)
        .flat_map(|value| vec![value, 5])
        .to_xlist();
    assert_eq!(expanded, Xlist::from(vec![1, 5, 2, 5, 3, 5]));
}

#[rstest]
fn structural_combinators_reshape_the_stream() {
    assert_eq!(
        Xiter::new(vec![2, 3]).prepended(1).to_xlist(),
        Xlist::from(vec![1, 2, 3])
    );
    assert_eq!(
        Xiter::new(vec![1, 2]).appended(3).to_xlist(),
        Xlist::from(vec![1, 2, 3])
    );
    assert_eq!(
        Xiter::new(vec![1, 2]).chain(vec![3, 4]).to_xlist(),
        Xlist::from(vec![1, 2, 3, 4])
    );
    assert_eq!(
        Xiter::new(vec![1, 2, 3]).tail().to_xlist(),
        Xlist::from(vec![2, 3])
    );
    assert_eq!(
        Xiter::new(vec![1, 2]).zip(vec!["a", "b", "c"]).to_xlist(),
        Xlist::from(vec![(1, "a"), (2, "b")])
    );
}

// =============================================================================
// Terminals
// =============================================================================

#[rstest]
fn get_fr_advances_to_the_requested_index() {
    assert_eq!(Xiter::new(0..10).get_fr(3), Xresult::Right(3));
}

#[rstest]
fn get_fr_reports_how_many_elements_were_produced() {
    let error = Xiter::new(0..3).get_fr(7).left().unwrap();
    assert_eq!(error.operation(), "get");
    assert_eq!(error.index(), 7);
    assert_eq!(error.length(), 3);
}

#[rstest]
fn head_fr_consumes_the_first_element() {
    assert_eq!(Xiter::new(5..8).head_fr(), Xresult::Right(5));
    assert!(Xiter::new(0..0).head_fr().is_left());
}

#[rstest]
fn fold_and_reduce_drive_the_iterator() {
    assert_eq!(Xiter::new(1..=3).fold(10, |total, value| total + value), 16);
    assert_eq!(Xiter::new(1..=3).reduce(|left, right| left + right), Some(6));
    assert!(Xiter::new(0..0).reduce_fr(|left, right| left + right).is_left());
    assert_eq!(Xiter::new(1..=3).min(), Some(1));
    assert_eq!(Xiter::new(1..=3).max(), Some(3));
}

#[rstest]
fn foreach_visits_in_order() {
    let mut seen = Vec::new();
    Xiter::new(1..=3).foreach(|value| seen.push(value));
    assert_eq!(seen, vec![1, 2, 3]);
}

// =============================================================================
// Duplication and Plain Iteration
// =============================================================================

#[rstest]
fn duplicate_advances_independently() {
    let mut first = Xiter::new(0..5);
    assert_eq!(first.next(), Some(0));

    let mut second = first.duplicate();
    assert_eq!(first.next(), Some(1));
    assert_eq!(first.next(), Some(2));
    assert_eq!(second.next(), Some(1));
}

#[rstest]
fn xiter_plugs_into_for_loops() {
    let mut total = 0;
    for value in Xiter::new(1..=4) {
        total += value;
    }
    assert_eq!(total, 10);
}

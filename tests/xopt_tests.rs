//! Unit tests for the `Xopt` façade.
//!
//! `Xopt<X>` is an `Xresult<(), X>`: the unit type is the absent
//! marker on the LEFT arm, so "some" is any RIGHT and "empty" is the
//! single canonical LEFT.

use rstest::rstest;
use xfp::xresult::{XrBranch, Xopt, Xresult};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn from_optional_lifts_a_present_value() {
    assert_eq!(Xopt::from_optional(Some(3)), Xopt::some(3));
    assert_eq!(Xopt::from_optional(Some(3)), Xresult::Right(3));
}

#[rstest]
fn from_optional_lifts_an_absent_value() {
    assert_eq!(Xopt::<i32>::from_optional(None), Xopt::EMPTY);
}

#[rstest]
fn empty_is_the_canonical_left() {
    assert_eq!(Xopt::<i32>::EMPTY.branch(), XrBranch::Left);
    assert_eq!(Xopt::<i32>::EMPTY, Xresult::Left(()));
}

#[rstest]
fn some_is_a_plain_right() {
    let present = Xopt::some(3);
    assert!(present.is_some());
    assert!(present.is_right());
    assert!(!present.is_empty());
}

// =============================================================================
// Option Interop
// =============================================================================

#[rstest]
#[case(Some(3))]
#[case(None)]
fn option_roundtrip(#[case] value: Option<i32>) {
    assert_eq!(Xopt::from_optional(value).into_option(), value);
}

#[rstest]
fn from_impls_mirror_the_constructors() {
    let lifted: Xopt<i32> = Some(3).into();
    assert_eq!(lifted, Xopt::some(3));

    let lowered: Option<i32> = Xopt::some(3).into();
    assert_eq!(lowered, Some(3));
}

// =============================================================================
// Combinators Through the Façade
// =============================================================================

#[rstest]
fn empty_short_circuits_the_main_channel() {
    let mapped = Xopt::<i32>::EMPTY.map(|value| value + 1);
    assert_eq!(mapped, Xopt::EMPTY);
    assert_eq!(mapped.get_or_else(0), 0);
}

#[rstest]
fn some_flows_through_the_main_channel() {
    let chained = Xopt::some(3)
        .map(|value| value + 3)
        .flat_map(|value| if value > 0 { Xopt::some(value) } else { Xopt::EMPTY });
    assert_eq!(chained, Xopt::some(6));
}

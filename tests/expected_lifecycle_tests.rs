//! Lifecycle tests for Expected<E, U>.
//!
//! Payloads are instrumented probes that log every construction, clone,
//! clone-assignment and drop, so these tests observe exactly when a payload
//! is created or destroyed by each transition.

mod common;

use common::{Event, Ledger, Probe, Side};
use expected::{Expected, NULL_EXPECT, State};
use rstest::{fixture, rstest};

type Probed = Expected<Probe, Probe>;

#[fixture]
fn ledger() -> Ledger {
    Ledger::new()
}

fn assert_balanced(ledger: &Ledger) {
    assert_eq!(ledger.live(Side::Expected), 0, "leaked expected payload: {:?}", ledger.events());
    assert_eq!(ledger.live(Side::Unexpected), 0, "leaked unexpected payload: {:?}", ledger.events());
}

// =============================================================================
// Construction and Drop
// =============================================================================

#[rstest]
fn empty_container_owns_nothing(ledger: Ledger) {
    {
        let container: Probed = Expected::default();
        let marked: Probed = NULL_EXPECT.into();
        assert!(container.is_null());
        assert!(marked.is_null());
    }
    assert!(ledger.events().is_empty());
}

#[rstest]
fn drop_releases_expected_payload_once(ledger: Ledger) {
    {
        let _container: Probed = Expected::from_expected(ledger.expected(1));
    }
    assert_eq!(
        ledger.events(),
        vec![Event::Constructed(Side::Expected, 1), Event::Dropped(Side::Expected, 1)]
    );
}

#[rstest]
fn drop_releases_unexpected_payload_once(ledger: Ledger) {
    {
        let _container: Probed = Expected::from_unexpected(ledger.unexpected(1));
    }
    assert_eq!(
        ledger.events(),
        vec![Event::Constructed(Side::Unexpected, 1), Event::Dropped(Side::Unexpected, 1)]
    );
}

// =============================================================================
// Assignment
// =============================================================================

#[rstest]
fn set_expected_on_expected_never_touches_unexpected(ledger: Ledger) {
    let mut container: Probed = Expected::from_expected(ledger.expected(1));
    container.set_expected(ledger.expected(2));
    container.set_expected(ledger.expected(3));

    assert_eq!(container.get_expected().map(|probe| probe.id), Ok(3));
    assert_eq!(ledger.constructed(Side::Unexpected), 0);
    assert_eq!(ledger.dropped(Side::Unexpected), 0);
    assert_eq!(ledger.live(Side::Expected), 1);

    drop(container);
    assert_balanced(&ledger);
}

#[rstest]
fn set_unexpected_on_expected_drops_old_payload_exactly_once(ledger: Ledger) {
    let mut container: Probed = Expected::from_expected(ledger.expected(1));
    container.set_unexpected(ledger.unexpected(7));

    assert_eq!(container.state(), State::HoldsUnexpected);
    assert_eq!(ledger.dropped(Side::Expected), 1);
    assert_eq!(
        ledger.events(),
        vec![
            Event::Constructed(Side::Expected, 1),
            Event::Constructed(Side::Unexpected, 7),
            Event::Dropped(Side::Expected, 1),
        ]
    );

    drop(container);
    assert_eq!(ledger.dropped(Side::Expected), 1);
    assert_balanced(&ledger);
}

#[rstest]
fn set_expected_on_empty_constructs_without_drops(ledger: Ledger) {
    let mut container: Probed = Expected::empty();
    container.set_expected(ledger.expected(1));

    assert_eq!(ledger.events(), vec![Event::Constructed(Side::Expected, 1)]);
    drop(container);
    assert_balanced(&ledger);
}

#[rstest]
fn reset_and_assign_null_release_payload(ledger: Ledger) {
    let mut container: Probed = Expected::from_unexpected(ledger.unexpected(1));
    container.reset();
    assert!(container.is_null());
    assert_eq!(ledger.live(Side::Unexpected), 0);

    container.set_expected(ledger.expected(2));
    container.assign_null(NULL_EXPECT);
    assert!(container.is_null());
    assert_balanced(&ledger);

    container.reset();
    assert_eq!(ledger.events().len(), 4);
}

#[rstest]
fn assign_switches_alternative_and_balances(ledger: Ledger) {
    let mut container: Probed = Expected::from_expected(ledger.expected(1));
    container.assign(Expected::from_unexpected(ledger.unexpected(2)));
    container.assign(Expected::from_unexpected(ledger.unexpected(3)));
    container.assign(Expected::empty());

    assert!(container.is_null());
    assert_balanced(&ledger);
}

#[rstest]
fn take_moves_payload_without_copies(ledger: Ledger) {
    let mut source: Probed = Expected::from_expected(ledger.expected(1));
    let moved = source.take();

    assert!(source.is_null());
    assert_eq!(moved.get_expected().map(|probe| probe.id), Ok(1));
    assert_eq!(ledger.events(), vec![Event::Constructed(Side::Expected, 1)]);

    drop(moved);
    assert_balanced(&ledger);
}

#[rstest]
fn rust_move_transfers_ownership_without_copies(ledger: Ledger) {
    let source: Probed = Expected::from_unexpected(ledger.unexpected(4));
    let destination = source;

    assert_eq!(destination.get_unexpected().map(|probe| probe.id), Ok(4));
    assert_eq!(ledger.events(), vec![Event::Constructed(Side::Unexpected, 4)]);
}

// =============================================================================
// Emplace
// =============================================================================

#[rstest]
fn emplace_same_alternative_drops_before_constructing(ledger: Ledger) {
    let mut container: Probed = Expected::from_expected(ledger.expected(1));
    container.emplace_expected(|| ledger.expected(2));

    assert_eq!(
        ledger.events(),
        vec![
            Event::Constructed(Side::Expected, 1),
            Event::Dropped(Side::Expected, 1),
            Event::Constructed(Side::Expected, 2),
        ]
    );
    drop(container);
    assert_balanced(&ledger);
}

#[rstest]
fn emplace_other_alternative_drops_before_constructing(ledger: Ledger) {
    let mut container: Probed = Expected::from_expected(ledger.expected(1));
    container.emplace_unexpected(|| ledger.unexpected(2));

    assert_eq!(container.state(), State::HoldsUnexpected);
    assert_eq!(
        ledger.events(),
        vec![
            Event::Constructed(Side::Expected, 1),
            Event::Dropped(Side::Expected, 1),
            Event::Constructed(Side::Unexpected, 2),
        ]
    );
}

#[rstest]
fn emplace_unexpected_on_unexpected_drops_first(ledger: Ledger) {
    let mut container: Probed = Expected::from_unexpected(ledger.unexpected(1));
    container.emplace_unexpected(|| ledger.unexpected(2));

    assert_eq!(
        ledger.events(),
        vec![
            Event::Constructed(Side::Unexpected, 1),
            Event::Dropped(Side::Unexpected, 1),
            Event::Constructed(Side::Unexpected, 2),
        ]
    );
}

#[rstest]
fn emplace_differs_from_assignment_fast_path(ledger: Ledger) {
    let mut assigned: Probed = Expected::from_expected(ledger.expected(1));
    assigned.set_expected(ledger.expected(2));
    let assigned_events = ledger.events();
    ledger.clear();

    let mut emplaced: Probed = Expected::from_expected(ledger.expected(1));
    emplaced.emplace_expected(|| ledger.expected(2));
    let emplaced_events = ledger.events();

    // Assignment builds the new value before the old one goes away.
    assert_eq!(assigned_events[1], Event::Constructed(Side::Expected, 2));
    assert_eq!(emplaced_events[1], Event::Dropped(Side::Expected, 1));
}

#[rstest]
fn emplace_on_empty_only_constructs(ledger: Ledger) {
    let mut container: Probed = Expected::empty();
    container.emplace_expected(|| ledger.expected(1));
    assert_eq!(ledger.events(), vec![Event::Constructed(Side::Expected, 1)]);
}

// =============================================================================
// Copy Semantics
// =============================================================================

#[rstest]
fn clone_deep_copies_active_payload(ledger: Ledger) {
    let original: Probed = Expected::from_unexpected(ledger.unexpected(3));
    let copy = original.clone();

    assert_eq!(copy, original);
    assert_eq!(ledger.events(), vec![Event::Constructed(Side::Unexpected, 3), Event::Cloned(Side::Unexpected, 3)]);

    drop(copy);
    drop(original);
    assert_balanced(&ledger);
}

#[rstest]
fn clone_of_empty_is_a_no_op(ledger: Ledger) {
    let original: Probed = Expected::empty();
    let copy = original.clone();
    assert!(copy.is_null());
    assert!(ledger.events().is_empty());
}

#[rstest]
fn clone_from_same_alternative_reuses_payload(ledger: Ledger) {
    let source: Probed = Expected::from_expected(ledger.expected(5));
    let mut target: Probed = Expected::from_expected(ledger.expected(1));
    ledger.clear();

    target.clone_from(&source);

    assert_eq!(target.get_expected().map(|probe| probe.id), Ok(5));
    assert_eq!(ledger.events(), vec![Event::CloneAssigned(Side::Expected, 5)]);
}

#[rstest]
fn clone_from_other_alternative_drops_then_clones(ledger: Ledger) {
    let source: Probed = Expected::from_unexpected(ledger.unexpected(5));
    let mut target: Probed = Expected::from_expected(ledger.expected(1));
    ledger.clear();

    target.clone_from(&source);

    assert_eq!(target.state(), State::HoldsUnexpected);
    assert_eq!(
        ledger.events(),
        vec![Event::Dropped(Side::Expected, 1), Event::Cloned(Side::Unexpected, 5)]
    );
}

#[rstest]
fn clone_from_empty_empties_target(ledger: Ledger) {
    let source: Probed = Expected::empty();
    let mut target: Probed = Expected::from_unexpected(ledger.unexpected(1));

    target.clone_from(&source);

    assert!(target.is_null());
    assert_balanced(&ledger);
}

// =============================================================================
// Read-only Access
// =============================================================================

#[rstest]
fn accessors_never_construct_or_drop(ledger: Ledger) {
    let container: Probed = Expected::from_expected(ledger.expected(1));
    let fallback = ledger.expected(99);
    ledger.clear();

    let _ = container.get_expected();
    let _ = container.get_unexpected();
    let _ = container.value_or(&fallback);
    let _ = container.state();
    let _ = bool::from(&container);
    let _ = container.as_ref();

    assert!(ledger.events().is_empty());
}

//! Tests for lazy, minimal recomputation of cached views.

use crate::{
    model::{raid::GroupConfig, signup::SignupId},
    roster::graph::View,
};

use super::*;

/// Reads every view once so that each holds a cached value.
fn warm(roster: &RaidRoster) {
    roster.seated();
    roster.unseated();
    roster.waiting_list();
    roster.waiting_list_by_account();
    roster.seated_by_role();
    roster.account_signups();
    roster.account_waiting_list();
    roster.account_seated();
    roster.total_slots();
    roster.more_than_one_group();
    roster.hidden_and_not_finalized();
    roster.available_characters();
    roster.current_account_seated();
    roster.current_account_signed_up();
    roster.can_be_seated(SignupId(1));
}

/// Tests that views are computed on first read only.
///
/// Expected: each view computed once across repeated reads
#[test]
fn views_are_computed_lazily_once() {
    let fixture = Fixture::new();
    let roster = roster(&fixture);
    assert_eq!(roster.stats().total(), 0);

    warm(&roster);
    warm(&roster);

    for view in View::ALL {
        assert_eq!(roster.stats().count(view), 1, "{:?} computed more than once", view);
        assert!(roster.is_view_clean(view));
    }
}

/// Tests that clean views return the same cached value.
///
/// Expected: pointer-equal Arcs across reads
#[test]
fn clean_views_are_referentially_stable() {
    let fixture = Fixture::new();
    let roster = roster(&fixture);

    let first = roster.waiting_list();
    let second = roster.waiting_list();

    assert!(Arc::ptr_eq(&first, &second));
}

/// Tests that seating recomputes only views depending on seating.
///
/// Expected: waiting list and seated views recomputed once; membership and capacity views
/// untouched and still pointer-equal
#[test]
fn seating_recomputes_only_dependent_views() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    warm(&roster);
    let available_before = roster.available_characters();

    roster.set_seated(SignupId(3), true).unwrap();

    assert!(!roster.is_view_clean(View::Seated));
    assert!(!roster.is_view_clean(View::WaitingList));
    assert!(roster.is_view_clean(View::AvailableCharacters));
    assert!(roster.is_view_clean(View::SignedUpCharacterIds));

    assert_eq!(ids(&roster.waiting_list()), vec![4]);
    assert_eq!(ids(&roster.seated()), vec![1, 3]);
    assert_eq!(roster.stats().count(View::Seated), 2);
    assert_eq!(roster.stats().count(View::Unseated), 2);
    assert_eq!(roster.stats().count(View::WaitingList), 2);

    let available_after = roster.available_characters();
    assert!(Arc::ptr_eq(&available_before, &available_after));
    assert_eq!(roster.account_signups(), 3);
    assert_eq!(roster.total_slots(), 10);
    for view in [
        View::SignedUpCharacterIds,
        View::AvailableCharacters,
        View::AccountSignups,
        View::TotalSlots,
        View::MoreThanOneGroup,
        View::SortedRoles,
        View::HiddenAndNotFinalized,
    ] {
        assert_eq!(roster.stats().count(view), 1, "{:?} was recomputed", view);
    }
}

/// Tests that dirty views stay unrecomputed until read.
///
/// Expected: no recomputation happens during the mutation itself
#[test]
fn recomputation_waits_for_next_read() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    warm(&roster);
    let before = roster.stats().total();

    roster.set_seated(SignupId(3), true).unwrap();
    roster.set_seated(SignupId(4), true).unwrap();

    assert_eq!(roster.stats().total(), before);
    assert_eq!(ids(&roster.waiting_list()), Vec::<i64>::new());
    assert_eq!(roster.stats().count(View::WaitingList), 2);
}

/// Tests that setting the seated flag to its current value invalidates nothing.
///
/// Expected: every view stays clean
#[test]
fn no_op_seating_keeps_cache() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    warm(&roster);

    roster.set_seated(SignupId(1), true).unwrap();
    roster.set_groups(GroupConfig::new(5, 2));
    roster.set_hidden(false);

    for view in View::ALL {
        assert!(roster.is_view_clean(view), "{:?} was invalidated", view);
    }
}

/// Tests that adding a signup reaches the available characters through the id set.
///
/// Expected: membership views dirty, role and capacity views clean
#[test]
fn adding_signup_invalidates_membership_views() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    warm(&roster);
    let ayla = Arc::clone(&roster.available_characters()[0]);

    roster.add_signup(ayla, Arc::clone(&fixture.dps)).unwrap();

    assert!(!roster.is_view_clean(View::SignedUpCharacterIds));
    assert!(!roster.is_view_clean(View::AvailableCharacters));
    assert!(!roster.is_view_clean(View::CurrentAccountSignedUp));
    assert!(roster.is_view_clean(View::SortedRoles));
    assert!(roster.is_view_clean(View::TotalSlots));
    assert!(roster.available_characters().is_empty());
}

/// Tests that changing roles leaves signup-derived views alone.
///
/// Expected: only role views recomputed
#[test]
fn changing_roles_only_touches_role_views() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    warm(&roster);

    roster.set_roles(vec![Arc::clone(&fixture.tank)]);

    assert!(!roster.is_view_clean(View::SortedRoles));
    assert!(!roster.is_view_clean(View::SeatedByRole));
    assert!(roster.is_view_clean(View::Seated));
    assert!(roster.is_view_clean(View::WaitingList));
    assert_eq!(roster.seated_by_role().len(), 1);
    assert_eq!(roster.stats().count(View::Seated), 1);
}

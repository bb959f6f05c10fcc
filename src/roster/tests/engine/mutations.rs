//! Tests for the RaidRoster mutation boundary.

use crate::{
    error::RosterError,
    model::{raid::GroupConfig, signup::SignupId},
};

use super::*;

/// Tests signing up a new character.
///
/// Expected: new id after the highest existing one, appended unseated and waiting
#[test]
fn add_signup_appends_unseated() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    let eve = character(40, "Eve", 60, &account(4, "Delta#4"));

    let signup_id = roster.add_signup(eve, Arc::clone(&fixture.healer)).unwrap();

    assert_eq!(signup_id, SignupId(5));
    assert_eq!(ids(roster.signups()), vec![1, 2, 3, 4, 5]);
    assert!(!roster.signups()[4].seated);
    assert_eq!(ids(&roster.waiting_list()), vec![3, 4, 5]);
}

/// Tests that a character cannot sign up twice.
///
/// Expected: Err(AlreadySignedUp), roster unchanged
#[test]
fn add_signup_rejects_duplicate_character() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);

    let result = roster.add_signup(Arc::clone(&fixture.cyra), Arc::clone(&fixture.dps));

    assert_eq!(
        result,
        Err(RosterError::AlreadySignedUp {
            character_id: fixture.cyra.id
        })
    );
    assert_eq!(roster.signups().len(), 4);
}

/// Tests that a signup must use one of the raid's roles.
///
/// Expected: Err(UnknownRole)
#[test]
fn add_signup_rejects_unknown_role() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    let eve = character(40, "Eve", 60, &account(4, "Delta#4"));
    let bard = role(9, "bard");

    let result = roster.add_signup(eve, Arc::clone(&bard));

    assert_eq!(result, Err(RosterError::UnknownRole { role_id: bard.id }));
}

/// Tests withdrawing a signup.
///
/// Expected: the character becomes available again
#[test]
fn remove_signup_makes_character_available() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    assert!(roster
        .available_characters()
        .iter()
        .all(|character| character.id != fixture.brom.id));

    let removed = roster.remove_signup(SignupId(2)).unwrap();

    assert_eq!(removed.character.id, fixture.brom.id);
    assert_eq!(ids(roster.signups()), vec![1, 3, 4]);
    let available: Vec<i64> = roster
        .available_characters()
        .iter()
        .map(|character| character.id.0)
        .collect();
    assert_eq!(available, vec![12, 11]);
}

/// Tests removing an unknown signup.
///
/// Expected: Err(SignupNotFound)
#[test]
fn remove_signup_rejects_unknown_id() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);

    assert_eq!(
        roster.remove_signup(SignupId(99)).map(|signup| signup.id),
        Err(RosterError::SignupNotFound {
            signup_id: SignupId(99)
        })
    );
}

/// Tests unseating the only seated character of an account.
///
/// Expected: both of Alpha's characters return to the waiting list
#[test]
fn unseating_returns_account_to_waiting_list() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);

    roster.set_seated(SignupId(1), false).unwrap();

    assert!(roster.seated().is_empty());
    assert_eq!(ids(&roster.waiting_list()), vec![1, 2, 3, 4]);
    assert_eq!(roster.waiting_list_by_account().len(), 3);
    assert!(roster.current_account_seated().is_none());
}

/// Tests seating a waiting character.
///
/// Expected: Bravo leaves the waiting list and the seated list is ordered by name
#[test]
fn seating_removes_account_from_waiting_list() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);

    roster.set_seated(SignupId(3), true).unwrap();

    assert_eq!(ids(&roster.seated()), vec![1, 3]);
    assert_eq!(ids(&roster.waiting_list()), vec![4]);
    assert_eq!(roster.account_seated(), 2);
    assert!(!roster.can_be_seated(SignupId(3)));
}

/// Tests seating an unknown signup.
///
/// Expected: Err(SignupNotFound)
#[test]
fn set_seated_rejects_unknown_id() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);

    assert_eq!(
        roster.set_seated(SignupId(99), true),
        Err(RosterError::SignupNotFound {
            signup_id: SignupId(99)
        })
    );
}

/// Tests seating beyond capacity.
///
/// Expected: Ok; capacity is the organizer's responsibility
#[test]
fn set_seated_does_not_enforce_capacity() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);
    roster.set_groups(GroupConfig::new(1, 1));

    assert!(roster.set_seated(SignupId(3), true).is_ok());
    assert_eq!(roster.seated().len(), 2);
    assert_eq!(roster.total_slots(), 1);
}

/// Tests the raid configuration mutations.
///
/// Expected: capacity, status and role views follow the new configuration
#[test]
fn configuration_mutations_update_views() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);

    roster.set_groups(GroupConfig::new(5, 1));
    roster.set_hidden(true);
    roster.set_roles(vec![Arc::clone(&fixture.dps)]);

    assert_eq!(roster.total_slots(), 5);
    assert!(!roster.more_than_one_group());
    assert!(roster.hidden_and_not_finalized());
    assert_eq!(roster.seated_by_role().len(), 1);

    roster.set_finalized(true);
    assert!(!roster.hidden_and_not_finalized());
}

/// Tests switching the viewing account.
///
/// Expected: account-scoped views follow the new viewer
#[test]
fn set_current_account_switches_viewer() {
    let fixture = Fixture::new();
    let mut roster = roster(&fixture);

    roster.set_current_account(Some(CurrentAccount::new(
        Arc::clone(&fixture.bravo),
        vec![Arc::clone(&fixture.cyra)],
    )));

    assert!(roster.available_characters().is_empty());
    assert!(roster.current_account_seated().is_none());
    assert_eq!(ids(&roster.current_account_signed_up()), vec![3]);

    roster.set_current_account(None);
    assert!(roster.current_account_signed_up().is_empty());
}

//! Tests for the views exposed by RaidRoster.

use crate::model::signup::SignupId;

use super::*;

/// Tests the seated, unseated and waiting list views of the fixture.
///
/// Expected: Anna seated; Brom unseated but not waiting because Alpha holds a seat
#[test]
fn derives_roster_views() {
    let fixture = Fixture::new();
    let roster = roster(&fixture);

    assert_eq!(ids(&roster.seated()), vec![1]);
    assert_eq!(ids(&roster.unseated()), vec![2, 3, 4]);
    assert_eq!(ids(&roster.waiting_list()), vec![3, 4]);
    assert!(roster.has_seated());
    assert!(roster.has_waiting_list());
}

/// Tests the account statistics.
///
/// Expected: 3 accounts signed up, 2 waiting, 1 seated
#[test]
fn derives_account_statistics() {
    let fixture = Fixture::new();
    let roster = roster(&fixture);

    assert_eq!(roster.account_signups(), 3);
    assert_eq!(roster.account_waiting_list(), 2);
    assert_eq!(roster.account_seated(), 1);
}

/// Tests the capacity and status views.
///
/// Expected: 10 slots across 2 groups, visible raid
#[test]
fn derives_capacity_and_status() {
    let fixture = Fixture::new();
    let roster = roster(&fixture);

    assert_eq!(roster.total_slots(), 10);
    assert!(roster.more_than_one_group());
    assert!(!roster.hidden_and_not_finalized());
}

/// Tests role grouping of the seated roster.
///
/// Expected: Anna under tank, other roles empty
#[test]
fn groups_seated_by_role() {
    let fixture = Fixture::new();
    let roster = roster(&fixture);

    let groups = roster.seated_by_role();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].role.slug, "tank");
    assert_eq!(ids(&groups[0].signups), vec![1]);
    assert!(groups[1].signups.is_empty());
    assert!(groups[2].signups.is_empty());
}

/// Tests the views scoped to the current account.
///
/// Expected: Ayla available, Anna seated, Anna and Brom signed up
#[test]
fn derives_current_account_views() {
    let fixture = Fixture::new();
    let roster = roster(&fixture);

    let available: Vec<i64> = roster
        .available_characters()
        .iter()
        .map(|character| character.id.0)
        .collect();
    assert_eq!(available, vec![12]);

    let seated = roster.current_account_seated();
    assert_eq!(seated.as_ref().as_ref().map(|signup| signup.id), Some(SignupId(1)));
    assert_eq!(ids(&roster.current_account_signed_up()), vec![1, 2]);
}

/// Tests the account-scoped views without a viewing account.
///
/// Expected: all empty
#[test]
fn anonymous_viewer_has_no_account_views() {
    let fixture = Fixture::new();
    let roster = RaidRoster::new(fixture.raid());

    assert!(roster.available_characters().is_empty());
    assert!(roster.current_account_seated().is_none());
    assert!(roster.current_account_signed_up().is_empty());
}

/// Tests that only waiting-list signups can be seated.
///
/// Expected: Cyra and Dax can be seated; Anna (seated) and Brom (account seated) cannot
#[test]
fn can_be_seated_follows_waiting_list() {
    let fixture = Fixture::new();
    let roster = roster(&fixture);

    assert!(!roster.can_be_seated(SignupId(1)));
    assert!(!roster.can_be_seated(SignupId(2)));
    assert!(roster.can_be_seated(SignupId(3)));
    assert!(roster.can_be_seated(SignupId(4)));
    assert!(!roster.can_be_seated(SignupId(99)));
}

//! Tests for the account statistics, capacity and lookup derivations.

use crate::{
    model::{account::AccountId, raid::GroupConfig, signup::SignupId},
    roster::derive::{
        can_be_seated, current_account_seated, current_account_signed_up,
        distinct_account_ids, hidden_and_not_finalized, more_than_one_group,
        signed_up_character_ids, total_slots,
    },
};

use super::*;

/// Tests counting distinct accounts across signups.
///
/// Expected: 3 accounts for 4 signups
#[test]
fn counts_distinct_accounts() {
    let fixture = Fixture::new();

    assert_eq!(distinct_account_ids(&fixture.signups()).len(), 3);
}

/// Tests computing total slots.
///
/// Expected: 5 * 4 = 20
#[test]
fn total_slots_multiplies_size_by_number() {
    assert_eq!(total_slots(&GroupConfig::new(5, 4)), 20);
    assert_eq!(total_slots(&GroupConfig::new(10, 0)), 0);
}

/// Tests a group layout whose seat count exceeds `u32`.
///
/// Expected: u32::MAX instead of an overflow
#[test]
fn total_slots_saturates_on_huge_layouts() {
    assert_eq!(total_slots(&GroupConfig::new(70_000, 70_000)), u32::MAX);
    assert_eq!(total_slots(&GroupConfig::new(u32::MAX, 2)), u32::MAX);
}

/// Tests the group count and raid status flags.
///
/// Expected: flags follow the raid configuration
#[test]
fn derives_raid_flags() {
    assert!(!more_than_one_group(&GroupConfig::new(5, 1)));
    assert!(more_than_one_group(&GroupConfig::new(5, 2)));

    assert!(hidden_and_not_finalized(true, false));
    assert!(!hidden_and_not_finalized(true, true));
    assert!(!hidden_and_not_finalized(false, false));
}

/// Tests collecting signed-up character ids.
///
/// Expected: one id per signup
#[test]
fn collects_signed_up_character_ids() {
    let fixture = Fixture::new();

    let character_ids = signed_up_character_ids(&fixture.signups());

    assert_eq!(character_ids.len(), 4);
    assert!(character_ids.contains(&fixture.dax.id));
}

/// Tests finding the first seated signup of an account.
///
/// Expected: the first match in seated order, None when the account holds no seat
#[test]
fn finds_current_account_seated() {
    let fixture = Fixture::new();
    let seated = vec![
        signup(2, &fixture.brom, &fixture.dps, true),
        signup(1, &fixture.anna, &fixture.tank, true),
    ];

    let found = current_account_seated(&seated, fixture.alpha.id);

    assert_eq!(found.map(|signup| signup.id), Some(SignupId(2)));
    assert!(current_account_seated(&seated, fixture.bravo.id).is_none());
    assert!(current_account_seated(&seated, AccountId(404)).is_none());
}

/// Tests listing every signup of an account, seated or not.
///
/// Expected: Anna (seated) and Brom (unseated)
#[test]
fn lists_current_account_signed_up() {
    let fixture = Fixture::new();

    let signed_up = current_account_signed_up(&fixture.signups(), fixture.alpha.id);

    assert_eq!(ids(&signed_up), vec![1, 2]);
    assert!(current_account_signed_up(&fixture.signups(), AccountId(404)).is_empty());
}

/// Tests that only waiting signups can be seated.
///
/// Expected: true for listed ids only
#[test]
fn can_be_seated_checks_waiting_list_membership() {
    let fixture = Fixture::new();
    let waiting = vec![signup(3, &fixture.cyra, &fixture.healer, false)];

    assert!(can_be_seated(SignupId(3), &waiting));
    assert!(!can_be_seated(SignupId(2), &waiting));
    assert!(!can_be_seated(SignupId(3), &[]));
}

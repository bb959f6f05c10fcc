//! Factory functions for snapshot records.
//!
//! Pure functions returning records with standard test values, for tests that assemble
//! a [`RaidSnapshot`] by hand instead of through the builder.

use chrono::{NaiveDate, NaiveDateTime};
use loothound::model::{
    account::AccountId,
    character::CharacterId,
    raid::{GroupConfig, RaidId},
    role::RoleId,
    signup::SignupId,
    snapshot::{AccountRecord, CharacterRecord, RaidSnapshot, RoleRecord, SignupRecord},
};

use crate::constant::{
    TEST_DEFAULT_GROUP_NUMBER, TEST_DEFAULT_GROUP_SIZE, TEST_RAID_ID, TEST_RAID_NAME,
};

/// Date every test raid is scheduled for.
pub fn mock_raid_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .and_then(|date| date.and_hms_opt(20, 0, 0))
        .unwrap()
}

/// Group layout applied to snapshots without one.
pub fn mock_default_groups() -> GroupConfig {
    GroupConfig::new(TEST_DEFAULT_GROUP_SIZE, TEST_DEFAULT_GROUP_NUMBER)
}

/// Create a mock account record.
///
/// # Arguments
/// - `account_id` - Id of the account
///
/// # Returns
/// - `AccountRecord` - An account with battletag `Account#<id>`
pub fn mock_account(account_id: i64) -> AccountRecord {
    AccountRecord {
        id: AccountId(account_id),
        battletag: format!("Account#{}", account_id),
    }
}

/// Create a mock level 60 warrior record.
///
/// # Arguments
/// - `character_id` - Id of the character
/// - `name` - Character name
/// - `account_id` - Id of the owning account
///
/// # Returns
/// - `CharacterRecord` - A character with test data
pub fn mock_character(character_id: i64, name: &str, account_id: i64) -> CharacterRecord {
    CharacterRecord {
        id: CharacterId(character_id),
        name: name.to_string(),
        level: 60,
        class_id: 1,
        account_id: AccountId(account_id),
    }
}

/// Create a mock role record named after its slug.
pub fn mock_role(role_id: i64, slug: &str) -> RoleRecord {
    RoleRecord {
        id: RoleId(role_id),
        slug: slug.to_string(),
        name: slug.to_uppercase(),
    }
}

pub fn mock_signup(signup_id: i64, character_id: i64, role_id: i64, seated: bool) -> SignupRecord {
    SignupRecord {
        id: SignupId(signup_id),
        character_id: CharacterId(character_id),
        role_id: RoleId(role_id),
        seated,
    }
}

/// Create an empty raid snapshot.
///
/// # Returns
/// - `RaidSnapshot` - A raid without accounts, roles or signups, using the default groups
pub fn mock_snapshot() -> RaidSnapshot {
    RaidSnapshot {
        id: RaidId(TEST_RAID_ID),
        name: TEST_RAID_NAME.to_string(),
        date: mock_raid_date(),
        note: None,
        groups: None,
        hidden: false,
        finalized: false,
        accounts: Vec::new(),
        characters: Vec::new(),
        roles: Vec::new(),
        signups: Vec::new(),
        current_account_id: None,
    }
}

use super::*;

use crate::{
    model::snapshot::{AccountRecord, CharacterRecord, RaidSnapshot, RoleRecord, SignupRecord},
    roster::RaidRoster,
};


pub const DEFAULT_GROUPS: GroupConfig = GroupConfig { size: 5, number: 1 };

/// Snapshot mirroring the shared fixture, viewed by account 1.
///
/// Account 1 also owns "Ayla" (id 12, level 60), who is not signed up.
pub fn snapshot() -> RaidSnapshot {
    let date = raid(DEFAULT_GROUPS).date;
    RaidSnapshot {
        id: RaidId(1),
        name: "Molten Core".to_string(),
        date,
        note: Some("Bring fire resistance".to_string()),
        groups: Some(GroupConfig::new(5, 2)),
        hidden: false,
        finalized: false,
        accounts: vec![
            account_record(1, "Alpha#1"),
            account_record(2, "Bravo#2"),
            account_record(3, "Charlie#3"),
        ],
        characters: vec![
            character_record(10, "Anna", 60, 8, 1),
            character_record(11, "Brom", 60, 1, 1),
            character_record(12, "Ayla", 60, 12, 1),
            character_record(20, "Cyra", 60, 5, 2),
            character_record(30, "Dax", 58, 99, 3),
        ],
        roles: vec![
            role_record(1, "tank"),
            role_record(2, "healer"),
            role_record(3, "dps"),
        ],
        signups: vec![
            signup_record(1, 10, 1, true),
            signup_record(2, 11, 3, false),
            signup_record(3, 20, 2, false),
            signup_record(4, 30, 3, false),
        ],
        current_account_id: Some(AccountId(1)),
    }
}

pub fn account_record(id: i64, battletag: &str) -> AccountRecord {
    AccountRecord {
        id: AccountId(id),
        battletag: battletag.to_string(),
    }
}

pub fn character_record(
    id: i64,
    name: &str,
    level: u32,
    class_id: u8,
    account_id: i64,
) -> CharacterRecord {
    CharacterRecord {
        id: CharacterId(id),
        name: name.to_string(),
        level,
        class_id,
        account_id: AccountId(account_id),
    }
}

pub fn role_record(id: i64, slug: &str) -> RoleRecord {
    RoleRecord {
        id: RoleId(id),
        slug: slug.to_string(),
        name: slug.to_uppercase(),
    }
}

pub fn signup_record(id: i64, character_id: i64, role_id: i64, seated: bool) -> SignupRecord {
    SignupRecord {
        id: SignupId(id),
        character_id: CharacterId(character_id),
        role_id: RoleId(role_id),
        seated,
    }
}

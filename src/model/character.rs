use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::model::account::{Account, AccountId};

/// Identifier of a playable character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub i64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Class names indexed by `class_id - 1`.
static CLASS_NAMES: [&str; 12] = [
    "Warrior",
    "Paladin",
    "Hunter",
    "Rogue",
    "Priest",
    "Death Knight",
    "Shaman",
    "Mage",
    "Warlock",
    "Monk",
    "Druid",
    "Demon Hunter",
];

/// Resolves a character class id to its display name.
///
/// # Arguments
/// - `class_id` - Class identifier as stored on the character (1 through 12)
///
/// # Returns
/// - The class name for known ids
/// - An empty string for any other id
pub fn class_name(class_id: u8) -> &'static str {
    match class_id {
        1..=12 => CLASS_NAMES[usize::from(class_id) - 1],
        _ => "",
    }
}

/// A character belonging to an account.
///
/// The owning account is held behind an `Arc`, so a character can never exist with an
/// unresolvable account.
#[derive(Clone, Debug)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub level: u32,
    pub class_id: u8,
    pub account: Arc<Account>,
}

impl Character {
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        level: u32,
        class_id: u8,
        account: Arc<Account>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            class_id,
            account,
        }
    }

    /// Id of the account owning this character.
    pub fn account_id(&self) -> AccountId {
        self.account.id
    }

    /// Display name of this character's class, empty when the class id is unknown.
    pub fn class_name(&self) -> &'static str {
        class_name(self.class_id)
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Character {}

impl Hash for Character {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

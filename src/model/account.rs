use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::model::character::Character;

/// Identifier of a real-world player account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player account owning one or more characters.
///
/// Waiting-list fairness is decided per account rather than per character, so every
/// signup resolves back to one of these through its character.
#[derive(Clone, Debug)]
pub struct Account {
    pub id: AccountId,
    /// Display handle, used to order the waiting list.
    pub battletag: String,
}

impl Account {
    pub fn new(id: AccountId, battletag: impl Into<String>) -> Self {
        Self {
            id,
            battletag: battletag.into(),
        }
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The account viewing a raid, together with its full character roster.
///
/// Account-scoped views (characters still available to sign up, the viewer's own
/// signups) are derived from this context.
#[derive(Clone, Debug)]
pub struct CurrentAccount {
    pub account: Arc<Account>,
    pub characters: Vec<Arc<Character>>,
}

impl CurrentAccount {
    pub fn new(account: Arc<Account>, characters: Vec<Arc<Character>>) -> Self {
        Self {
            account,
            characters,
        }
    }

    pub fn id(&self) -> AccountId {
        self.account.id
    }
}

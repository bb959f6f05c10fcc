use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::model::{
    account::{Account, AccountId},
    character::Character,
    role::Role,
};

/// Identifier of a signup within a raid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignupId(pub i64);

impl fmt::Display for SignupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A character's request, under a role, to take part in a raid.
///
/// Creation order is the signup's position in [`Raid::signups`](crate::model::raid::Raid);
/// derivations that need a tiebreak rely on stable sorts over that order.
#[derive(Clone, Debug)]
pub struct Signup {
    pub id: SignupId,
    pub character: Arc<Character>,
    pub role: Arc<Role>,
    /// Whether an organizer has accepted this signup into a group slot.
    pub seated: bool,
}

impl Signup {
    pub fn new(id: SignupId, character: Arc<Character>, role: Arc<Role>, seated: bool) -> Self {
        Self {
            id,
            character,
            role,
            seated,
        }
    }

    /// Account owning the signed-up character.
    pub fn account(&self) -> &Arc<Account> {
        &self.character.account
    }

    pub fn account_id(&self) -> AccountId {
        self.character.account.id
    }
}

impl PartialEq for Signup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Signup {}

impl Hash for Signup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

//! Flat, id-linked records describing a raid as handed over by the storage layer.
//!
//! A [`RaidSnapshot`] references accounts, characters and roles by id. Resolving it into a
//! [`RaidRoster`](crate::roster::RaidRoster) links those ids into shared entity references
//! and rejects dangling ones, which is where the roster's preconditions are checked.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    account::AccountId, character::CharacterId, raid::GroupConfig, raid::RaidId, role::RoleId,
    signup::SignupId,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub battletag: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    pub level: u32,
    pub class_id: u8,
    pub account_id: AccountId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: RoleId,
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRecord {
    pub id: SignupId,
    pub character_id: CharacterId,
    pub role_id: RoleId,
    #[serde(default)]
    pub seated: bool,
}

/// A raid with its reference data, as loaded from storage.
///
/// `signups` are listed in creation order. When `groups` is absent the configured default
/// group layout applies. `characters` must include every character of the current account,
/// not only the signed-up ones, so that the characters still available to sign up can be
/// derived.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RaidSnapshot {
    pub id: RaidId,
    pub name: String,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub groups: Option<GroupConfig>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub finalized: bool,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
    #[serde(default)]
    pub characters: Vec<CharacterRecord>,
    #[serde(default)]
    pub roles: Vec<RoleRecord>,
    #[serde(default)]
    pub signups: Vec<SignupRecord>,
    #[serde(default)]
    pub current_account_id: Option<AccountId>,
}

//! Serializable renderings of the derived roster views.
//!
//! These DTOs are what the rendering layer consumes. They are plain copies of the cached
//! views and carry the display-only extras (class names, whether a signup can be seated).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{
    account::{Account, AccountId},
    character::{Character, CharacterId},
    raid::RaidId,
    role::{Role, RoleId},
    signup::{Signup, SignupId},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: AccountId,
    pub battletag: String,
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            battletag: account.battletag.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: CharacterId,
    pub name: String,
    pub level: u32,
    pub class_id: u8,
    pub class_name: String,
    pub account: AccountDto,
}

impl From<&Character> for CharacterDto {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            level: character.level,
            class_id: character.class_id,
            class_name: character.class_name().to_string(),
            account: AccountDto::from(character.account.as_ref()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleDto {
    pub id: RoleId,
    pub slug: String,
    pub name: String,
}

impl From<&Role> for RoleDto {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            slug: role.slug.clone(),
            name: role.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupDto {
    pub id: SignupId,
    pub character: CharacterDto,
    pub role: RoleDto,
    pub seated: bool,
    /// Whether the UI should offer to promote this signup to a seat.
    pub can_be_seated: bool,
}

impl SignupDto {
    pub fn new(signup: &Signup, can_be_seated: bool) -> Self {
        Self {
            id: signup.id,
            character: CharacterDto::from(signup.character.as_ref()),
            role: RoleDto::from(signup.role.as_ref()),
            seated: signup.seated,
            can_be_seated,
        }
    }
}

/// Waiting signups of a single account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountSignupsDto {
    pub account: AccountDto,
    pub signups: Vec<SignupDto>,
}

/// Seated signups under a single role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleSignupsDto {
    pub role: RoleDto,
    pub signups: Vec<SignupDto>,
}

/// Everything the raid screen renders, computed from one consistent roster state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterView {
    pub raid_id: RaidId,
    pub name: String,
    pub date: NaiveDateTime,
    pub note: Option<String>,
    pub hidden: bool,
    pub finalized: bool,
    pub hidden_and_not_finalized: bool,
    pub total_slots: u32,
    pub more_than_one_group: bool,
    pub roles: Vec<RoleDto>,
    pub seated: Vec<SignupDto>,
    pub unseated: Vec<SignupDto>,
    pub waiting_list: Vec<SignupDto>,
    pub waiting_list_by_account: Vec<AccountSignupsDto>,
    pub seated_by_role: Vec<RoleSignupsDto>,
    pub has_seated: bool,
    pub has_waiting_list: bool,
    pub account_signups: usize,
    pub account_waiting_list: usize,
    pub account_seated: usize,
    pub available_characters: Vec<CharacterDto>,
    pub current_account_seated: Option<SignupDto>,
    pub current_account_signed_up: Vec<SignupDto>,
}

//! Roster mutation boundary errors.
//!
//! Derivations never fail. These errors come from the boundary that builds and mutates a
//! roster: resolving snapshots, applying intents and looking raids up in the registry. Each
//! one reports a violated precondition that the derivations would otherwise assume.

use thiserror::Error;

use crate::model::{
    account::AccountId, character::CharacterId, raid::RaidId, role::RoleId, signup::SignupId,
};

/// Roster mutation error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    /// No signup with this id exists in the raid.
    #[error("Signup {signup_id} not found")]
    SignupNotFound { signup_id: SignupId },

    /// The character already has a signup for this raid.
    ///
    /// A character may hold at most one signup per raid.
    #[error("Character {character_id} is already signed up")]
    AlreadySignedUp { character_id: CharacterId },

    /// Two signup records share the same id.
    #[error("Signup id {signup_id} is used more than once")]
    DuplicateSignup { signup_id: SignupId },

    /// A signup or intent names a role the raid does not offer.
    #[error("Role {role_id} is not configured for this raid")]
    UnknownRole { role_id: RoleId },

    /// A signup or intent references a character that could not be resolved.
    ///
    /// For intents this also covers characters that exist but belong to another account.
    #[error("Character {character_id} could not be resolved")]
    UnknownCharacter { character_id: CharacterId },

    /// A character or the current account references an account that could not be resolved.
    #[error("Account {account_id} could not be resolved")]
    UnknownAccount { account_id: AccountId },

    /// An add-signup intent arrived while no account is viewing the raid.
    #[error("No current account to sign up characters for")]
    NoCurrentAccount,

    /// The registry holds no raid with this id.
    #[error("Raid {raid_id} not found")]
    RaidNotFound { raid_id: RaidId },

    /// A writer panicked while holding this raid's lock.
    #[error("Raid {raid_id} lock poisoned by a panicked writer")]
    Poisoned { raid_id: RaidId },

    /// A writer panicked while holding the registry's own lock.
    #[error("Raid registry lock poisoned by a panicked writer")]
    RegistryPoisoned,
}

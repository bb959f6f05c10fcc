use serde::{Deserialize, Serialize};

use crate::model::{character::CharacterId, role::RoleId, signup::SignupId};

/// A signup mutation requested by the UI.
///
/// Intents are applied through [`RaidRoster::apply`](crate::roster::RaidRoster::apply),
/// which runs the invalidation cascade before returning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterIntent {
    /// Sign up one of the current account's characters under a raid role.
    AddSignup {
        character_id: CharacterId,
        role_id: RoleId,
    },
    /// Withdraw a signup.
    RemoveSignup { signup_id: SignupId },
    /// Seat or unseat a signup.
    SetSeated { signup_id: SignupId, seated: bool },
}

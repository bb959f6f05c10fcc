//! Declarative test builder for roster setup.
//!
//! Methods queue records onto a snapshot; `build()` resolves it into a
//! [`RaidRoster`] the same way snapshots from storage are resolved, so malformed setups
//! fail with the same errors production code would see.

use loothound::{
    model::{account::AccountId, raid::GroupConfig, raid::RaidId, snapshot::RaidSnapshot},
    roster::RaidRoster,
};

use crate::{
    error::TestError,
    fixtures::factory::{
        mock_account, mock_character, mock_default_groups, mock_role, mock_signup,
        mock_snapshot,
    },
};

/// Builder for declarative roster initialization.
pub struct TestBuilder {
    snapshot: RaidSnapshot,
    default_groups: GroupConfig,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// # Returns
    /// - `TestBuilder` - A builder for an empty raid with the default group layout
    pub fn new() -> Self {
        Self {
            snapshot: mock_snapshot(),
            default_groups: mock_default_groups(),
        }
    }

    /// Use a different raid id, e.g. to register several raids side by side.
    pub fn with_raid_id(mut self, raid_id: i64) -> Self {
        self.snapshot.id = RaidId(raid_id);
        self
    }

    /// Set the raid's own group layout.
    ///
    /// # Arguments
    /// - `size` - Seats per group
    /// - `number` - Number of groups
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_groups(mut self, size: u32, number: u32) -> Self {
        self.snapshot.groups = Some(GroupConfig::new(size, number));
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.snapshot.note = Some(note.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.snapshot.hidden = true;
        self
    }

    pub fn finalized(mut self) -> Self {
        self.snapshot.finalized = true;
        self
    }

    /// Insert a mock account with battletag `Account#<id>`.
    pub fn with_account(mut self, account_id: i64) -> Self {
        self.snapshot.accounts.push(mock_account(account_id));
        self
    }

    /// Insert a mock level 60 character owned by `account_id`.
    ///
    /// The account must be added separately with [`with_account`](Self::with_account).
    pub fn with_character(mut self, character_id: i64, name: &str, account_id: i64) -> Self {
        self.snapshot
            .characters
            .push(mock_character(character_id, name, account_id));
        self
    }

    /// Insert a character with an explicit level and class.
    pub fn with_character_details(
        mut self,
        character_id: i64,
        name: &str,
        level: u32,
        class_id: u8,
        account_id: i64,
    ) -> Self {
        let mut character = mock_character(character_id, name, account_id);
        character.level = level;
        character.class_id = class_id;
        self.snapshot.characters.push(character);
        self
    }

    pub fn with_role(mut self, role_id: i64, slug: &str) -> Self {
        self.snapshot.roles.push(mock_role(role_id, slug));
        self
    }

    /// Queue a signup. Signups keep the order in which they are added.
    ///
    /// # Arguments
    /// - `signup_id` - Id of the signup
    /// - `character_id` - Signed-up character
    /// - `role_id` - Role the character signed up as
    /// - `seated` - Whether the signup holds a seat
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_signup(mut self, signup_id: i64, character_id: i64, role_id: i64, seated: bool) -> Self {
        self.snapshot
            .signups
            .push(mock_signup(signup_id, character_id, role_id, seated));
        self
    }

    /// View the raid as `account_id`.
    pub fn with_current_account(mut self, account_id: i64) -> Self {
        self.snapshot.current_account_id = Some(AccountId(account_id));
        self
    }

    /// The snapshot assembled so far.
    pub fn snapshot(&self) -> &RaidSnapshot {
        &self.snapshot
    }

    /// Serialize the assembled snapshot the way storage hands it over.
    pub fn to_json(&self) -> Result<String, TestError> {
        Ok(serde_json::to_string(&self.snapshot)?)
    }

    /// Resolve the snapshot into a roster.
    ///
    /// # Returns
    /// - `Ok(RaidRoster)` - The resolved roster
    /// - `Err(TestError::RosterError)` - The queued records reference missing entities or
    ///   contain duplicate signups
    pub fn build(self) -> Result<RaidRoster, TestError> {
        Ok(RaidRoster::from_snapshot(
            self.snapshot,
            self.default_groups,
        )?)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Boundary between the roster engine and its storage and rendering collaborators.
//!
//! Storage hands over a [`RaidSnapshot`] of id-linked records, which is resolved here into
//! shared entity references. This is where dangling references and duplicate signups are
//! rejected, so the derivations never see malformed input. The UI sends [`RosterIntent`]s
//! back and reads a [`RosterView`] rendered from the cached views.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use dioxus_logger::tracing;

use crate::{
    error::RosterError,
    model::{
        account::{Account, AccountId, CurrentAccount},
        character::{Character, CharacterId},
        intent::RosterIntent,
        raid::{GroupConfig, Raid},
        role::{Role, RoleId},
        signup::{Signup, SignupId},
        snapshot::RaidSnapshot,
        view::{
            AccountDto, AccountSignupsDto, CharacterDto, RoleDto, RoleSignupsDto, RosterView,
            SignupDto,
        },
    },
    roster::engine::RaidRoster,
};

impl RaidRoster {
    /// Resolves a snapshot into a roster.
    ///
    /// # Arguments
    /// - `snapshot` - Raid records as loaded from storage
    /// - `default_groups` - Group layout used when the snapshot carries none
    ///
    /// # Returns
    /// - `Ok(RaidRoster)` - All references resolved
    /// - `Err(RosterError::UnknownAccount)` - A character or the current account id names a
    ///   missing account
    /// - `Err(RosterError::UnknownCharacter)` - A signup names a missing character
    /// - `Err(RosterError::UnknownRole)` - A signup names a role the raid lacks
    /// - `Err(RosterError::AlreadySignedUp)` - A character has more than one signup
    /// - `Err(RosterError::DuplicateSignup)` - Two signups share an id
    pub fn from_snapshot(
        snapshot: RaidSnapshot,
        default_groups: GroupConfig,
    ) -> Result<Self, RosterError> {
        let accounts: HashMap<AccountId, Arc<Account>> = snapshot
            .accounts
            .into_iter()
            .map(|record| (record.id, Arc::new(Account::new(record.id, record.battletag))))
            .collect();

        let mut characters: Vec<Arc<Character>> = Vec::with_capacity(snapshot.characters.len());
        for record in snapshot.characters {
            let account = accounts
                .get(&record.account_id)
                .cloned()
                .ok_or(RosterError::UnknownAccount {
                    account_id: record.account_id,
                })?;
            characters.push(Arc::new(Character::new(
                record.id,
                record.name,
                record.level,
                record.class_id,
                account,
            )));
        }
        let characters_by_id: HashMap<CharacterId, Arc<Character>> = characters
            .iter()
            .map(|character| (character.id, Arc::clone(character)))
            .collect();

        let roles: Vec<Arc<Role>> = snapshot
            .roles
            .into_iter()
            .map(|record| Arc::new(Role::new(record.id, record.slug, record.name)))
            .collect();
        let roles_by_id: HashMap<RoleId, Arc<Role>> = roles
            .iter()
            .map(|role| (role.id, Arc::clone(role)))
            .collect();

        let mut signups: Vec<Signup> = Vec::with_capacity(snapshot.signups.len());
        let mut seen_signups: HashSet<SignupId> = HashSet::new();
        let mut seen_characters: HashSet<CharacterId> = HashSet::new();
        for record in snapshot.signups {
            if !seen_signups.insert(record.id) {
                return Err(RosterError::DuplicateSignup {
                    signup_id: record.id,
                });
            }
            if !seen_characters.insert(record.character_id) {
                return Err(RosterError::AlreadySignedUp {
                    character_id: record.character_id,
                });
            }
            let character = characters_by_id.get(&record.character_id).cloned().ok_or(
                RosterError::UnknownCharacter {
                    character_id: record.character_id,
                },
            )?;
            let role = roles_by_id
                .get(&record.role_id)
                .cloned()
                .ok_or(RosterError::UnknownRole {
                    role_id: record.role_id,
                })?;
            signups.push(Signup::new(record.id, character, role, record.seated));
        }

        let current_account = match snapshot.current_account_id {
            Some(account_id) => {
                let account = accounts
                    .get(&account_id)
                    .cloned()
                    .ok_or(RosterError::UnknownAccount { account_id })?;
                let owned = characters
                    .iter()
                    .filter(|character| character.account_id() == account_id)
                    .cloned()
                    .collect();
                Some(CurrentAccount::new(account, owned))
            }
            None => None,
        };

        let mut raid = Raid::new(
            snapshot.id,
            snapshot.name,
            snapshot.date,
            snapshot.groups.unwrap_or(default_groups),
        );
        raid.note = snapshot.note;
        raid.hidden = snapshot.hidden;
        raid.finalized = snapshot.finalized;
        raid.roles = roles;
        raid.signups = signups;

        tracing::debug!(
            "Resolved raid {} with {} signup(s) and {} role(s)",
            raid.id,
            raid.signups.len(),
            raid.roles.len()
        );

        let mut roster = RaidRoster::new(raid);
        if let Some(current_account) = current_account {
            roster = roster.with_current_account(current_account);
        }
        Ok(roster)
    }

    /// Applies a UI mutation intent.
    ///
    /// `AddSignup` resolves the character from the current account's roster, so accounts
    /// can only sign up their own characters.
    ///
    /// # Returns
    /// - `Ok(())` - The intent was applied and dependent views invalidated
    /// - `Err(RosterError::NoCurrentAccount)` - `AddSignup` without a viewing account
    /// - `Err(RosterError::UnknownCharacter)` - The character is not the current account's
    /// - `Err(RosterError::UnknownRole)` - The raid does not offer the role
    /// - `Err(RosterError::AlreadySignedUp)` - The character already has a signup
    /// - `Err(RosterError::SignupNotFound)` - `RemoveSignup`/`SetSeated` on an unknown signup
    pub fn apply(&mut self, intent: RosterIntent) -> Result<(), RosterError> {
        match intent {
            RosterIntent::AddSignup {
                character_id,
                role_id,
            } => {
                let current = self
                    .current_account()
                    .ok_or(RosterError::NoCurrentAccount)?;
                let character = current
                    .characters
                    .iter()
                    .find(|character| character.id == character_id)
                    .cloned()
                    .ok_or(RosterError::UnknownCharacter { character_id })?;
                let role = self
                    .raid()
                    .roles
                    .iter()
                    .find(|role| role.id == role_id)
                    .cloned()
                    .ok_or(RosterError::UnknownRole { role_id })?;
                self.add_signup(character, role)?;
            }
            RosterIntent::RemoveSignup { signup_id } => {
                self.remove_signup(signup_id)?;
            }
            RosterIntent::SetSeated { signup_id, seated } => {
                self.set_seated(signup_id, seated)?;
            }
        }
        Ok(())
    }

    fn signup_dtos(&self, signups: &[Signup]) -> Vec<SignupDto> {
        signups
            .iter()
            .map(|signup| SignupDto::new(signup, self.can_be_seated(signup.id)))
            .collect()
    }

    /// Renders every view into a serializable DTO.
    pub fn view(&self) -> RosterView {
        let raid = self.raid();
        let current_account_seated = self.current_account_seated();

        RosterView {
            raid_id: raid.id,
            name: raid.name.clone(),
            date: raid.date,
            note: raid.note.clone(),
            hidden: raid.hidden,
            finalized: raid.finalized,
            hidden_and_not_finalized: self.hidden_and_not_finalized(),
            total_slots: self.total_slots(),
            more_than_one_group: self.more_than_one_group(),
            roles: self
                .sorted_roles()
                .iter()
                .map(|role| RoleDto::from(role.as_ref()))
                .collect(),
            seated: self.signup_dtos(&self.seated()),
            unseated: self.signup_dtos(&self.unseated()),
            waiting_list: self.signup_dtos(&self.waiting_list()),
            waiting_list_by_account: self
                .waiting_list_by_account()
                .iter()
                .map(|group| AccountSignupsDto {
                    account: AccountDto::from(group.account.as_ref()),
                    signups: self.signup_dtos(&group.signups),
                })
                .collect(),
            seated_by_role: self
                .seated_by_role()
                .iter()
                .map(|group| RoleSignupsDto {
                    role: RoleDto::from(group.role.as_ref()),
                    signups: self.signup_dtos(&group.signups),
                })
                .collect(),
            has_seated: self.has_seated(),
            has_waiting_list: self.has_waiting_list(),
            account_signups: self.account_signups(),
            account_waiting_list: self.account_waiting_list(),
            account_seated: self.account_seated(),
            available_characters: self
                .available_characters()
                .iter()
                .map(|character| CharacterDto::from(character.as_ref()))
                .collect(),
            current_account_seated: current_account_seated
                .as_ref()
                .as_ref()
                .map(|signup| SignupDto::new(signup, self.can_be_seated(signup.id))),
            current_account_signed_up: self.signup_dtos(&self.current_account_signed_up()),
        }
    }
}

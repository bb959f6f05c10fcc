//! The roster of a single raid with its memoized derived views.
//!
//! [`RaidRoster`] owns the raid aggregate and the viewing account. Every mutation marks the
//! input it changes dirty and invalidates the views that transitively depend on it, as
//! described by [`GRAPH`]. Views are recomputed lazily on the next read.

use std::{collections::HashSet, sync::Arc};

use dioxus_logger::tracing;

use crate::{
    error::RosterError,
    model::{
        account::{AccountId, CurrentAccount},
        character::{Character, CharacterId},
        raid::{GroupConfig, Raid},
        role::Role,
        signup::{Signup, SignupId},
    },
    roster::{
        cache::{RecomputeStats, ViewCache},
        derive::{self, AccountSignups, RoleSignups},
        graph::{Input, View, GRAPH},
    },
};

/// A raid's signups and configuration, plus cached views derived from them.
#[derive(Debug)]
pub struct RaidRoster {
    raid: Raid,
    current_account: Option<CurrentAccount>,
    next_signup_id: i64,
    cache: ViewCache,
}

impl RaidRoster {
    /// Creates a roster over an existing raid.
    ///
    /// The raid's signups are trusted to hold at most one signup per character; use
    /// [`RaidRoster::from_snapshot`] to build a roster from unchecked records.
    ///
    /// # Arguments
    /// - `raid` - Raid aggregate with signups in creation order
    ///
    /// # Returns
    /// - `RaidRoster` - Roster with every view dirty and no current account
    pub fn new(raid: Raid) -> Self {
        let next_signup_id = raid
            .signups
            .iter()
            .map(|signup| signup.id.0)
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            raid,
            current_account: None,
            next_signup_id,
            cache: ViewCache::default(),
        }
    }

    /// Sets the viewing account at construction time.
    pub fn with_current_account(mut self, current_account: CurrentAccount) -> Self {
        self.current_account = Some(current_account);
        self
    }

    pub fn raid(&self) -> &Raid {
        &self.raid
    }

    /// Signups in creation order.
    pub fn signups(&self) -> &[Signup] {
        &self.raid.signups
    }

    pub fn current_account(&self) -> Option<&CurrentAccount> {
        self.current_account.as_ref()
    }

    /// Recomputation counters for every view.
    pub fn stats(&self) -> &RecomputeStats {
        &self.cache.stats
    }

    /// Whether a view currently holds a cached value.
    pub fn is_view_clean(&self, view: View) -> bool {
        self.cache.is_clean(view)
    }

    fn find_signup(&self, signup_id: SignupId) -> Result<usize, RosterError> {
        self.raid
            .signups
            .iter()
            .position(|signup| signup.id == signup_id)
            .ok_or(RosterError::SignupNotFound { signup_id })
    }

    fn find_role(&self, role: &Role) -> Result<Arc<Role>, RosterError> {
        self.raid
            .roles
            .iter()
            .find(|candidate| candidate.id == role.id)
            .cloned()
            .ok_or(RosterError::UnknownRole { role_id: role.id })
    }

    /// Marks `input` dirty and drops every view depending on it.
    fn invalidate(&mut self, input: Input) {
        let mut dropped = 0;
        for view in GRAPH.affected_by(input) {
            if self.cache.invalidate(view) {
                dropped += 1;
            }
        }
        tracing::trace!("Input {:?} changed, dropped {} cached view(s)", input, dropped);
    }

    // Mutations

    /// Signs a character up for the raid, unseated.
    ///
    /// # Arguments
    /// - `character` - Character to sign up
    /// - `role` - One of the raid's roles
    ///
    /// # Returns
    /// - `Ok(SignupId)` - Id of the new signup, appended in creation order
    /// - `Err(RosterError::AlreadySignedUp)` - The character already has a signup
    /// - `Err(RosterError::UnknownRole)` - The raid does not offer this role
    pub fn add_signup(
        &mut self,
        character: Arc<Character>,
        role: Arc<Role>,
    ) -> Result<SignupId, RosterError> {
        if self
            .raid
            .signups
            .iter()
            .any(|signup| signup.character.id == character.id)
        {
            return Err(RosterError::AlreadySignedUp {
                character_id: character.id,
            });
        }
        let role = self.find_role(&role)?;

        let signup_id = SignupId(self.next_signup_id);
        self.next_signup_id += 1;

        tracing::debug!(
            "Raid {}: character {} signed up as {} (signup {})",
            self.raid.id,
            character.id,
            role.slug,
            signup_id
        );
        self.raid
            .signups
            .push(Signup::new(signup_id, character, role, false));
        self.invalidate(Input::Signups);

        Ok(signup_id)
    }

    /// Withdraws a signup.
    ///
    /// # Returns
    /// - `Ok(Signup)` - The removed signup
    /// - `Err(RosterError::SignupNotFound)` - No signup with this id
    pub fn remove_signup(&mut self, signup_id: SignupId) -> Result<Signup, RosterError> {
        let position = self.find_signup(signup_id)?;
        let signup = self.raid.signups.remove(position);

        tracing::debug!("Raid {}: signup {} removed", self.raid.id, signup_id);
        self.invalidate(Input::Signups);

        Ok(signup)
    }

    /// Seats or unseats a signup.
    ///
    /// Capacity is not enforced; seating beyond [`RaidRoster::total_slots`] only logs a
    /// warning. Setting the flag to its current value invalidates nothing.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated (or already set)
    /// - `Err(RosterError::SignupNotFound)` - No signup with this id
    pub fn set_seated(&mut self, signup_id: SignupId, seated: bool) -> Result<(), RosterError> {
        let position = self.find_signup(signup_id)?;
        if self.raid.signups[position].seated == seated {
            return Ok(());
        }

        self.raid.signups[position].seated = seated;
        tracing::debug!(
            "Raid {}: signup {} {}",
            self.raid.id,
            signup_id,
            if seated { "seated" } else { "unseated" }
        );
        self.invalidate(Input::Seating);

        if seated {
            let seated_count = self.raid.signups.iter().filter(|s| s.seated).count();
            let total_slots = derive::total_slots(&self.raid.groups);
            if seated_count > total_slots as usize {
                tracing::warn!(
                    "Raid {}: {} signups seated but only {} slots configured",
                    self.raid.id,
                    seated_count,
                    total_slots
                );
            }
        }

        Ok(())
    }

    /// Replaces the raid's roles.
    ///
    /// Existing signups keep their role even if it is no longer offered.
    pub fn set_roles(&mut self, roles: Vec<Arc<Role>>) {
        self.raid.roles = roles;
        self.invalidate(Input::Roles);
    }

    pub fn set_groups(&mut self, groups: GroupConfig) {
        if self.raid.groups != groups {
            self.raid.groups = groups;
            self.invalidate(Input::Groups);
        }
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if self.raid.hidden != hidden {
            self.raid.hidden = hidden;
            self.invalidate(Input::Status);
        }
    }

    pub fn set_finalized(&mut self, finalized: bool) {
        if self.raid.finalized != finalized {
            self.raid.finalized = finalized;
            self.invalidate(Input::Status);
        }
    }

    /// Changes the viewing account, or clears it for anonymous viewers.
    pub fn set_current_account(&mut self, current_account: Option<CurrentAccount>) {
        self.current_account = current_account;
        self.invalidate(Input::CurrentAccount);
    }

    // Views

    fn current_account_id(&self) -> Option<AccountId> {
        self.current_account.as_ref().map(CurrentAccount::id)
    }

    pub fn signed_up_character_ids(&self) -> Arc<HashSet<CharacterId>> {
        self.cache.signed_up_character_ids.get_or_compute(
            View::SignedUpCharacterIds,
            &self.cache.stats,
            || derive::signed_up_character_ids(&self.raid.signups),
        )
    }

    /// Seated signups ordered by character name.
    pub fn seated(&self) -> Arc<Vec<Signup>> {
        self.cache
            .seated
            .get_or_compute(View::Seated, &self.cache.stats, || {
                let (seated, _) = derive::partition_by_seated(&self.raid.signups);
                derive::sort_seated(seated)
            })
    }

    /// Unseated signups in creation order.
    pub fn unseated(&self) -> Arc<Vec<Signup>> {
        self.cache
            .unseated
            .get_or_compute(View::Unseated, &self.cache.stats, || {
                let (_, unseated) = derive::partition_by_seated(&self.raid.signups);
                unseated
            })
    }

    /// Unseated signups of accounts without a seat, ordered by battletag.
    pub fn waiting_list(&self) -> Arc<Vec<Signup>> {
        self.cache
            .waiting_list
            .get_or_compute(View::WaitingList, &self.cache.stats, || {
                derive::compute_waiting_list(&self.seated(), &self.unseated())
            })
    }

    fn waiting_list_ids(&self) -> Arc<HashSet<SignupId>> {
        self.cache
            .waiting_list_ids
            .get_or_compute(View::WaitingListIds, &self.cache.stats, || {
                derive::waiting_list_ids(&self.waiting_list())
            })
    }

    pub fn waiting_list_by_account(&self) -> Arc<Vec<AccountSignups>> {
        self.cache.waiting_list_by_account.get_or_compute(
            View::WaitingListByAccount,
            &self.cache.stats,
            || derive::group_waiting_list_by_account(&self.waiting_list()),
        )
    }

    /// Roles in descending slug order.
    pub fn sorted_roles(&self) -> Arc<Vec<Arc<Role>>> {
        self.cache
            .sorted_roles
            .get_or_compute(View::SortedRoles, &self.cache.stats, || {
                derive::sort_roles(&self.raid.roles)
            })
    }

    pub fn seated_by_role(&self) -> Arc<Vec<RoleSignups>> {
        self.cache
            .seated_by_role
            .get_or_compute(View::SeatedByRole, &self.cache.stats, || {
                derive::group_seated_by_role(&self.seated(), &self.sorted_roles())
            })
    }

    /// Number of distinct accounts with at least one signup.
    pub fn account_signups(&self) -> usize {
        *self
            .cache
            .account_signups
            .get_or_compute(View::AccountSignups, &self.cache.stats, || {
                derive::distinct_account_ids(&self.raid.signups).len()
            })
    }

    /// Number of distinct accounts on the waiting list.
    pub fn account_waiting_list(&self) -> usize {
        *self.cache.account_waiting_list.get_or_compute(
            View::AccountWaitingList,
            &self.cache.stats,
            || derive::distinct_account_ids(&self.waiting_list()).len(),
        )
    }

    /// Number of distinct accounts holding a seat.
    pub fn account_seated(&self) -> usize {
        *self
            .cache
            .account_seated
            .get_or_compute(View::AccountSeated, &self.cache.stats, || {
                derive::distinct_account_ids(&self.seated()).len()
            })
    }

    pub fn total_slots(&self) -> u32 {
        *self
            .cache
            .total_slots
            .get_or_compute(View::TotalSlots, &self.cache.stats, || {
                derive::total_slots(&self.raid.groups)
            })
    }

    pub fn more_than_one_group(&self) -> bool {
        *self.cache.more_than_one_group.get_or_compute(
            View::MoreThanOneGroup,
            &self.cache.stats,
            || derive::more_than_one_group(&self.raid.groups),
        )
    }

    pub fn hidden_and_not_finalized(&self) -> bool {
        *self.cache.hidden_and_not_finalized.get_or_compute(
            View::HiddenAndNotFinalized,
            &self.cache.stats,
            || derive::hidden_and_not_finalized(self.raid.hidden, self.raid.finalized),
        )
    }

    pub fn has_seated(&self) -> bool {
        !self.seated().is_empty()
    }

    pub fn has_waiting_list(&self) -> bool {
        !self.waiting_list().is_empty()
    }

    /// The current account's characters that are not signed up yet.
    ///
    /// Empty when no account is viewing the raid.
    pub fn available_characters(&self) -> Arc<Vec<Arc<Character>>> {
        self.cache.available_characters.get_or_compute(
            View::AvailableCharacters,
            &self.cache.stats,
            || match &self.current_account {
                Some(current) => derive::available_characters(
                    &current.characters,
                    &self.signed_up_character_ids(),
                ),
                None => Vec::new(),
            },
        )
    }

    /// The current account's first seated signup, if any.
    pub fn current_account_seated(&self) -> Arc<Option<Signup>> {
        self.cache.current_account_seated.get_or_compute(
            View::CurrentAccountSeated,
            &self.cache.stats,
            || {
                self.current_account_id()
                    .and_then(|id| derive::current_account_seated(&self.seated(), id))
            },
        )
    }

    /// Every signup of the current account, seated or not.
    pub fn current_account_signed_up(&self) -> Arc<Vec<Signup>> {
        self.cache.current_account_signed_up.get_or_compute(
            View::CurrentAccountSignedUp,
            &self.cache.stats,
            || match self.current_account_id() {
                Some(id) => derive::current_account_signed_up(&self.raid.signups, id),
                None => Vec::new(),
            },
        )
    }

    /// Whether the UI should offer to seat this signup.
    pub fn can_be_seated(&self, signup_id: SignupId) -> bool {
        self.waiting_list_ids().contains(&signup_id)
    }
}

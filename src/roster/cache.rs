//! Memoized storage for derived roster views.
//!
//! Each view lives in its own [`OnceLock`] cell. An empty cell is dirty: the next read
//! computes the view and stores it. A filled cell is clean and hands out the same `Arc` on
//! every read until it is invalidated, so callers can compare results with [`Arc::ptr_eq`].
//!
//! Reads only need `&self`, so readers on several threads can share one cache; a cell is
//! initialized at most once even when readers race. Invalidation takes `&mut self`.

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, OnceLock,
    },
};

use dioxus_logger::tracing;

use crate::{
    model::{
        character::{Character, CharacterId},
        role::Role,
        signup::{Signup, SignupId},
    },
    roster::{
        derive::{AccountSignups, RoleSignups},
        graph::View,
    },
};

/// Counts how often each view has been recomputed.
#[derive(Debug, Default)]
pub struct RecomputeStats {
    counts: [AtomicUsize; View::COUNT],
}

impl RecomputeStats {
    pub fn record(&self, view: View) {
        self.counts[view.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// Number of times `view` has been computed since the cache was created.
    pub fn count(&self, view: View) -> usize {
        self.counts[view.index()].load(Ordering::Relaxed)
    }

    /// Sum of all recomputations.
    pub fn total(&self) -> usize {
        View::ALL.iter().map(|view| self.count(*view)).sum()
    }
}

/// One memoized view value.
#[derive(Debug)]
pub struct Slot<T> {
    cell: OnceLock<Arc<T>>,
}

impl<T> Slot<T> {
    /// Returns the cached value, computing it first if the slot is dirty.
    pub fn get_or_compute<F>(&self, view: View, stats: &RecomputeStats, compute: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        let value = self.cell.get_or_init(|| {
            tracing::trace!("Recomputing roster view {:?}", view);
            stats.record(view);
            Arc::new(compute())
        });
        Arc::clone(value)
    }

    /// Drops the cached value.
    ///
    /// # Returns
    /// - `true` if a value was cached
    pub fn invalidate(&mut self) -> bool {
        self.cell.take().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }
}

/// Cached values of every roster view.
#[derive(Debug, Default)]
pub struct ViewCache {
    pub signed_up_character_ids: Slot<HashSet<CharacterId>>,
    pub seated: Slot<Vec<Signup>>,
    pub unseated: Slot<Vec<Signup>>,
    pub waiting_list: Slot<Vec<Signup>>,
    pub waiting_list_ids: Slot<HashSet<SignupId>>,
    pub waiting_list_by_account: Slot<Vec<AccountSignups>>,
    pub sorted_roles: Slot<Vec<Arc<Role>>>,
    pub seated_by_role: Slot<Vec<RoleSignups>>,
    pub account_signups: Slot<usize>,
    pub account_waiting_list: Slot<usize>,
    pub account_seated: Slot<usize>,
    pub total_slots: Slot<u32>,
    pub more_than_one_group: Slot<bool>,
    pub hidden_and_not_finalized: Slot<bool>,
    pub available_characters: Slot<Vec<Arc<Character>>>,
    pub current_account_seated: Slot<Option<Signup>>,
    pub current_account_signed_up: Slot<Vec<Signup>>,
    pub stats: RecomputeStats,
}

impl ViewCache {
    /// Marks a single view dirty.
    ///
    /// # Returns
    /// - `true` if the view held a cached value
    pub fn invalidate(&mut self, view: View) -> bool {
        match view {
            View::SignedUpCharacterIds => self.signed_up_character_ids.invalidate(),
            View::Seated => self.seated.invalidate(),
            View::Unseated => self.unseated.invalidate(),
            View::WaitingList => self.waiting_list.invalidate(),
            View::WaitingListIds => self.waiting_list_ids.invalidate(),
            View::WaitingListByAccount => self.waiting_list_by_account.invalidate(),
            View::SortedRoles => self.sorted_roles.invalidate(),
            View::SeatedByRole => self.seated_by_role.invalidate(),
            View::AccountSignups => self.account_signups.invalidate(),
            View::AccountWaitingList => self.account_waiting_list.invalidate(),
            View::AccountSeated => self.account_seated.invalidate(),
            View::TotalSlots => self.total_slots.invalidate(),
            View::MoreThanOneGroup => self.more_than_one_group.invalidate(),
            View::HiddenAndNotFinalized => self.hidden_and_not_finalized.invalidate(),
            View::AvailableCharacters => self.available_characters.invalidate(),
            View::CurrentAccountSeated => self.current_account_seated.invalidate(),
            View::CurrentAccountSignedUp => self.current_account_signed_up.invalidate(),
        }
    }

    /// Whether a view currently holds a cached value.
    pub fn is_clean(&self, view: View) -> bool {
        match view {
            View::SignedUpCharacterIds => self.signed_up_character_ids.is_clean(),
            View::Seated => self.seated.is_clean(),
            View::Unseated => self.unseated.is_clean(),
            View::WaitingList => self.waiting_list.is_clean(),
            View::WaitingListIds => self.waiting_list_ids.is_clean(),
            View::WaitingListByAccount => self.waiting_list_by_account.is_clean(),
            View::SortedRoles => self.sorted_roles.is_clean(),
            View::SeatedByRole => self.seated_by_role.is_clean(),
            View::AccountSignups => self.account_signups.is_clean(),
            View::AccountWaitingList => self.account_waiting_list.is_clean(),
            View::AccountSeated => self.account_seated.is_clean(),
            View::TotalSlots => self.total_slots.is_clean(),
            View::MoreThanOneGroup => self.more_than_one_group.is_clean(),
            View::HiddenAndNotFinalized => self.hidden_and_not_finalized.is_clean(),
            View::AvailableCharacters => self.available_characters.is_clean(),
            View::CurrentAccountSeated => self.current_account_seated.is_clean(),
            View::CurrentAccountSignedUp => self.current_account_signed_up.is_clean(),
        }
    }
}

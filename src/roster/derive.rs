//! Pure roster derivations.
//!
//! Every function here takes the current signups (plus group, role or account context where
//! needed) and returns a freshly built value without touching its inputs. The cached views of
//! [`RaidRoster`](crate::roster::RaidRoster) are thin wrappers over these functions, and they
//! can be called directly by anything that holds a signup list.
//!
//! Signups are assumed well formed: each resolves to a character and, through it, to an
//! account. Both are shared references, so a dangling account cannot reach this module.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    model::{
        account::{Account, AccountId},
        character::{Character, CharacterId},
        raid::GroupConfig,
        role::Role,
        signup::{Signup, SignupId},
    },
    roster::collate::locale_cmp,
};

/// All waiting signups of one account.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountSignups {
    pub account: Arc<Account>,
    pub signups: Vec<Signup>,
}

/// Seated signups under one role.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleSignups {
    pub role: Arc<Role>,
    pub signups: Vec<Signup>,
}

/// Splits signups by their `seated` flag.
///
/// # Arguments
/// - `signups` - Signups in creation order
///
/// # Returns
/// - `(seated, unseated)` - Both halves keep the input order
pub fn partition_by_seated(signups: &[Signup]) -> (Vec<Signup>, Vec<Signup>) {
    signups.iter().cloned().partition(|signup| signup.seated)
}

/// Orders seated signups by character name, ascending.
///
/// The sort is stable, so signups whose characters share a name keep their creation order.
pub fn sort_seated(mut seated: Vec<Signup>) -> Vec<Signup> {
    seated.sort_by(|a, b| locale_cmp(&a.character.name, &b.character.name));
    seated
}

/// Collects the distinct owning accounts of a set of signups.
///
/// The size of this set yields the account statistics: accounts signed up, accounts on the
/// waiting list and accounts seated.
pub fn distinct_account_ids(signups: &[Signup]) -> HashSet<AccountId> {
    signups.iter().map(Signup::account_id).collect()
}

/// Builds the account-deduplicated waiting list.
///
/// An unseated signup is only waiting if no character of the same account holds a seat.
/// Once any of an account's characters is seated, all of that account's other signups leave
/// the waiting list. Seating capacity is not checked here.
///
/// # Arguments
/// - `seated` - Seated signups
/// - `unseated` - Unseated signups in creation order
///
/// # Returns
/// - Waiting signups sorted by account battletag, ties kept in creation order
pub fn compute_waiting_list(seated: &[Signup], unseated: &[Signup]) -> Vec<Signup> {
    let seated_account_ids = distinct_account_ids(seated);

    let mut waiting: Vec<Signup> = unseated
        .iter()
        .filter(|signup| !seated_account_ids.contains(&signup.account_id()))
        .cloned()
        .collect();
    waiting.sort_by(|a, b| locale_cmp(&a.account().battletag, &b.account().battletag));
    waiting
}

/// Groups the waiting list per account.
///
/// # Arguments
/// - `waiting_list` - Output of [`compute_waiting_list`]
///
/// # Returns
/// - One entry per account, in the order accounts first appear in the waiting list
pub fn group_waiting_list_by_account(waiting_list: &[Signup]) -> Vec<AccountSignups> {
    let mut index: HashMap<AccountId, usize> = HashMap::new();
    let mut groups: Vec<AccountSignups> = Vec::new();

    for signup in waiting_list {
        match index.get(&signup.account_id()) {
            Some(&position) => groups[position].signups.push(signup.clone()),
            None => {
                index.insert(signup.account_id(), groups.len());
                groups.push(AccountSignups {
                    account: Arc::clone(signup.account()),
                    signups: vec![signup.clone()],
                });
            }
        }
    }

    groups
}

/// Orders roles by slug, descending.
pub fn sort_roles(roles: &[Arc<Role>]) -> Vec<Arc<Role>> {
    let mut sorted = roles.to_vec();
    sorted.sort_by(|a, b| b.slug.cmp(&a.slug));
    sorted
}

/// Groups seated signups under each role.
///
/// # Arguments
/// - `seated` - Seated signups in display order
/// - `roles` - The raid's roles, in any order
///
/// # Returns
/// - One entry per role in descending slug order, including roles with no seated signups
pub fn group_seated_by_role(seated: &[Signup], roles: &[Arc<Role>]) -> Vec<RoleSignups> {
    sort_roles(roles)
        .into_iter()
        .map(|role| {
            let signups = seated
                .iter()
                .filter(|signup| signup.role.id == role.id)
                .cloned()
                .collect();
            RoleSignups { role, signups }
        })
        .collect()
}

/// Number of seats across all groups, saturating at `u32::MAX`.
pub fn total_slots(groups: &GroupConfig) -> u32 {
    groups.size.saturating_mul(groups.number)
}

/// Whether the raid is split into more than one group.
pub fn more_than_one_group(groups: &GroupConfig) -> bool {
    groups.number > 1
}

/// Whether the raid is still hidden from players while being organized.
pub fn hidden_and_not_finalized(hidden: bool, finalized: bool) -> bool {
    hidden && !finalized
}

/// Ids of every character that already has a signup.
pub fn signed_up_character_ids(signups: &[Signup]) -> HashSet<CharacterId> {
    signups.iter().map(|signup| signup.character.id).collect()
}

/// Characters of an account that can still be signed up.
///
/// # Arguments
/// - `characters` - The account's full character roster
/// - `signed_up` - Ids of characters already signed up for the raid
///
/// # Returns
/// - Characters not yet signed up, highest level first, ties ordered by name ascending
pub fn available_characters(
    characters: &[Arc<Character>],
    signed_up: &HashSet<CharacterId>,
) -> Vec<Arc<Character>> {
    let mut available: Vec<Arc<Character>> = characters
        .iter()
        .filter(|character| !signed_up.contains(&character.id))
        .cloned()
        .collect();
    available.sort_by(|a, b| {
        b.level
            .cmp(&a.level)
            .then_with(|| locale_cmp(&a.name, &b.name))
    });
    available
}

/// The first seated signup belonging to an account.
///
/// # Arguments
/// - `seated` - Seated signups in display order
/// - `account_id` - Account to look for
///
/// # Returns
/// - `Some(Signup)` - The first match in seated order
/// - `None` - The account holds no seat
pub fn current_account_seated(seated: &[Signup], account_id: AccountId) -> Option<Signup> {
    seated
        .iter()
        .find(|signup| signup.account_id() == account_id)
        .cloned()
}

/// Every signup of an account, seated or not, in creation order.
pub fn current_account_signed_up(signups: &[Signup], account_id: AccountId) -> Vec<Signup> {
    signups
        .iter()
        .filter(|signup| signup.account_id() == account_id)
        .cloned()
        .collect()
}

/// Whether a signup may be promoted to a seat, i.e. it is on the waiting list.
pub fn can_be_seated(signup_id: SignupId, waiting_list: &[Signup]) -> bool {
    waiting_list.iter().any(|signup| signup.id == signup_id)
}

/// Ids of the waiting signups, for repeated [`can_be_seated`]-style lookups.
pub fn waiting_list_ids(waiting_list: &[Signup]) -> HashSet<SignupId> {
    waiting_list.iter().map(|signup| signup.id).collect()
}

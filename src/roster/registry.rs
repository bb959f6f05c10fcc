//! Isolation of rosters when several raids are served at once.
//!
//! Each raid lives behind its own [`RwLock`]. Readers of one raid share a read guard and
//! rely on the roster's per-view cells for lazy recomputation; writers take the write guard,
//! so mutations of a raid are serialized. Mutating one raid never touches another raid's
//! cache.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use dioxus_logger::tracing;

use crate::{error::RosterError, model::raid::RaidId, roster::engine::RaidRoster};

/// Rosters of every raid currently being served, keyed by raid id.
#[derive(Debug, Default)]
pub struct RaidRegistry {
    raids: RwLock<HashMap<RaidId, Arc<RwLock<RaidRoster>>>>,
}

impl RaidRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn raids(
        &self,
        raid_id: RaidId,
    ) -> Result<RwLockReadGuard<'_, HashMap<RaidId, Arc<RwLock<RaidRoster>>>>, RosterError> {
        self.raids
            .read()
            .map_err(|_| RosterError::Poisoned { raid_id })
    }

    fn raids_mut(
        &self,
        raid_id: RaidId,
    ) -> Result<RwLockWriteGuard<'_, HashMap<RaidId, Arc<RwLock<RaidRoster>>>>, RosterError> {
        self.raids
            .write()
            .map_err(|_| RosterError::Poisoned { raid_id })
    }

    /// Registers a roster under its raid id.
    ///
    /// # Returns
    /// - `Ok(Some(roster))` - A roster for the same raid was replaced
    /// - `Ok(None)` - The raid was not registered before
    /// - `Err(RosterError::Poisoned)` - The registry lock is poisoned
    pub fn insert(&self, roster: RaidRoster) -> Result<Option<Arc<RwLock<RaidRoster>>>, RosterError> {
        let raid_id = roster.raid().id;
        let replaced = self
            .raids_mut(raid_id)?
            .insert(raid_id, Arc::new(RwLock::new(roster)));

        tracing::info!("Registered roster for raid {}", raid_id);
        Ok(replaced)
    }

    /// Drops a raid's roster.
    ///
    /// # Returns
    /// - `Ok(roster)` - The removed roster
    /// - `Err(RosterError::RaidNotFound)` - The raid is not registered
    /// - `Err(RosterError::Poisoned)` - The registry lock is poisoned
    pub fn remove(&self, raid_id: RaidId) -> Result<Arc<RwLock<RaidRoster>>, RosterError> {
        let removed = self
            .raids_mut(raid_id)?
            .remove(&raid_id)
            .ok_or(RosterError::RaidNotFound { raid_id })?;

        tracing::info!("Removed roster for raid {}", raid_id);
        Ok(removed)
    }

    pub fn contains(&self, raid_id: RaidId) -> Result<bool, RosterError> {
        Ok(self.raids(raid_id)?.contains_key(&raid_id))
    }

    /// Number of registered raids.
    ///
    /// # Returns
    /// - `Ok(usize)` - Count of registered raids
    /// - `Err(RosterError::RegistryPoisoned)` - The registry lock is poisoned
    pub fn len(&self) -> Result<usize, RosterError> {
        self.raids
            .read()
            .map(|raids| raids.len())
            .map_err(|_| RosterError::RegistryPoisoned)
    }

    pub fn is_empty(&self) -> Result<bool, RosterError> {
        Ok(self.len()? == 0)
    }

    /// Shared handle to a raid's roster.
    pub fn get(&self, raid_id: RaidId) -> Result<Arc<RwLock<RaidRoster>>, RosterError> {
        self.raids(raid_id)?
            .get(&raid_id)
            .cloned()
            .ok_or(RosterError::RaidNotFound { raid_id })
    }

    /// Runs `read` against a raid's roster under its read guard.
    ///
    /// Several readers of the same raid may run at once.
    ///
    /// # Returns
    /// - `Ok(T)` - Value produced by `read`
    /// - `Err(RosterError::RaidNotFound)` - The raid is not registered
    /// - `Err(RosterError::Poisoned)` - A writer panicked while holding the raid's lock
    pub fn read<T, F>(&self, raid_id: RaidId, read: F) -> Result<T, RosterError>
    where
        F: FnOnce(&RaidRoster) -> T,
    {
        let roster = self.get(raid_id)?;
        let guard = roster
            .read()
            .map_err(|_| RosterError::Poisoned { raid_id })?;
        Ok(read(&guard))
    }

    /// Runs `mutate` against a raid's roster under its write guard.
    ///
    /// Mutations of the same raid are serialized; other raids stay available.
    ///
    /// # Returns
    /// - `Ok(T)` - Value produced by `mutate`
    /// - `Err(RosterError::RaidNotFound)` - The raid is not registered
    /// - `Err(RosterError::Poisoned)` - A writer panicked while holding the raid's lock
    pub fn write<T, F>(&self, raid_id: RaidId, mutate: F) -> Result<T, RosterError>
    where
        F: FnOnce(&mut RaidRoster) -> T,
    {
        let roster = self.get(raid_id)?;
        let mut guard = roster
            .write()
            .map_err(|_| RosterError::Poisoned { raid_id })?;
        Ok(mutate(&mut guard))
    }
}

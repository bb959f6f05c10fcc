use std::{fmt, sync::Arc};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{role::Role, signup::Signup};

/// Identifier of a scheduled raid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RaidId(pub i64);

impl fmt::Display for RaidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capacity of a raid: `number` groups of `size` slots each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub size: u32,
    pub number: u32,
}

impl GroupConfig {
    pub fn new(size: u32, number: u32) -> Self {
        Self { size, number }
    }
}

/// Aggregate root of the roster: configuration plus every signup for one raid.
///
/// `signups` is kept in creation order. New signups are appended and removals preserve the
/// relative order of the rest.
#[derive(Clone, Debug)]
pub struct Raid {
    pub id: RaidId,
    pub name: String,
    pub date: NaiveDateTime,
    /// Organizer note shown alongside the raid.
    pub note: Option<String>,
    pub groups: GroupConfig,
    pub roles: Vec<Arc<Role>>,
    pub signups: Vec<Signup>,
    pub hidden: bool,
    pub finalized: bool,
}

impl Raid {
    /// Creates a raid with no roles, no signups, visible and not finalized.
    pub fn new(id: RaidId, name: impl Into<String>, date: NaiveDateTime, groups: GroupConfig) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            note: None,
            groups,
            roles: Vec::new(),
            signups: Vec::new(),
            hidden: false,
            finalized: false,
        }
    }
}

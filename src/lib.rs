//! Raid signup roster engine.
//!
//! Players sign characters up for a scheduled raid, organizers seat them into
//! capacity-limited groups, and the roster keeps a waiting list per account rather than per
//! character: once any character of an account holds a seat, none of that account's other
//! characters is offered a waiting-list slot.
//!
//! The crate derives every view the raid screen shows (seated roster, waiting list, role
//! groups, account statistics, characters still available to sign up) from the raw signups,
//! and recomputes only the views affected by each mutation.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod model;
pub mod roster;

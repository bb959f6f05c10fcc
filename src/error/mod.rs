//! Error types for the Loothound roster engine.
//!
//! Roster derivations are total and never fail, so errors only arise at the edges: the
//! mutation boundary ([`RosterError`]), configuration loading ([`ConfigError`]) and the
//! command-line entry point reading and writing JSON. All errors use `thiserror` and
//! convert into the top-level [`Error`] through `?`.

pub mod config;
pub mod roster;

use thiserror::Error;

pub use self::{config::ConfigError, roster::RosterError};

/// Top-level error type aggregating every failure source of the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Roster precondition violated at the mutation boundary.
    #[error(transparent)]
    RosterError(#[from] RosterError),
    /// Snapshot or intent JSON could not be parsed, or a view could not be serialized.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Snapshot or intent file could not be read.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Command-line usage error.
    #[error("Usage: {0}")]
    UsageError(String),
}

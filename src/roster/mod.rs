//! The roster derivation engine.
//!
//! - [`derive`] holds the pure derivations from signups to seated, waiting and grouped views
//! - [`graph`] declares which views read which inputs
//! - [`cache`] memoizes view values until an input they depend on changes
//! - [`engine`] ties these together in [`RaidRoster`], the per-raid mutation boundary
//! - [`adapter`] resolves storage snapshots, applies UI intents and renders view DTOs
//! - [`registry`] keeps concurrently served raids isolated from each other

pub mod adapter;
pub mod cache;
pub mod collate;
pub mod derive;
pub mod engine;
pub mod graph;
pub mod registry;


pub use engine::RaidRoster;
pub use registry::RaidRegistry;

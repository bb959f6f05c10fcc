//! Test fixture utilities.
//!
//! - `factory` - Snapshot records with standard test values
pub mod factory;

//! Shared test setup for the loothound roster engine.
//!
//! Integration tests describe a raid declaratively with [`TestBuilder`], which assembles a
//! [`RaidSnapshot`](loothound::model::snapshot::RaidSnapshot) and resolves it through the
//! same boundary production code uses.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestError};
}

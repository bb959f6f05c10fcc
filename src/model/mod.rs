//! Roster entities and the DTOs exchanged with the rendering and storage layers.

pub mod account;
pub mod character;
pub mod intent;
pub mod raid;
pub mod role;
pub mod signup;
pub mod snapshot;
pub mod view;

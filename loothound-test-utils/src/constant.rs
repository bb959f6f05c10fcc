//! Standard values shared by test fixtures.

/// Raid id used by [`TestBuilder`](crate::TestBuilder) unless overridden.
pub static TEST_RAID_ID: i64 = 1;

pub static TEST_RAID_NAME: &str = "Molten Core";

/// Group size applied when a test snapshot carries no group layout.
pub static TEST_DEFAULT_GROUP_SIZE: u32 = 5;

/// Group count applied when a test snapshot carries no group layout.
pub static TEST_DEFAULT_GROUP_NUMBER: u32 = 1;

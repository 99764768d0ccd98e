pub mod user;

pub(crate) use user::{UserRecord, UserTimestamps};

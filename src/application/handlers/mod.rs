//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod rewards;
pub mod sync;
pub mod user;
pub mod wellness;

#[cfg(test)]
pub(crate) mod test_support;

pub use rewards::{
    CompleteActivityCommand, CompleteActivityHandler, CompleteActivityResult,
    GetRewardStandingHandler, RewardStanding,
};
pub use sync::{sync_profile, SyncStatus};
pub use user::{CreateProfileHandler, CreateProfileResult};
pub use wellness::{RecordStressLevelCommand, RecordStressLevelHandler, RecordStressLevelResult};

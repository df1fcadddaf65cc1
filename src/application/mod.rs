//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CompleteActivityCommand, CompleteActivityHandler, CompleteActivityResult,
    CreateProfileHandler, CreateProfileResult, GetRewardStandingHandler,
    RecordStressLevelCommand, RecordStressLevelHandler, RecordStressLevelResult, RewardStanding,
    SyncStatus,
};

//! Reward handlers - activity awards and standing queries.

mod complete_activity;
mod get_reward_standing;

pub use complete_activity::{
    CompleteActivityCommand, CompleteActivityHandler, CompleteActivityResult,
};
pub use get_reward_standing::{GetRewardStandingHandler, RewardStanding};

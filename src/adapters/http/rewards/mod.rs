//! HTTP adapter for profile, reward, and stress endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ActivityCompletedResponse, CompleteActivityRequest, ErrorResponse, ProfileResponse,
    RecordStressLevelRequest, RewardStandingResponse, StandingResponse, StressEntryResponse,
    StressLevelsResponse,
};
pub use handlers::RewardsHandlers;
pub use routes::rewards_routes;

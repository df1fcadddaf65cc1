//! HTTP routes for reward and wellness endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_activity, create_profile, get_reward_standing, record_stress_level, RewardsHandlers,
};

/// Creates the rewards router. Paths are relative to `/api`.
pub fn rewards_routes(handlers: RewardsHandlers) -> Router {
    Router::new()
        .route("/profile", post(create_profile))
        .route("/rewards", get(get_reward_standing))
        .route("/activities", post(complete_activity))
        .route("/stress-levels", post(record_stress_level))
        .with_state(handlers)
}

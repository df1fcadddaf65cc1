//! HTTP handlers for reward and wellness endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireSession;
use crate::application::{
    CompleteActivityCommand, CompleteActivityHandler, CreateProfileHandler,
    GetRewardStandingHandler, RecordStressLevelCommand, RecordStressLevelHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::rewards::ActivityType;

use super::dto::{
    ActivityCompletedResponse, CompleteActivityRequest, ErrorResponse, ProfileResponse,
    RecordStressLevelRequest, RewardStandingResponse, StressLevelsResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RewardsHandlers {
    create_profile: Arc<CreateProfileHandler>,
    get_standing: Arc<GetRewardStandingHandler>,
    complete_activity: Arc<CompleteActivityHandler>,
    record_stress: Arc<RecordStressLevelHandler>,
    /// Include `DomainError` details in error bodies.
    verbose_errors: bool,
}

impl RewardsHandlers {
    pub fn new(
        create_profile: Arc<CreateProfileHandler>,
        get_standing: Arc<GetRewardStandingHandler>,
        complete_activity: Arc<CompleteActivityHandler>,
        record_stress: Arc<RecordStressLevelHandler>,
    ) -> Self {
        Self {
            create_profile,
            get_standing,
            complete_activity,
            record_stress,
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/profile - Create the caller's profile at signup
pub async fn create_profile(
    State(handlers): State<RewardsHandlers>,
    RequireSession(ctx): RequireSession,
) -> Response {
    match handlers.create_profile.handle(&ctx).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(ProfileResponse::from(&result.profile)),
        )
            .into_response(),
        Err(e) => handle_rewards_error(e, handlers.verbose_errors),
    }
}

/// GET /api/rewards - Current points, tier, and latest stress reading
pub async fn get_reward_standing(
    State(handlers): State<RewardsHandlers>,
    RequireSession(ctx): RequireSession,
) -> Response {
    match handlers.get_standing.handle(&ctx).await {
        Ok(Some(standing)) => {
            (StatusCode::OK, Json(RewardStandingResponse::from(standing))).into_response()
        }
        Ok(None) => handle_rewards_error(
            DomainError::not_found("Profile", &ctx.user_id),
            handlers.verbose_errors,
        ),
        Err(e) => handle_rewards_error(e, handlers.verbose_errors),
    }
}

/// POST /api/activities - Award points for a completed activity
pub async fn complete_activity(
    State(handlers): State<RewardsHandlers>,
    RequireSession(ctx): RequireSession,
    Json(req): Json<CompleteActivityRequest>,
) -> Response {
    let cmd = CompleteActivityCommand {
        activity_type: ActivityType::parse(&req.activity_type),
        metrics: req.metrics(),
    };

    match handlers.complete_activity.handle(cmd, &ctx).await {
        Ok(result) => {
            (StatusCode::OK, Json(ActivityCompletedResponse::from(result))).into_response()
        }
        Err(e) => handle_rewards_error(e, handlers.verbose_errors),
    }
}

/// POST /api/stress-levels - Record a stress rating
pub async fn record_stress_level(
    State(handlers): State<RewardsHandlers>,
    RequireSession(ctx): RequireSession,
    Json(req): Json<RecordStressLevelRequest>,
) -> Response {
    let cmd = RecordStressLevelCommand {
        level: req.level,
        date: req.date,
    };

    match handlers.record_stress.handle(cmd, &ctx).await {
        Ok(result) => {
            (StatusCode::OK, Json(StressLevelsResponse::from(result))).into_response()
        }
        Err(e) => handle_rewards_error(e, handlers.verbose_errors),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_rewards_error(error: DomainError, verbose: bool) -> Response {
    let status = status_for(error.code());
    let body = if status == StatusCode::INTERNAL_SERVER_ERROR && !verbose {
        tracing::error!(error = %error, "request failed");
        ErrorResponse::internal("An unexpected error occurred")
    } else {
        ErrorResponse::from_domain(&error, verbose)
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = handle_rewards_error(DomainError::validation("level", "bad"), false);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_rewards_error(DomainError::not_found("Profile", "u"), false);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let response =
            handle_rewards_error(DomainError::new(ErrorCode::Conflict, "exists"), false);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn store_unavailable_maps_to_503() {
        let response = handle_rewards_error(
            DomainError::new(ErrorCode::StoreUnavailable, "down"),
            false,
        );
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_error_maps_to_500() {
        let response =
            handle_rewards_error(DomainError::new(ErrorCode::InternalError, "boom"), true);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

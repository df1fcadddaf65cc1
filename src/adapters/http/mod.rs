//! HTTP adapters - REST API for the mobile and web clients.
//!
//! `build_router` assembles the API routes behind the auth middleware and
//! wraps everything in tracing, CORS, and timeout layers.

pub mod middleware;
pub mod rewards;

use std::time::Duration;

use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Json, Router,
};
use http::{HeaderValue, Method};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use middleware::{auth_middleware, AuthState, RequireSession};
pub use rewards::{rewards_routes, RewardsHandlers};

/// Cross-cutting settings for the outer router.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub request_timeout: Duration,
    /// Allowed CORS origins; `*` or an empty list allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Builds the full application router.
pub fn build_router(
    handlers: RewardsHandlers,
    validator: AuthState,
    settings: &RouterSettings,
) -> Router {
    let api = rewards_routes(handlers).layer(from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and injects the caller into extensions
//! - `RequireSession` - Extractor that builds a `SessionContext` for handlers
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser + AccessToken into extensions
//!                                      ↓
//!                              Handler → RequireSession reads them back as a SessionContext
//! ```
//!
//! The access token is kept because the profile store authorizes writes
//! with the caller's own session, not a service credential.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::{AuthError, AuthenticatedUser, SessionContext};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Header carrying a client-supplied correlation id.
pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Raw bearer token of a validated request.
#[derive(Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Authentication middleware that validates Bearer tokens.
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the `SessionValidator` port
/// 3. On success, injects `AuthenticatedUser` and `AccessToken` into request extensions
/// 4. On missing token, continues without injecting (extractors reject later)
/// 5. On invalid token, returns 401 Unauthorized
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_owned);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match validator.validate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            request
                .extensions_mut()
                .insert(AccessToken(Secret::new(token)));
            next.run(request).await
        }
        Err(e) => {
            let (status, message) = match &e {
                AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
                AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
                AuthError::ServiceUnavailable(msg) => {
                    tracing::error!("Auth service unavailable: {}", msg);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Authentication service unavailable",
                    )
                }
            };

            (
                status,
                Json(serde_json::json!({
                    "error": message,
                    "code": "AUTH_ERROR"
                })),
            )
                .into_response()
        }
    }
}

/// Extractor that yields the caller's `SessionContext`.
///
/// Carries the user, the bearer token for the profile store, and the
/// request's correlation id (taken from `x-correlation-id` when present).
#[derive(Debug, Clone)]
pub struct RequireSession(pub SessionContext);

impl RequireSession {
    fn from_parts(parts: &Parts) -> Result<Self, AuthRejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or(AuthRejection::Unauthenticated)?;

        let mut ctx = SessionContext::new(user.id.clone()).with_source("api");
        if let Some(token) = parts.extensions.get::<AccessToken>() {
            ctx = ctx.with_access_token(token.expose());
        }
        if let Some(id) = parts
            .headers
            .get(CORRELATION_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|id| !id.is_empty())
        {
            ctx = ctx.with_correlation_id(id);
        }
        Ok(RequireSession(ctx))
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { RequireSession::from_parts(parts) })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}

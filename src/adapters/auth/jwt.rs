//! Shared-secret JWT adapter for Supabase access tokens.
//!
//! Supabase signs session tokens with the project's JWT secret (HS256).
//! This adapter verifies the signature locally and checks:
//!
//! - **Audience (aud)**: must match the configured audience (`authenticated`)
//! - **Issuer (iss)**: checked only when an issuer is configured
//! - **Expiry (exp)**: must be in the future
//!
//! # Example
//!
//! ```ignore
//! use nimathi::adapters::auth::{JwtConfig, JwtSessionValidator};
//!
//! let validator = JwtSessionValidator::new(JwtConfig::new(secret, "authenticated"));
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT validator.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    secret: Secret<String>,

    /// Expected audience claim.
    pub audience: String,

    /// Expected issuer claim, when the deployment pins one.
    pub issuer: Option<String>,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            audience: audience.into(),
            issuer: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }
}

/// Claims read from a Supabase access token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    exp: i64,
    #[serde(default)]
    email: Option<String>,
}

/// Validates HS256 access tokens against the project JWT secret.
pub struct JwtSessionValidator {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        if let Some(issuer) = &self.config.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        validation
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
                    tracing::warn!(error = %e, "token rejected");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!(error = %e, "token validation failed");
                    AuthError::InvalidToken
                }
            })?;

        let claims = data.claims;
        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("token has empty subject");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("audience", &self.config.audience)
            .field("issuer", &self.config.issuer)
            .finish_non_exhaustive()
    }
}

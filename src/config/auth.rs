//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

const MIN_SECRET_LEN: usize = 32;

/// Authentication configuration (Supabase JWT)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Project JWT secret used to verify HS256 access tokens
    pub jwt_secret: Option<Secret<String>>,

    /// Expected audience for tokens
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Expected issuer, e.g. `https://<project>.supabase.co/auth/v1`
    pub issuer: Option<String>,

    /// Static `token=user_id` pairs for local development (comma-separated)
    pub dev_tokens: Option<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Either a JWT secret or dev tokens must be configured. Production
    /// requires the JWT secret and forbids dev tokens.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let production = *environment == Environment::Production;

        if production && self.dev_tokens.is_some() {
            return Err(ValidationError::DevTokensInProduction);
        }

        match &self.jwt_secret {
            Some(secret) if secret.expose_secret().len() < MIN_SECRET_LEN => {
                Err(ValidationError::JwtSecretTooShort)
            }
            Some(_) => Ok(()),
            None if !production && self.dev_tokens.is_some() => Ok(()),
            None => Err(ValidationError::MissingRequired("AUTH__JWT_SECRET")),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            audience: default_audience(),
            issuer: None,
            dev_tokens: None,
        }
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: Some(Secret::new(secret.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.audience, "authenticated");
        assert!(config.issuer.is_none());
    }

    #[test]
    fn test_validation_missing_secret() {
        assert_eq!(
            AuthConfig::default().validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_validation_short_secret() {
        assert_eq!(
            with_secret("short").validate(&Environment::Development),
            Err(ValidationError::JwtSecretTooShort)
        );
    }

    #[test]
    fn test_dev_tokens_only_outside_production() {
        let config = AuthConfig {
            dev_tokens: Some("dev-token=user-1".to_string()),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::DevTokensInProduction)
        );
    }

    #[test]
    fn test_validation_valid_config() {
        let config = with_secret("super-secret-jwt-token-with-at-least-32-characters");
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = with_secret("super-secret-jwt-token-with-at-least-32-characters");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}

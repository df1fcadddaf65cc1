//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host address")]
    InvalidHost,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid profile store URL format")]
    InvalidStoreUrl,

    #[error("Profile store URL must use HTTPS in production")]
    StoreUrlMustBeHttps,

    #[error("JWT secret must be at least 32 characters")]
    JwtSecretTooShort,

    #[error("Static dev tokens are not allowed in production")]
    DevTokensInProduction,
}

//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NIMATHI` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use nimathi::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod auth;
mod error;
mod features;
mod server;
mod store;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};
pub use store::{StoreBackend, StoreConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults so a bare environment yields an in-memory dev setup
/// that still fails `validate()` until auth is configured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Profile store configuration (memory or Supabase REST)
    #[serde(default)]
    pub store: StoreConfig,

    /// Authentication configuration (Supabase JWT)
    #[serde(default)]
    pub auth: AuthConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NIMATHI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `NIMATHI__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `NIMATHI__STORE__BACKEND=rest` -> `store.backend = rest`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NIMATHI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.store.validate(&self.server.environment)?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "NIMATHI__SERVER__PORT",
        "NIMATHI__SERVER__ENVIRONMENT",
        "NIMATHI__STORE__BACKEND",
        "NIMATHI__STORE__BASE_URL",
        "NIMATHI__STORE__API_KEY",
        "NIMATHI__AUTH__JWT_SECRET",
        "NIMATHI__AUTH__DEV_TOKENS",
        "NIMATHI__FEATURES__JSON_LOGS",
    ];

    fn set_minimal_env() {
        env::set_var(
            "NIMATHI__AUTH__JWT_SECRET",
            "super-secret-jwt-token-with-at-least-32-characters",
        );
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        set_minimal_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[]).unwrap();

        assert!(config.auth.jwt_secret.is_some());
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[
            ("NIMATHI__SERVER__PORT", "3000"),
            ("NIMATHI__SERVER__ENVIRONMENT", "production"),
            ("NIMATHI__STORE__BACKEND", "rest"),
            ("NIMATHI__STORE__BASE_URL", "https://proj.supabase.co/rest/v1"),
            ("NIMATHI__STORE__API_KEY", "anon-key"),
            ("NIMATHI__FEATURES__JSON_LOGS", "true"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.store.backend, StoreBackend::Rest);
        assert!(config.features.json_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rest_backend_without_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[("NIMATHI__STORE__BACKEND", "rest")]).unwrap();

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("STORE__BASE_URL"))
        );
    }
}

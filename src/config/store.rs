//! Profile store configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Which profile store adapter to wire at startup
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local store; data is lost on restart
    #[default]
    Memory,
    /// Supabase/PostgREST REST API
    Rest,
}

/// Profile store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// REST API base URL, e.g. `https://<project>.supabase.co/rest/v1`
    pub base_url: Option<String>,

    /// Project API key sent as `apikey`
    pub api_key: Option<Secret<String>>,

    #[serde(default = "default_profiles_table")]
    pub profiles_table: String,

    #[serde(default = "default_activities_table")]
    pub activities_table: String,

    /// HTTP timeout for store requests in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate store configuration
    ///
    /// The REST backend needs a URL and an API key; production requires HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.backend == StoreBackend::Memory {
            return Ok(());
        }

        let url = self
            .base_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingRequired("STORE__BASE_URL"))?;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidStoreUrl);
        }
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::StoreUrlMustBeHttps);
        }

        let has_key = self
            .api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty());
        if !has_key {
            return Err(ValidationError::MissingRequired("STORE__API_KEY"));
        }

        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            base_url: None,
            api_key: None,
            profiles_table: default_profiles_table(),
            activities_table: default_activities_table(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_profiles_table() -> String {
    "profiles".to_string()
}

fn default_activities_table() -> String {
    "activity_logs".to_string()
}

fn default_timeout() -> u64 {
    10
}

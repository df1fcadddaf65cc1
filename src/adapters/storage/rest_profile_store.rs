//! REST Profile Store Adapter
//!
//! Talks to a PostgREST-style key-value backend (the Supabase REST API):
//!
//! - `GET    {base}/{profiles}?id=eq.{user}` - fetch a profile row
//! - `POST   {base}/{profiles}` - insert a profile row
//! - `POST   {base}/{profiles}` + `Prefer: resolution=merge-duplicates` - upsert
//! - `POST   {base}/{activities}` - append an activity log row
//!
//! Requests carry the project API key in `apikey` and the caller's access
//! token (falling back to the API key) as the Bearer credential.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode, SessionContext, UserId};
use crate::domain::rewards::ActivityRecord;
use crate::domain::user::UserProfile;
use crate::ports::{ActivityLog, ProfileStore};

/// Configuration for the REST store.
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Base URL of the REST API (e.g. "https://project.supabase.co/rest/v1").
    pub base_url: String,
    /// Project API key.
    api_key: Secret<String>,
    pub profiles_table: String,
    pub activities_table: String,
    pub timeout: Duration,
}

impl RestStoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Secret::new(api_key.into()),
            profiles_table: "profiles".to_string(),
            activities_table: "activity_logs".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_tables(
        mut self,
        profiles: impl Into<String>,
        activities: impl Into<String>,
    ) -> Self {
        self.profiles_table = profiles.into();
        self.activities_table = activities.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), table)
    }
}

/// Activity row as stored in the activity log table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivityRow<'a> {
    user_id: &'a UserId,
    #[serde(flatten)]
    record: &'a ActivityRecord,
}

/// Profile store backed by a remote REST API.
pub struct RestProfileStore {
    config: RestStoreConfig,
    client: Client,
}

impl RestProfileStore {
    pub fn new(config: RestStoreConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { config, client })
    }

    fn authorize(&self, request: RequestBuilder, ctx: &SessionContext) -> RequestBuilder {
        let api_key = self.config.api_key.expose_secret();
        let bearer = ctx.access_token().unwrap_or(api_key.as_str());
        request
            .header("apikey", api_key.as_str())
            .bearer_auth(bearer)
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<reqwest::Response, DomainError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(operation, error = %e, "profile store request failed");
            DomainError::new(
                ErrorCode::StoreUnavailable,
                format!("Profile store unreachable: {}", e),
            )
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(operation, %status, body = %body, "profile store returned error");
        Err(map_status(status, operation))
    }
}

/// Maps a non-success HTTP status to a domain error.
fn map_status(status: StatusCode, operation: &str) -> DomainError {
    let code = match status {
        StatusCode::UNAUTHORIZED => ErrorCode::Unauthorized,
        StatusCode::FORBIDDEN => ErrorCode::Forbidden,
        StatusCode::CONFLICT => ErrorCode::Conflict,
        StatusCode::NOT_FOUND => ErrorCode::NotFound,
        _ => ErrorCode::StoreUnavailable,
    };
    DomainError::new(code, format!("Profile store {} failed with {}", operation, status))
        .with_detail("status", status.as_u16().to_string())
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    async fn get_profile(
        &self,
        ctx: &SessionContext,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, DomainError> {
        let request = self
            .client
            .get(self.config.table_url(&self.config.profiles_table))
            .query(&[("id", format!("eq.{}", user_id)), ("select", "*".to_string())]);

        let response = self.send(self.authorize(request, ctx), "get_profile").await?;

        let mut rows: Vec<UserProfile> = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::StoreUnavailable,
                format!("Malformed profile record: {}", e),
            )
        })?;

        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    async fn create_profile(
        &self,
        ctx: &SessionContext,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        let request = self
            .client
            .post(self.config.table_url(&self.config.profiles_table))
            .header("Prefer", "return=minimal")
            .json(profile);

        self.send(self.authorize(request, ctx), "create_profile").await?;
        Ok(())
    }

    async fn put_profile(
        &self,
        ctx: &SessionContext,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        let request = self
            .client
            .post(self.config.table_url(&self.config.profiles_table))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(profile);

        self.send(self.authorize(request, ctx), "put_profile").await?;
        Ok(())
    }
}

#[async_trait]
impl ActivityLog for RestProfileStore {
    async fn append_activity(
        &self,
        ctx: &SessionContext,
        user_id: &UserId,
        record: &ActivityRecord,
    ) -> Result<(), DomainError> {
        let request = self
            .client
            .post(self.config.table_url(&self.config.activities_table))
            .header("Prefer", "return=minimal")
            .json(&ActivityRow { user_id, record });

        self.send(self.authorize(request, ctx), "append_activity").await?;
        Ok(())
    }
}

//! Session context for command and query handlers.
//!
//! A `SessionContext` is built once at the API boundary and passed to every
//! handler and every adapter that talks to the profile store. It carries
//! the caller's identity and the access token the store expects, so no
//! component needs to look the session up from ambient storage.

use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

use super::UserId;

/// Identity, credentials, and tracing context for a single operation.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// The user the operation acts on behalf of.
    pub user_id: UserId,

    /// Bearer token forwarded to the profile store, if any.
    access_token: Option<Secret<String>>,

    /// Links related log lines across a single user request.
    correlation_id: Option<String>,

    /// Source of this operation (e.g., "api", "test").
    source: Option<String>,
}

impl SessionContext {
    /// Creates a context for the given user with no credentials attached.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            access_token: None,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: attach the caller's access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(Secret::new(token.into()));
        self
    }

    /// Builder: add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Exposes the access token for an outgoing request.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(|t| t.expose_secret().as_str())
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl SessionContext {
    /// Creates a test fixture for the given user id.
    pub fn test_fixture(user_id: &str) -> Self {
        Self::new(UserId::new(user_id).unwrap())
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

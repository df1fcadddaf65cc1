//! ProfileStore port for user profile persistence

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, SessionContext, UserId},
    user::UserProfile,
};

/// Key-value store holding one profile record per user.
///
/// Implementations report transport or backend failures as
/// `ErrorCode::StoreUnavailable` so callers can degrade instead of failing.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile for a user, `None` if it does not exist.
    async fn get_profile(
        &self,
        ctx: &SessionContext,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, DomainError>;

    /// Insert a new profile. Fails with `ErrorCode::Conflict` if one exists.
    async fn create_profile(
        &self,
        ctx: &SessionContext,
        profile: &UserProfile,
    ) -> Result<(), DomainError>;

    /// Replace the stored profile with the given one.
    async fn put_profile(
        &self,
        ctx: &SessionContext,
        profile: &UserProfile,
    ) -> Result<(), DomainError>;
}

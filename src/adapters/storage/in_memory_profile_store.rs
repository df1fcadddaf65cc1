//! In-Memory Profile Store Adapter
//!
//! Keeps profiles and the activity log in process memory.
//! Used for development runs and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionContext, UserId};
use crate::domain::rewards::ActivityRecord;
use crate::domain::user::UserProfile;
use crate::ports::{ActivityLog, ProfileStore};

/// In-memory storage for user profiles and their activity history
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
    activities: Arc<RwLock<HashMap<UserId, Vec<ActivityRecord>>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Activities logged for a user, oldest first
    pub async fn activities_for(&self, user_id: &UserId) -> Vec<ActivityRecord> {
        self.activities
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.profiles.write().await.clear();
        self.activities.write().await.clear();
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(
        &self,
        _ctx: &SessionContext,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn create_profile(
        &self,
        _ctx: &SessionContext,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(profile.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "Profile already exists for this user",
            ));
        }
        profiles.insert(profile.id().clone(), profile.clone());
        Ok(())
    }

    async fn put_profile(
        &self,
        _ctx: &SessionContext,
        profile: &UserProfile,
    ) -> Result<(), DomainError> {
        self.profiles
            .write()
            .await
            .insert(profile.id().clone(), profile.clone());
        Ok(())
    }
}

#[async_trait]
impl ActivityLog for InMemoryProfileStore {
    async fn append_activity(
        &self,
        _ctx: &SessionContext,
        user_id: &UserId,
        record: &ActivityRecord,
    ) -> Result<(), DomainError> {
        self.activities
            .write()
            .await
            .entry(user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }
}

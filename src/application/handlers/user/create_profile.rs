//! CreateProfile - Command handler for creating a profile at signup.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionContext};
use crate::domain::user::UserProfile;
use crate::ports::{Clock, ProfileStore};

/// Result of successful profile creation.
#[derive(Debug, Clone)]
pub struct CreateProfileResult {
    pub profile: UserProfile,
}

/// Handler for creating profiles.
pub struct CreateProfileHandler {
    store: Arc<dyn ProfileStore>,
    clock: Arc<dyn Clock>,
}

impl CreateProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, ctx: &SessionContext) -> Result<CreateProfileResult, DomainError> {
        // 1. Check if profile already exists
        if self.store.get_profile(ctx, &ctx.user_id).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "Profile already exists for this user",
            ));
        }

        // 2. Create empty profile
        let profile = UserProfile::new(ctx.user_id.clone(), self.clock.now());

        // 3. Persist profile
        self.store.create_profile(ctx, &profile).await?;

        tracing::info!(user_id = %ctx.user_id, "profile created");

        Ok(CreateProfileResult { profile })
    }
}

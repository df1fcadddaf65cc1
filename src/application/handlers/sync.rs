//! Remote sync of locally-applied profile changes.
//!
//! Handlers mutate the profile in memory first and then try to persist it.
//! A failed write does not undo the local change; it is reported through
//! `SyncStatus` so the client can show a soft notice.

use serde::Serialize;

use crate::domain::foundation::SessionContext;
use crate::domain::user::UserProfile;
use crate::ports::ProfileStore;

/// Outcome of pushing a locally-updated profile to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncStatus {
    /// The store accepted the write.
    Synced,
    /// The write failed; the returned profile is ahead of the store.
    Failed { reason: String },
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncStatus::Synced)
    }
}

/// Writes the profile, converting any failure into `SyncStatus::Failed`.
///
/// There is no retry; the next successful write carries the state forward.
pub async fn sync_profile(
    store: &dyn ProfileStore,
    ctx: &SessionContext,
    profile: &UserProfile,
) -> SyncStatus {
    match store.put_profile(ctx, profile).await {
        Ok(()) => SyncStatus::Synced,
        Err(e) => {
            tracing::warn!(
                user_id = %profile.id(),
                correlation_id = %ctx.correlation_id(),
                error = %e,
                "profile sync failed, keeping local update"
            );
            SyncStatus::Failed {
                reason: e.message().to_string(),
            }
        }
    }
}

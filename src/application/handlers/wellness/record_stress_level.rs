//! RecordStressLevel - Command handler for stress-rating submissions.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::handlers::sync::{sync_profile, SyncStatus};
use crate::domain::foundation::{DomainError, SessionContext};
use crate::domain::user::UserProfile;
use crate::domain::wellness::{StressEntry, StressLevel};
use crate::ports::{Clock, ProfileStore};

/// Command to record a stress rating.
#[derive(Debug, Clone)]
pub struct RecordStressLevelCommand {
    /// Raw rating from the client; validated to 0..=10.
    pub level: i64,
    /// Calendar day the rating refers to; defaults to today.
    pub date: Option<NaiveDate>,
}

/// Result of recording a stress rating.
#[derive(Debug, Clone)]
pub struct RecordStressLevelResult {
    /// Retained readings, newest last.
    pub entries: Vec<StressEntry>,
    pub profile: UserProfile,
    pub sync: SyncStatus,
}

/// Handler for stress-rating submissions.
pub struct RecordStressLevelHandler {
    store: Arc<dyn ProfileStore>,
    clock: Arc<dyn Clock>,
}

impl RecordStressLevelHandler {
    pub fn new(store: Arc<dyn ProfileStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        cmd: RecordStressLevelCommand,
        ctx: &SessionContext,
    ) -> Result<RecordStressLevelResult, DomainError> {
        // 1. Validate before touching the store
        let level = StressLevel::new(cmd.level)?;

        // 2. Load profile
        let mut profile = self
            .store
            .get_profile(ctx, &ctx.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile", &ctx.user_id))?;

        // 3. Append and prune locally
        let now = self.clock.now();
        let entries = profile.record_stress_level(level, cmd.date, now).to_vec();

        // 4. Persist, keeping the local update on failure
        let sync = sync_profile(self.store.as_ref(), ctx, &profile).await;

        tracing::info!(
            user_id = %ctx.user_id,
            correlation_id = %ctx.correlation_id(),
            level = %level,
            retained = entries.len(),
            synced = sync.is_synced(),
            "stress level recorded"
        );

        Ok(RecordStressLevelResult {
            entries,
            profile,
            sync,
        })
    }
}

//! CompleteActivity - Command handler for awarding points on activity completion.

use std::sync::Arc;

use crate::application::handlers::sync::{sync_profile, SyncStatus};
use crate::domain::foundation::{DomainError, SessionContext};
use crate::domain::rewards::{
    ActivityMetrics, ActivityRecord, ActivityType, RewardTier, TierStanding,
};
use crate::domain::user::UserProfile;
use crate::ports::{ActivityLog, Clock, ProfileStore};

/// Command issued when a meditation, drawing, or journaling session ends.
#[derive(Debug, Clone)]
pub struct CompleteActivityCommand {
    pub activity_type: ActivityType,
    pub metrics: ActivityMetrics,
}

/// Result of applying an activity award.
#[derive(Debug, Clone)]
pub struct CompleteActivityResult {
    pub record: ActivityRecord,
    pub points_awarded: u64,
    /// Profile with the award applied, whether or not the store accepted it.
    pub profile: UserProfile,
    pub standing: TierStanding,
    pub previous_tier: RewardTier,
    pub sync: SyncStatus,
}

impl CompleteActivityResult {
    /// True when the award moved the user into a new tier.
    pub fn tier_changed(&self) -> bool {
        self.standing.tier != self.previous_tier
    }
}

/// Handler for activity completion.
pub struct CompleteActivityHandler {
    store: Arc<dyn ProfileStore>,
    activity_log: Arc<dyn ActivityLog>,
    clock: Arc<dyn Clock>,
}

impl CompleteActivityHandler {
    pub fn new(
        store: Arc<dyn ProfileStore>,
        activity_log: Arc<dyn ActivityLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            activity_log,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteActivityCommand,
        ctx: &SessionContext,
    ) -> Result<CompleteActivityResult, DomainError> {
        let now = self.clock.now();

        // 1. Compute the award
        let record = ActivityRecord::new(cmd.activity_type, cmd.metrics, now);
        let points_awarded = record.points();
        tracing::debug!(
            activity = %record.activity_type,
            points = points_awarded,
            "computed activity award"
        );

        // 2. Load profile
        let mut profile = self
            .store
            .get_profile(ctx, &ctx.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile", &ctx.user_id))?;
        let previous_tier = profile.tier_standing().tier;

        // 3. Apply locally
        profile.award_points(points_awarded, now);

        // 4. Persist, keeping the local award on failure
        let sync = sync_profile(self.store.as_ref(), ctx, &profile).await;

        if let Err(e) = self
            .activity_log
            .append_activity(ctx, &ctx.user_id, &record)
            .await
        {
            tracing::warn!(activity_id = %record.id, error = %e, "failed to log activity");
        }

        // 5. Tier for the notification
        let standing = profile.tier_standing();
        tracing::info!(
            user_id = %ctx.user_id,
            correlation_id = %ctx.correlation_id(),
            points = points_awarded,
            total = profile.reward_points(),
            tier = %standing.tier,
            synced = sync.is_synced(),
            "activity completed"
        );

        Ok(CompleteActivityResult {
            record,
            points_awarded,
            profile,
            standing,
            previous_tier,
            sync,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::application::handlers::test_support::{MockActivityLog, MockProfileStore};
    use crate::domain::foundation::{ErrorCode, Timestamp};

    fn ctx() -> SessionContext {
        SessionContext::test_fixture("user-1")
    }

    fn profile_with_points(points: u64) -> UserProfile {
        let mut profile = UserProfile::new(ctx().user_id, Timestamp::now());
        profile.award_points(points, Timestamp::now());
        profile
    }

    fn handler(store: Arc<MockProfileStore>, log: Arc<MockActivityLog>) -> CompleteActivityHandler {
        CompleteActivityHandler::new(store, log, Arc::new(FixedClock::new(Timestamp::now())))
    }

    fn meditation(minutes: f64) -> CompleteActivityCommand {
        CompleteActivityCommand {
            activity_type: ActivityType::Meditation,
            metrics: ActivityMetrics::with_duration(minutes),
        }
    }

    #[tokio::test]
    async fn ten_minute_meditation_moves_forty_points_to_silver() {
        let store = Arc::new(MockProfileStore::new().with_profile(profile_with_points(40)));
        let log = Arc::new(MockActivityLog::new());
        let handler = handler(store.clone(), log.clone());

        let result = handler.handle(meditation(10.0), &ctx()).await.unwrap();

        assert_eq!(result.points_awarded, 20);
        assert_eq!(result.profile.reward_points(), 60);
        assert_eq!(result.standing.tier, RewardTier::Silver);
        assert_eq!(result.standing.points_to_next_tier, Some(89));
        assert_eq!(result.previous_tier, RewardTier::Bronze);
        assert!(result.tier_changed());
        assert_eq!(result.sync, SyncStatus::Synced);
        assert_eq!(store.stored(&ctx().user_id).unwrap().reward_points(), 60);
    }

    #[tokio::test]
    async fn legacy_out_of_range_stress_entry_does_not_block_award() {
        let stored: UserProfile = serde_json::from_str(
            r#"{"id":"user-1","rewardPoints":40,"stressLevels":[{"level":12,"date":"2024-01-01","timestamp":"2024-01-01T09:00:00Z"}]}"#,
        )
        .unwrap();
        let store = Arc::new(MockProfileStore::new().with_profile(stored));
        let handler = handler(store.clone(), Arc::new(MockActivityLog::new()));

        let result = handler.handle(meditation(10.0), &ctx()).await.unwrap();

        assert_eq!(result.profile.reward_points(), 60);
        assert_eq!(result.sync, SyncStatus::Synced);
        assert_eq!(store.stored(&ctx().user_id).unwrap().reward_points(), 60);
    }

    #[tokio::test]
    async fn award_is_applied_once_per_completion() {
        let store = Arc::new(MockProfileStore::new().with_profile(profile_with_points(0)));
        let log = Arc::new(MockActivityLog::new());
        let handler = handler(store.clone(), log.clone());

        handler
            .handle(
                CompleteActivityCommand {
                    activity_type: ActivityType::Drawing,
                    metrics: ActivityMetrics::default(),
                },
                &ctx(),
            )
            .await
            .unwrap();

        assert_eq!(store.write_count(), 1);
        assert_eq!(store.stored(&ctx().user_id).unwrap().reward_points(), 15);
        assert_eq!(log.records().len(), 1);
    }

    #[tokio::test]
    async fn failed_write_keeps_local_award() {
        let store = Arc::new(
            MockProfileStore::new()
                .with_profile(profile_with_points(10))
                .failing_writes(),
        );
        let log = Arc::new(MockActivityLog::new());
        let handler = handler(store.clone(), log);

        let result = handler
            .handle(
                CompleteActivityCommand {
                    activity_type: ActivityType::Journaling,
                    metrics: ActivityMetrics::with_word_count(0),
                },
                &ctx(),
            )
            .await
            .unwrap();

        assert_eq!(result.profile.reward_points(), 15);
        assert!(matches!(result.sync, SyncStatus::Failed { .. }));
        // Store still holds the old total.
        assert_eq!(store.stored(&ctx().user_id).unwrap().reward_points(), 10);
    }

    #[tokio::test]
    async fn activity_log_failure_does_not_block_award() {
        let store = Arc::new(MockProfileStore::new().with_profile(profile_with_points(0)));
        let handler = handler(store, Arc::new(MockActivityLog::failing()));

        let result = handler.handle(meditation(3.0), &ctx()).await.unwrap();

        assert_eq!(result.profile.reward_points(), 6);
        assert!(result.sync.is_synced());
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let handler = handler(
            Arc::new(MockProfileStore::new()),
            Arc::new(MockActivityLog::new()),
        );

        let err = handler.handle(meditation(5.0), &ctx()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn read_failure_propagates() {
        let store = Arc::new(
            MockProfileStore::new()
                .with_profile(profile_with_points(0))
                .failing_reads(),
        );
        let handler = handler(store, Arc::new(MockActivityLog::new()));

        let err = handler.handle(meditation(5.0), &ctx()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::StoreUnavailable);
    }

    #[tokio::test]
    async fn unknown_activity_earns_default_award() {
        let store = Arc::new(MockProfileStore::new().with_profile(profile_with_points(0)));
        let log = Arc::new(MockActivityLog::new());
        let handler = handler(store, log.clone());

        let result = handler
            .handle(
                CompleteActivityCommand {
                    activity_type: ActivityType::parse("stretching"),
                    metrics: ActivityMetrics::default(),
                },
                &ctx(),
            )
            .await
            .unwrap();

        assert_eq!(result.points_awarded, 5);
        assert!(!result.tier_changed());
        assert_eq!(log.records()[0].activity_type, ActivityType::Other);
    }
}

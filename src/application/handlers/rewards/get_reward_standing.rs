//! GetRewardStanding - Query handler for the dashboard reward card.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionContext, UserId};
use crate::domain::rewards::TierStanding;
use crate::domain::wellness::StressEntry;
use crate::ports::ProfileStore;

/// Reward and stress summary for one user.
#[derive(Debug, Clone)]
pub struct RewardStanding {
    pub user_id: UserId,
    pub reward_points: u64,
    pub standing: TierStanding,
    pub latest_stress: Option<StressEntry>,
    pub average_stress: Option<f64>,
}

/// Handler for reading a user's reward standing.
pub struct GetRewardStandingHandler {
    store: Arc<dyn ProfileStore>,
}

impl GetRewardStandingHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, ctx: &SessionContext) -> Result<Option<RewardStanding>, DomainError> {
        let profile = match self.store.get_profile(ctx, &ctx.user_id).await? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let ledger = profile.stress_levels();
        Ok(Some(RewardStanding {
            user_id: profile.id().clone(),
            reward_points: profile.reward_points(),
            standing: profile.tier_standing(),
            latest_stress: ledger.latest().copied(),
            average_stress: ledger.average_level(),
        }))
    }
}

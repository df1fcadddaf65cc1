//! UserProfile aggregate root

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::rewards::{resolve_tier, TierStanding};
use crate::domain::wellness::{StressEntry, StressLedger, StressLevel};

/// A user's reward and stress record, keyed by user id.
///
/// # Invariants
///
/// - `id` never changes after creation
/// - `reward_points` never decreases
/// - `stress_levels` keeps insertion order and is pruned only on write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    id: UserId,
    #[serde(default)]
    reward_points: u64,
    #[serde(default)]
    stress_levels: StressLedger,
    #[serde(default)]
    created_at: Timestamp,
    #[serde(default)]
    updated_at: Timestamp,
}

impl UserProfile {
    /// Creates the profile a user starts with at signup.
    pub fn new(id: UserId, now: Timestamp) -> Self {
        Self {
            id,
            reward_points: 0,
            stress_levels: StressLedger::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn stress_levels(&self) -> &StressLedger {
        &self.stress_levels
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Current tier standing for display.
    pub fn tier_standing(&self) -> TierStanding {
        resolve_tier(self.reward_points)
    }

    /// Adds an activity award and returns the new total.
    pub fn award_points(&mut self, points: u64, now: Timestamp) -> u64 {
        self.reward_points = self.reward_points.saturating_add(points);
        self.updated_at = now;
        self.reward_points
    }

    /// Records a stress reading, applying the retention window.
    pub fn record_stress_level(
        &mut self,
        level: StressLevel,
        date: Option<NaiveDate>,
        now: Timestamp,
    ) -> &[StressEntry] {
        self.updated_at = now;
        self.stress_levels.record(level, date, now)
    }
}

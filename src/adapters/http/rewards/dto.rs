//! HTTP DTOs for reward and wellness endpoints.
//!
//! These types decouple the HTTP API from domain types. Field names are
//! camelCase to match the mobile client.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{
    CompleteActivityResult, RecordStressLevelResult, RewardStanding, SyncStatus,
};
use crate::domain::foundation::DomainError;
use crate::domain::rewards::{ActivityMetrics, RewardTier, TierStanding};
use crate::domain::user::UserProfile;
use crate::domain::wellness::StressEntry;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to complete an activity.
///
/// `type` is free-form; unknown values earn the default award.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteActivityRequest {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    /// Accepted as any integer; out-of-range counts are clamped, never rejected.
    #[serde(default)]
    pub word_count: Option<i64>,
    /// Journal entry body; used to count words when `wordCount` is absent.
    #[serde(default)]
    pub text: Option<String>,
}

impl CompleteActivityRequest {
    pub fn metrics(&self) -> ActivityMetrics {
        let word_count = self
            .word_count
            .map(|count| u32::try_from(count.max(0)).unwrap_or(u32::MAX));
        let mut metrics = match (&self.text, word_count) {
            (Some(text), None) => ActivityMetrics::from_journal_text(text),
            _ => ActivityMetrics::default(),
        };
        if word_count.is_some() {
            metrics.word_count = word_count;
        }
        metrics.duration_minutes = self.duration_minutes;
        metrics
    }
}

/// Request to record a stress rating.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordStressLevelRequest {
    pub level: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Tier standing for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingResponse {
    pub tier: RewardTier,
    pub name: String,
    pub range_min: u64,
    pub range_max: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_to_next_tier: Option<u64>,
}

impl From<TierStanding> for StandingResponse {
    fn from(standing: TierStanding) -> Self {
        Self {
            tier: standing.tier,
            name: standing.name().to_string(),
            range_min: standing.range_min,
            range_max: standing.range_max,
            points_to_next_tier: standing.points_to_next_tier,
        }
    }
}

/// One stress reading.
#[derive(Debug, Clone, Serialize)]
pub struct StressEntryResponse {
    pub level: u8,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}

impl From<&StressEntry> for StressEntryResponse {
    fn from(entry: &StressEntry) -> Self {
        Self {
            level: entry.level.value(),
            date: entry.date,
            timestamp: *entry.timestamp.as_datetime(),
        }
    }
}

/// Full profile, returned on signup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub reward_points: u64,
    pub stress_levels: Vec<StressEntryResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id().to_string(),
            reward_points: profile.reward_points(),
            stress_levels: profile
                .stress_levels()
                .entries()
                .iter()
                .map(StressEntryResponse::from)
                .collect(),
            created_at: *profile.created_at().as_datetime(),
            updated_at: *profile.updated_at().as_datetime(),
        }
    }
}

/// Response after completing an activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCompletedResponse {
    pub activity_id: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub points_awarded: u64,
    pub reward_points: u64,
    pub standing: StandingResponse,
    pub tier_changed: bool,
    pub sync: SyncStatus,
}

impl From<CompleteActivityResult> for ActivityCompletedResponse {
    fn from(result: CompleteActivityResult) -> Self {
        Self {
            activity_id: result.record.id.to_string(),
            activity_type: result.record.activity_type.to_string(),
            points_awarded: result.points_awarded,
            reward_points: result.profile.reward_points(),
            tier_changed: result.tier_changed(),
            standing: result.standing.into(),
            sync: result.sync,
        }
    }
}

/// Dashboard reward card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardStandingResponse {
    pub user_id: String,
    pub reward_points: u64,
    pub standing: StandingResponse,
    pub latest_stress: Option<StressEntryResponse>,
    pub average_stress: Option<f64>,
}

impl From<RewardStanding> for RewardStandingResponse {
    fn from(standing: RewardStanding) -> Self {
        Self {
            user_id: standing.user_id.to_string(),
            reward_points: standing.reward_points,
            standing: standing.standing.into(),
            latest_stress: standing.latest_stress.as_ref().map(StressEntryResponse::from),
            average_stress: standing.average_stress,
        }
    }
}

/// Retained stress readings after a submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StressLevelsResponse {
    pub stress_levels: Vec<StressEntryResponse>,
    pub sync: SyncStatus,
}

impl From<RecordStressLevelResult> for StressLevelsResponse {
    fn from(result: RecordStressLevelResult) -> Self {
        Self {
            stress_levels: result.entries.iter().map(StressEntryResponse::from).collect(),
            sync: result.sync,
        }
    }
}

/// Error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Builds the body for a domain error; details are included only when `verbose`.
    pub fn from_domain(error: &DomainError, verbose: bool) -> Self {
        let details = (verbose && !error.details.is_empty())
            .then(|| serde_json::to_value(&error.details).ok())
            .flatten();
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Timestamp, UserId};
    use crate::domain::rewards::resolve_tier;
    use crate::domain::wellness::StressLevel;

    #[test]
    fn activity_request_parses_camel_case() {
        let req: CompleteActivityRequest =
            serde_json::from_str(r#"{"type":"meditation","durationMinutes":12.5}"#).unwrap();

        assert_eq!(req.activity_type, "meditation");
        assert_eq!(req.metrics().duration_minutes, Some(12.5));
        assert_eq!(req.metrics().word_count, None);
    }

    #[test]
    fn journal_text_counts_words_when_count_missing() {
        let req: CompleteActivityRequest =
            serde_json::from_str(r#"{"type":"journaling","text":"calm  morning by the sea"}"#)
                .unwrap();

        assert_eq!(req.metrics().word_count, Some(5));
    }

    #[test]
    fn explicit_word_count_wins_over_text() {
        let req: CompleteActivityRequest = serde_json::from_str(
            r#"{"type":"journaling","wordCount":100,"text":"only four words here"}"#,
        )
        .unwrap();

        assert_eq!(req.metrics().word_count, Some(100));
    }

    #[test]
    fn word_count_outside_u32_is_clamped() {
        let negative: CompleteActivityRequest =
            serde_json::from_str(r#"{"type":"journaling","wordCount":-40}"#).unwrap();
        let huge: CompleteActivityRequest =
            serde_json::from_str(r#"{"type":"journaling","wordCount":99999999999}"#).unwrap();

        assert_eq!(negative.metrics().word_count, Some(0));
        assert_eq!(huge.metrics().word_count, Some(u32::MAX));
    }

    #[test]
    fn stress_request_date_is_optional() {
        let req: RecordStressLevelRequest = serde_json::from_str(r#"{"level":4}"#).unwrap();
        assert_eq!(req.level, 4);
        assert!(req.date.is_none());

        let req: RecordStressLevelRequest =
            serde_json::from_str(r#"{"level":7,"date":"2024-05-31"}"#).unwrap();
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2024, 5, 31));
    }

    #[test]
    fn standing_omits_next_tier_at_top() {
        let json = serde_json::to_value(StandingResponse::from(resolve_tier(500))).unwrap();

        assert_eq!(json["tier"], "diamond");
        assert_eq!(json["name"], "Diamond");
        assert!(json["rangeMax"].is_null());
        assert!(json.get("pointsToNextTier").is_none());
    }

    #[test]
    fn profile_response_uses_wire_names() {
        let now = Timestamp::now();
        let mut profile = UserProfile::new(UserId::new("user-1").unwrap(), now);
        profile.record_stress_level(StressLevel::new(3).unwrap(), None, now);

        let json = serde_json::to_value(ProfileResponse::from(&profile)).unwrap();

        assert_eq!(json["id"], "user-1");
        assert_eq!(json["rewardPoints"], 0);
        assert_eq!(json["stressLevels"][0]["level"], 3);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn error_details_only_when_verbose() {
        let error = DomainError::not_found("Profile", "user-1");

        let terse = ErrorResponse::from_domain(&error, false);
        let verbose = ErrorResponse::from_domain(&error, true);

        assert_eq!(terse.code, ErrorCode::NotFound.to_string());
        assert!(terse.details.is_none());
        assert_eq!(verbose.details.unwrap()["id"], "user-1");
    }
}

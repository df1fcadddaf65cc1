//! Completed wellness activities and the metrics that drive point awards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ActivityId, Timestamp};

use super::points::compute_points;

/// Kind of wellness session the user completed.
///
/// Unrecognized type strings deserialize to `Other` so that new client
/// activity kinds still earn the default award instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Meditation,
    Drawing,
    Journaling,
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Meditation => "meditation",
            ActivityType::Drawing => "drawing",
            ActivityType::Journaling => "journaling",
            ActivityType::Other => "other",
        }
    }

    /// Parses a client-supplied type name. Never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "meditation" => ActivityType::Meditation,
            "drawing" => ActivityType::Drawing,
            "journaling" => ActivityType::Journaling,
            _ => ActivityType::Other,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Activity-specific measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMetrics {
    /// Session length for timed activities (meditation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,

    /// Length of a journal entry in words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
}

impl ActivityMetrics {
    pub fn with_duration(minutes: f64) -> Self {
        Self {
            duration_minutes: Some(minutes),
            word_count: None,
        }
    }

    pub fn with_word_count(words: u32) -> Self {
        Self {
            duration_minutes: None,
            word_count: Some(words),
        }
    }

    /// Counts whitespace-separated words of a journal entry.
    pub fn from_journal_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        Self::with_word_count(u32::try_from(words).unwrap_or(u32::MAX))
    }
}

/// A completed activity, as recorded in the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: ActivityId,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(flatten)]
    pub metrics: ActivityMetrics,
    pub completed_at: Timestamp,
}

impl ActivityRecord {
    pub fn new(activity_type: ActivityType, metrics: ActivityMetrics, completed_at: Timestamp) -> Self {
        Self {
            id: ActivityId::new(),
            activity_type,
            metrics,
            completed_at,
        }
    }

    /// Points this activity earns.
    pub fn points(&self) -> u64 {
        compute_points(self.activity_type, &self.metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_deserialize_lowercase() {
        let t: ActivityType = serde_json::from_str("\"journaling\"").unwrap();
        assert_eq!(t, ActivityType::Journaling);
    }

    #[test]
    fn unknown_type_deserializes_to_other() {
        let t: ActivityType = serde_json::from_str("\"yoga\"").unwrap();
        assert_eq!(t, ActivityType::Other);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ActivityType::parse(" Meditation "), ActivityType::Meditation);
        assert_eq!(ActivityType::parse("breathing"), ActivityType::Other);
    }

    #[test]
    fn journal_text_word_count_ignores_extra_whitespace() {
        let metrics = ActivityMetrics::from_journal_text("  today   I felt\ncalm \t and rested ");
        assert_eq!(metrics.word_count, Some(6));
    }

    #[test]
    fn empty_journal_text_counts_zero_words() {
        assert_eq!(ActivityMetrics::from_journal_text("").word_count, Some(0));
    }

    #[test]
    fn record_serializes_type_and_flattened_metrics() {
        let record = ActivityRecord::new(
            ActivityType::Meditation,
            ActivityMetrics::with_duration(12.5),
            Timestamp::now(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "meditation");
        assert_eq!(json["durationMinutes"], 12.5);
        assert!(json.get("wordCount").is_none());
    }

    #[test]
    fn record_points_delegate_to_calculator() {
        let record = ActivityRecord::new(
            ActivityType::Drawing,
            ActivityMetrics::default(),
            Timestamp::now(),
        );
        assert_eq!(record.points(), 15);
    }
}

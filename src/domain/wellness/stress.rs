//! Self-reported stress levels and the rolling retention window.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Entries older than this many days are dropped on the next write.
pub const RETENTION_DAYS: i64 = 30;

/// Stress rating on the 0 (calm) to 10 (overwhelmed) scale.
///
/// New submissions go through [`StressLevel::new`] and are rejected when out
/// of range. Stored readings are clamped on load instead, since older records
/// were written without any bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct StressLevel(u8);

impl StressLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    /// Creates a StressLevel, returning error if out of range.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "level",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Pulls a stored reading into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for StressLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        let level = Self::clamped(raw);
        if i64::from(level.0) != raw {
            tracing::warn!(stored = raw, clamped = level.0, "stored stress level out of range");
        }
        Ok(level)
    }
}

impl TryFrom<i64> for StressLevel {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StressLevel> for u8 {
    fn from(level: StressLevel) -> Self {
        level.0
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stress reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressEntry {
    pub level: StressLevel,
    /// Calendar day the reading refers to (may be back-dated by the user).
    pub date: NaiveDate,
    /// When the reading was recorded; drives retention.
    pub timestamp: Timestamp,
}

/// Ordered, time-bounded sequence of stress readings for one user.
///
/// Entries keep insertion order. Retention is applied only when a new
/// reading is recorded, never in the background.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StressLedger {
    entries: Vec<StressEntry>,
}

impl StressLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from persisted entries without pruning.
    pub fn from_entries(entries: Vec<StressEntry>) -> Self {
        Self { entries }
    }

    /// Appends a reading then drops everything older than the retention window.
    ///
    /// `date` defaults to the calendar day of `now`. Returns the retained
    /// sequence, which always ends with the new entry.
    pub fn record(&mut self, level: StressLevel, date: Option<NaiveDate>, now: Timestamp) -> &[StressEntry] {
        self.entries.push(StressEntry {
            level,
            date: date.unwrap_or_else(|| now.date()),
            timestamp: now,
        });
        let removed = self.prune(now);
        if removed > 0 {
            tracing::debug!(removed, "pruned expired stress entries");
        }
        &self.entries
    }

    /// Removes entries strictly older than `now - RETENTION_DAYS`.
    ///
    /// An entry exactly on the boundary is kept. Returns how many were removed.
    pub fn prune(&mut self, now: Timestamp) -> usize {
        let cutoff = now.minus_days(RETENTION_DAYS);
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.timestamp.is_before(&cutoff));
        before - self.entries.len()
    }

    pub fn entries(&self) -> &[StressEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently recorded reading.
    pub fn latest(&self) -> Option<&StressEntry> {
        self.entries.last()
    }

    /// Mean level across the retained readings.
    pub fn average_level(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: u32 = self.entries.iter().map(|e| u32::from(e.level.value())).sum();
        Some(f64::from(total) / self.entries.len() as f64)
    }
}

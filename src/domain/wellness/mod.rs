//! Wellness module - self-reported stress tracking.

pub mod stress;

pub use stress::{StressEntry, StressLedger, StressLevel, RETENTION_DAYS};

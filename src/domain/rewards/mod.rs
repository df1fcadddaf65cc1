//! Rewards module - activity point awards and tier brackets.
//!
//! - `activity` - completed activity records and their metrics
//! - `points` - the per-activity point calculator
//! - `tier` - tier table and standing resolution

pub mod activity;
pub mod points;
pub mod tier;

pub use activity::{ActivityMetrics, ActivityRecord, ActivityType};
pub use points::compute_points;
pub use tier::{resolve_tier, RewardTier, TierStanding};

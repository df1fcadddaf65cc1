//! Points awarded per completed activity.

use super::activity::{ActivityMetrics, ActivityType};

/// Points per minute of meditation.
pub const MEDITATION_POINTS_PER_MINUTE: f64 = 2.0;

/// Flat award for a finished drawing.
pub const DRAWING_POINTS: u64 = 15;

/// Minimum award for any journal entry, even an empty one.
pub const JOURNALING_BASE_POINTS: u64 = 5;

/// Words per additional journaling point.
pub const JOURNALING_WORDS_PER_POINT: u64 = 25;

/// Upper bound on a single journaling award.
pub const JOURNALING_MAX_POINTS: u64 = 20;

/// Award for any other activity type.
pub const DEFAULT_POINTS: u64 = 5;

/// Computes the point award for an activity.
///
/// Total over all inputs: missing metrics count as zero and unknown
/// activity types fall through to [`DEFAULT_POINTS`].
pub fn compute_points(activity_type: ActivityType, metrics: &ActivityMetrics) -> u64 {
    match activity_type {
        ActivityType::Meditation => meditation_points(metrics.duration_minutes.unwrap_or(0.0)),
        ActivityType::Drawing => DRAWING_POINTS,
        ActivityType::Journaling => journaling_points(metrics.word_count.unwrap_or(0)),
        ActivityType::Other => DEFAULT_POINTS,
    }
}

fn meditation_points(duration_minutes: f64) -> u64 {
    if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
        return 0;
    }
    // float-to-int casts saturate
    (duration_minutes * MEDITATION_POINTS_PER_MINUTE).floor() as u64
}

fn journaling_points(word_count: u32) -> u64 {
    let earned = u64::from(word_count) / JOURNALING_WORDS_PER_POINT + JOURNALING_BASE_POINTS;
    earned.min(JOURNALING_MAX_POINTS)
}

//! Reward tier definitions.
//!
//! Tiers are fixed, ordered, non-overlapping point brackets that together
//! cover every non-negative total.

use serde::{Deserialize, Serialize};

/// Reward tier earned by a cumulative point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardTier {
    /// 0 - 49 points.
    Bronze,
    /// 50 - 149 points.
    Silver,
    /// 150 - 299 points.
    Gold,
    /// 300 points and above.
    Diamond,
}

impl RewardTier {
    /// All tiers in ascending order.
    pub const ALL: [RewardTier; 4] = [
        RewardTier::Bronze,
        RewardTier::Silver,
        RewardTier::Gold,
        RewardTier::Diamond,
    ];

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            RewardTier::Bronze => "Bronze",
            RewardTier::Silver => "Silver",
            RewardTier::Gold => "Gold",
            RewardTier::Diamond => "Diamond",
        }
    }

    /// Lowest point total in this tier.
    pub fn range_min(&self) -> u64 {
        match self {
            RewardTier::Bronze => 0,
            RewardTier::Silver => 50,
            RewardTier::Gold => 150,
            RewardTier::Diamond => 300,
        }
    }

    /// Highest point total in this tier; `None` for the unbounded top tier.
    pub fn range_max(&self) -> Option<u64> {
        match self {
            RewardTier::Bronze => Some(49),
            RewardTier::Silver => Some(149),
            RewardTier::Gold => Some(299),
            RewardTier::Diamond => None,
        }
    }

    /// Tier containing the given total.
    pub fn for_points(points: u64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|tier| points >= tier.range_min())
            .unwrap_or(RewardTier::Bronze)
    }

    /// True when the total falls inside this tier's range.
    pub fn contains(&self, points: u64) -> bool {
        points >= self.range_min() && self.range_max().map_or(true, |max| points <= max)
    }
}

impl std::fmt::Display for RewardTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A user's position within the tier table, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierStanding {
    pub tier: RewardTier,
    pub points: u64,
    pub range_min: u64,
    pub range_max: Option<u64>,
    /// `range_max - points`; absent at the top tier.
    pub points_to_next_tier: Option<u64>,
}

impl TierStanding {
    /// Display name of the tier, e.g. "Silver".
    pub fn name(&self) -> &'static str {
        self.tier.display_name()
    }
}

/// Resolves the tier standing for a cumulative point total.
pub fn resolve_tier(points: u64) -> TierStanding {
    let tier = RewardTier::for_points(points);
    let range_max = tier.range_max();
    TierStanding {
        tier,
        points,
        range_min: tier.range_min(),
        range_max,
        points_to_next_tier: range_max.map(|max| max - points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_resolve_to_expected_tiers() {
        let cases = [
            (0, RewardTier::Bronze),
            (49, RewardTier::Bronze),
            (50, RewardTier::Silver),
            (149, RewardTier::Silver),
            (150, RewardTier::Gold),
            (299, RewardTier::Gold),
            (300, RewardTier::Diamond),
            (u64::MAX, RewardTier::Diamond),
        ];
        for (points, expected) in cases {
            assert_eq!(resolve_tier(points).tier, expected, "points {}", points);
        }
    }

    #[test]
    fn silver_at_sixty_needs_eighty_nine_more() {
        let standing = resolve_tier(60);
        assert_eq!(standing.tier, RewardTier::Silver);
        assert_eq!(standing.name(), "Silver");
        assert_eq!(standing.points_to_next_tier, Some(89));
    }

    #[test]
    fn top_tier_has_no_upper_bound() {
        let standing = resolve_tier(1_000);
        assert_eq!(standing.range_max, None);
        assert_eq!(standing.points_to_next_tier, None);
    }

    #[test]
    fn ranges_are_contiguous() {
        for pair in RewardTier::ALL.windows(2) {
            assert_eq!(pair[0].range_max().unwrap() + 1, pair[1].range_min());
        }
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RewardTier::Gold).unwrap(), "\"gold\"");
    }

    proptest! {
        #[test]
        fn every_total_maps_to_exactly_one_tier(points in any::<u64>()) {
            let standing = resolve_tier(points);
            let containing: Vec<_> = RewardTier::ALL.iter().filter(|t| t.contains(points)).collect();
            prop_assert_eq!(containing, vec![&standing.tier]);
            prop_assert!(standing.range_min <= points);
            if let Some(max) = standing.range_max {
                prop_assert!(points <= max);
            }
        }

        #[test]
        fn points_to_next_tier_reaches_range_max(points in 0u64..300) {
            let standing = resolve_tier(points);
            prop_assert_eq!(standing.points_to_next_tier.map(|n| n + points), standing.range_max);
        }
    }
}

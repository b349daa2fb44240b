//! Condition tiers derived from a statistic.
//!
//! Wearables (boots, bottoms) and hand-held equipment (helmet, shield,
//! weapon) use separate six-tier enumerations over the same breakpoints:
//!
//! | Statistic | Wearable | Equipment |
//! |-----------|----------|-----------|
//! | 0-9       | Basic    | None      |
//! | 10-49     | Ragged   | Broken    |
//! | 50-74     | Worn     | Damaged   |
//! | 75-89     | Used     | Worn      |
//! | 90-96     | Good     | Good      |
//! | 97-99     | Pristine | Perfect   |

use serde::{Deserialize, Serialize};

use crate::buckets::BucketTable;
use crate::score::Score;

/// Inclusive upper bounds of tiers one through five.
pub const TIER_UPPER_BOUNDS: [u8; 5] = [9, 49, 74, 89, 96];

/// Behaviour shared by both tier enumerations.
pub trait ConditionTier: Copy + Eq + Ord + 'static {
    /// The tier below which a slot has no styled asset.
    const LOWEST: Self;

    /// All tiers in ascending order.
    const ALL: [Self; 6];

    fn label(self) -> &'static str;

    fn is_lowest(self) -> bool {
        self == Self::LOWEST
    }

    /// Parse a stored label back into a tier.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WearableCondition {
    Basic,
    Ragged,
    Worn,
    Used,
    Good,
    Pristine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentCondition {
    None,
    Broken,
    Damaged,
    Worn,
    Good,
    Perfect,
}

impl ConditionTier for WearableCondition {
    const LOWEST: Self = Self::Basic;
    const ALL: [Self; 6] = [
        Self::Basic,
        Self::Ragged,
        Self::Worn,
        Self::Used,
        Self::Good,
        Self::Pristine,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Ragged => "Ragged",
            Self::Worn => "Worn",
            Self::Used => "Used",
            Self::Good => "Good",
            Self::Pristine => "Pristine",
        }
    }
}

impl ConditionTier for EquipmentCondition {
    const LOWEST: Self = Self::None;
    const ALL: [Self; 6] = [
        Self::None,
        Self::Broken,
        Self::Damaged,
        Self::Worn,
        Self::Good,
        Self::Perfect,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Broken => "Broken",
            Self::Damaged => "Damaged",
            Self::Worn => "Worn",
            Self::Good => "Good",
            Self::Perfect => "Perfect",
        }
    }
}

impl std::fmt::Display for WearableCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for EquipmentCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const WEARABLE_TIERS: BucketTable<WearableCondition> = BucketTable::new(
    &[
        (TIER_UPPER_BOUNDS[0], WearableCondition::Basic),
        (TIER_UPPER_BOUNDS[1], WearableCondition::Ragged),
        (TIER_UPPER_BOUNDS[2], WearableCondition::Worn),
        (TIER_UPPER_BOUNDS[3], WearableCondition::Used),
        (TIER_UPPER_BOUNDS[4], WearableCondition::Good),
    ],
    WearableCondition::Pristine,
);

const EQUIPMENT_TIERS: BucketTable<EquipmentCondition> = BucketTable::new(
    &[
        (TIER_UPPER_BOUNDS[0], EquipmentCondition::None),
        (TIER_UPPER_BOUNDS[1], EquipmentCondition::Broken),
        (TIER_UPPER_BOUNDS[2], EquipmentCondition::Damaged),
        (TIER_UPPER_BOUNDS[3], EquipmentCondition::Worn),
        (TIER_UPPER_BOUNDS[4], EquipmentCondition::Good),
    ],
    EquipmentCondition::Perfect,
);

/// Tier for boots (speed) and bottoms (stamina).
pub fn resolve_wearable_condition(statistic: Score) -> WearableCondition {
    WEARABLE_TIERS.lookup(statistic)
}

/// Tier for helmet (intelligence), shield (defence) and weapon (attack).
pub fn resolve_equipment_condition(statistic: Score) -> EquipmentCondition {
    EQUIPMENT_TIERS.lookup(statistic)
}

//! Profiler: maps self-reported indicators to a (skin type, concern) pair.
//!
//! Rules are evaluated top to bottom and the first match wins. The order is
//! part of the behaviour: e.g. high sensitivity overrides any oil reading, and
//! oil > 7 is claimed by the oily rule before the combination rule is tried.
//!
//! Inputs are expected in [0, 10]; clamping happens in the survey layer.

use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Labels
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum SkinType {
    Normal,
    Sensitive,
    Oily,
    Dry,
    CombinationDehydrated,
    Dehydrated,
}

impl SkinType {
    #[cfg(test)]
    pub const ALL: [SkinType; 6] = [
        SkinType::Normal,
        SkinType::Sensitive,
        SkinType::Oily,
        SkinType::Dry,
        SkinType::CombinationDehydrated,
        SkinType::Dehydrated,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkinType::Normal => "NORMAL",
            SkinType::Sensitive => "SENSITIVE",
            SkinType::Oily => "OILY",
            SkinType::Dry => "DRY",
            SkinType::CombinationDehydrated => "COMBINATION-DEHYDRATED",
            SkinType::Dehydrated => "DEHYDRATED",
        }
    }

    /// Any type whose skin lacks water, including the combination variant.
    pub fn is_dehydrated(self) -> bool {
        matches!(
            self,
            SkinType::Dehydrated | SkinType::CombinationDehydrated
        )
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Concern {
    Radiance,
    Soothing,
    Mattifying,
    Nutrition,
    Rebalancing,
    IntenseHydration,
}

impl Concern {
    pub fn label(self) -> &'static str {
        match self {
            Concern::Radiance => "RADIANCE",
            Concern::Soothing => "SOOTHING",
            Concern::Mattifying => "MATTIFYING",
            Concern::Nutrition => "NUTRITION",
            Concern::Rebalancing => "REBALANCING",
            Concern::IntenseHydration => "INTENSE-HYDRATION",
        }
    }

    /// Concerns treated with a blemish / sebum-control serum.
    pub fn targets_blemishes(self) -> bool {
        matches!(self, Concern::Mattifying)
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived classification. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkinProfile {
    pub skin_type: SkinType,
    pub concern: Concern,
}

impl SkinProfile {
    pub const fn new(skin_type: SkinType, concern: Concern) -> Self {
        Self { skin_type, concern }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Indicators {
    hydration: u8,
    oil: u8,
    sensitivity: u8,
}

struct ProfileRule {
    matches: fn(&Indicators) -> bool,
    profile: SkinProfile,
}

/// Ordered; first match wins.
const PROFILE_RULES: &[ProfileRule] = &[
    ProfileRule {
        matches: |i| i.sensitivity > 6,
        profile: SkinProfile::new(SkinType::Sensitive, Concern::Soothing),
    },
    ProfileRule {
        matches: |i| i.oil > 7,
        profile: SkinProfile::new(SkinType::Oily, Concern::Mattifying),
    },
    ProfileRule {
        matches: |i| i.oil < 3,
        profile: SkinProfile::new(SkinType::Dry, Concern::Nutrition),
    },
    // Only oil == 7 reaches this rule with oil > 6; higher values are oily.
    ProfileRule {
        matches: |i| i.oil > 6 && i.hydration < 4,
        profile: SkinProfile::new(SkinType::CombinationDehydrated, Concern::Rebalancing),
    },
    ProfileRule {
        matches: |i| i.hydration < 3,
        profile: SkinProfile::new(SkinType::Dehydrated, Concern::IntenseHydration),
    },
];

const DEFAULT_PROFILE: SkinProfile = SkinProfile::new(SkinType::Normal, Concern::Radiance);

/// Classifies indicators in [0, 10] into a skin profile.
pub fn classify(hydration: u8, oil: u8, sensitivity: u8) -> SkinProfile {
    let indicators = Indicators {
        hydration,
        oil,
        sensitivity,
    };

    PROFILE_RULES
        .iter()
        .find(|rule| (rule.matches)(&indicators))
        .map(|rule| rule.profile)
        .unwrap_or(DEFAULT_PROFILE)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

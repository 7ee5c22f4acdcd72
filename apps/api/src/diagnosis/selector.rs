//! Selector: maps a skin profile to one product per routine slot.
//!
//! Each slot has its own ordered rule list ending in a default subtype, and the
//! resolved subtype goes through `Catalog::lookup`, so selection is total.

use serde::{Deserialize, Serialize};

use crate::catalog::{subtype, Catalog, CatalogEntry, Category};
use crate::diagnosis::profiler::{SkinProfile, SkinType};

/// The 3-step routine: cleanser, serum, cream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub cleanser: CatalogEntry,
    pub serum: CatalogEntry,
    pub cream: CatalogEntry,
}

impl Selection {
    /// Entries in routine order.
    pub fn entries(&self) -> [&CatalogEntry; 3] {
        [&self.cleanser, &self.serum, &self.cream]
    }
}

/// Subtype keys chosen for a profile, before catalog resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeKeys {
    pub cleanser: &'static str,
    pub serum: &'static str,
    pub cream: &'static str,
}

struct SlotRule {
    applies: fn(&SkinProfile) -> bool,
    subtype: &'static str,
}

const CLEANSER_RULES: &[SlotRule] = &[
    SlotRule {
        applies: |p| p.skin_type == SkinType::Oily,
        subtype: subtype::OILY,
    },
    SlotRule {
        applies: |p| p.skin_type == SkinType::Dry || p.skin_type.is_dehydrated(),
        subtype: subtype::DRY,
    },
    SlotRule {
        applies: |p| p.skin_type == SkinType::Sensitive,
        subtype: subtype::SENSITIVE,
    },
];

// No concern in the classifier targets wrinkles, so `anti-aging` is only
// reachable through direct catalog lookup.
const SERUM_RULES: &[SlotRule] = &[
    SlotRule {
        applies: |p| p.concern.targets_blemishes(),
        subtype: subtype::BLEMISH,
    },
    SlotRule {
        applies: |p| p.skin_type.is_dehydrated(),
        subtype: subtype::HYDRATION,
    },
];

const CREAM_RULES: &[SlotRule] = &[
    SlotRule {
        applies: |p| p.skin_type == SkinType::Dry,
        subtype: subtype::RICH,
    },
    SlotRule {
        applies: |p| p.skin_type == SkinType::Oily,
        subtype: subtype::LIGHT,
    },
];

fn pick(rules: &[SlotRule], default: &'static str, profile: &SkinProfile) -> &'static str {
    rules
        .iter()
        .find(|rule| (rule.applies)(profile))
        .map(|rule| rule.subtype)
        .unwrap_or(default)
}

/// Resolves the subtype key for each routine slot.
pub fn subtype_keys(profile: &SkinProfile) -> SubtypeKeys {
    SubtypeKeys {
        cleanser: pick(CLEANSER_RULES, subtype::NORMAL, profile),
        serum: pick(SERUM_RULES, subtype::RADIANCE, profile),
        cream: pick(CREAM_RULES, subtype::ACTIVE, profile),
    }
}

/// Selects the cleanser, serum and cream for a profile.
pub fn select(profile: &SkinProfile, catalog: &Catalog) -> Selection {
    let keys = subtype_keys(profile);
    Selection {
        cleanser: catalog.lookup(Category::Cleanser, keys.cleanser).clone(),
        serum: catalog.lookup(Category::Serum, keys.serum).clone(),
        cream: catalog.lookup(Category::Cream, keys.cream).clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

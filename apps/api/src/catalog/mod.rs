//! Product catalog: a static, read-only table of products grouped by
//! category and subtype.
//!
//! The catalog is built once at startup (compiled-in table or a JSON override)
//! and never mutated afterwards, so it is shared across handlers behind an `Arc`.
//!
//! Every category designates a fallback subtype that must be present. `lookup`
//! resolves unknown subtype keys to that fallback, which makes it total.

mod builtin;
mod loader;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subtype keys used by the selector. These are lookup keys, not display labels.
pub mod subtype {
    pub const OILY: &str = "oily";
    pub const DRY: &str = "dry";
    pub const NORMAL: &str = "normal";
    pub const SENSITIVE: &str = "sensitive";

    pub const RADIANCE: &str = "radiance";
    pub const ANTI_AGING: &str = "anti-aging";
    pub const BLEMISH: &str = "blemish";
    pub const HYDRATION: &str = "hydration";

    pub const RICH: &str = "rich";
    pub const LIGHT: &str = "light";
    pub const ACTIVE: &str = "active";
}

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Product category. Each one fills a single slot of the 3-step routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cleanser,
    Serum,
    Cream,
}

impl Category {
    /// Routine order: cleanse, treat, moisturize.
    pub const ALL: [Category; 3] = [Category::Cleanser, Category::Serum, Category::Cream];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cleanser => "cleanser",
            Category::Serum => "serum",
            Category::Cream => "cream",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == key)
    }

    /// The subtype every catalog must hold for this category.
    pub fn fallback_subtype(self) -> &'static str {
        match self {
            Category::Cleanser => subtype::NORMAL,
            Category::Serum => subtype::RADIANCE,
            Category::Cream => subtype::ACTIVE,
        }
    }

    /// Product-card image for the routine slot.
    pub fn image_url(self) -> &'static str {
        match self {
            Category::Cleanser => {
                "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?w=400"
            }
            Category::Serum => "https://images.unsplash.com/photo-1608248597279-f99d160bfbc8?w=400",
            Category::Cream => "https://images.unsplash.com/photo-1629198688000-71f23e745b6e?w=400",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single product. Identity is the (category, subtype) pair it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Already currency-formatted, e.g. `"24€"`.
    pub price: String,
    pub ingredients: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is missing category '{0}'")]
    MissingCategory(Category),

    #[error("Catalog category '{category}' is missing its fallback subtype '{subtype}'")]
    MissingFallback {
        category: Category,
        subtype: &'static str,
    },

    #[error("Unknown catalog category '{0}'")]
    UnknownCategory(String),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All products of one category, plus the resolved fallback entry.
#[derive(Debug, Clone)]
struct Shelf {
    fallback: CatalogEntry,
    entries: BTreeMap<String, CatalogEntry>,
}

impl Shelf {
    fn new(
        category: Category,
        entries: BTreeMap<String, CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let subtype = category.fallback_subtype();
        let fallback = entries
            .get(subtype)
            .cloned()
            .ok_or(CatalogError::MissingFallback { category, subtype })?;
        Ok(Self { fallback, entries })
    }
}

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    cleanser: Shelf,
    serum: Shelf,
    cream: Shelf,
}

impl Catalog {
    /// Builds a catalog from per-category entry maps.
    ///
    /// Fails when a category is absent or lacks its fallback subtype, so every
    /// constructed `Catalog` can answer `lookup` for any subtype key.
    pub fn from_shelves(
        mut shelves: BTreeMap<Category, BTreeMap<String, CatalogEntry>>,
    ) -> Result<Self, CatalogError> {
        let mut take = |category: Category| {
            shelves
                .remove(&category)
                .ok_or(CatalogError::MissingCategory(category))
                .and_then(|entries| Shelf::new(category, entries))
        };

        Ok(Self {
            cleanser: take(Category::Cleanser)?,
            serum: take(Category::Serum)?,
            cream: take(Category::Cream)?,
        })
    }

    fn shelf(&self, category: Category) -> &Shelf {
        match category {
            Category::Cleanser => &self.cleanser,
            Category::Serum => &self.serum,
            Category::Cream => &self.cream,
        }
    }

    /// Returns the entry stored under `(category, subtype)`, or the category's
    /// fallback entry when the subtype key is absent. Never fails.
    pub fn lookup(&self, category: Category, subtype: &str) -> &CatalogEntry {
        let shelf = self.shelf(category);
        shelf.entries.get(subtype).unwrap_or(&shelf.fallback)
    }

    /// Whether `subtype` is stored directly (without falling back).
    #[cfg(test)]
    pub fn contains(&self, category: Category, subtype: &str) -> bool {
        self.shelf(category).entries.contains_key(subtype)
    }

    /// All entries of a category keyed by subtype.
    pub fn entries(&self, category: Category) -> &BTreeMap<String, CatalogEntry> {
        &self.shelf(category).entries
    }

    pub fn len(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|c| self.shelf(c).entries.len())
            .sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

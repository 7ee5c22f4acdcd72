//! JSON catalog override, read once at startup.
//!
//! Shape: `{ "<category>": { "<subtype>": { name, price, ingredients, description } } }`.
//! Every category must be present with its fallback subtype.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use super::{Catalog, CatalogEntry, CatalogError, Category};

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let parsed: BTreeMap<String, BTreeMap<String, CatalogEntry>> = serde_json::from_str(raw)?;

        let shelves = parsed
            .into_iter()
            .map(|(key, entries)| {
                Category::from_key(&key)
                    .map(|category| (category, entries))
                    .ok_or(CatalogError::UnknownCategory(key))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Catalog::from_shelves(shelves)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Catalog::from_json(&raw)?;
        info!(
            "Loaded catalog override from {} ({} products)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::catalog::subtype;

    const MINIMAL: &str = r#"{
        "cleanser": {
            "normal": {"name": "Plain Wash", "price": "9€", "ingredients": "Water", "description": "Basic."},
            "oily": {"name": "Clay Wash", "price": "12€", "ingredients": "Kaolin", "description": "Mattifying."}
        },
        "serum": {
            "radiance": {"name": "Glow Drops", "price": "30€", "ingredients": "Vitamin C", "description": "Bright."}
        },
        "cream": {
            "active": {"name": "Daily Cream", "price": "25€", "ingredients": "Peptides", "description": "Firm."}
        }
    }"#;

    #[test]
    fn test_from_json_minimal_catalog() {
        let catalog = Catalog::from_json(MINIMAL).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.lookup(Category::Cleanser, subtype::OILY).name,
            "Clay Wash"
        );
        // Subtypes absent from the override resolve to the fallback.
        assert_eq!(
            catalog.lookup(Category::Serum, subtype::BLEMISH).name,
            "Glow Drops"
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let raw = MINIMAL.replacen("\"cream\"", "\"toner\"", 1);
        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref k) if k == "toner"));
    }

    #[test]
    fn test_from_json_rejects_missing_fallback() {
        let raw = MINIMAL.replacen("\"normal\"", "\"dry\"", 1);
        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingFallback {
                category: Category::Cleanser,
                ..
            }
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Catalog::from_json("{not json").unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(
            catalog.lookup(Category::Cream, "anything").name,
            "Daily Cream"
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}

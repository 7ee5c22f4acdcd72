use std::collections::BTreeMap;

use super::{subtype, Catalog, CatalogEntry, CatalogError, Category};

/// (category, subtype, name, price, ingredients, description)
type Row = (
    Category,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const PRODUCTS: &[Row] = &[
    (
        Category::Cleanser,
        subtype::OILY,
        "Purifying Gel Cleanser",
        "24€",
        "Zinc, Salicylic Acid",
        "Intensely purifying foaming gel.",
    ),
    (
        Category::Cleanser,
        subtype::DRY,
        "Milky Oil Cleanser",
        "28€",
        "Almond Oil, Ceramides",
        "Comforting milk-to-oil cleanser.",
    ),
    (
        Category::Cleanser,
        subtype::NORMAL,
        "Gentle Foam",
        "22€",
        "Rose Water, Aloe Vera",
        "Soft, airy foam.",
    ),
    (
        Category::Cleanser,
        subtype::SENSITIVE,
        "Calming Balm",
        "30€",
        "Centella Asiatica, Oat",
        "Soothing melting balm.",
    ),
    (
        Category::Serum,
        subtype::RADIANCE,
        "Vitamin C Radiance",
        "45€",
        "Vitamin C 15%, Ferulic Acid",
        "Instant radiance boost.",
    ),
    (
        Category::Serum,
        subtype::ANTI_AGING,
        "Retinol Renew",
        "55€",
        "Retinol 0.3%, Peptides",
        "Smooths and firms the skin.",
    ),
    (
        Category::Serum,
        subtype::BLEMISH,
        "Niacinamide Zinc",
        "35€",
        "Niacinamide 10%, Zinc 1%",
        "Refines pores and blemishes.",
    ),
    (
        Category::Serum,
        subtype::HYDRATION,
        "Hyaluronic Boost",
        "42€",
        "Multi-weight Hyaluronic Acid",
        "Deep, layered hydration.",
    ),
    (
        Category::Cream,
        subtype::RICH,
        "Deep Repair Cream",
        "48€",
        "Shea Butter, Squalane",
        "Intense overnight nourishment.",
    ),
    (
        Category::Cream,
        subtype::LIGHT,
        "Hydro-Gel Cloud",
        "38€",
        "Glacier Water, Cucumber",
        "Moisturizing gel with a matte finish.",
    ),
    (
        Category::Cream,
        subtype::ACTIVE,
        "Pro-Collagen Cream",
        "65€",
        "Marine Collagen, Algae",
        "Firmness and bounce.",
    ),
];

impl Catalog {
    /// The compiled-in GLOW catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut shelves: BTreeMap<Category, BTreeMap<String, CatalogEntry>> = BTreeMap::new();

        for &(category, key, name, price, ingredients, description) in PRODUCTS {
            shelves.entry(category).or_default().insert(
                key.to_string(),
                CatalogEntry {
                    name: name.to_string(),
                    price: price.to_string(),
                    ingredients: ingredients.to_string(),
                    description: description.to_string(),
                },
            );
        }

        Catalog::from_shelves(shelves)
    }
}

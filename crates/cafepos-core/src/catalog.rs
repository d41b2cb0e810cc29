//! # Product Catalog
//!
//! The read-only set of sellable products, loaded once at startup.
//!
//! ## Loading Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Loading                                    │
//! │                                                                         │
//! │  data/products.json (bundled at compile time via include_str!)         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  serde_json: array of records, unknown fields ignored                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  per-record validation: skip empty names and negative prices (warn!)   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  HashMap<name, Product> — duplicate names: later record wins (warn!)   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ProductCatalog — immutable for the rest of the session               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed source or an all-skipped record set is a [`CatalogError`];
//! the engine cannot operate without a catalog, so callers should treat it
//! as fatal at startup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

use crate::error::CatalogError;
use crate::money::Money;

/// The product catalog bundled with the application.
///
/// The Rust analog of the original deployment's classpath resource: the data
/// ships inside the binary, so "source missing" cannot happen at runtime.
const BUNDLED_PRODUCTS: &str = include_str!("../data/products.json");

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Created once at catalog load, never mutated, never deleted during a
/// session. Extra fields in the source record are ignored, so the data file
/// can grow fields before the engine learns about them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Display name; unique key within the catalog.
    pub name: String,

    /// Category used for grouping and filtering in the product grid.
    pub category: String,

    /// Unit price. Non-negative; enforced at load time.
    pub price: Money,

    /// Image path/reference. Opaque to the engine: never checked for
    /// existence here, the UI layer resolves it.
    pub image: String,
}

// =============================================================================
// Product Catalog
// =============================================================================

/// The validated, queryable set of sellable products, keyed by name.
///
/// Read-only after construction. All accessors are pure queries; collection
/// accessors return cloned snapshots so callers cannot reach the internal
/// map.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    /// Loads the catalog bundled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_PRODUCTS)
    }

    /// Parses a catalog from a JSON array of product records.
    ///
    /// ## Behavior
    /// - Unknown fields in a record are ignored (forward-compatible parsing)
    /// - Records with an empty name or negative price are skipped with a
    ///   warning; they are data-quality issues, not engine errors
    /// - Duplicate names: the later record overwrites the earlier one
    ///   (map-insertion semantics), also logged as a data-quality warning
    ///
    /// ## Errors
    /// - [`CatalogError::Parse`] if the source is not a JSON record array
    /// - [`CatalogError::Empty`] if no well-formed record remains
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let records: Vec<Product> = serde_json::from_str(source)?;
        Self::from_records(records)
    }

    /// Builds a catalog from already-deserialized records.
    ///
    /// Applies the same per-record validation and duplicate handling as
    /// [`ProductCatalog::from_json_str`].
    pub fn from_records(records: Vec<Product>) -> Result<Self, CatalogError> {
        let mut products: HashMap<String, Product> = HashMap::with_capacity(records.len());

        for record in records {
            if record.name.trim().is_empty() {
                warn!(category = %record.category, "skipping product record with empty name");
                continue;
            }
            if record.price.is_negative() {
                warn!(name = %record.name, "skipping product record with negative price");
                continue;
            }
            if let Some(previous) = products.insert(record.name.clone(), record) {
                warn!(name = %previous.name, "duplicate product name, later record wins");
            }
        }

        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        info!(count = products.len(), "product catalog loaded");
        Ok(ProductCatalog { products })
    }

    /// Looks up a product by its exact name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Returns all products. Order is unspecified (map iteration order).
    pub fn list_all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Returns the products in a category, sorted by name ascending.
    ///
    /// An unknown category yields an empty list, not an error: the UI
    /// filters by whatever category string is selected.
    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .products
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }

    /// Returns the distinct category names, sorted ascending.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .products
            .values()
            .map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog is empty. Always false for a catalog that
    /// came out of a loader, which rejects empty record sets.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str, price: f64) -> Product {
        Product {
            name: name.to_string(),
            category: category.to_string(),
            price: Money::new(price),
            image: format!("/images/{}.png", name.to_lowercase().replace(' ', "_")),
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = ProductCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        // The quick-add button in the UI depends on this product existing.
        assert!(catalog.get("Espresso").is_some());
    }

    #[test]
    fn test_from_json_str() {
        let catalog = ProductCatalog::from_json_str(
            r#"[
                { "name": "Espresso", "category": "Hot Drinks", "price": 3.0, "image": "/images/espresso.png" },
                { "name": "Latte", "category": "Hot Drinks", "price": 5.0, "image": "/images/latte.png" }
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Espresso").unwrap().price, Money::new(3.0));
        assert!(catalog.get("Flat White").is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let catalog = ProductCatalog::from_json_str(
            r#"[
                { "name": "Espresso", "category": "Hot Drinks", "price": 3.0,
                  "image": "/images/espresso.png", "stock": 12, "supplier": "Acme Beans" }
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_malformed_source_fails() {
        assert!(matches!(
            ProductCatalog::from_json_str("not json"),
            Err(CatalogError::Parse(_))
        ));
        // An object instead of an array is malformed too.
        assert!(matches!(
            ProductCatalog::from_json_str(r#"{ "name": "Espresso" }"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_source_fails() {
        assert!(matches!(
            ProductCatalog::from_json_str("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_ill_formed_records_are_skipped_not_fatal() {
        let catalog = ProductCatalog::from_records(vec![
            record("", "Hot Drinks", 3.0),
            record("Latte", "Hot Drinks", -5.0),
            record("Espresso", "Hot Drinks", 3.0),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Espresso").is_some());
        assert!(catalog.get("Latte").is_none());
    }

    #[test]
    fn test_all_records_skipped_fails() {
        let result = ProductCatalog::from_records(vec![record("", "Hot Drinks", 3.0)]);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_name_later_record_wins() {
        let catalog = ProductCatalog::from_records(vec![
            record("Espresso", "Hot Drinks", 3.0),
            record("Espresso", "Hot Drinks", 3.75),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Espresso").unwrap().price, Money::new(3.75));
    }

    #[test]
    fn test_list_by_category_sorted_by_name() {
        let catalog = ProductCatalog::from_records(vec![
            record("Latte", "Hot Drinks", 5.0),
            record("Espresso", "Hot Drinks", 3.0),
            record("Lemonade", "Cold Drinks", 3.5),
        ])
        .unwrap();

        let names: Vec<String> = catalog
            .list_by_category("Hot Drinks")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Espresso", "Latte"]);

        assert!(catalog.list_by_category("Soups").is_empty());
    }

    #[test]
    fn test_categories_distinct_sorted() {
        let catalog = ProductCatalog::from_records(vec![
            record("Latte", "Hot Drinks", 5.0),
            record("Espresso", "Hot Drinks", 3.0),
            record("Lemonade", "Cold Drinks", 3.5),
            record("Croissant", "Pastries", 3.5),
        ])
        .unwrap();

        assert_eq!(
            catalog.categories(),
            vec!["Cold Drinks", "Hot Drinks", "Pastries"]
        );
    }

    #[test]
    fn test_list_all_returns_snapshot() {
        let catalog = ProductCatalog::from_records(vec![record("Espresso", "Hot Drinks", 3.0)])
            .unwrap();

        let mut all = catalog.list_all();
        all.clear();
        assert_eq!(catalog.len(), 1);
    }
}

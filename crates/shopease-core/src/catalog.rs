//! # Product Catalog
//!
//! The static product catalog, search and category filtering.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Filter Flow                                │
//! │                                                                         │
//! │  User types "watch"            User picks "Electronics"                │
//! │       │                              │                                  │
//! │       ▼                              ▼                                  │
//! │  CatalogFilter { query: "watch", category: "Electronics" }             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.filter(&filter) ← pure function of (catalog, query, category) │
//! │       │                                                                 │
//! │       ├── query match: name OR description OR category contains        │
//! │       │   the query, case-insensitively (empty query matches all)      │
//! │       │                                                                 │
//! │       └── category match: selected category is "" or "all", or         │
//! │           equals the product category exactly                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> in catalog order, displayed in the product grid          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Predicate Policy
//! Earlier revisions of the storefront carried two divergent predicates
//! (one treated only the empty string as the category wildcard and left
//! category text out of the search match). This module implements the
//! reconciled predicate: `""` and `"all"` are both wildcards, and the
//! free-text query matches against name, description AND category.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::validate_product;

/// Sentinel category meaning "all categories".
///
/// The UI's category dropdown uses this for its default option; the empty
/// string is accepted as an equivalent wildcard.
pub const CATEGORY_ALL: &str = "all";

// =============================================================================
// Catalog Filter
// =============================================================================

/// The current catalog filter: free-text search plus selected category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    /// Free-text search, matched case-insensitively as a substring.
    pub query: String,

    /// Selected category; `""` or `"all"` matches every category.
    pub category: String,
}

impl CatalogFilter {
    /// A filter that matches every product (empty query, all categories).
    pub fn all() -> Self {
        CatalogFilter {
            query: String::new(),
            category: CATEGORY_ALL.to_string(),
        }
    }

    /// Creates a filter from a query and category selection.
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        CatalogFilter {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Checks whether the selected category is a wildcard.
    #[inline]
    pub fn matches_all_categories(&self) -> bool {
        self.category.is_empty() || self.category == CATEGORY_ALL
    }

    /// Checks whether a product passes this filter.
    ///
    /// Pure predicate: no side effects, no allocation beyond the lowercase
    /// buffers needed for case-insensitive comparison.
    pub fn matches(&self, product: &Product) -> bool {
        let query = self.query.trim().to_lowercase();

        let matches_query = query.is_empty()
            || product.name.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query)
            || product.category.to_lowercase().contains(&query);

        let matches_category =
            self.matches_all_categories() || product.category == self.category;

        matches_query && matches_category
    }
}

impl Default for CatalogFilter {
    fn default() -> Self {
        CatalogFilter::all()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The static list of purchasable products.
///
/// ## Invariants (checked once, at construction)
/// - Product ids are unique
/// - Every product passes field validation (non-negative price/stock,
///   non-empty id/name, rating in 0-5)
///
/// Construction is the only fallible operation in the crate; everything
/// downstream assumes a well-formed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product and rejecting duplicates.
    ///
    /// ## Example
    /// ```rust
    /// use shopease_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::try_new(vec![]).unwrap();
    /// assert!(catalog.is_empty());
    /// ```
    pub fn try_new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;

            if seen.contains(&product.id.as_str()) {
                return Err(CoreError::DuplicateProduct {
                    id: product.id.clone(),
                });
            }
            seen.push(&product.id);
        }

        Ok(Catalog { products })
    }

    /// Returns all products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Returns the products passing a filter, in catalog order.
    ///
    /// A wildcard filter (`""`/`"all"`) returns all products unchanged.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    /// Returns the distinct category values, in first-seen catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
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

    fn product(id: &str, name: &str, category: &str, description: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price_cents: 999,
            category: category.to_string(),
            image: String::new(),
            description: description.to_string(),
            stock: 10,
            rating: 4.0,
            reviews: 5,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::try_new(vec![
            product(
                "1",
                "Premium Wireless Headphones",
                "Electronics",
                "High-quality wireless headphones with noise cancellation",
            ),
            product(
                "2",
                "Smart Fitness Watch",
                "Electronics",
                "Track your fitness goals with this advanced smartwatch",
            ),
            product(
                "3",
                "Organic Cotton T-Shirt",
                "Clothing",
                "Comfortable and sustainable cotton t-shirt",
            ),
            product(
                "4",
                "Designer Sunglasses",
                "Accessories",
                "Stylish sunglasses with UV protection",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_wildcard_filter_returns_all_in_order() {
        let catalog = sample_catalog();

        let all = catalog.filter(&CatalogFilter::new("", CATEGORY_ALL));
        assert_eq!(all.len(), 4);
        assert_eq!(all, catalog.products());

        // Empty string category is an equivalent wildcard
        let all = catalog.filter(&CatalogFilter::new("", ""));
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = sample_catalog();

        let hits = catalog.filter(&CatalogFilter::new("watch", CATEGORY_ALL));
        assert_eq!(hits.len(), 1); // "Watch" in name, "smartwatch" in description
        assert_eq!(hits[0].id, "2");

        let hits_upper = catalog.filter(&CatalogFilter::new("WATCH", CATEGORY_ALL));
        assert_eq!(hits, hits_upper);
    }

    #[test]
    fn test_query_matches_name_description_and_category() {
        let catalog = sample_catalog();

        // name match
        let hits = catalog.filter(&CatalogFilter::new("sunglasses", CATEGORY_ALL));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "4");

        // description match
        let hits = catalog.filter(&CatalogFilter::new("noise", CATEGORY_ALL));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        // category text participates in the search match
        let hits = catalog.filter(&CatalogFilter::new("clothing", CATEGORY_ALL));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_category_selection_is_exact() {
        let catalog = sample_catalog();

        let hits = catalog.filter(&CatalogFilter::new("", "Electronics"));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.category == "Electronics"));

        // Lowercase selection does not match: selections come from the
        // category list verbatim
        let hits = catalog.filter(&CatalogFilter::new("", "electronics"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_query_and_category_combine() {
        let catalog = sample_catalog();

        let hits = catalog.filter(&CatalogFilter::new("watch", "Electronics"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        let hits = catalog.filter(&CatalogFilter::new("watch", "Clothing"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let catalog = sample_catalog();
        let hits = catalog.filter(&CatalogFilter::new("  watch  ", CATEGORY_ALL));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_categories_distinct_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.categories(),
            vec!["Electronics", "Clothing", "Accessories"]
        );
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("3").unwrap().name, "Organic Cotton T-Shirt");
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::try_new(vec![
            product("1", "A", "Electronics", ""),
            product("1", "B", "Clothing", ""),
        ])
        .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateProduct { id } if id == "1"));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut bad = product("1", "A", "Electronics", "");
        bad.price_cents = -500;

        let err = Catalog::try_new(vec![bad]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_default_filter_is_wildcard() {
        let filter = CatalogFilter::default();
        assert!(filter.matches_all_categories());
        assert!(filter.query.is_empty());
    }
}

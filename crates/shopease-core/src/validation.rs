//! # Validation Module
//!
//! Field validation for catalog products and search input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (catalog construction)                           │
//! │  ├── Non-negative price and stock                                      │
//! │  ├── Required id/name, length caps                                     │
//! │  └── Rating in the 0-5 star range                                      │
//! │                                                                         │
//! │  Once a Catalog is built, downstream cart/filter/session code          │
//! │  assumes well-formed products and never re-validates.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopease_core::validation::{validate_price_cents, validate_stock};
//!
//! validate_price_cents(2999).unwrap();
//! validate_stock(15).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::MAX_QUERY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
///
/// Uniqueness across the catalog is checked separately by
/// [`crate::Catalog::try_new`].
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use shopease_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Premium Wireless Headphones").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (empty query matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use shopease_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2999).is_ok());  // $29.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (out of stock, still browsable)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a review rating.
///
/// ## Rules
/// - Must be between 0.0 and 5.0 inclusive
/// - NaN is rejected
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if rating.is_nan() || !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::InvalidFormat {
            field: "rating".to_string(),
            reason: "must be between 0.0 and 5.0".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Product Validator
// =============================================================================

/// Validates every field of a catalog product.
///
/// Called once per product by [`crate::Catalog::try_new`].
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_stock(product.stock)?;
    validate_rating(product.rating)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents: 999,
            category: "Electronics".to_string(),
            image: String::new(),
            description: String::new(),
            stock: 10,
            rating: 4.5,
            reviews: 12,
        }
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("1").is_ok());
        assert!(validate_product_id("prod_abc-123").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Designer Sunglasses").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  watch  ").unwrap(), "watch");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(29999).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(45).is_ok());
        assert!(validate_stock(-5).is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(4.8).is_ok());
        assert!(validate_rating(5.0).is_ok());

        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_product_checks_all_fields() {
        assert!(validate_product(&product("1")).is_ok());

        let mut bad = product("2");
        bad.price_cents = -1;
        assert!(validate_product(&bad).is_err());

        let mut bad = product("3");
        bad.name = String::new();
        assert!(validate_product(&bad).is_err());
    }
}

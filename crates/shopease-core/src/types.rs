//! # Domain Types
//!
//! Core domain types used throughout the ShopEase storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    TaxRate      │   │  UserIdentity   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (string)    │   │  bps (u32)      │   │  name           │       │
//! │  │  name           │   │  800 = 8.00%    │   │  email          │       │
//! │  │  price_cents    │   └─────────────────┘   └─────────────────┘       │
//! │  │  category       │                                                    │
//! │  │  stock/rating   │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable: they enter the system through the static catalog
//! and are never edited afterwards. The cart snapshots the fields it needs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8.00% (the storefront's flat sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier. Opaque string assigned by the catalog source.
    pub id: String,

    /// Display name shown in the catalog grid and cart.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Category label used for filtering (e.g., "Electronics").
    pub category: String,

    /// Image URI for the product card.
    pub image: String,

    /// Short description, searched alongside the name.
    pub description: String,

    /// Units available. The UI disables the quantity "+" control at this
    /// bound; the cart itself does not enforce it.
    pub stock: i64,

    /// Average review rating, 0.0 to 5.0. Display only.
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub reviews: u32,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether any units are available.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// User Identity
// =============================================================================

/// Identity attached to a logged-in session.
///
/// Mock authentication only: no credentials are stored or checked, the
/// identity is whatever the login form submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn watch() -> Product {
        Product {
            id: "2".to_string(),
            name: "Smart Fitness Watch".to_string(),
            price_cents: 19999,
            category: "Electronics".to_string(),
            image: "https://example.com/watch.jpg".to_string(),
            description: "Track your fitness goals".to_string(),
            stock: 23,
            rating: 4.6,
            reviews: 89,
        }
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
        assert!(!rate.is_zero());
        assert!(TaxRate::default().is_zero());
    }

    #[test]
    fn test_product_price_as_money() {
        let p = watch();
        assert_eq!(p.price().cents(), 19999);
        assert_eq!(format!("{}", p.price()), "$199.99");
    }

    #[test]
    fn test_product_stock_checks() {
        let mut p = watch();
        assert!(p.in_stock());

        p.stock = 0;
        assert!(!p.in_stock());
    }

    #[test]
    fn test_product_serde_camel_case() {
        let json = serde_json::to_string(&watch()).unwrap();
        assert!(json.contains("\"priceCents\":19999"));
        assert!(json.contains("\"category\":\"Electronics\""));
    }
}

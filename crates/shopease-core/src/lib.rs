//! # shopease-core: Pure Business Logic for the ShopEase Storefront
//!
//! This crate is the **heart** of the ShopEase store state manager. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ShopEase Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (any UI)                           │   │
//! │  │    Catalog grid ──► Cart view ──► Badge ──► Login modal        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command dispatch                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopease-store                               │   │
//! │  │    StoreState, Command reducer, StoreHandle, view DTOs          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopease-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Filter   │  │   │
//! │  │   │  Identity │  │  TaxRate  │  │  CartLine │  │ Categories│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO PERSISTENCE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, UserIdentity)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Shopping cart and derived totals
//! - [`catalog`] - Product catalog, search and category filtering
//! - [`session`] - Mock login session
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, persistence access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Cart Operations**: Removing a missing line is a no-op, never an error
//!
//! ## Example Usage
//!
//! ```rust
//! use shopease_core::money::Money;
//! use shopease_core::SALES_TAX_RATE;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(2500); // $25.00
//!
//! // Flat 8% storefront sales tax
//! let tax = subtotal.calculate_tax(SALES_TAX_RATE);
//! assert_eq!(tax.cents(), 200); // $2.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopease_core::Money` instead of
// `use shopease_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, CatalogFilter, CATEGORY_ALL};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::Session;
pub use types::{Product, TaxRate, UserIdentity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat storefront sales tax: 8.00% (800 basis points).
///
/// ## Why a constant?
/// The storefront charges a single fixed rate with no regional variation.
/// Expressed in basis points so tax math stays in integers; see
/// [`Money::calculate_tax`].
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(800);

/// Maximum length of a free-text search query.
///
/// Longer input is rejected by [`validation::validate_search_query`] before
/// it reaches the filter predicate.
pub const MAX_QUERY_LEN: usize = 100;

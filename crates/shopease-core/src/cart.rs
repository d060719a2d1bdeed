//! # Shopping Cart
//!
//! The cart and its derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                    │
//! │                                                                         │
//! │  Frontend Action          Cart Operation          Cart Change           │
//! │  ───────────────          ──────────────          ──────────            │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add(product) ────────► line qty +1 / insert │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity(id, n) ─► line qty = n         │
//! │                            (n <= 0 removes the line)                    │
//! │                                                                         │
//! │  Click Trash Icon ───────► remove(id) ──────────► line deleted         │
//! │                                                                         │
//! │  Cart Badge ─────────────► total_quantity() ────► Σ quantities         │
//! │                                                                         │
//! │  Order Summary ──────────► totals() ────────────► subtotal/tax/total   │
//! │                                                                         │
//! │  EVERY operation is total: missing ids are no-ops, never errors.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `product_id` (adding the same product twice yields
//!   one line with quantity 2, not two lines)
//! - A stored line always has quantity >= 1 (quantity <= 0 removes the line)
//! - Totals are derived on demand, never cached

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;
use crate::SALES_TAX_RATE;

// =============================================================================
// Cart Line
// =============================================================================

/// One product's quantity entry in the cart.
///
/// ## Design Notes
/// - `product_id`: reference back to the catalog entry
/// - Remaining product fields are a frozen snapshot taken at add time, so
///   the cart renders consistently even if the catalog is swapped out
///   underneath it mid-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product ID this line refers to.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Category at time of adding (frozen).
    pub category: String,

    /// Image URI at time of adding (frozen).
    pub image: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Stock level at time of adding. The UI uses this to disable the
    /// quantity "+" control; the cart does not enforce it.
    pub stock: i64,

    /// Quantity in cart. Always >= 1 for a stored line.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            unit_price_cents: product.price_cents,
            stock: product.stock,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered collection of lines, unique by product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,

    /// When the cart was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: its quantity increases by 1
    /// - If not: a new line with quantity 1 is appended
    ///
    /// No stock check happens here. The UI disables its add controls at the
    /// stock bound; the cart stays a total function.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::from_product(product, 1));
    }

    /// Removes a line from the cart by product ID.
    ///
    /// No-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Sets the quantity of a line in the cart.
    ///
    /// ## Behavior
    /// - Quantity <= 0: delegates to [`Cart::remove`]
    /// - Product not in cart: no-op
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Returns the number of unique lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines (the badge count).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal (before tax).
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Calculates subtotal, tax and grand total in one pass.
    ///
    /// Tax is computed on the subtotal at the flat 8% rate, matching the
    /// order summary: `tax = subtotal × 0.08`, `total = subtotal + tax`.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let tax = subtotal.calculate_tax(SALES_TAX_RATE);
        CartTotals {
            line_count: self.line_count(),
            total_quantity: self.total_quantity(),
            subtotal_cents: subtotal.cents(),
            tax_cents: tax.cents(),
            total_cents: (subtotal + tax).cents(),
        }
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart totals for the order summary.
///
/// Always computed from the canonical cart, never stored, so the summary
/// cannot drift from the lines it summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        cart.totals()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

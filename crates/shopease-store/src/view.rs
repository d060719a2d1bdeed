//! # View DTOs
//!
//! Serializable snapshots handed to presentation code. camelCase field
//! names for direct JS consumption.
//!
//! ## Why DTOs?
//! - Decouples internal state layout from the UI contract
//! - Bundles the derived values a page needs into one read

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use shopease_core::{CartLine, CartTotals, Product, UserIdentity};

use crate::state::StoreState;

/// Cart page view: lines plus derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartView {
    /// Snapshots the cart out of the store state.
    pub fn from_state(state: &StoreState) -> Self {
        CartView {
            lines: state.cart.lines.clone(),
            totals: state.cart_totals(),
        }
    }
}

/// Catalog page view: filtered products plus the context the chrome needs
/// (categories for the dropdown, badge count, greeting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontView {
    /// Products passing the current filter, in catalog order.
    pub products: Vec<Product>,

    /// Distinct categories for the filter dropdown.
    pub categories: Vec<String>,

    /// The filter the products were computed from.
    pub query: String,
    pub category: String,

    /// Navigation badge count.
    pub cart_count: i64,

    /// Logged-in user, if any.
    pub user: Option<UserIdentity>,
}

impl StorefrontView {
    /// Snapshots the catalog page data out of the store state.
    pub fn from_state(state: &StoreState) -> Self {
        StorefrontView {
            products: state.filtered_products(),
            categories: state.categories(),
            query: state.filter.query.clone(),
            category: state.filter.category.clone(),
            cart_count: state.cart_count(),
            user: state.current_user().cloned(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::demo::demo_catalog;
    use crate::state::{apply, StoreState};

    #[test]
    fn test_cart_view_serializes_camel_case() {
        let mut state = StoreState::new(demo_catalog());
        apply(
            &mut state,
            Command::AddToCart {
                product_id: "1".to_string(),
            },
        );

        let json = serde_json::to_string(&CartView::from_state(&state)).unwrap();
        assert!(json.contains("\"subtotalCents\":29999"));
        assert!(json.contains("\"productId\":\"1\""));
    }

    #[test]
    fn test_storefront_view_carries_filter_context() {
        let mut state = StoreState::new(demo_catalog());
        apply(
            &mut state,
            Command::SetFilter {
                query: "speaker".to_string(),
                category: "Electronics".to_string(),
            },
        );

        let view = StorefrontView::from_state(&state);
        assert_eq!(view.query, "speaker");
        assert_eq!(view.category, "Electronics");
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].name, "Wireless Speaker");
        assert!(view.user.is_none());
    }
}

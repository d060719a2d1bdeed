//! # Store State & Reducer
//!
//! The single owned state object and the reducer that mutates it.
//!
//! ## Why a Reducer?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Instead of ambient globals mutated from scattered UI callbacks,       │
//! │  the store is one explicit value and one transition function:          │
//! │                                                                         │
//! │      apply(&mut StoreState, Command)                                    │
//! │                                                                         │
//! │  • Every mutation is enumerable (six Command variants)                 │
//! │  • Transitions are synchronous: the next read sees the write           │
//! │  • Tests drive the store exactly the way the UI does                   │
//! │                                                                         │
//! │  Derived values (filtered products, totals, badge count) are pure      │
//! │  reads recomputed per call. No caches, nothing to invalidate.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use shopease_core::validation::validate_search_query;
use shopease_core::{Cart, CartTotals, Catalog, CatalogFilter, Product, Session, UserIdentity};

use crate::command::Command;

// =============================================================================
// Store State
// =============================================================================

/// The whole storefront state: immutable catalog plus the three mutable
/// pieces (cart, filter, session). Everything resets with the value; there
/// is no persistence.
#[derive(Debug, Clone)]
pub struct StoreState {
    /// The static product catalog. Never mutated after construction.
    catalog: Catalog,

    /// Current cart contents.
    pub cart: Cart,

    /// Current search/category filter.
    pub filter: CatalogFilter,

    /// Current login session.
    pub session: Session,
}

impl StoreState {
    /// Creates a fresh state over a catalog: empty cart, wildcard filter,
    /// logged out.
    pub fn new(catalog: Catalog) -> Self {
        StoreState {
            catalog,
            cart: Cart::new(),
            filter: CatalogFilter::all(),
            session: Session::logged_out(),
        }
    }

    /// The catalog this store serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -------------------------------------------------------------------------
    // Derived reads (computed on demand, never cached)
    // -------------------------------------------------------------------------

    /// Products passing the current filter, in catalog order.
    pub fn filtered_products(&self) -> Vec<Product> {
        self.catalog.filter(&self.filter)
    }

    /// Distinct category values for the filter dropdown.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Badge count: total quantity across cart lines.
    pub fn cart_count(&self) -> i64 {
        self.cart.total_quantity()
    }

    /// Subtotal / tax / total for the order summary.
    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&UserIdentity> {
        self.session.user()
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies a command to the state.
///
/// All transitions are total: commands referencing unknown product ids, or
/// carrying a search query past the length cap, are logged and ignored,
/// never errors. This mirrors the cart semantics (removing an absent line
/// is a no-op) at the command boundary.
pub fn apply(state: &mut StoreState, command: Command) {
    debug!(command = command.name(), "apply command");

    match command {
        Command::AddToCart { product_id } => {
            // Resolve the id against the catalog; the cart snapshots what
            // it needs from the product.
            if let Some(product) = state.catalog.get(&product_id).cloned() {
                state.cart.add(&product);
            } else {
                debug!(product_id = %product_id, "add_to_cart: unknown product id, ignoring");
            }
        }

        Command::RemoveFromCart { product_id } => {
            state.cart.remove(&product_id);
        }

        Command::SetQuantity {
            product_id,
            quantity,
        } => {
            state.cart.set_quantity(&product_id, quantity);
        }

        Command::SetFilter { query, category } => {
            // The validator trims the query and enforces the length cap.
            match validate_search_query(&query) {
                Ok(query) => state.filter = CatalogFilter::new(query, category),
                Err(err) => {
                    debug!(error = %err, "set_filter: invalid query, ignoring");
                }
            }
        }

        Command::Login { identity } => {
            state.session.login(identity);
        }

        Command::Logout => {
            state.session.logout();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_catalog;
    use shopease_core::{CATEGORY_ALL, MAX_QUERY_LEN};

    fn fresh_state() -> StoreState {
        StoreState::new(demo_catalog())
    }

    fn add(state: &mut StoreState, id: &str) {
        apply(
            state,
            Command::AddToCart {
                product_id: id.to_string(),
            },
        );
    }

    #[test]
    fn test_add_to_cart_resolves_catalog_product() {
        let mut state = fresh_state();
        add(&mut state, "1");

        assert_eq!(state.cart_count(), 1);
        assert_eq!(state.cart.lines[0].name, "Premium Wireless Headphones");
        assert_eq!(state.cart.lines[0].unit_price_cents, 29999);
    }

    #[test]
    fn test_add_same_product_twice_increments() {
        let mut state = fresh_state();
        add(&mut state, "1");
        add(&mut state, "1");

        assert_eq!(state.cart.line_count(), 1);
        assert_eq!(state.cart_count(), 2);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut state = fresh_state();
        add(&mut state, "does-not-exist");

        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_set_quantity_and_remove_via_commands() {
        let mut state = fresh_state();
        add(&mut state, "1");

        apply(
            &mut state,
            Command::SetQuantity {
                product_id: "1".to_string(),
                quantity: 4,
            },
        );
        assert_eq!(state.cart_count(), 4);

        apply(
            &mut state,
            Command::SetQuantity {
                product_id: "1".to_string(),
                quantity: 0,
            },
        );
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_remove_from_cart_round_trip() {
        let mut state = fresh_state();
        add(&mut state, "1");
        let lines_before = state.cart.lines.clone();

        add(&mut state, "2");
        apply(
            &mut state,
            Command::RemoveFromCart {
                product_id: "2".to_string(),
            },
        );

        assert_eq!(state.cart.lines, lines_before);
    }

    #[test]
    fn test_set_filter_changes_derived_products() {
        let mut state = fresh_state();
        assert_eq!(state.filtered_products().len(), state.catalog().len());

        apply(
            &mut state,
            Command::SetFilter {
                query: "watch".to_string(),
                category: CATEGORY_ALL.to_string(),
            },
        );

        let filtered = state.filtered_products();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Smart Fitness Watch");
    }

    #[test]
    fn test_set_filter_trims_query() {
        let mut state = fresh_state();
        apply(
            &mut state,
            Command::SetFilter {
                query: "  watch  ".to_string(),
                category: CATEGORY_ALL.to_string(),
            },
        );

        assert_eq!(state.filter.query, "watch");
    }

    #[test]
    fn test_set_filter_over_length_query_ignored() {
        let mut state = fresh_state();
        apply(
            &mut state,
            Command::SetFilter {
                query: "watch".to_string(),
                category: "Electronics".to_string(),
            },
        );

        apply(
            &mut state,
            Command::SetFilter {
                query: "x".repeat(MAX_QUERY_LEN + 1),
                category: CATEGORY_ALL.to_string(),
            },
        );

        // The oversized command is dropped whole; the previous filter stands.
        assert_eq!(state.filter.query, "watch");
        assert_eq!(state.filter.category, "Electronics");
    }

    #[test]
    fn test_filter_does_not_touch_cart_or_session() {
        let mut state = fresh_state();
        add(&mut state, "3");

        apply(
            &mut state,
            Command::SetFilter {
                query: "laptop".to_string(),
                category: "Electronics".to_string(),
            },
        );

        assert_eq!(state.cart_count(), 1);
        assert!(!state.session.is_logged_in());
    }

    #[test]
    fn test_login_logout_commands() {
        let mut state = fresh_state();

        apply(
            &mut state,
            Command::Login {
                identity: UserIdentity {
                    name: "Jane".to_string(),
                    email: "jane@example.com".to_string(),
                },
            },
        );
        assert_eq!(state.current_user().unwrap().email, "jane@example.com");

        apply(&mut state, Command::Logout);
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_logout_preserves_cart() {
        // Logging out is a session toggle; the cart is independent state.
        let mut state = fresh_state();
        add(&mut state, "5");
        apply(&mut state, Command::Logout);

        assert_eq!(state.cart_count(), 1);
    }

    #[test]
    fn test_cart_totals_derived_from_state() {
        let mut state = fresh_state();
        add(&mut state, "3"); // $29.99 t-shirt
        apply(
            &mut state,
            Command::SetQuantity {
                product_id: "3".to_string(),
                quantity: 2,
            },
        );

        let totals = state.cart_totals();
        assert_eq!(totals.subtotal_cents, 5998);
        assert_eq!(totals.tax_cents, 480); // 8% of $59.98, rounded
        assert_eq!(totals.total_cents, 6478);
    }
}

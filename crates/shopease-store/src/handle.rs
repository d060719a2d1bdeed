//! # Store Handle
//!
//! Thread-safe wrapper around [`StoreState`].
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple UI callbacks may access/modify the store
//! 2. Only one callback should modify the store at a time
//! 3. Some UI runtimes deliver events from more than one thread
//!
//! ## Why Not RwLock?
//! Store operations are quick, and most dispatches modify state.
//! A RwLock would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use shopease_core::{CartTotals, Catalog, Product, UserIdentity};

use crate::command::Command;
use crate::state::{apply, StoreState};
use crate::view::{CartView, StorefrontView};

/// Shared handle to the store state.
///
/// Cloning the handle shares the same underlying state: a navigation bar
/// and a cart page holding clones observe each other's dispatches.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    state: Arc<Mutex<StoreState>>,
}

impl StoreHandle {
    /// Creates a handle over a fresh state for the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        StoreHandle {
            state: Arc::new(Mutex::new(StoreState::new(catalog))),
        }
    }

    /// Dispatches a command through the reducer.
    pub fn dispatch(&self, command: Command) {
        self.with_state_mut(|state| apply(state, command));
    }

    /// Executes a function with read access to the state.
    ///
    /// ## Usage
    /// ```rust
    /// use shopease_store::{demo_catalog, StoreHandle};
    ///
    /// let store = StoreHandle::new(demo_catalog());
    /// let count = store.with_state(|s| s.cart_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreState) -> R,
    {
        let state = self.state.lock().expect("Store mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the state.
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StoreState) -> R,
    {
        let mut state = self.state.lock().expect("Store mutex poisoned");
        f(&mut state)
    }

    // -------------------------------------------------------------------------
    // Read conveniences for presentation code
    // -------------------------------------------------------------------------

    /// Cart lines plus derived totals, ready for the cart page.
    pub fn cart_view(&self) -> CartView {
        self.with_state(|s| CartView::from_state(s))
    }

    /// Filtered products plus filter/session context for the catalog page.
    pub fn storefront_view(&self) -> StorefrontView {
        self.with_state(StorefrontView::from_state)
    }

    /// Badge count for the navigation bar.
    pub fn cart_count(&self) -> i64 {
        self.with_state(|s| s.cart_count())
    }

    /// Order-summary totals.
    pub fn cart_totals(&self) -> CartTotals {
        self.with_state(|s| s.cart_totals())
    }

    /// Products passing the current filter.
    pub fn filtered_products(&self) -> Vec<Product> {
        self.with_state(|s| s.filtered_products())
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.with_state(|s| s.current_user().cloned())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

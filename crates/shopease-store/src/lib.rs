//! # shopease-store: Store State Manager
//!
//! The stateful layer of the ShopEase storefront. Presentation code reads
//! derived views from here and dispatches [`Command`] values; all business
//! logic lives in `shopease-core`.
//!
//! ## Module Organization
//! ```text
//! shopease_store/
//! ├── lib.rs          ◄─── You are here (exports & tracing init)
//! ├── command.rs      ◄─── Command enum (AddToCart, SetFilter, Login, ...)
//! ├── state.rs        ◄─── StoreState + the apply() reducer
//! ├── handle.rs       ◄─── StoreHandle: Arc<Mutex<StoreState>> wrapper
//! ├── view.rs         ◄─── camelCase DTOs for the frontend
//! └── demo.rs         ◄─── Hardcoded sample catalog
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Management                               │
//! │                                                                         │
//! │  UI event ──► Command ──► handle.dispatch() ──► apply(state, command)  │
//! │                                                        │                │
//! │                             ┌──────────────────────────┘                │
//! │                             ▼                                           │
//! │            StoreState { catalog, cart, filter, session }               │
//! │                             │                                           │
//! │                             ▼                                           │
//! │  UI render ◄── derived views (filtered products, totals, badge count)  │
//! │                                                                         │
//! │  Derived values are COMPUTED ON DEMAND from canonical state, never     │
//! │  cached, so they cannot drift from the state that produced them.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use shopease_store::{demo_catalog, Command, StoreHandle};
//!
//! let store = StoreHandle::new(demo_catalog());
//! store.dispatch(Command::AddToCart { product_id: "1".into() });
//!
//! let view = store.cart_view();
//! assert_eq!(view.totals.total_quantity, 1);
//! ```

pub mod command;
pub mod demo;
pub mod handle;
pub mod state;
pub mod view;

pub use command::Command;
pub use demo::demo_catalog;
pub use handle::StoreHandle;
pub use state::{apply, StoreState};
pub use view::{CartView, StorefrontView};

use tracing_subscriber::EnvFilter;

/// Initializes tracing for binaries and examples.
///
/// Default level is INFO; override with `RUST_LOG` (e.g.
/// `RUST_LOG=shopease_store=debug` to see every dispatched command).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

//! # Storefront Walkthrough
//!
//! Drives the store through a typical shopping session and prints the
//! resulting views as JSON. Useful for eyeballing reducer behavior without
//! a frontend.
//!
//! ## Usage
//! ```bash
//! cargo run -p shopease-store --bin demo
//!
//! # With per-command debug logging
//! RUST_LOG=shopease_store=debug cargo run -p shopease-store --bin demo
//! ```

use shopease_core::UserIdentity;
use shopease_store::{demo_catalog, init_tracing, Command, StoreHandle};
use tracing::info;

fn main() -> Result<(), serde_json::Error> {
    init_tracing();

    let store = StoreHandle::new(demo_catalog());
    info!("store initialized with demo catalog");

    // Log in and do some shopping: two headphones, one t-shirt.
    store.dispatch(Command::Login {
        identity: UserIdentity {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        },
    });
    store.dispatch(Command::AddToCart {
        product_id: "1".to_string(),
    });
    store.dispatch(Command::AddToCart {
        product_id: "1".to_string(),
    });
    store.dispatch(Command::AddToCart {
        product_id: "3".to_string(),
    });

    // Browse electronics matching "wireless".
    store.dispatch(Command::SetFilter {
        query: "wireless".to_string(),
        category: "Electronics".to_string(),
    });

    let front = store.storefront_view();
    info!(
        products = front.products.len(),
        cart_count = front.cart_count,
        "storefront after filtering"
    );
    println!("{}", serde_json::to_string_pretty(&front)?);

    let cart = store.cart_view();
    info!(
        subtotal_cents = cart.totals.subtotal_cents,
        tax_cents = cart.totals.tax_cents,
        total_cents = cart.totals.total_cents,
        "order summary"
    );
    println!("{}", serde_json::to_string_pretty(&cart)?);

    Ok(())
}

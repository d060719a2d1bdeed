//! # Store Commands
//!
//! Every mutation of the store flows through one of these message objects,
//! processed by the single reducer in [`crate::state::apply`]. The UI never
//! mutates state directly; it builds a `Command` and dispatches it.
//!
//! ## Command Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI element                 Command                  State touched      │
//! │  ──────────                 ───────                  ─────────────      │
//! │  "Add to Cart" button ────► AddToCart                cart               │
//! │  Trash icon ──────────────► RemoveFromCart           cart               │
//! │  Quantity +/- controls ───► SetQuantity              cart               │
//! │  Search box / dropdown ───► SetFilter                filter             │
//! │  Login modal submit ──────► Login                    session            │
//! │  Logout button ───────────► Logout                   session            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands are serializable so a UI boundary (IPC, web worker, devtools
//! replay) can ship them as plain JSON.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use shopease_core::UserIdentity;

/// A mutation request against the store state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Add one unit of a catalog product to the cart.
    /// Unknown product ids are ignored.
    #[serde(rename_all = "camelCase")]
    AddToCart { product_id: String },

    /// Remove a cart line entirely. No-op if the line is absent.
    #[serde(rename_all = "camelCase")]
    RemoveFromCart { product_id: String },

    /// Set a cart line's quantity. Quantities <= 0 remove the line.
    #[serde(rename_all = "camelCase")]
    SetQuantity { product_id: String, quantity: i64 },

    /// Replace the catalog filter (search text + selected category).
    #[serde(rename_all = "camelCase")]
    SetFilter { query: String, category: String },

    /// Log in with the given identity (mock auth, no validation).
    Login { identity: UserIdentity },

    /// Log out, clearing the session.
    Logout,
}

impl Command {
    /// Short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddToCart { .. } => "add_to_cart",
            Command::RemoveFromCart { .. } => "remove_from_cart",
            Command::SetQuantity { .. } => "set_quantity",
            Command::SetFilter { .. } => "set_filter",
            Command::Login { .. } => "login",
            Command::Logout => "logout",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_json_shape() {
        let cmd = Command::SetQuantity {
            product_id: "2".to_string(),
            quantity: 3,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(
            json,
            r#"{"type":"setQuantity","productId":"2","quantity":3}"#
        );

        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Logout.name(), "logout");
        assert_eq!(
            Command::AddToCart {
                product_id: "1".to_string()
            }
            .name(),
            "add_to_cart"
        );
    }
}

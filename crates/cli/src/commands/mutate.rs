//! Commands that change the store.
//!
//! The store lives only for the duration of the command, so each mutation
//! prints the changed entity together with the re-derived home page.

use serde_json::json;

use stock_alchemist_admin::AppState;
use stock_alchemist_admin::middleware::RequireAuth;
use stock_alchemist_core::{OrderId, OrderStatus, ProductId};

use super::print_json;

/// Add stock to a product.
///
/// # Errors
///
/// Returns an error if the product does not exist.
pub fn restock(
    state: &AppState,
    auth: &RequireAuth,
    product_id: &ProductId,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = state.restock(auth, product_id, quantity)?;
    print_json(&json!({ "product": product, "dashboard": state.home(auth) }))
}

/// Move an order to a new status.
///
/// # Errors
///
/// Returns an error if the order does not exist.
pub fn set_status(
    state: &AppState,
    auth: &RequireAuth,
    order_id: &OrderId,
    status: OrderStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = state.set_order_status(auth, order_id, status)?;
    print_json(&json!({ "order": order, "dashboard": state.home(auth) }))
}

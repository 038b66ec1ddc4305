//! Catalog & order store.
//!
//! The sole owner of products and orders. Readers take an
//! `Arc<CatalogSnapshot>` and always see a complete state: every mutation
//! builds the next snapshot and swaps it in under the channel's write lock,
//! so no partially applied change is ever visible.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use stock_alchemist_core::{Order, OrderId, Product, ProductId};

use crate::error::AppError;
use crate::models::{Catalog, CatalogSnapshot};

/// Shared handle to the catalog.
///
/// Cloning is cheap; all clones mutate and observe the same data.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<watch::Sender<Arc<CatalogSnapshot>>>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("CatalogStore")
            .field("version", &snapshot.version)
            .field("products", &snapshot.products().len())
            .field("orders", &snapshot.orders().len())
            .finish()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl CatalogStore {
    /// Create a store holding `catalog` at version 0.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let (inner, _) = watch::channel(Arc::new(CatalogSnapshot {
            version: 0,
            catalog,
        }));
        Self {
            inner: Arc::new(inner),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.inner.borrow())
    }

    /// Current mutation count.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Copy of the product list.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.snapshot().products().to_vec()
    }

    /// Copy of the order list.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.snapshot().orders().to_vec()
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.snapshot().catalog.product(id).cloned()
    }

    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.snapshot().catalog.order(id).cloned()
    }

    /// Receive the new snapshot after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<CatalogSnapshot>> {
        self.inner.subscribe()
    }

    /// Replace the product with the same id.
    ///
    /// The product keeps its position in the catalog; all other products are
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id. The catalog
    /// is left unchanged.
    pub fn update_product(&self, product: Product) -> Result<(), AppError> {
        let id = product.id.clone();
        let replaced = self.inner.send_if_modified(|current| {
            let Some(index) = current.products().iter().position(|p| p.id == id) else {
                return false;
            };
            let next = Arc::make_mut(current);
            let Some(slot) = next.catalog.products.get_mut(index) else {
                return false;
            };
            *slot = product;
            next.version += 1;
            true
        });

        if !replaced {
            warn!(product_id = %id, "Update for unknown product");
            return Err(AppError::NotFound(format!("product {id}")));
        }
        info!(product_id = %id, "Product updated");
        Ok(())
    }

    /// Append an order to the end of the order list.
    ///
    /// The id and total are taken as given. A total that disagrees with the
    /// line items is logged but still stored.
    pub fn add_order(&self, order: Order) {
        if !order.has_consistent_total() {
            warn!(
                order_id = %order.id,
                total = %order.total,
                line_total = %order.line_total(),
                "Order total does not match line items"
            );
        }
        let id = order.id.clone();
        self.inner.send_modify(|current| {
            let next = Arc::make_mut(current);
            next.catalog.orders.push(order);
            next.version += 1;
        });
        info!(order_id = %id, "Order added");
    }

    /// Replace the order with the same id.
    ///
    /// Channel and creation time are expected to be carried over from the
    /// stored order; a change to either is logged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order has this id. The order list
    /// is left unchanged.
    pub fn update_order(&self, order: Order) -> Result<(), AppError> {
        let id = order.id.clone();
        let replaced = self.inner.send_if_modified(|current| {
            let Some(index) = current.orders().iter().position(|o| o.id == id) else {
                return false;
            };
            let next = Arc::make_mut(current);
            let Some(slot) = next.catalog.orders.get_mut(index) else {
                return false;
            };
            if slot.channel != order.channel || slot.created_at != order.created_at {
                warn!(order_id = %id, "Order update changes channel or creation time");
            }
            *slot = order;
            next.version += 1;
            true
        });

        if !replaced {
            warn!(order_id = %id, "Update for unknown order");
            return Err(AppError::NotFound(format!("order {id}")));
        }
        info!(order_id = %id, "Order updated");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use stock_alchemist_core::{LineItem, Money, OrderStatus, SalesChannel, UserId};

    use super::*;

    fn product(id: &str, quantity: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            sku: format!("SKU-{id}"),
            price: Money::from_cents(1000),
            cost: Money::from_cents(500),
            quantity,
            threshold: 10,
            image_url: String::new(),
            category: "General".to_string(),
        }
    }

    fn order(id: &str) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new("1"),
            line_items: vec![LineItem {
                product_id: ProductId::new("1"),
                quantity: 1,
                price: Money::from_cents(1000),
            }],
            status: OrderStatus::Pending,
            channel: SalesChannel::Ec,
            created_at: "2024-03-15T10:00:00Z".parse().unwrap(),
            total: Money::from_cents(1000),
        }
    }

    fn store() -> CatalogStore {
        CatalogStore::new(Catalog {
            products: vec![product("1", 5), product("2", 50), product("3", 8)],
            orders: vec![order("1"), order("2")],
        })
    }

    #[test]
    fn test_update_product_replaces_in_place() {
        let store = store();
        let before = store.products();
        let replacement = Product {
            name: "Renamed".to_string(),
            ..product("2", 1)
        };

        store.update_product(replacement.clone()).unwrap();

        let after = store.products();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], replacement);
        assert_eq!(after[2], before[2]);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_update_unknown_product_is_not_found_and_unchanged() {
        let store = store();
        let before = store.snapshot();

        let err = store.update_product(product("99", 1)).unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref what) if what == "product 99"));
        assert_eq!(*store.snapshot(), *before);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_add_order_with_overflowing_lines_is_stored() {
        let store = store();
        let mut huge = order("9");
        huge.line_items[0].price = Money::MAX;
        huge.line_items[0].quantity = 2;

        store.add_order(huge.clone());

        assert_eq!(store.order(&huge.id), Some(huge));
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_add_order_appends() {
        let store = store();
        let before = store.orders();

        store.add_order(order("3"));

        let after = store.orders();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], before.as_slice());
        assert_eq!(after.last().unwrap().id, OrderId::new("3"));
    }

    #[test]
    fn test_add_order_stores_inconsistent_total_as_given() {
        let store = store();
        let odd = Order {
            total: Money::from_cents(1),
            ..order("4")
        };
        store.add_order(odd.clone());
        assert_eq!(store.order(&OrderId::new("4")), Some(odd));
    }

    #[test]
    fn test_update_order() {
        let store = store();
        let shipped = order("2").with_status(OrderStatus::Shipped);
        store.update_order(shipped.clone()).unwrap();
        assert_eq!(store.orders()[1], shipped);
        assert_eq!(store.orders()[0], order("1"));

        let err = store.update_order(order("9")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.orders().len(), 2);
    }

    #[test]
    fn test_held_snapshot_is_unaffected_by_later_writes() {
        let store = store();
        let held = store.snapshot();
        store.add_order(order("3"));
        assert_eq!(held.orders().len(), 2);
        assert_eq!(store.snapshot().orders().len(), 3);
    }

    #[tokio::test]
    async fn test_subscribers_are_notified_only_on_change() {
        let store = store();
        let mut rx = store.subscribe();

        let _ = store.update_product(product("99", 1));
        assert!(!rx.has_changed().unwrap());

        store.update_product(product("1", 100)).unwrap();
        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.version, 1);
        assert_eq!(snapshot.products()[0].quantity, 100);
    }
}

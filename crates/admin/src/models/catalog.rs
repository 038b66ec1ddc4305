//! Catalog contents and the snapshots readers see.

use serde::{Deserialize, Serialize};

use stock_alchemist_core::{Order, OrderId, Product, ProductId};

/// Placeholder name for a line item whose product is not in the catalog.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Products and orders, in insertion order.
///
/// This is also the seed file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Catalog {
    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up an order by id.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Resolve a line item reference to a display name.
    #[must_use]
    pub fn product_name(&self, id: &ProductId) -> &str {
        self.product(id).map_or(UNKNOWN_PRODUCT, |p| p.name.as_str())
    }
}

/// A complete, consistent view of the catalog at one point in time.
///
/// `version` increases by one with every applied mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub version: u64,
    pub catalog: Catalog,
}

impl CatalogSnapshot {
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.catalog.products
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.catalog.orders
    }
}

//! Catalog product.

use serde::{Deserialize, Serialize};

use super::{Money, ProductId};

/// A product in the catalog, with its current stock level.
///
/// Products are always replaced wholesale by id; there is no partial
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Stock keeping unit, e.g. `"TS-001"`. Searchable alongside the name.
    pub sku: String,
    /// List price.
    pub price: Money,
    /// Unit cost.
    pub cost: Money,
    /// Units currently in stock.
    pub quantity: u32,
    /// Reorder point. Stock below this is low.
    pub threshold: u32,
    pub image_url: String,
    pub category: String,
}

impl Product {
    /// Returns `true` when stock has fallen below the reorder point.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.quantity < self.threshold
    }

    /// Per-unit margin, or `None` when the product sells below cost.
    #[must_use]
    pub fn margin(&self) -> Option<Money> {
        Money::new(self.price.amount() - self.cost.amount()).ok()
    }

    /// Copy of this product with a different stock level.
    #[must_use]
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(quantity: u32, threshold: u32) -> Product {
        Product {
            id: ProductId::new("2"),
            name: "Designer Hoodie".to_string(),
            sku: "HD-001".to_string(),
            price: Money::from_cents(5999),
            cost: Money::from_cents(3000),
            quantity,
            threshold,
            image_url: String::new(),
            category: "Apparel".to_string(),
        }
    }

    #[test]
    fn test_low_stock_is_strictly_below_threshold() {
        assert!(product(30, 40).is_low_stock());
        assert!(!product(40, 40).is_low_stock());
        assert!(!product(41, 40).is_low_stock());
        assert!(!product(0, 0).is_low_stock());
    }

    #[test]
    fn test_margin() {
        assert_eq!(product(1, 1).margin(), Some(Money::from_cents(2999)));
        let loss = Product {
            cost: Money::from_cents(9999),
            ..product(1, 1)
        };
        assert_eq!(loss.margin(), None);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = serde_json::to_value(product(30, 40)).unwrap();
        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["price"], "59.99");
    }
}

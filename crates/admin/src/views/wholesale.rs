//! Wholesale portal: the catalog at a discounted unit price.

use rust_decimal::Decimal;
use serde::Serialize;

use stock_alchemist_core::{Money, Product, ProductId};

use super::inventory::{ProductQuery, categories, filter_products};

/// A product as offered to wholesale buyers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WholesaleItemView {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub image_url: String,
    pub list_price: Money,
    pub wholesale_price: Money,
    pub available: u32,
}

/// Unit price after applying `multiplier`, rounded to cents.
#[must_use]
pub fn wholesale_price(list_price: Money, multiplier: Decimal) -> Money {
    list_price.scale(multiplier).round_cents()
}

/// Wholesale page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WholesaleView {
    pub categories: Vec<String>,
    pub items: Vec<WholesaleItemView>,
}

/// Build the wholesale page from the filtered catalog.
#[must_use]
pub fn wholesale_view(products: &[Product], query: &ProductQuery, multiplier: Decimal) -> WholesaleView {
    WholesaleView {
        categories: categories(products),
        items: filter_products(products, query)
            .into_iter()
            .map(|p| WholesaleItemView {
                id: p.id.clone(),
                name: p.name.clone(),
                sku: p.sku.clone(),
                category: p.category.clone(),
                image_url: p.image_url.clone(),
                list_price: p.price,
                wholesale_price: wholesale_price(p.price, multiplier),
                available: p.quantity,
            })
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn seventy_percent() -> Decimal {
        Decimal::new(70, 2)
    }

    #[test]
    fn test_wholesale_price_rounds_half_away_from_zero() {
        // 29.99 * 0.7 = 20.993
        assert_eq!(
            wholesale_price(Money::from_cents(2999), seventy_percent()),
            Money::from_cents(2099)
        );
        // 0.05 * 0.7 = 0.035
        assert_eq!(
            wholesale_price(Money::from_cents(5), seventy_percent()),
            Money::from_cents(4)
        );
        assert!(wholesale_price(Money::ZERO, seventy_percent()).is_zero());
    }

    #[test]
    fn test_wholesale_view_filters_like_inventory() {
        let products = vec![
            Product {
                id: ProductId::new("1"),
                name: "Designer Hoodie".to_string(),
                sku: "HD-001".to_string(),
                price: Money::from_cents(5999),
                cost: Money::from_cents(3000),
                quantity: 30,
                threshold: 40,
                image_url: String::new(),
                category: "Apparel".to_string(),
            },
            Product {
                id: ProductId::new("2"),
                name: "Wireless Earbuds".to_string(),
                sku: "WE-001".to_string(),
                price: Money::from_cents(12999),
                cost: Money::from_cents(6500),
                quantity: 75,
                threshold: 25,
                image_url: String::new(),
                category: "Electronics".to_string(),
            },
        ];

        let view = wholesale_view(&products, &ProductQuery::new("", "Apparel"), seventy_percent());

        assert_eq!(view.categories, ["all", "Apparel", "Electronics"]);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].list_price, Money::from_cents(5999));
        assert_eq!(view.items[0].wholesale_price, Money::from_cents(4199));
        assert_eq!(view.items[0].available, 30);
    }
}

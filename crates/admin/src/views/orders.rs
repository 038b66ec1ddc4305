//! Orders view: id search, status filter, line items resolved to names.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stock_alchemist_core::{
    Money, Order, OrderId, OrderStatus, ParseEnumError, ProductId, SalesChannel, UserId,
};

use super::{ALL, contains_ignore_case};
use crate::models::Catalog;

/// Status picker selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    fn matches(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Search box and status picker state.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub search: String,
    pub status: StatusFilter,
}

/// Orders whose id contains the search text (case-insensitive) and whose
/// status passes the filter, in collection order.
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], query: &OrderQuery) -> Vec<&'a Order> {
    let needle = query.search.to_lowercase();
    orders
        .iter()
        .filter(|o| query.status.matches(o.status))
        .filter(|o| contains_ignore_case(o.id.as_str(), &needle))
        .collect()
}

/// A line item with its product name resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Money,
    pub subtotal: Money,
}

/// One row of the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRowView {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub channel: SalesChannel,
    pub created_at: DateTime<Utc>,
    pub total: Money,
    /// Units across every line item.
    pub unit_count: u64,
    pub line_items: Vec<LineItemView>,
}

impl OrderRowView {
    #[must_use]
    pub fn resolve(order: &Order, catalog: &Catalog) -> Self {
        Self {
            id: order.id.clone(),
            user_id: order.user_id.clone(),
            status: order.status,
            status_label: order.status.label(),
            channel: order.channel,
            created_at: order.created_at,
            total: order.total,
            unit_count: order.unit_count(),
            line_items: order
                .line_items
                .iter()
                .map(|line| LineItemView {
                    product_id: line.product_id.clone(),
                    product_name: catalog.product_name(&line.product_id).to_owned(),
                    quantity: line.quantity,
                    price: line.price,
                    subtotal: line.subtotal(),
                })
                .collect(),
        }
    }
}

/// Orders page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersView {
    pub statuses: Vec<&'static str>,
    pub orders: Vec<OrderRowView>,
}

/// Build the orders page.
#[must_use]
pub fn orders_view(catalog: &Catalog, query: &OrderQuery) -> OrdersView {
    let statuses = std::iter::once(ALL)
        .chain(OrderStatus::ALL.iter().map(|s| s.as_str()))
        .collect();
    OrdersView {
        statuses,
        orders: filter_orders(&catalog.orders, query)
            .into_iter()
            .map(|order| OrderRowView::resolve(order, catalog))
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use stock_alchemist_core::{LineItem, Product};

    use super::*;
    use crate::models::UNKNOWN_PRODUCT;

    fn order(id: &str, status: OrderStatus, product_id: &str) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new("1"),
            line_items: vec![LineItem {
                product_id: ProductId::new(product_id),
                quantity: 2,
                price: Money::from_cents(1500),
            }],
            status,
            channel: SalesChannel::Ec,
            created_at: "2024-03-15T10:00:00Z".parse().unwrap(),
            total: Money::from_cents(3000),
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            products: vec![Product {
                id: ProductId::new("1"),
                name: "Premium T-Shirt".to_string(),
                sku: "TS-001".to_string(),
                price: Money::from_cents(1500),
                cost: Money::from_cents(700),
                quantity: 10,
                threshold: 5,
                image_url: String::new(),
                category: "Apparel".to_string(),
            }],
            orders: vec![
                order("ORD-100", OrderStatus::Pending, "1"),
                order("ORD-200", OrderStatus::Shipped, "1"),
                order("ord-300", OrderStatus::Pending, "gone"),
            ],
        }
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "shipped".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(OrderStatus::Shipped)
        );
        assert!("lost".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_filter_by_status() {
        let catalog = catalog();
        let query = OrderQuery {
            search: String::new(),
            status: StatusFilter::Only(OrderStatus::Pending),
        };
        assert_eq!(ids(&filter_orders(&catalog.orders, &query)), ["ORD-100", "ord-300"]);
        assert_eq!(filter_orders(&catalog.orders, &OrderQuery::default()).len(), 3);
    }

    #[test]
    fn test_filter_by_id_case_insensitive() {
        let catalog = catalog();
        let query = OrderQuery {
            search: "ORD-3".to_string(),
            status: StatusFilter::All,
        };
        assert_eq!(ids(&filter_orders(&catalog.orders, &query)), ["ord-300"]);
        assert!(filter_orders(&[], &query).is_empty());
    }

    #[test]
    fn test_rows_resolve_product_names() {
        let catalog = catalog();
        let view = orders_view(&catalog, &OrderQuery::default());
        assert_eq!(view.statuses, ["all", "pending", "processing", "shipped", "delivered"]);
        assert_eq!(view.orders[0].line_items[0].product_name, "Premium T-Shirt");
        assert_eq!(view.orders[0].line_items[0].subtotal, Money::from_cents(3000));
        assert_eq!(view.orders[2].line_items[0].product_name, UNKNOWN_PRODUCT);
        assert_eq!(view.orders[1].status_label, OrderStatus::Shipped.label());
        assert_eq!(view.orders[0].unit_count, 2);
    }
}

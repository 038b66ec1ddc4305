//! Home view: headline stats, recent orders and low-stock alerts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stock_alchemist_core::{Money, Order, OrderId, OrderStatus, Product, ProductId, SalesChannel};

use super::inventory::low_stock;
use super::reports::total_revenue;

/// The four headline numbers on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub low_stock_count: usize,
    pub pending_order_count: usize,
    pub total_revenue: Money,
    pub product_count: usize,
}

/// Compute the headline numbers.
#[must_use]
pub fn dashboard_stats(products: &[Product], orders: &[Order]) -> DashboardStats {
    DashboardStats {
        low_stock_count: low_stock(products).len(),
        pending_order_count: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count(),
        total_revenue: total_revenue(orders),
        product_count: products.len(),
    }
}

/// Recent order for dashboard display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrderView {
    pub id: OrderId,
    pub channel: SalesChannel,
    pub channel_label: &'static str,
    pub status: OrderStatus,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for RecentOrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            channel: order.channel,
            channel_label: order.channel.label(),
            status: order.status,
            total: order.total,
            created_at: order.created_at,
        }
    }
}

/// Product that needs reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub threshold: u32,
}

impl From<&Product> for LowStockAlert {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            quantity: product.quantity,
            threshold: product.threshold,
        }
    }
}

/// Home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub username: String,
    pub stats: DashboardStats,
    pub recent_orders: Vec<RecentOrderView>,
    pub low_stock_alerts: Vec<LowStockAlert>,
}

/// Build the home page. Recent orders are the first `recent_limit` orders of
/// the collection.
#[must_use]
pub fn home_view(
    username: &str,
    products: &[Product],
    orders: &[Order],
    recent_limit: usize,
) -> HomeView {
    HomeView {
        username: username.to_owned(),
        stats: dashboard_stats(products, orders),
        recent_orders: orders
            .iter()
            .take(recent_limit)
            .map(RecentOrderView::from)
            .collect(),
        low_stock_alerts: low_stock(products)
            .into_iter()
            .map(LowStockAlert::from)
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use stock_alchemist_core::UserId;

    use super::*;

    fn product(id: &str, quantity: u32, threshold: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            sku: format!("SKU-{id}"),
            price: Money::from_cents(1000),
            cost: Money::from_cents(500),
            quantity,
            threshold,
            image_url: String::new(),
            category: "General".to_string(),
        }
    }

    fn order(id: &str, status: OrderStatus, cents: u32) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new("1"),
            line_items: Vec::new(),
            status,
            channel: SalesChannel::Sns,
            created_at: "2024-03-14T15:30:00Z".parse().unwrap(),
            total: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_stats() {
        let products = vec![product("1", 5, 10), product("2", 10, 10), product("3", 0, 1)];
        let orders = vec![
            order("1", OrderStatus::Pending, 1000),
            order("2", OrderStatus::Shipped, 2550),
            order("3", OrderStatus::Pending, 1),
        ];

        let stats = dashboard_stats(&products, &orders);

        assert_eq!(
            stats,
            DashboardStats {
                low_stock_count: 2,
                pending_order_count: 2,
                total_revenue: Money::from_cents(3551),
                product_count: 3,
            }
        );
    }

    #[test]
    fn test_stats_empty() {
        let stats = dashboard_stats(&[], &[]);
        assert_eq!(stats.low_stock_count, 0);
        assert_eq!(stats.pending_order_count, 0);
        assert!(stats.total_revenue.is_zero());
        assert_eq!(stats.product_count, 0);
    }

    #[test]
    fn test_home_view_takes_first_orders() {
        let orders: Vec<Order> = (1..=7)
            .map(|n| order(&n.to_string(), OrderStatus::Delivered, 100))
            .collect();

        let home = home_view("user", &[product("1", 1, 5)], &orders, 5);

        assert_eq!(home.recent_orders.len(), 5);
        assert_eq!(home.recent_orders[0].id, OrderId::new("1"));
        assert_eq!(home.recent_orders[4].id, OrderId::new("5"));
        assert_eq!(home.recent_orders[0].channel_label, "SNS");
        assert_eq!(home.low_stock_alerts.len(), 1);
        assert_eq!(home.username, "user");
    }
}

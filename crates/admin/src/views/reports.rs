//! Sales report: revenue summary and per-channel breakdown.

use rust_decimal::Decimal;
use serde::Serialize;

use stock_alchemist_core::{Money, Order, SalesChannel};

use super::TimeRange;

/// Orders from one sales channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBreakdown {
    pub channel: SalesChannel,
    pub label: &'static str,
    pub order_count: usize,
    /// Sum of the stored order totals.
    pub total: Money,
    /// Share of all orders, 0 to 100. Zero when there are no orders.
    pub percentage: f64,
}

/// One row per channel in report order (EC, SNS, wholesale), including
/// channels with no orders.
#[must_use]
pub fn channel_breakdown(orders: &[Order]) -> Vec<ChannelBreakdown> {
    let all = orders.len();
    SalesChannel::REPORT_ORDER
        .iter()
        .map(|&channel| {
            let in_channel: Vec<&Order> = orders.iter().filter(|o| o.channel == channel).collect();
            let order_count = in_channel.len();
            ChannelBreakdown {
                channel,
                label: channel.label(),
                order_count,
                total: in_channel.iter().map(|o| o.total).sum(),
                percentage: percentage(order_count, all),
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Sum of stored order totals.
#[must_use]
pub fn total_revenue(orders: &[Order]) -> Money {
    orders.iter().map(|o| o.total).sum()
}

/// Reports page, sales tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub time_range: TimeRange,
    pub time_range_label: &'static str,
    pub total_revenue: Money,
    pub order_count: usize,
    /// Revenue per order rounded to cents. Zero when there are no orders.
    pub average_order_value: Money,
    pub channels: Vec<ChannelBreakdown>,
}

/// Build the sales report.
#[must_use]
pub fn sales_report(orders: &[Order], time_range: TimeRange) -> SalesReport {
    let total_revenue = total_revenue(orders);
    let order_count = orders.len();
    let average_order_value = if order_count == 0 {
        Money::ZERO
    } else {
        total_revenue
            .scale(Decimal::ONE / Decimal::from(order_count))
            .round_cents()
    };
    SalesReport {
        time_range,
        time_range_label: time_range.label(),
        total_revenue,
        order_count,
        average_order_value,
        channels: channel_breakdown(orders),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use stock_alchemist_core::{OrderId, OrderStatus, UserId};

    use super::*;

    fn order(id: &str, channel: SalesChannel, cents: u32) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new("1"),
            line_items: Vec::new(),
            status: OrderStatus::Pending,
            channel,
            created_at: "2024-03-15T10:00:00Z".parse().unwrap(),
            total: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_no_orders_gives_zero_percentages() {
        let rows = channel_breakdown(&[]);
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.order_count, 0);
            assert!(row.total.is_zero());
            assert!(row.percentage.abs() < f64::EPSILON);
            assert!(!row.percentage.is_nan());
        }
    }

    #[test]
    fn test_breakdown_order_and_shares() {
        let orders = vec![
            order("1", SalesChannel::Sns, 1000),
            order("2", SalesChannel::Ec, 2000),
            order("3", SalesChannel::Ec, 3000),
            order("4", SalesChannel::Sns, 500),
        ];

        let rows = channel_breakdown(&orders);

        let channels: Vec<_> = rows.iter().map(|r| r.channel).collect();
        assert_eq!(channels, SalesChannel::REPORT_ORDER);
        assert_eq!(rows[0].order_count, 2);
        assert_eq!(rows[0].total, Money::from_cents(5000));
        assert!((rows[0].percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(rows[1].label, "SNS");
        assert!((rows[2].percentage).abs() < f64::EPSILON);
        let sum: f64 = rows.iter().map(|r| r.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_sales_report() {
        let orders = vec![
            order("1", SalesChannel::Ec, 11997),
            order("2", SalesChannel::Sns, 12999),
            order("3", SalesChannel::Wholesale, 1),
        ];

        let report = sales_report(&orders, TimeRange::Last90Days);

        assert_eq!(report.order_count, 3);
        assert_eq!(report.total_revenue, Money::from_cents(24997));
        assert_eq!(report.average_order_value, Money::from_cents(8332));
        assert_eq!(report.time_range, TimeRange::Last90Days);
        assert_eq!(report.time_range_label, "Last 90 days");
    }

    #[test]
    fn test_sales_report_empty() {
        let report = sales_report(&[], TimeRange::default());
        assert!(report.total_revenue.is_zero());
        assert!(report.average_order_value.is_zero());
    }
}

//! Orders and their line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Money, OrderId, OrderStatus, ProductId, SalesChannel, UserId};

/// One product-quantity-price entry within an order.
///
/// `product_id` is a weak reference: it is resolved against the live
/// catalog when read and may point at a product that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price charged on this order.
    pub price: Money,
}

impl LineItem {
    /// Quantity times unit price.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.price * self.quantity
    }

    /// Quantity times unit price, or `None` if the amount cannot be
    /// represented.
    #[must_use]
    pub fn checked_subtotal(&self) -> Option<Money> {
        self.price.checked_mul(self.quantity)
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Line items in display order.
    #[serde(rename = "products")]
    pub line_items: Vec<LineItem>,
    pub status: OrderStatus,
    pub channel: SalesChannel,
    pub created_at: DateTime<Utc>,
    /// Caller-supplied order total. Expected to equal [`Order::line_total`]
    /// but never recomputed.
    pub total: Money,
}

impl Order {
    /// Sum of the line item subtotals, saturating at [`Money::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.line_items.iter().map(LineItem::subtotal).sum()
    }

    /// Sum of the line item subtotals, or `None` if any step overflows.
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Money> {
        self.line_items
            .iter()
            .try_fold(Money::ZERO, |acc, line| acc.checked_add(line.checked_subtotal()?))
    }

    /// Whether the stored total matches the line items. An order whose line
    /// items overflow is never consistent.
    #[must_use]
    pub fn has_consistent_total(&self) -> bool {
        self.checked_line_total() == Some(self.total)
    }

    /// Total units across all line items.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.line_items
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Copy of this order with a different status. Channel and creation time
    /// are carried over unchanged.
    #[must_use]
    pub fn with_status(&self, status: OrderStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
